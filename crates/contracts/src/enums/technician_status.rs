use serde::{Deserialize, Serialize};

use super::{normalize_code, UnknownCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TechnicianStatus {
    Active,
    Inactive,
}

impl TechnicianStatus {
    pub fn code(&self) -> &'static str {
        match self {
            TechnicianStatus::Active => "active",
            TechnicianStatus::Inactive => "inactive",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TechnicianStatus::Active => "Active",
            TechnicianStatus::Inactive => "Inactive",
        }
    }

    pub fn all() -> Vec<TechnicianStatus> {
        vec![TechnicianStatus::Active, TechnicianStatus::Inactive]
    }

    pub fn from_code(raw: &str) -> Option<Self> {
        match normalize_code(raw).as_str() {
            "active" => Some(TechnicianStatus::Active),
            "inactive" => Some(TechnicianStatus::Inactive),
            _ => None,
        }
    }
}

impl Default for TechnicianStatus {
    fn default() -> Self {
        TechnicianStatus::Active
    }
}

impl TryFrom<String> for TechnicianStatus {
    type Error = UnknownCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TechnicianStatus::from_code(&value).ok_or(UnknownCode {
            kind: "technician status",
            value,
        })
    }
}

impl From<TechnicianStatus> for String {
    fn from(status: TechnicianStatus) -> Self {
        status.code().to_string()
    }
}
