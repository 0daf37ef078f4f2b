use serde::{Deserialize, Serialize};

use super::{normalize_code, UnknownCode};

/// Operating state of a piece of equipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EquipmentStatus {
    Operational,
    Maintenance,
    Breakdown,
    Scrap,
}

impl EquipmentStatus {
    pub fn code(&self) -> &'static str {
        match self {
            EquipmentStatus::Operational => "operational",
            EquipmentStatus::Maintenance => "maintenance",
            EquipmentStatus::Breakdown => "breakdown",
            EquipmentStatus::Scrap => "scrap",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EquipmentStatus::Operational => "Operational",
            EquipmentStatus::Maintenance => "Maintenance",
            EquipmentStatus::Breakdown => "Breakdown",
            EquipmentStatus::Scrap => "Scrap",
        }
    }

    pub fn all() -> Vec<EquipmentStatus> {
        vec![
            EquipmentStatus::Operational,
            EquipmentStatus::Maintenance,
            EquipmentStatus::Breakdown,
            EquipmentStatus::Scrap,
        ]
    }

    pub fn from_code(raw: &str) -> Option<Self> {
        match normalize_code(raw).as_str() {
            "operational" => Some(EquipmentStatus::Operational),
            "maintenance" | "under_maintenance" => Some(EquipmentStatus::Maintenance),
            "breakdown" => Some(EquipmentStatus::Breakdown),
            "scrap" => Some(EquipmentStatus::Scrap),
            _ => None,
        }
    }
}

impl Default for EquipmentStatus {
    fn default() -> Self {
        EquipmentStatus::Operational
    }
}

impl TryFrom<String> for EquipmentStatus {
    type Error = UnknownCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        EquipmentStatus::from_code(&value).ok_or(UnknownCode {
            kind: "equipment status",
            value,
        })
    }
}

impl From<EquipmentStatus> for String {
    fn from(status: EquipmentStatus) -> Self {
        status.code().to_string()
    }
}
