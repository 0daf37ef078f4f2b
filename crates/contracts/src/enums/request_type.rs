use serde::{Deserialize, Serialize};

use super::{normalize_code, UnknownCode};

/// Corrective (breakdown) vs preventive (scheduled) maintenance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RequestType {
    Corrective,
    Preventive,
}

impl RequestType {
    pub fn code(&self) -> &'static str {
        match self {
            RequestType::Corrective => "corrective",
            RequestType::Preventive => "preventive",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RequestType::Corrective => "Corrective",
            RequestType::Preventive => "Preventive",
        }
    }

    pub fn all() -> Vec<RequestType> {
        vec![RequestType::Corrective, RequestType::Preventive]
    }

    pub fn from_code(raw: &str) -> Option<Self> {
        match normalize_code(raw).as_str() {
            "corrective" => Some(RequestType::Corrective),
            "preventive" => Some(RequestType::Preventive),
            _ => None,
        }
    }
}

impl Default for RequestType {
    fn default() -> Self {
        RequestType::Corrective
    }
}

impl TryFrom<String> for RequestType {
    type Error = UnknownCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        RequestType::from_code(&value).ok_or(UnknownCode {
            kind: "request type",
            value,
        })
    }
}

impl From<RequestType> for String {
    fn from(kind: RequestType) -> Self {
        kind.code().to_string()
    }
}
