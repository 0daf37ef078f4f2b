use serde::{Deserialize, Serialize};

use super::{normalize_code, UnknownCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ScheduleStatus {
    Scheduled,
    Overdue,
    Completed,
}

impl ScheduleStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ScheduleStatus::Scheduled => "scheduled",
            ScheduleStatus::Overdue => "overdue",
            ScheduleStatus::Completed => "completed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ScheduleStatus::Scheduled => "Scheduled",
            ScheduleStatus::Overdue => "Overdue",
            ScheduleStatus::Completed => "Completed",
        }
    }

    pub fn all() -> Vec<ScheduleStatus> {
        vec![
            ScheduleStatus::Scheduled,
            ScheduleStatus::Overdue,
            ScheduleStatus::Completed,
        ]
    }

    pub fn from_code(raw: &str) -> Option<Self> {
        match normalize_code(raw).as_str() {
            "scheduled" | "pending" => Some(ScheduleStatus::Scheduled),
            "overdue" => Some(ScheduleStatus::Overdue),
            "completed" => Some(ScheduleStatus::Completed),
            _ => None,
        }
    }
}

impl Default for ScheduleStatus {
    fn default() -> Self {
        ScheduleStatus::Scheduled
    }
}

impl TryFrom<String> for ScheduleStatus {
    type Error = UnknownCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ScheduleStatus::from_code(&value).ok_or(UnknownCode {
            kind: "schedule status",
            value,
        })
    }
}

impl From<ScheduleStatus> for String {
    fn from(status: ScheduleStatus) -> Self {
        status.code().to_string()
    }
}
