use serde::{Deserialize, Serialize};

use super::normalize_code;

/// Request priority. Unrecognized or `null` values decode as
/// [`Priority::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
    Unknown,
}

impl Priority {
    pub fn code(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
            Priority::Unknown => "unknown",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
            Priority::Unknown => "Unknown",
        }
    }

    pub fn all() -> Vec<Priority> {
        vec![
            Priority::Low,
            Priority::Medium,
            Priority::High,
            Priority::Critical,
        ]
    }

    pub fn from_code(raw: &str) -> Option<Self> {
        match normalize_code(raw).as_str() {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            "critical" => Some(Priority::Critical),
            _ => None,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl From<Option<String>> for Priority {
    fn from(value: Option<String>) -> Self {
        value
            .as_deref()
            .and_then(Priority::from_code)
            .unwrap_or(Priority::Unknown)
    }
}

impl From<Priority> for String {
    fn from(priority: Priority) -> Self {
        priority.code().to_string()
    }
}
