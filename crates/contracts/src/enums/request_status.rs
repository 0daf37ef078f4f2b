use serde::{Deserialize, Serialize};

use super::normalize_code;

/// Lifecycle state of a maintenance request / technician job.
///
/// Serialized with the display spelling used by the job board
/// (`"In Progress"`); decoding also accepts the admin backend codes,
/// where `repaired` means completed and `scrap` means the job was dropped.
/// Anything else, `null` included, decodes as [`RequestStatus::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum RequestStatus {
    New,
    Accepted,
    InProgress,
    Completed,
    Rejected,
    /// Outside the vocabulary; no actions, secondary badge
    Unknown,
}

impl RequestStatus {
    pub fn code(&self) -> &'static str {
        match self {
            RequestStatus::New => "new",
            RequestStatus::Accepted => "accepted",
            RequestStatus::InProgress => "in_progress",
            RequestStatus::Completed => "completed",
            RequestStatus::Rejected => "rejected",
            RequestStatus::Unknown => "unknown",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RequestStatus::New => "New",
            RequestStatus::Accepted => "Accepted",
            RequestStatus::InProgress => "In Progress",
            RequestStatus::Completed => "Completed",
            RequestStatus::Rejected => "Rejected",
            RequestStatus::Unknown => "Unknown",
        }
    }

    pub fn all() -> Vec<RequestStatus> {
        vec![
            RequestStatus::New,
            RequestStatus::Accepted,
            RequestStatus::InProgress,
            RequestStatus::Completed,
            RequestStatus::Rejected,
        ]
    }

    pub fn from_code(raw: &str) -> Option<Self> {
        match normalize_code(raw).as_str() {
            "new" | "open" => Some(RequestStatus::New),
            "accepted" => Some(RequestStatus::Accepted),
            "in_progress" => Some(RequestStatus::InProgress),
            "completed" | "repaired" | "done" => Some(RequestStatus::Completed),
            "rejected" | "scrap" => Some(RequestStatus::Rejected),
            _ => None,
        }
    }

    /// Completed and Rejected accept no further action.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RequestStatus::Completed | RequestStatus::Rejected)
    }

    /// Class suffix used by the employee/technician tables (`in-progress`).
    pub fn css_suffix(&self) -> &'static str {
        match self {
            RequestStatus::New => "new",
            RequestStatus::Accepted => "accepted",
            RequestStatus::InProgress => "in-progress",
            RequestStatus::Completed => "completed",
            RequestStatus::Rejected => "rejected",
            RequestStatus::Unknown => "unknown",
        }
    }
}

impl Default for RequestStatus {
    fn default() -> Self {
        RequestStatus::New
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl From<Option<String>> for RequestStatus {
    fn from(value: Option<String>) -> Self {
        value
            .as_deref()
            .and_then(RequestStatus::from_code)
            .unwrap_or(RequestStatus::Unknown)
    }
}

impl From<RequestStatus> for String {
    fn from(status: RequestStatus) -> Self {
        status.display_name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_spelling() {
        assert_eq!(
            serde_json::to_string(&RequestStatus::InProgress).unwrap(),
            "\"In Progress\""
        );
        let parsed: RequestStatus = serde_json::from_str("\"in_progress\"").unwrap();
        assert_eq!(parsed, RequestStatus::InProgress);
    }

    #[test]
    fn test_admin_backend_codes() {
        assert_eq!(RequestStatus::from_code("repaired"), Some(RequestStatus::Completed));
        assert_eq!(RequestStatus::from_code("scrap"), Some(RequestStatus::Rejected));
        assert_eq!(RequestStatus::from_code("New"), Some(RequestStatus::New));
        assert_eq!(RequestStatus::from_code("archived"), None);
    }

    #[test]
    fn test_unknown_and_null_decode_as_unknown() {
        let parsed: RequestStatus = serde_json::from_str("\"archived\"").unwrap();
        assert_eq!(parsed, RequestStatus::Unknown);
        let parsed: RequestStatus = serde_json::from_str("null").unwrap();
        assert_eq!(parsed, RequestStatus::Unknown);
        assert!(!RequestStatus::all().contains(&RequestStatus::Unknown));
    }

    #[test]
    fn test_terminal_states() {
        let terminal: Vec<_> = RequestStatus::all()
            .into_iter()
            .filter(|s| s.is_terminal())
            .collect();
        assert_eq!(terminal, vec![RequestStatus::Completed, RequestStatus::Rejected]);
    }
}
