//! Status vocabulary shared by every screen.
//!
//! Each enum follows the same shape: a stable wire `code()`, a
//! human-readable `display_name()`, `all()` for select controls and a
//! lenient `from_code()` that accepts the spellings produced by the
//! different backends (`"In Progress"`, `"in_progress"`, `"IN-PROGRESS"`).

pub mod equipment_status;
pub mod frequency;
pub mod priority;
pub mod request_status;
pub mod request_type;
pub mod schedule_status;
pub mod technician_status;

pub use equipment_status::EquipmentStatus;
pub use frequency::Frequency;
pub use priority::Priority;
pub use request_status::RequestStatus;
pub use request_type::RequestType;
pub use schedule_status::ScheduleStatus;
pub use technician_status::TechnicianStatus;

/// Lowercase, trimmed, with spaces and dashes folded into underscores.
pub fn normalize_code(raw: &str) -> String {
    raw.trim().to_lowercase().replace([' ', '-'], "_")
}

/// Error returned when a wire value is outside the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} value: {value:?}")]
pub struct UnknownCode {
    pub kind: &'static str,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_code() {
        assert_eq!(normalize_code("In Progress"), "in_progress");
        assert_eq!(normalize_code("  in-progress "), "in_progress");
        assert_eq!(normalize_code("NEW"), "new");
    }
}
