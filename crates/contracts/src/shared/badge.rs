//! Status → badge classification.
//!
//! Every status-like value the UI renders maps to exactly one
//! [`BadgeClass`]. Typed values go through [`Classify`]; raw strings coming
//! straight from a response are classified leniently and anything outside
//! the vocabulary falls back to [`BadgeClass::Secondary`].

use serde::{Deserialize, Serialize};

use crate::enums::{
    EquipmentStatus, Priority, RequestStatus, RequestType, ScheduleStatus, TechnicianStatus,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BadgeClass {
    Success,
    Warning,
    Danger,
    Info,
    Secondary,
}

impl BadgeClass {
    /// CSS class used by the stylesheet (`badge-success`, ...).
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeClass::Success => "badge-success",
            BadgeClass::Warning => "badge-warning",
            BadgeClass::Danger => "badge-danger",
            BadgeClass::Info => "badge-info",
            BadgeClass::Secondary => "badge-secondary",
        }
    }

    /// Short token for component libraries that take a color name.
    pub fn tone(&self) -> &'static str {
        match self {
            BadgeClass::Success => "success",
            BadgeClass::Warning => "warning",
            BadgeClass::Danger => "danger",
            BadgeClass::Info => "informative",
            BadgeClass::Secondary => "subtle",
        }
    }
}

pub trait Classify {
    fn badge(&self) -> BadgeClass;
}

impl Classify for Priority {
    fn badge(&self) -> BadgeClass {
        match self {
            Priority::Low => BadgeClass::Info,
            Priority::Medium => BadgeClass::Warning,
            Priority::High | Priority::Critical => BadgeClass::Danger,
            Priority::Unknown => BadgeClass::Secondary,
        }
    }
}

impl Classify for RequestStatus {
    fn badge(&self) -> BadgeClass {
        match self {
            RequestStatus::New | RequestStatus::Accepted => BadgeClass::Info,
            RequestStatus::InProgress => BadgeClass::Warning,
            RequestStatus::Completed => BadgeClass::Success,
            RequestStatus::Rejected => BadgeClass::Danger,
            RequestStatus::Unknown => BadgeClass::Secondary,
        }
    }
}

impl Classify for RequestType {
    fn badge(&self) -> BadgeClass {
        match self {
            RequestType::Corrective => BadgeClass::Warning,
            RequestType::Preventive => BadgeClass::Info,
        }
    }
}

impl Classify for EquipmentStatus {
    fn badge(&self) -> BadgeClass {
        match self {
            EquipmentStatus::Operational => BadgeClass::Success,
            EquipmentStatus::Maintenance => BadgeClass::Warning,
            EquipmentStatus::Breakdown => BadgeClass::Danger,
            EquipmentStatus::Scrap => BadgeClass::Secondary,
        }
    }
}

impl Classify for ScheduleStatus {
    fn badge(&self) -> BadgeClass {
        match self {
            ScheduleStatus::Scheduled => BadgeClass::Info,
            ScheduleStatus::Overdue => BadgeClass::Danger,
            ScheduleStatus::Completed => BadgeClass::Success,
        }
    }
}

impl Classify for TechnicianStatus {
    fn badge(&self) -> BadgeClass {
        match self {
            TechnicianStatus::Active => BadgeClass::Success,
            TechnicianStatus::Inactive => BadgeClass::Secondary,
        }
    }
}

/// Classify any status string the backends emit (request, equipment,
/// schedule or technician vocabulary).
pub fn classify_status(raw: &str) -> BadgeClass {
    if let Some(status) = RequestStatus::from_code(raw) {
        // `scrap` is an equipment state first
        if crate::enums::normalize_code(raw) != "scrap" {
            return status.badge();
        }
    }
    if let Some(status) = EquipmentStatus::from_code(raw) {
        return status.badge();
    }
    if let Some(status) = ScheduleStatus::from_code(raw) {
        return status.badge();
    }
    if let Some(status) = TechnicianStatus::from_code(raw) {
        return status.badge();
    }
    BadgeClass::Secondary
}

pub fn classify_priority(raw: &str) -> BadgeClass {
    Priority::from_code(raw)
        .map(|p| p.badge())
        .unwrap_or(BadgeClass::Secondary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_classes() {
        assert_eq!(classify_priority("low"), BadgeClass::Info);
        assert_eq!(classify_priority("medium"), BadgeClass::Warning);
        assert_eq!(classify_priority("high"), BadgeClass::Danger);
        assert_eq!(classify_priority("critical"), BadgeClass::Danger);
        assert_eq!(classify_priority("urgent"), BadgeClass::Secondary);
        assert_eq!(classify_priority(""), BadgeClass::Secondary);
    }

    #[test]
    fn test_status_strings_from_every_vocabulary() {
        assert_eq!(classify_status("In Progress"), BadgeClass::Warning);
        assert_eq!(classify_status("in_progress"), BadgeClass::Warning);
        assert_eq!(classify_status("Completed"), BadgeClass::Success);
        assert_eq!(classify_status("repaired"), BadgeClass::Success);
        assert_eq!(classify_status("breakdown"), BadgeClass::Danger);
        assert_eq!(classify_status("scrap"), BadgeClass::Secondary);
        assert_eq!(classify_status("overdue"), BadgeClass::Danger);
        assert_eq!(classify_status("inactive"), BadgeClass::Secondary);
        assert_eq!(classify_status("mystery"), BadgeClass::Secondary);
    }

    #[test]
    fn test_css_class() {
        assert_eq!(BadgeClass::Danger.css_class(), "badge-danger");
        assert_eq!(Priority::Critical.badge().css_class(), "badge-danger");
    }
}
