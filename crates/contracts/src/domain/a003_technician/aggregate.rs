use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateRoot;
use crate::enums::TechnicianStatus;
use crate::shared::validation::{ValidationErrors, ValidationRules};

pub type TechnicianId = i64;

/// Skill level stored when the form leaves it blank
pub const DEFAULT_SKILL_LEVEL: &str = "Technician";

const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";
const PHONE_PATTERN: &str = r"^[0-9+()\-\s]{5,20}$";

// ============================================================================
// Aggregate Root
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technician {
    pub id: TechnicianId,
    #[serde(default)]
    pub team_id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub skill_level: String,
    #[serde(default)]
    pub status: TechnicianStatus,
}

impl Technician {
    pub fn to_dto(&self) -> TechnicianDto {
        TechnicianDto {
            id: Some(self.id),
            team_id: self.team_id,
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            skill_level: self.skill_level.clone(),
            status: self.status,
        }
    }
}

impl AggregateRoot for Technician {
    type Id = TechnicianId;

    fn id(&self) -> Option<Self::Id> {
        Some(self.id)
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "technicians"
    }

    fn element_name() -> &'static str {
        "Technician"
    }

    fn list_name() -> &'static str {
        "Technicians"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicianDto {
    #[serde(skip_serializing, default)]
    pub id: Option<TechnicianId>,
    pub team_id: Option<i64>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skill_level: String,
    pub status: TechnicianStatus,
}

impl Default for TechnicianDto {
    fn default() -> Self {
        Self {
            id: None,
            team_id: None,
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            skill_level: DEFAULT_SKILL_LEVEL.to_string(),
            status: TechnicianStatus::Active,
        }
    }
}

impl TechnicianDto {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(
            "name",
            "Name",
            &self.name,
            ValidationRules::required().trimmed().min_length(2),
        );
        errors.check(
            "email",
            "Email",
            &self.email,
            ValidationRules::required()
                .trimmed()
                .pattern(EMAIL_PATTERN, "Please enter a valid email address"),
        );
        errors.check(
            "phone",
            "Phone",
            &self.phone,
            ValidationRules::none()
                .trimmed()
                .pattern(PHONE_PATTERN, "Please enter a valid phone number"),
        );
        if self.team_id.is_none() {
            errors.push("team_id", "Please select a team");
        }
        errors.into_result()
    }

    /// Payload with the skill level defaulted
    pub fn normalized(mut self) -> Self {
        if self.skill_level.trim().is_empty() {
            self.skill_level = DEFAULT_SKILL_LEVEL.to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> TechnicianDto {
        TechnicianDto {
            team_id: Some(1),
            name: "Asha Rao".into(),
            email: "asha@plant.io".into(),
            phone: "+91 98765 43210".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_technician() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_invalid_email_and_missing_team() {
        let dto = TechnicianDto {
            email: "asha-at-plant".into(),
            team_id: None,
            ..valid()
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.get("email"), Some("Please enter a valid email address"));
        assert_eq!(errors.get("team_id"), Some("Please select a team"));
    }

    #[test]
    fn test_blank_skill_level_defaults() {
        let dto = TechnicianDto {
            skill_level: " ".into(),
            ..valid()
        }
        .normalized();
        assert_eq!(dto.skill_level, DEFAULT_SKILL_LEVEL);
    }
}
