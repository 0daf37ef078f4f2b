use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateRoot;
use crate::shared::validation::{ValidationErrors, ValidationRules};

pub type TeamId = i64;

// ============================================================================
// Aggregate Root
// ============================================================================

/// Maintenance team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub technician_count: u32,
}

impl Team {
    pub fn to_dto(&self) -> TeamDto {
        TeamDto {
            id: Some(self.id),
            name: self.name.clone(),
            department: self.department.clone(),
            specialization: self.specialization.clone().unwrap_or_default(),
        }
    }
}

impl AggregateRoot for Team {
    type Id = TeamId;

    fn id(&self) -> Option<Self::Id> {
        Some(self.id)
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "teams"
    }

    fn element_name() -> &'static str {
        "Team"
    }

    fn list_name() -> &'static str {
        "Teams"
    }
}

/// Name of `team_id` within `teams`: `Team #id` when the team is not loaded,
/// `N/A` when nothing is assigned.
pub fn team_label(teams: &[Team], team_id: Option<TeamId>) -> String {
    match team_id {
        None => "N/A".to_string(),
        Some(id) => teams
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| format!("Team #{}", id)),
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamDto {
    #[serde(skip_serializing, default)]
    pub id: Option<TeamId>,
    pub name: String,
    pub department: String,
    #[serde(default)]
    pub specialization: String,
}

impl TeamDto {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(
            "name",
            "Team name",
            &self.name,
            ValidationRules::required().trimmed().min_length(2).max_length(100),
        );
        errors.check(
            "department",
            "Department",
            &self.department,
            ValidationRules::required().trimmed(),
        );
        errors.check(
            "specialization",
            "Specialization",
            &self.specialization,
            ValidationRules::none().max_length(200),
        );
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(id: TeamId, name: &str) -> Team {
        Team {
            id,
            name: name.into(),
            department: "Ops".into(),
            specialization: None,
            technician_count: 0,
        }
    }

    #[test]
    fn test_team_label_fallbacks() {
        let teams = vec![team(1, "IT Support"), team(2, "Network Team")];
        assert_eq!(team_label(&teams, Some(2)), "Network Team");
        assert_eq!(team_label(&teams, Some(7)), "Team #7");
        assert_eq!(team_label(&teams, None), "N/A");
    }

    #[test]
    fn test_dto_requires_name_and_department() {
        let dto = TeamDto::default();
        let errors = dto.validate().unwrap_err();
        assert!(errors.get("name").is_some());
        assert!(errors.get("department").is_some());
        assert!(errors.get("specialization").is_none());
    }
}
