use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{dates, AggregateRoot};
use crate::enums::{Priority, RequestStatus, RequestType};
use crate::shared::team_routing::{EquipmentChoice, TeamCatalog};
use crate::shared::validation::{ValidationErrors, ValidationRules};

pub type RequestId = i64;

// ============================================================================
// Aggregate Root
// ============================================================================

/// Maintenance request / technician job.
///
/// The admin listing, the technician job feed and the employee feed all
/// decode into this type; the feeds use shorter field names (`equipment`,
/// `team`, `tech`) which are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRequest {
    pub id: RequestId,
    #[serde(default)]
    pub equipment_id: Option<i64>,
    #[serde(default, alias = "equipment")]
    pub equipment_name: String,
    #[serde(rename = "type", default)]
    pub request_type: RequestType,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: RequestStatus,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub assigned_team_id: Option<i64>,
    #[serde(default, alias = "team", alias = "assigned_team")]
    pub assigned_team_name: Option<String>,
    #[serde(default)]
    pub assigned_technician_id: Option<i64>,
    #[serde(default, alias = "tech", alias = "assigned_to", alias = "assigned_technician")]
    pub assigned_technician_name: Option<String>,
    #[serde(default, with = "dates", alias = "created_at")]
    pub requested_date: Option<NaiveDate>,
    #[serde(default, alias = "email")]
    pub requester_email: Option<String>,
}

impl MaintenanceRequest {
    /// Team column: name, `Team #id`, or `Auto` when routing is left to the server.
    pub fn team_label(&self) -> String {
        match (&self.assigned_team_name, self.assigned_team_id) {
            (Some(name), _) if !name.is_empty() => name.clone(),
            (_, Some(id)) => format!("Team #{}", id),
            _ => "Auto".to_string(),
        }
    }

    /// Technician column: name, `Tech #id`, or `Unassigned`.
    pub fn technician_label(&self) -> String {
        match (&self.assigned_technician_name, self.assigned_technician_id) {
            (Some(name), _) if !name.is_empty() => name.clone(),
            (_, Some(id)) => format!("Tech #{}", id),
            _ => "Unassigned".to_string(),
        }
    }

    /// Description cut to `max` characters with an ellipsis.
    pub fn short_description(&self, max: usize) -> String {
        if self.description.chars().count() <= max {
            self.description.clone()
        } else {
            let cut: String = self.description.chars().take(max).collect();
            format!("{}...", cut)
        }
    }

    pub fn to_dto(&self) -> MaintenanceRequestDto {
        MaintenanceRequestDto {
            id: Some(self.id),
            equipment_id: self.equipment_id,
            request_type: self.request_type,
            priority: self.priority,
            status: self.status,
            description: self.description.clone(),
            notes: self.notes.clone().unwrap_or_default(),
            assigned_team_id: self.assigned_team_id,
            assigned_technician_id: self.assigned_technician_id,
        }
    }
}

impl AggregateRoot for MaintenanceRequest {
    type Id = RequestId;

    fn id(&self) -> Option<Self::Id> {
        Some(self.id)
    }

    fn display_name(&self) -> String {
        format!("#{} {}", self.id, self.equipment_name)
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "requests"
    }

    fn element_name() -> &'static str {
        "Maintenance Request"
    }

    fn list_name() -> &'static str {
        "Maintenance Requests"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Admin create/update payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRequestDto {
    #[serde(skip_serializing, default)]
    pub id: Option<RequestId>,
    pub equipment_id: Option<i64>,
    #[serde(rename = "type")]
    pub request_type: RequestType,
    pub priority: Priority,
    pub status: RequestStatus,
    pub description: String,
    pub notes: String,
    /// `None` lets the server route by equipment
    pub assigned_team_id: Option<i64>,
    pub assigned_technician_id: Option<i64>,
}

impl MaintenanceRequestDto {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.equipment_id.is_none() {
            errors.push("equipment_id", "Please select equipment");
        }
        errors.check(
            "description",
            "Description",
            &self.description,
            ValidationRules::required().trimmed().max_length(1000),
        );
        errors.check(
            "notes",
            "Notes",
            &self.notes,
            ValidationRules::none().max_length(2000),
        );
        errors.into_result()
    }
}

/// `POST /requests/{id}/assign`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignTechnicianDto {
    pub technician_id: i64,
}

/// Employee submission (`POST /requests/submit`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmitRequestDto {
    pub name: String,
    pub email: String,
    pub equipment: String,
    pub team: String,
    pub description: String,
    pub priority: Priority,
}

impl SubmitRequestDto {
    /// Build the payload, routing the equipment to its team.
    pub fn new(
        name: &str,
        email: &str,
        choice: &EquipmentChoice,
        catalog: &TeamCatalog,
        description: &str,
        priority: Priority,
    ) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            equipment: choice.name().to_string(),
            team: catalog.resolve(choice).to_string(),
            description: description.trim().to_string(),
            priority,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(
            "equipment",
            "Equipment",
            &self.equipment,
            ValidationRules::required().trimmed(),
        );
        errors.check(
            "description",
            "Description",
            &self.description,
            ValidationRules::required().trimmed().min_length(5).max_length(1000),
        );
        errors.into_result()
    }
}

// ============================================================================
// Statistics
// ============================================================================

/// `GET /requests/statistics`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestStatistics {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub open: u32,
    #[serde(default)]
    pub by_status: BTreeMap<String, u32>,
    #[serde(default)]
    pub by_type: BTreeMap<String, u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::badge::{BadgeClass, Classify};

    #[test]
    fn test_decode_admin_row() {
        let row = serde_json::json!({
            "id": 12,
            "equipment_id": 3,
            "equipment_name": "Server Rack",
            "type": "corrective",
            "priority": "high",
            "status": "in_progress",
            "description": "Fan noise",
            "notes": null,
            "assigned_team_id": 2,
            "assigned_team_name": "Network Team",
            "assigned_technician_id": null,
            "requested_date": "2025-02-01"
        });
        let req: MaintenanceRequest = serde_json::from_value(row).unwrap();
        assert_eq!(req.status, RequestStatus::InProgress);
        assert_eq!(req.priority, Priority::High);
        assert_eq!(req.team_label(), "Network Team");
        assert_eq!(req.technician_label(), "Unassigned");
    }

    #[test]
    fn test_decode_job_feed_row() {
        let row = serde_json::json!({
            "id": 4,
            "equipment": "Printer A",
            "description": "Paper jam",
            "status": "New",
            "team": "IT Support"
        });
        let job: MaintenanceRequest = serde_json::from_value(row).unwrap();
        assert_eq!(job.equipment_name, "Printer A");
        assert_eq!(job.assigned_team_name.as_deref(), Some("IT Support"));
        assert_eq!(job.status, RequestStatus::New);
        assert_eq!(job.requested_date, None);
    }

    #[test]
    fn test_out_of_vocabulary_rows_keep_the_listing() {
        let body = serde_json::json!([
            {"id": 1, "status": "New"},
            {"id": 2, "status": "Pending"},
            {"id": 3, "status": "new", "priority": null},
            {"id": 4, "status": null, "priority": "urgent"}
        ]);
        let rows: Vec<MaintenanceRequest> = serde_json::from_value(body).unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].status, RequestStatus::New);
        assert_eq!(rows[1].status, RequestStatus::Unknown);
        assert_eq!(rows[2].priority, Priority::Unknown);
        assert_eq!(rows[3].status, RequestStatus::Unknown);
        assert_eq!(rows[3].priority, Priority::Unknown);
        assert_eq!(rows[1].status.badge(), BadgeClass::Secondary);
        assert_eq!(rows[2].priority.badge(), BadgeClass::Secondary);
    }

    #[test]
    fn test_labels_fall_back_to_ids() {
        let row = serde_json::json!({"id": 1, "assigned_team_id": 5, "assigned_technician_id": 8});
        let req: MaintenanceRequest = serde_json::from_value(row).unwrap();
        assert_eq!(req.team_label(), "Team #5");
        assert_eq!(req.technician_label(), "Tech #8");
    }

    #[test]
    fn test_short_description() {
        let row = serde_json::json!({"id": 1, "description": "abcdefghij"});
        let req: MaintenanceRequest = serde_json::from_value(row).unwrap();
        assert_eq!(req.short_description(4), "abcd...");
        assert_eq!(req.short_description(50), "abcdefghij");
    }

    #[test]
    fn test_submit_routes_other_to_default_team() {
        let catalog = TeamCatalog::builtin();
        let choice = EquipmentChoice::from_form("other", "Coffee Machine");
        let dto = SubmitRequestDto::new(
            "Rohan",
            "rohan@gmail.com",
            &choice,
            &catalog,
            " Leaking water ",
            Priority::Low,
        );
        assert_eq!(dto.team, "Maintenance Team");
        assert_eq!(dto.equipment, "Coffee Machine");
        assert_eq!(dto.description, "Leaking water");
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_admin_dto_requires_equipment() {
        let dto = MaintenanceRequestDto {
            description: "Broken belt".into(),
            ..Default::default()
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.get("equipment_id"), Some("Please select equipment"));
    }
}
