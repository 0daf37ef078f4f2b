use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{dates, AggregateRoot};
use crate::enums::EquipmentStatus;
use crate::shared::validation::{ValidationErrors, ValidationRules};

pub type EquipmentId = i64;

// ============================================================================
// Aggregate Root
// ============================================================================

/// Piece of equipment as listed by `GET /equipment`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: EquipmentId,
    pub name: String,
    #[serde(rename = "type", default)]
    pub equipment_type: String,
    #[serde(default)]
    pub department: String,
    #[serde(default, with = "dates")]
    pub purchase_date: Option<NaiveDate>,
    #[serde(default, with = "dates")]
    pub warranty_expiry: Option<NaiveDate>,
    #[serde(default)]
    pub assigned_team_id: Option<i64>,
    #[serde(default)]
    pub status: EquipmentStatus,
    /// Derived by the server; read-only
    #[serde(default)]
    pub open_requests_count: u32,
}

impl Equipment {
    /// `"{name} ({type})"`, the label used in request form selects
    pub fn select_label(&self) -> String {
        if self.equipment_type.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.equipment_type)
        }
    }

    pub fn to_dto(&self) -> EquipmentDto {
        EquipmentDto {
            id: Some(self.id),
            name: self.name.clone(),
            equipment_type: self.equipment_type.clone(),
            department: self.department.clone(),
            assigned_team_id: self.assigned_team_id,
            status: self.status,
            purchase_date: self.purchase_date,
            warranty_expiry: self.warranty_expiry,
        }
    }
}

impl AggregateRoot for Equipment {
    type Id = EquipmentId;

    fn id(&self) -> Option<Self::Id> {
        Some(self.id)
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "equipment"
    }

    fn element_name() -> &'static str {
        "Equipment"
    }

    fn list_name() -> &'static str {
        "Equipment"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Create/update payload of the equipment form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquipmentDto {
    #[serde(skip_serializing, default)]
    pub id: Option<EquipmentId>,
    pub name: String,
    #[serde(rename = "type")]
    pub equipment_type: String,
    pub department: String,
    pub assigned_team_id: Option<i64>,
    pub status: EquipmentStatus,
    #[serde(default, with = "dates")]
    pub purchase_date: Option<NaiveDate>,
    #[serde(default, with = "dates", skip_serializing_if = "Option::is_none")]
    pub warranty_expiry: Option<NaiveDate>,
}

impl EquipmentDto {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let text = ValidationRules::required().trimmed().max_length(100);
        errors.check("name", "Name", &self.name, text);
        errors.check("type", "Type", &self.equipment_type, text);
        errors.check("department", "Department", &self.department, text);
        if let (Some(bought), Some(expires)) = (self.purchase_date, self.warranty_expiry) {
            if expires < bought {
                errors.push("warranty_expiry", "Warranty cannot expire before purchase");
            }
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_listing_row() {
        let row = serde_json::json!({
            "id": 3,
            "name": "Server Rack",
            "type": "Network",
            "department": "IT",
            "purchase_date": "2023-05-01",
            "warranty_expiry": null,
            "assigned_team_id": 2,
            "status": "operational",
            "open_requests_count": 1
        });
        let equipment: Equipment = serde_json::from_value(row).unwrap();
        assert_eq!(equipment.status, EquipmentStatus::Operational);
        assert_eq!(equipment.select_label(), "Server Rack (Network)");
        assert_eq!(Equipment::item_path(3), "/equipment/3");
    }

    #[test]
    fn test_dto_validation() {
        let mut dto = EquipmentDto {
            name: "Printer A".into(),
            equipment_type: "Printer".into(),
            department: " ".into(),
            ..Default::default()
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.get("department"), Some("Department is required"));

        dto.department = "Admin".into();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_dto_wire_shape() {
        let dto = EquipmentDto {
            id: Some(9),
            name: "Generator A".into(),
            equipment_type: "Power".into(),
            department: "Facilities".into(),
            assigned_team_id: Some(1),
            purchase_date: NaiveDate::from_ymd_opt(2024, 1, 2),
            ..Default::default()
        };
        let value = serde_json::to_value(&dto).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["type"], "Power");
        assert_eq!(value["purchase_date"], "2024-01-02");
        assert_eq!(value["status"], "operational");
    }
}
