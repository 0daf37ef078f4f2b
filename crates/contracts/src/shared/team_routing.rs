//! Equipment → responsible team routing for employee submissions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sentinel value of the equipment select meaning "not in the list".
pub const OTHER_EQUIPMENT: &str = "other";

/// Lookup table from equipment name to the team that services it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamCatalog {
    pub default_team: String,
    #[serde(default)]
    pub equipment: BTreeMap<String, String>,
}

/// What the employee picked in the equipment select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EquipmentChoice {
    Known(String),
    /// "Other" with the free-text name typed by the employee
    Other(String),
}

impl EquipmentChoice {
    /// Build from the select value plus the free-text field.
    pub fn from_form(selected: &str, other_name: &str) -> Self {
        if selected == OTHER_EQUIPMENT {
            EquipmentChoice::Other(other_name.trim().to_string())
        } else {
            EquipmentChoice::Known(selected.to_string())
        }
    }

    /// Equipment name sent to the server.
    pub fn name(&self) -> &str {
        match self {
            EquipmentChoice::Known(name) | EquipmentChoice::Other(name) => name,
        }
    }
}

impl TeamCatalog {
    pub fn builtin() -> Self {
        let it = "IT Support";
        let entries = [
            ("Laptop 01", it),
            ("Laptop 02", it),
            ("Desktop PC", it),
            ("Printer A", it),
            ("Server Rack", "Network Team"),
            ("Generator A", "Maintenance Team"),
            ("Air Conditioner Unit", "Facilities"),
            ("CCTV Camera", "Security Team"),
        ];
        Self {
            default_team: "Maintenance Team".to_string(),
            equipment: entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Team responsible for `choice`; unknown and "other" go to the default team.
    pub fn resolve(&self, choice: &EquipmentChoice) -> &str {
        match choice {
            EquipmentChoice::Known(name) => self
                .equipment
                .get(name)
                .map(String::as_str)
                .unwrap_or(&self.default_team),
            EquipmentChoice::Other(_) => &self.default_team,
        }
    }

    /// Equipment names in select order.
    pub fn equipment_names(&self) -> Vec<&str> {
        self.equipment.keys().map(String::as_str).collect()
    }
}

impl Default for TeamCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_rack_goes_to_network_team() {
        let catalog = TeamCatalog::builtin();
        let choice = EquipmentChoice::from_form("Server Rack", "");
        assert_eq!(catalog.resolve(&choice), "Network Team");
    }

    #[test]
    fn test_unknown_and_other_use_default() {
        let mut catalog = TeamCatalog::builtin();
        catalog.default_team = "Night Shift".to_string();
        assert_eq!(
            catalog.resolve(&EquipmentChoice::Known("Forklift".into())),
            "Night Shift"
        );
        let other = EquipmentChoice::from_form(OTHER_EQUIPMENT, "  Coffee Machine ");
        assert_eq!(other.name(), "Coffee Machine");
        assert_eq!(catalog.resolve(&other), "Night Shift");
    }

    #[test]
    fn test_builtin_covers_it_equipment() {
        let catalog = TeamCatalog::default();
        for name in ["Laptop 01", "Laptop 02", "Desktop PC", "Printer A"] {
            assert_eq!(
                catalog.resolve(&EquipmentChoice::Known(name.into())),
                "IT Support"
            );
        }
        assert_eq!(catalog.equipment_names().len(), 8);
    }
}
