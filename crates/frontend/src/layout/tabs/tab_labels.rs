//! Tab titles, one place for every tab key.

use contracts::domain::a001_equipment::Equipment;
use contracts::domain::a002_team::Team;
use contracts::domain::a003_technician::Technician;
use contracts::domain::a004_maintenance_request::MaintenanceRequest;
use contracts::domain::a005_preventive_schedule::PreventiveSchedule;
use contracts::domain::common::AggregateRoot;

/// Readable title for a tab key; empty for unknown keys.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Aggregates ────────────────────────────────────────────────────
        "a001_equipment" => Equipment::list_name(),
        "a002_team" => Team::list_name(),
        "a003_technician" => Technician::list_name(),
        "a004_maintenance_request" => MaintenanceRequest::list_name(),
        "a005_preventive_schedule" => PreventiveSchedule::list_name(),

        // ── Employee and technician screens ───────────────────────────────
        "a004_submit_request" => "Create Request",
        "a004_my_requests" => "My Requests",
        "a004_employee_dashboard" => "My Dashboard",
        "a004_job_board" => "My Jobs",

        // ── Dashboards ────────────────────────────────────────────────────
        "d400_overview" => "Dashboard",

        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(tab_label_for_key("a005_preventive_schedule"), "Preventive Maintenance");
        assert_eq!(tab_label_for_key("a004_job_board"), "My Jobs");
        assert_eq!(tab_label_for_key("p900_sales_register"), "");
    }
}
