//! Tab content registry: maps `tab.key` to its screen.

use crate::dashboards::OverviewDashboard;
use crate::domain::a001_equipment::ui::list::EquipmentList;
use crate::domain::a002_team::ui::list::TeamList;
use crate::domain::a003_technician::ui::list::TechnicianList;
use crate::domain::a004_maintenance_request::ui::employee_dashboard::EmployeeDashboard;
use crate::domain::a004_maintenance_request::ui::job_board::JobBoard;
use crate::domain::a004_maintenance_request::ui::list::RequestList;
use crate::domain::a004_maintenance_request::ui::my_requests::MyRequests;
use crate::domain::a004_maintenance_request::ui::submit::SubmitRequest;
use crate::domain::a005_preventive_schedule::ui::list::ScheduleList;
use leptos::prelude::*;

/// Every key the registry knows, in menu order.
pub const TAB_KEYS: [&str; 10] = [
    "d400_overview",
    "a001_equipment",
    "a002_team",
    "a003_technician",
    "a004_maintenance_request",
    "a005_preventive_schedule",
    "a004_submit_request",
    "a004_my_requests",
    "a004_employee_dashboard",
    "a004_job_board",
];

pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "d400_overview" => view! { <OverviewDashboard /> }.into_any(),
        "a001_equipment" => view! { <EquipmentList /> }.into_any(),
        "a002_team" => view! { <TeamList /> }.into_any(),
        "a003_technician" => view! { <TechnicianList /> }.into_any(),
        "a004_maintenance_request" => view! { <RequestList /> }.into_any(),
        "a005_preventive_schedule" => view! { <ScheduleList /> }.into_any(),
        "a004_submit_request" => view! { <SubmitRequest /> }.into_any(),
        "a004_my_requests" => view! { <MyRequests /> }.into_any(),
        "a004_employee_dashboard" => view! { <EmployeeDashboard /> }.into_any(),
        "a004_job_board" => view! { <JobBoard /> }.into_any(),
        _ => {
            log::warn!("unknown tab key: {}", key);
            view! { <div class="placeholder">"Not implemented yet"</div> }.into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::tabs::tab_label_for_key;

    #[test]
    fn test_every_key_has_a_label() {
        for key in TAB_KEYS {
            assert!(!tab_label_for_key(key).is_empty(), "{} has no label", key);
        }
    }
}
