//! Technician job board: the `/tech/jobs` feed with lifecycle buttons.

use crate::domain::a004_maintenance_request::api;
use crate::domain::a004_maintenance_request::lifecycle_controller::LifecycleController;
use crate::shared::api::client;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, Checkbox, Select, StatusBadge};
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, FilterKey, ListFilter, SearchInput};
use crate::shared::notifications::use_notifications;
use crate::shared::state::ListViewModel;
use crate::system::auth::context::{current_user_name, use_auth};
use contracts::domain::a004_maintenance_request::{actions_for, LifecycleAction, MaintenanceRequest};
use contracts::enums::RequestStatus;
use leptos::prelude::*;
use contracts::shared::badge::BadgeClass;
use thaw::Spinner;

/// Rows shown on the board: the filter, then "hide completed".
pub fn job_rows(
    jobs: &[MaintenanceRequest],
    filter: &ListFilter,
    hide_completed: bool,
) -> Vec<MaintenanceRequest> {
    let mut rows = filter.apply(jobs);
    if hide_completed {
        rows.retain(|job| job.status != RequestStatus::Completed);
    }
    rows
}

#[component]
#[allow(non_snake_case)]
pub fn JobBoard() -> impl IntoView {
    let vm = ListViewModel::<MaintenanceRequest>::new();
    let hide_completed = RwSignal::new(false);
    let notifications = use_notifications();
    let (auth_state, _) = use_auth();

    let reload = move || vm.load(|| async move { api::fetch_jobs(&client()).await });

    let run = move |job: MaintenanceRequest, action: LifecycleAction| {
        let technician = current_user_name(auth_state).unwrap_or_default();
        let controller = LifecycleController::new(client(), technician);
        vm.refresh_with(
            move || async move { controller.perform(&job, action).await },
            move |e| notifications.error(e.user_message()),
        );
    };

    reload();

    let status_options = Signal::derive(|| {
        RequestStatus::all()
            .into_iter()
            .map(|s| (s.code().to_string(), s.display_name().to_string()))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="page">
            <PageHeader title="My Jobs" subtitle=Signal::derive(move || current_user_name(auth_state))>
                <Button variant="secondary" on_click=Callback::new(move |_| reload())>
                    {icon("refresh")}
                    "Refresh"
                </Button>
            </PageHeader>

            <div class="filter-bar">
                <SearchInput
                    value=Signal::derive(move || vm.filter.with(|f| f.query.clone()))
                    on_change=Callback::new(move |q: String| vm.set_query(q))
                    placeholder="Search description or equipment..."
                />
                <Select
                    id="job-status-filter"
                    placeholder="All"
                    options=status_options
                    value=Signal::derive(move || vm.selector(FilterKey::Status))
                    on_change=Callback::new(move |v: String| vm.set_selector(FilterKey::Status, &v))
                />
                <Checkbox
                    id="job-hide-completed"
                    label="Hide completed"
                    checked=hide_completed
                    on_change=Callback::new(move |on: bool| hide_completed.set(on))
                />
            </div>

            {move || {
                let rows = vm.state.with(|s| {
                    vm.filter.with(|f| job_rows(s.items(), f, hide_completed.get()))
                });
                if rows.is_empty() {
                    return if vm.is_loading() {
                        view! { <div class="list-loading"><Spinner /></div> }.into_any()
                    } else {
                        view! { <div class="empty-state">"No jobs found"</div> }.into_any()
                    };
                }
                let query = vm.filter.with(|f| f.query.clone());
                view! {
                    <div class="table">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"ID"</th>
                                    <th class="table__header-cell">"Equipment"</th>
                                    <th class="table__header-cell">"Description"</th>
                                    <th class="table__header-cell">"Team"</th>
                                    <th class="table__header-cell">"Status"</th>
                                    <th class="table__header-cell">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows.into_iter().map(|job| {
                                    let actions = actions_for(job.status);
                                    let buttons = actions.into_iter().map(|action| {
                                        let job = job.clone();
                                        view! {
                                            <Button
                                                size="sm"
                                                variant=action_variant(action)
                                                class=format!("job-action job-action--{}", action.badge().tone())
                                                on_click=Callback::new(move |_| run(job.clone(), action))
                                            >
                                                {action.label()}
                                            </Button>
                                        }
                                    }).collect_view();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{job.id}</td>
                                            <td class="table__cell">{highlight_matches(&job.equipment_name, &query)}</td>
                                            <td class="table__cell">{highlight_matches(&job.description, &query)}</td>
                                            <td class="table__cell">{job.team_label()}</td>
                                            <td class="table__cell"><StatusBadge status=job.status.display_name() /></td>
                                            <td class="table__cell table__cell--actions">{buttons}</td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}

fn action_variant(action: LifecycleAction) -> &'static str {
    match action.badge() {
        BadgeClass::Danger => "danger",
        BadgeClass::Warning => "secondary",
        _ => "primary",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: i64, equipment: &str, description: &str, status: &str) -> MaintenanceRequest {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "equipment": equipment,
            "description": description,
            "status": status,
            "team": "IT Support",
        }))
        .unwrap()
    }

    fn feed() -> Vec<MaintenanceRequest> {
        vec![
            job(1, "Printer A", "Paper jam", "New"),
            job(2, "Laptop 01", "Screen flicker", "Completed"),
            job(3, "Printer A", "Toner low", "In Progress"),
            job(4, "CCTV Camera", "No signal", "Completed"),
        ]
    }

    #[test]
    fn test_hide_completed() {
        let ids: Vec<_> = job_rows(&feed(), &ListFilter::new(), true)
            .iter()
            .map(|j| j.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(job_rows(&feed(), &ListFilter::new(), false).len(), 4);
    }

    #[test]
    fn test_search_over_description_and_equipment() {
        let by_equipment = job_rows(&feed(), &ListFilter::new().with_query("printer"), false);
        assert_eq!(by_equipment.len(), 2);

        let by_description = job_rows(&feed(), &ListFilter::new().with_query("SIGNAL"), false);
        assert_eq!(by_description.iter().map(|j| j.id).collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    fn test_status_filter_all_means_everything() {
        let filter = ListFilter::new().with(FilterKey::Status, "all");
        assert_eq!(job_rows(&feed(), &filter, false).len(), 4);
        let filter = ListFilter::new().with(FilterKey::Status, "Completed");
        assert_eq!(job_rows(&feed(), &filter, true).len(), 0);
    }
}
