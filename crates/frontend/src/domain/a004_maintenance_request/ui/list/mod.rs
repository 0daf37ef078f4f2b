use crate::domain::a001_equipment::api as equipment_api;
use crate::domain::a003_technician::api as technician_api;
use crate::domain::a004_maintenance_request::api;
use crate::domain::a004_maintenance_request::ui::details::RequestDetails;
use crate::shared::api::{client, crud};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::{Badge, Button, PriorityBadge, Select, StatusBadge};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, FilterKey, SearchInput, Searchable};
use crate::shared::modal::{confirm, Modal};
use crate::shared::notifications::use_notifications;
use crate::shared::state::{FormTarget, LatestLoad, ListViewModel};
use contracts::domain::a001_equipment::Equipment;
use contracts::domain::a002_team::Team;
use contracts::domain::a003_technician::Technician;
use contracts::domain::a004_maintenance_request::{MaintenanceRequest, RequestId, RequestStatistics};
use contracts::domain::common::AggregateRoot;
use contracts::enums::{Priority, RequestStatus, RequestType};
use contracts::shared::badge::BadgeClass;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Spinner;

const DESCRIPTION_PREVIEW: usize = 50;

impl Searchable for MaintenanceRequest {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.equipment_name.as_str(), self.description.as_str()]
    }

    fn filter_value(&self, key: FilterKey) -> Option<String> {
        match key {
            FilterKey::Status => Some(self.status.code().to_string()),
            FilterKey::Type => Some(self.request_type.code().to_string()),
            FilterKey::Priority => Some(self.priority.code().to_string()),
            FilterKey::Team => self.assigned_team_id.map(|id| id.to_string()),
        }
    }
}

fn options<T>(all: Vec<T>, code: fn(&T) -> &'static str, label: fn(&T) -> &'static str) -> Vec<(String, String)> {
    all.iter()
        .map(|v| (code(v).to_string(), label(v).to_string()))
        .collect()
}

fn modal_title(target: FormTarget<RequestId>) -> String {
    if target.is_edit() {
        "Edit Maintenance Request".to_string()
    } else {
        "New Maintenance Request".to_string()
    }
}

/// Technician picker for one request
#[component]
fn AssignTechnician(
    request: MaintenanceRequest,
    #[prop(into)] technicians: Signal<Vec<Technician>>,
    on_assigned: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let notifications = use_notifications();
    let selected = RwSignal::new(
        request
            .assigned_technician_id
            .map(|id| id.to_string())
            .unwrap_or_default(),
    );
    let team_id = request.assigned_team_id;
    let request_id = request.id;

    let technician_options = Signal::derive(move || {
        technicians
            .get()
            .into_iter()
            .filter(|t| team_id.is_none() || t.team_id == team_id)
            .map(|t| (t.id.to_string(), t.name))
            .collect::<Vec<_>>()
    });

    let assign = move || {
        let Ok(technician_id) = selected.get_untracked().parse::<i64>() else {
            notifications.error("Please select a technician");
            return;
        };
        spawn_local(async move {
            match api::assign(&client(), request_id, technician_id).await {
                Ok(()) => {
                    notifications.success("Technician assigned successfully");
                    on_assigned.run(());
                }
                Err(e) => notifications.api_error(&e),
            }
        });
    };

    view! {
        <div class="details-form">
            <p class="details-form__hint">
                {format!("#{} {}: {}", request.id, request.equipment_name, request.short_description(DESCRIPTION_PREVIEW))}
            </p>
            <Select
                label="Technician"
                id="assign-technician"
                placeholder="Select technician"
                options=technician_options
                value=selected
                on_change=Callback::new(move |v: String| selected.set(v))
            />
            <div class="details-actions">
                <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                    "Cancel"
                </Button>
                <Button on_click=Callback::new(move |_| assign())>
                    {icon("user")}
                    "Assign"
                </Button>
            </div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn RequestList() -> impl IntoView {
    let vm = ListViewModel::<MaintenanceRequest>::new();
    let equipment = RwSignal::new(Vec::<Equipment>::new());
    let teams = RwSignal::new(Vec::<Team>::new());
    let technicians = RwSignal::new(Vec::<Technician>::new());
    let stats = RwSignal::new(None::<RequestStatistics>);
    let editing = RwSignal::new(None::<FormTarget<RequestId>>);
    let assigning = RwSignal::new(None::<MaintenanceRequest>);
    let notifications = use_notifications();

    let stats_load = LatestLoad::new("request statistics");

    let reload = move || {
        vm.load(|| async move { api::fetch_all(&client()).await });
        stats_load.spawn(
            async move { api::statistics(&client()).await },
            move |result| match result {
                Ok(s) => stats.set(Some(s)),
                Err(e) => log::debug!("request statistics unavailable: {}", e),
            },
        );
    };

    // select sources; each arrives on its own
    spawn_local(async move {
        match equipment_api::fetch_all(&client()).await {
            Ok(list) => equipment.set(list),
            Err(e) => log::warn!("equipment for request screen: {}", e),
        }
    });
    spawn_local(async move {
        match crud::list::<Team>(&client()).await {
            Ok(list) => teams.set(list),
            Err(e) => log::warn!("teams for request screen: {}", e),
        }
    });
    spawn_local(async move {
        match technician_api::fetch_all(&client()).await {
            Ok(list) => technicians.set(list),
            Err(e) => log::warn!("technicians for request screen: {}", e),
        }
    });

    let delete = move |id: RequestId| {
        if !confirm("Are you sure you want to delete this request?") {
            return;
        }
        spawn_local(async move {
            match api::delete(&client(), id).await {
                Ok(()) => {
                    notifications.success("Request deleted successfully");
                    reload();
                }
                Err(e) => notifications.api_error(&e),
            }
        });
    };

    reload();

    let status_options = Signal::derive(|| options(RequestStatus::all(), RequestStatus::code, RequestStatus::display_name));
    let type_options = Signal::derive(|| options(RequestType::all(), RequestType::code, RequestType::display_name));
    let priority_options = Signal::derive(|| options(Priority::all(), Priority::code, Priority::display_name));

    let stat = move |pick: fn(&RequestStatistics) -> u32| Signal::derive(move || stats.get().map(|s| pick(&s)));
    let by_status = move |status: RequestStatus| {
        Signal::derive(move || {
            stats.get().map(|s| {
                s.by_status
                    .iter()
                    .filter(|(k, _)| RequestStatus::from_code(k) == Some(status))
                    .map(|(_, v)| *v)
                    .sum::<u32>()
            })
        })
    };

    view! {
        <div class="page">
            <PageHeader title=MaintenanceRequest::list_name()>
                <Button variant="secondary" on_click=Callback::new(move |_| reload())>
                    {icon("refresh")}
                    "Refresh"
                </Button>
                <Button on_click=Callback::new(move |_| editing.set(Some(FormTarget::Create)))>
                    {icon("plus")}
                    "New Request"
                </Button>
            </PageHeader>

            <div class="stat-grid">
                <StatCard label="Total" icon_name="clipboard" value=stat(|s| s.total) />
                <StatCard label="Open" icon_name="alert-triangle" value=stat(|s| s.open) tone=BadgeClass::Warning />
                <StatCard label="In Progress" icon_name="activity" value=by_status(RequestStatus::InProgress) tone=BadgeClass::Info />
                <StatCard label="Completed" icon_name="check" value=by_status(RequestStatus::Completed) tone=BadgeClass::Success />
            </div>

            <div class="filter-bar">
                <SearchInput
                    value=Signal::derive(move || vm.filter.with(|f| f.query.clone()))
                    on_change=Callback::new(move |q: String| vm.set_query(q))
                    placeholder="Search requests..."
                />
                <Select
                    id="request-status-filter"
                    placeholder="All Status"
                    options=status_options
                    value=Signal::derive(move || vm.selector(FilterKey::Status))
                    on_change=Callback::new(move |v: String| vm.set_selector(FilterKey::Status, &v))
                />
                <Select
                    id="request-type-filter"
                    placeholder="All Types"
                    options=type_options
                    value=Signal::derive(move || vm.selector(FilterKey::Type))
                    on_change=Callback::new(move |v: String| vm.set_selector(FilterKey::Type, &v))
                />
                <Select
                    id="request-priority-filter"
                    placeholder="All Priorities"
                    options=priority_options
                    value=Signal::derive(move || vm.selector(FilterKey::Priority))
                    on_change=Callback::new(move |v: String| vm.set_selector(FilterKey::Priority, &v))
                />
            </div>

            {move || {
                let rows = vm.visible();
                if rows.is_empty() {
                    return if vm.is_loading() {
                        view! { <div class="list-loading"><Spinner /></div> }.into_any()
                    } else {
                        view! { <div class="empty-state">"No requests found"</div> }.into_any()
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
                                    <th class="table__header-cell">"Type"</th>
                                    <th class="table__header-cell">"Priority"</th>
                                    <th class="table__header-cell">"Status"</th>
                                    <th class="table__header-cell">"Team"</th>
                                    <th class="table__header-cell">"Technician"</th>
                                    <th class="table__header-cell">"Description"</th>
                                    <th class="table__header-cell">"Requested"</th>
                                    <th class="table__header-cell">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows.into_iter().map(|r| {
                                    let id = r.id;
                                    let for_assign = r.clone();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{id}</td>
                                            <td class="table__cell">{highlight_matches(&r.equipment_name, &query)}</td>
                                            <td class="table__cell"><Badge class=BadgeClass::Info text=r.request_type.display_name() /></td>
                                            <td class="table__cell"><PriorityBadge priority=r.priority.code() /></td>
                                            <td class="table__cell"><StatusBadge status=r.status.display_name() /></td>
                                            <td class="table__cell">{r.team_label()}</td>
                                            <td class="table__cell">{r.technician_label()}</td>
                                            <td class="table__cell">{highlight_matches(&r.short_description(DESCRIPTION_PREVIEW), &query)}</td>
                                            <td class="table__cell">{format_date(r.requested_date)}</td>
                                            <td class="table__cell table__cell--actions">
                                                <Button variant="ghost" size="sm" title="Assign technician"
                                                    on_click=Callback::new(move |_| assigning.set(Some(for_assign.clone())))>
                                                    {icon("user")}
                                                </Button>
                                                <Button variant="ghost" size="sm" title="Edit"
                                                    on_click=Callback::new(move |_| editing.set(Some(FormTarget::Edit(id))))>
                                                    {icon("edit")}
                                                </Button>
                                                <Button variant="danger" size="sm" title="Delete"
                                                    on_click=Callback::new(move |_| delete(id))>
                                                    {icon("trash")}
                                                </Button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }
                .into_any()
            }}

            {move || editing.get().map(|target| {
                let close = Callback::new(move |_| editing.set(None));
                view! {
                    <Modal title=modal_title(target) on_close=close>
                        <RequestDetails
                            id=target.id()
                            equipment=equipment
                            teams=teams
                            on_saved=Callback::new(move |_| {
                                editing.set(None);
                                reload();
                            })
                            on_cancel=close
                        />
                    </Modal>
                }
            })}

            {move || assigning.get().map(|request| {
                let close = Callback::new(move |_| assigning.set(None));
                view! {
                    <Modal title={"Assign Technician".to_string()} on_close=close>
                        <AssignTechnician
                            request=request
                            technicians=technicians
                            on_assigned=Callback::new(move |_| {
                                assigning.set(None);
                                reload();
                            })
                            on_cancel=close
                        />
                    </Modal>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::ListFilter;

    fn request(id: i64, equipment: &str, description: &str, status: &str, kind: &str, priority: &str) -> MaintenanceRequest {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "equipment_name": equipment,
            "description": description,
            "status": status,
            "type": kind,
            "priority": priority,
        }))
        .unwrap()
    }

    fn rows() -> Vec<MaintenanceRequest> {
        vec![
            request(1, "Printer A", "Paper jam", "new", "corrective", "low"),
            request(2, "Server Rack", "Fan noise", "in_progress", "corrective", "high"),
            request(3, "Generator A", "Quarterly service", "completed", "preventive", "medium"),
            request(4, "Server Rack", "Replace UPS battery", "new", "preventive", "critical"),
        ]
    }

    #[test]
    fn test_selectors_combine_with_search() {
        let filter = ListFilter::new()
            .with_query("server")
            .with(FilterKey::Status, "new");
        let ids: Vec<_> = filter.apply(&rows()).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![4]);

        let filter = ListFilter::new()
            .with(FilterKey::Type, "preventive")
            .with(FilterKey::Priority, "medium");
        let ids: Vec<_> = filter.apply(&rows()).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn test_status_selector_accepts_display_spelling() {
        let filter = ListFilter::new().with(FilterKey::Status, "In Progress");
        let ids: Vec<_> = filter.apply(&rows()).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_filtering_twice_is_stable() {
        let filter = ListFilter::new().with_query("a");
        let once = filter.apply(&rows());
        let twice = filter.apply(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_modal_title() {
        assert_eq!(modal_title(FormTarget::Create), "New Maintenance Request");
        assert_eq!(modal_title(FormTarget::Edit(3)), "Edit Maintenance Request");
    }
}
