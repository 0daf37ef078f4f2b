use crate::domain::a001_equipment::api;
use crate::domain::a001_equipment::ui::details::EquipmentDetails;
use crate::shared::api::{client, crud};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Badge, Button, Select, StatusBadge};
use crate::shared::date_utils::{format_date, warranty_label};
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, FilterKey, SearchInput, Searchable};
use crate::shared::modal::{confirm, Modal};
use crate::shared::notifications::use_notifications;
use crate::shared::state::{FormTarget, LatestLoad, ListViewModel};
use contracts::dashboards::d400_overview::EquipmentStatistics;
use contracts::domain::a001_equipment::{Equipment, EquipmentId};
use contracts::domain::a002_team::{team_label, Team};
use contracts::domain::common::AggregateRoot;
use contracts::enums::EquipmentStatus;
use contracts::shared::badge::BadgeClass;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Spinner;

impl Searchable for Equipment {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.equipment_type.as_str(),
            self.department.as_str(),
        ]
    }

    fn filter_value(&self, key: FilterKey) -> Option<String> {
        match key {
            FilterKey::Status => Some(self.status.code().to_string()),
            FilterKey::Team => self.assigned_team_id.map(|id| id.to_string()),
            _ => None,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn EquipmentList() -> impl IntoView {
    let vm = ListViewModel::<Equipment>::new();
    let teams = RwSignal::new(Vec::<Team>::new());
    let stats = RwSignal::new(None::<EquipmentStatistics>);
    let editing = RwSignal::new(None::<FormTarget<EquipmentId>>);
    let notifications = use_notifications();

    let stats_load = LatestLoad::new("equipment statistics");

    let reload = move || {
        vm.load(|| async move { api::fetch_all(&client()).await });
        stats_load.spawn(
            async move { api::statistics(&client()).await },
            move |result| match result {
                Ok(s) => stats.set(Some(s)),
                Err(e) => log::debug!("equipment statistics unavailable: {}", e),
            },
        );
    };

    let load_teams = move || {
        spawn_local(async move {
            match crud::list::<Team>(&client()).await {
                Ok(list) => teams.set(list),
                Err(e) => log::warn!("teams for equipment screen: {}", e),
            }
        });
    };

    let delete = move |id: EquipmentId| {
        if !confirm("Are you sure you want to delete this equipment?") {
            return;
        }
        spawn_local(async move {
            match api::delete(&client(), id).await {
                Ok(()) => {
                    notifications.success("Equipment deleted successfully");
                    reload();
                }
                Err(e) => notifications.api_error(&e),
            }
        });
    };

    reload();
    load_teams();

    let status_options = Signal::derive(|| {
        EquipmentStatus::all()
            .into_iter()
            .map(|s| (s.code().to_string(), s.display_name().to_string()))
            .collect::<Vec<_>>()
    });

    let subtitle = Signal::derive(move || {
        stats.get().map(|s| {
            format!(
                "{} items, {:.0}% operational",
                s.total, s.operational_percentage
            )
        })
    });

    view! {
        <div class="page">
            <PageHeader title=Equipment::list_name() subtitle=subtitle>
                <Button variant="secondary" on_click=Callback::new(move |_| reload())>
                    {icon("refresh")}
                    "Refresh"
                </Button>
                <Button on_click=Callback::new(move |_| editing.set(Some(FormTarget::Create)))>
                    {icon("plus")}
                    "Add Equipment"
                </Button>
            </PageHeader>

            <div class="filter-bar">
                <SearchInput
                    value=Signal::derive(move || vm.filter.with(|f| f.query.clone()))
                    on_change=Callback::new(move |q: String| vm.set_query(q))
                    placeholder="Search equipment..."
                />
                <Select
                    id="equipment-status-filter"
                    placeholder="All Status"
                    options=status_options
                    value=Signal::derive(move || vm.selector(FilterKey::Status))
                    on_change=Callback::new(move |v: String| vm.set_selector(FilterKey::Status, &v))
                />
            </div>

            {move || {
                let rows = vm.visible();
                if rows.is_empty() {
                    return if vm.is_loading() {
                        view! { <div class="list-loading"><Spinner /></div> }.into_any()
                    } else {
                        view! { <div class="empty-state">"No equipment found"</div> }.into_any()
                    };
                }
                let query = vm.filter.with(|f| f.query.clone());
                let team_list = teams.get();
                view! {
                    <div class="table">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"Name"</th>
                                    <th class="table__header-cell">"Type"</th>
                                    <th class="table__header-cell">"Department"</th>
                                    <th class="table__header-cell">"Team"</th>
                                    <th class="table__header-cell">"Status"</th>
                                    <th class="table__header-cell">"Purchase Date"</th>
                                    <th class="table__header-cell">"Warranty"</th>
                                    <th class="table__header-cell">"Open Requests"</th>
                                    <th class="table__header-cell">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows.into_iter().map(|e| {
                                    let id = e.id;
                                    let open = e.open_requests_count;
                                    let open_badge = if open > 0 { BadgeClass::Warning } else { BadgeClass::Secondary };
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{highlight_matches(&e.name, &query)}</td>
                                            <td class="table__cell">{highlight_matches(&e.equipment_type, &query)}</td>
                                            <td class="table__cell">{highlight_matches(&e.department, &query)}</td>
                                            <td class="table__cell">{team_label(&team_list, e.assigned_team_id)}</td>
                                            <td class="table__cell"><StatusBadge status=e.status.display_name() /></td>
                                            <td class="table__cell">{format_date(e.purchase_date)}</td>
                                            <td class="table__cell">{warranty_label(e.warranty_expiry)}</td>
                                            <td class="table__cell"><Badge class=open_badge text=open.to_string() /></td>
                                            <td class="table__cell table__cell--actions">
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
                    <Modal title=target.title(Equipment::element_name()) on_close=close>
                        <EquipmentDetails
                            id=target.id()
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
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::ListFilter;

    fn equipment(id: i64, name: &str, kind: &str, department: &str, status: &str) -> Equipment {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": name,
            "type": kind,
            "department": department,
            "status": status,
        }))
        .unwrap()
    }

    #[test]
    fn test_search_covers_type_and_department() {
        let rows = vec![
            equipment(1, "Server Rack", "Network", "IT", "operational"),
            equipment(2, "Generator A", "Power", "Facilities", "maintenance"),
            equipment(3, "Printer A", "Printer", "Admin", "breakdown"),
        ];
        let by_type = ListFilter::new().with_query("power").apply(&rows);
        assert_eq!(by_type.iter().map(|e| e.id).collect::<Vec<_>>(), vec![2]);

        let by_department = ListFilter::new().with_query("admin").apply(&rows);
        assert_eq!(by_department.iter().map(|e| e.id).collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn test_status_selector() {
        let rows = vec![
            equipment(1, "Server Rack", "Network", "IT", "operational"),
            equipment(2, "Generator A", "Power", "Facilities", "maintenance"),
            equipment(3, "Laptop 01", "Laptop", "IT", "operational"),
        ];
        let filter = ListFilter::new()
            .with(FilterKey::Status, "operational")
            .with_query("it");
        assert_eq!(
            filter.apply(&rows).iter().map(|e| e.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
    }
}
