use crate::domain::a003_technician::api;
use crate::domain::a003_technician::ui::details::TechnicianDetails;
use crate::shared::api::{client, crud};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Badge, Button, Select, StatusBadge};
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, FilterKey, SearchInput, Searchable};
use crate::shared::modal::{confirm, Modal};
use crate::shared::notifications::use_notifications;
use crate::shared::state::{FormTarget, ListViewModel};
use contracts::domain::a002_team::{team_label, Team};
use contracts::domain::a003_technician::{Technician, TechnicianId};
use contracts::domain::common::AggregateRoot;
use contracts::shared::badge::BadgeClass;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Spinner;

impl Searchable for Technician {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.phone.as_str()]
    }

    fn filter_value(&self, key: FilterKey) -> Option<String> {
        match key {
            FilterKey::Team => self.team_id.map(|id| id.to_string()),
            FilterKey::Status => Some(self.status.code().to_string()),
            _ => None,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn TechnicianList() -> impl IntoView {
    let vm = ListViewModel::<Technician>::new();
    let teams = RwSignal::new(Vec::<Team>::new());
    let editing = RwSignal::new(None::<FormTarget<TechnicianId>>);
    let notifications = use_notifications();

    let reload = move || vm.load(|| async move { api::fetch_all(&client()).await });

    spawn_local(async move {
        match crud::list::<Team>(&client()).await {
            Ok(list) => teams.set(list),
            Err(e) => log::warn!("teams for technician screen: {}", e),
        }
    });

    let delete = move |id: TechnicianId| {
        if !confirm("Are you sure you want to delete this technician?") {
            return;
        }
        spawn_local(async move {
            match api::delete(&client(), id).await {
                Ok(()) => {
                    notifications.success("Technician deleted successfully");
                    reload();
                }
                Err(e) => notifications.api_error(&e),
            }
        });
    };

    reload();

    let team_options = Signal::derive(move || {
        teams
            .get()
            .into_iter()
            .map(|t| (t.id.to_string(), t.name))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="page">
            <PageHeader title=Technician::list_name()>
                <Button variant="secondary" on_click=Callback::new(move |_| reload())>
                    {icon("refresh")}
                    "Refresh"
                </Button>
                <Button on_click=Callback::new(move |_| editing.set(Some(FormTarget::Create)))>
                    {icon("plus")}
                    "Add Technician"
                </Button>
            </PageHeader>

            <div class="filter-bar">
                <SearchInput
                    value=Signal::derive(move || vm.filter.with(|f| f.query.clone()))
                    on_change=Callback::new(move |q: String| vm.set_query(q))
                    placeholder="Search technicians..."
                />
                <Select
                    id="technician-team-filter"
                    placeholder="All Teams"
                    options=team_options
                    value=Signal::derive(move || vm.selector(FilterKey::Team))
                    on_change=Callback::new(move |v: String| vm.set_selector(FilterKey::Team, &v))
                />
            </div>

            {move || {
                let rows = vm.visible();
                if rows.is_empty() {
                    return if vm.is_loading() {
                        view! { <div class="list-loading"><Spinner /></div> }.into_any()
                    } else {
                        view! { <div class="empty-state">"No technicians found"</div> }.into_any()
                    };
                }
                let query = vm.filter.with(|f| f.query.clone());
                let team_list = teams.get();
                view! {
                    <div class="table">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"ID"</th>
                                    <th class="table__header-cell">"Name"</th>
                                    <th class="table__header-cell">"Email"</th>
                                    <th class="table__header-cell">"Phone"</th>
                                    <th class="table__header-cell">"Team"</th>
                                    <th class="table__header-cell">"Skill Level"</th>
                                    <th class="table__header-cell">"Status"</th>
                                    <th class="table__header-cell">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows.into_iter().map(|t| {
                                    let id = t.id;
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{id}</td>
                                            <td class="table__cell">{highlight_matches(&t.name, &query)}</td>
                                            <td class="table__cell">{highlight_matches(&t.email, &query)}</td>
                                            <td class="table__cell">{highlight_matches(&t.phone, &query)}</td>
                                            <td class="table__cell">{team_label(&team_list, t.team_id)}</td>
                                            <td class="table__cell"><Badge class=BadgeClass::Info text=t.skill_level.clone() /></td>
                                            <td class="table__cell"><StatusBadge status=t.status.display_name() /></td>
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
                    <Modal title=target.title(Technician::element_name()) on_close=close>
                        <TechnicianDetails
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

    fn technician(id: i64, name: &str, phone: &str, team_id: Option<i64>) -> Technician {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": name,
            "email": format!("{}@plant.io", name.to_lowercase()),
            "phone": phone,
            "team_id": team_id,
            "skill_level": "Senior",
            "status": "active",
        }))
        .unwrap()
    }

    #[test]
    fn test_search_by_phone_and_team_selector() {
        let rows = vec![
            technician(1, "Asha", "555-0101", Some(1)),
            technician(2, "Ravi", "555-0199", Some(2)),
            technician(3, "Meera", "555-0100", None),
        ];
        let hits = ListFilter::new().with_query("0199").apply(&rows);
        assert_eq!(hits.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2]);

        let team_one = ListFilter::new().with(FilterKey::Team, "1").apply(&rows);
        assert_eq!(team_one.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1]);
    }
}
