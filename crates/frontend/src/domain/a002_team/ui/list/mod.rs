//! Team cards with their technician counts.

use crate::domain::a002_team::api;
use crate::domain::a002_team::ui::details::TeamDetails;
use crate::shared::api::client;
use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput, Searchable};
use crate::shared::modal::{confirm, Modal};
use crate::shared::notifications::use_notifications;
use crate::shared::state::{FormTarget, ListViewModel};
use contracts::domain::a002_team::{Team, TeamId};
use contracts::domain::common::AggregateRoot;
use contracts::shared::badge::BadgeClass;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Spinner;

impl Searchable for Team {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.department.as_str(),
            self.specialization.as_deref().unwrap_or(""),
        ]
    }
}

fn technician_count_label(count: u32) -> String {
    match count {
        1 => "1 technician".to_string(),
        n => format!("{} technicians", n),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn TeamList() -> impl IntoView {
    let vm = ListViewModel::<Team>::new();
    let editing = RwSignal::new(None::<FormTarget<TeamId>>);
    let notifications = use_notifications();

    let reload = move || vm.load(|| async move { api::fetch_all(&client()).await });

    let delete = move |id: TeamId| {
        if !confirm("Are you sure you want to delete this team?") {
            return;
        }
        spawn_local(async move {
            match api::delete(&client(), id).await {
                Ok(()) => {
                    notifications.success("Team deleted successfully");
                    reload();
                }
                Err(e) => notifications.api_error(&e),
            }
        });
    };

    reload();

    view! {
        <div class="page">
            <PageHeader title=Team::list_name()>
                <Button variant="secondary" on_click=Callback::new(move |_| reload())>
                    {icon("refresh")}
                    "Refresh"
                </Button>
                <Button on_click=Callback::new(move |_| editing.set(Some(FormTarget::Create)))>
                    {icon("plus")}
                    "Add Team"
                </Button>
            </PageHeader>

            <div class="filter-bar">
                <SearchInput
                    value=Signal::derive(move || vm.filter.with(|f| f.query.clone()))
                    on_change=Callback::new(move |q: String| vm.set_query(q))
                    placeholder="Search teams..."
                />
            </div>

            {move || {
                let teams = vm.visible();
                if teams.is_empty() {
                    return if vm.is_loading() {
                        view! { <div class="list-loading"><Spinner /></div> }.into_any()
                    } else {
                        view! { <div class="empty-state">"No teams found"</div> }.into_any()
                    };
                }
                let query = vm.filter.with(|f| f.query.clone());
                view! {
                    <div class="card-grid">
                        {teams.into_iter().enumerate().map(|(index, team)| {
                            let id = team.id;
                            let specialization = team.specialization.clone().unwrap_or_default();
                            let query = query.clone();
                            view! {
                                <CardAnimated class="team-card" delay_ms=stagger_delay(index)>
                                    <div class="team-card__header">
                                        <h3 class="team-card__title">{highlight_matches(&team.name, &query)}</h3>
                                        <Badge class=BadgeClass::Info text=technician_count_label(team.technician_count) />
                                    </div>
                                    <div class="team-card__meta">
                                        <span class="team-card__label">"Department: "</span>
                                        {highlight_matches(&team.department, &query)}
                                    </div>
                                    {(!specialization.is_empty()).then(|| view! {
                                        <div class="team-card__meta">
                                            <span class="team-card__label">"Specialization: "</span>
                                            {highlight_matches(&specialization, &query)}
                                        </div>
                                    })}
                                    <div class="team-card__actions">
                                        <Button variant="ghost" size="sm"
                                            on_click=Callback::new(move |_| editing.set(Some(FormTarget::Edit(id))))>
                                            {icon("edit")}
                                            "Edit"
                                        </Button>
                                        <Button variant="danger" size="sm"
                                            on_click=Callback::new(move |_| delete(id))>
                                            {icon("trash")}
                                            "Delete"
                                        </Button>
                                    </div>
                                </CardAnimated>
                            }
                        }).collect_view()}
                    </div>
                }
                .into_any()
            }}

            {move || editing.get().map(|target| {
                let close = Callback::new(move |_| editing.set(None));
                view! {
                    <Modal title=target.title(Team::element_name()) on_close=close>
                        <TeamDetails
                            id=target.id()
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
    use crate::shared::list_utils::filter_list;

    fn team(id: i64, name: &str, specialization: Option<&str>) -> Team {
        Team {
            id,
            name: name.into(),
            department: "Operations".into(),
            specialization: specialization.map(str::to_string),
            technician_count: 0,
        }
    }

    #[test]
    fn test_search_includes_specialization() {
        let teams = vec![
            team(1, "IT Support", Some("Laptops and printers")),
            team(2, "Network Team", None),
        ];
        let hits = filter_list(&teams, "PRINTER");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
        assert_eq!(filter_list(&teams, "operations").len(), 2);
    }

    #[test]
    fn test_technician_count_label() {
        assert_eq!(technician_count_label(1), "1 technician");
        assert_eq!(technician_count_label(0), "0 technicians");
    }
}
