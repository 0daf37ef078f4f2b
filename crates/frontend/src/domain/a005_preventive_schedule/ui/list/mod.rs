use crate::domain::a001_equipment::api as equipment_api;
use crate::domain::a005_preventive_schedule::api;
use crate::domain::a005_preventive_schedule::ui::details::ScheduleDetails;
use crate::shared::api::client;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::{Button, Select, StatusBadge};
use crate::shared::date_utils::{format_date, format_date_or_na, today};
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, FilterKey, SearchInput, Searchable};
use crate::shared::modal::{confirm, Modal};
use crate::shared::notifications::use_notifications;
use crate::shared::state::{FormTarget, ListViewModel};
use contracts::domain::a001_equipment::Equipment;
use contracts::domain::a005_preventive_schedule::{PreventiveSchedule, ScheduleId, ScheduleStats};
use contracts::domain::common::AggregateRoot;
use contracts::enums::ScheduleStatus;
use contracts::shared::badge::BadgeClass;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Spinner;

impl Searchable for PreventiveSchedule {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.task_name.as_str(), self.equipment_name.as_str()]
    }

    fn filter_value(&self, key: FilterKey) -> Option<String> {
        match key {
            FilterKey::Status => Some(self.status.code().to_string()),
            _ => None,
        }
    }
}

/// Whether the row still offers "Complete"
pub fn can_complete(schedule: &PreventiveSchedule) -> bool {
    !schedule.is_completed()
}

#[component]
#[allow(non_snake_case)]
pub fn ScheduleList() -> impl IntoView {
    let vm = ListViewModel::<PreventiveSchedule>::new();
    let equipment = RwSignal::new(Vec::<Equipment>::new());
    let editing = RwSignal::new(None::<FormTarget<ScheduleId>>);
    let notifications = use_notifications();

    let reload = move || vm.load(|| async move { api::fetch_all(&client()).await });

    let load_equipment = move || {
        spawn_local(async move {
            match equipment_api::fetch_all(&client()).await {
                Ok(list) => equipment.set(list),
                Err(e) => log::warn!("equipment for schedule screen: {}", e),
            }
        });
    };

    let complete = move |id: ScheduleId| {
        if !confirm("Mark this schedule as completed? This will update the next due date.") {
            return;
        }
        spawn_local(async move {
            match api::complete(&client(), id).await {
                Ok(()) => {
                    log::info!("schedule {} completed", id);
                    notifications.success("Schedule marked as completed");
                    reload();
                }
                Err(e) => notifications.api_error(&e),
            }
        });
    };

    let delete = move |id: ScheduleId| {
        if !confirm("Are you sure you want to delete this schedule?") {
            return;
        }
        spawn_local(async move {
            match api::delete(&client(), id).await {
                Ok(()) => {
                    notifications.success("Schedule deleted successfully");
                    reload();
                }
                Err(e) => notifications.api_error(&e),
            }
        });
    };

    reload();
    load_equipment();

    let stats = Memo::new(move |_| {
        vm.state.with(|s| ScheduleStats::compute(s.items(), today()))
    });
    let loaded = move |pick: fn(&ScheduleStats) -> usize| {
        Signal::derive(move || {
            if vm.is_loading() && vm.state.with(|s| s.items().is_empty()) {
                None
            } else {
                u32::try_from(pick(&stats.get())).ok()
            }
        })
    };

    let status_options = Signal::derive(|| {
        ScheduleStatus::all()
            .into_iter()
            .map(|s| (s.code().to_string(), s.display_name().to_string()))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="page">
            <PageHeader title=PreventiveSchedule::list_name()>
                <Button variant="secondary" on_click=Callback::new(move |_| reload())>
                    {icon("refresh")}
                    "Refresh"
                </Button>
                <Button on_click=Callback::new(move |_| editing.set(Some(FormTarget::Create)))>
                    {icon("plus")}
                    "Add Schedule"
                </Button>
            </PageHeader>

            <div class="stat-grid">
                <StatCard label="Total Schedules" icon_name="calendar" value=loaded(|s| s.total) />
                <StatCard label="Overdue" icon_name="alert" value=loaded(|s| s.overdue) tone=BadgeClass::Danger />
                <StatCard label="Due This Week" icon_name="clock" value=loaded(|s| s.due_this_week) tone=BadgeClass::Warning />
            </div>

            <div class="filter-bar">
                <SearchInput
                    value=Signal::derive(move || vm.filter.with(|f| f.query.clone()))
                    on_change=Callback::new(move |q: String| vm.set_query(q))
                    placeholder="Search task or equipment..."
                />
                <Select
                    id="schedule-status-filter"
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
                        view! { <div class="empty-state">"No schedules found"</div> }.into_any()
                    };
                }
                let query = vm.filter.with(|f| f.query.clone());
                view! {
                    <div class="table">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"Task"</th>
                                    <th class="table__header-cell">"Equipment"</th>
                                    <th class="table__header-cell">"Frequency"</th>
                                    <th class="table__header-cell">"Last Completed"</th>
                                    <th class="table__header-cell">"Next Due"</th>
                                    <th class="table__header-cell">"Status"</th>
                                    <th class="table__header-cell">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows.into_iter().map(|s| {
                                    let id = s.id;
                                    let completable = can_complete(&s);
                                    let row_class = if s.counts_as_overdue() { "table__row table__row--danger" } else { "table__row" };
                                    view! {
                                        <tr class=row_class>
                                            <td class="table__cell">{highlight_matches(&s.task_name, &query)}</td>
                                            <td class="table__cell">{highlight_matches(&s.equipment_name, &query)}</td>
                                            <td class="table__cell">{s.frequency.display_name()}</td>
                                            <td class="table__cell">{format_date_or_na(s.last_completed)}</td>
                                            <td class="table__cell">{format_date(s.next_due)}</td>
                                            <td class="table__cell"><StatusBadge status=s.status.display_name() /></td>
                                            <td class="table__cell table__cell--actions">
                                                <Show when=move || completable>
                                                    <Button variant="primary" size="sm" title="Complete"
                                                        on_click=Callback::new(move |_| complete(id))>
                                                        {icon("check")}
                                                    </Button>
                                                </Show>
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
                    <Modal title=target.title("Schedule") on_close=close>
                        <ScheduleDetails
                            id=target.id()
                            equipment=equipment
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

    fn schedule(id: i64, task: &str, equipment: &str, status: &str) -> PreventiveSchedule {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "task_name": task,
            "equipment_name": equipment,
            "frequency": "monthly",
            "status": status,
        }))
        .unwrap()
    }

    #[test]
    fn test_search_and_status_filter() {
        let rows = vec![
            schedule(1, "Replace filter", "Air Conditioner Unit", "scheduled"),
            schedule(2, "Oil change", "Generator A", "overdue"),
            schedule(3, "Clean lens", "CCTV Camera", "completed"),
        ];
        let by_equipment = ListFilter::new().with_query("generator").apply(&rows);
        assert_eq!(by_equipment.iter().map(|s| s.id).collect::<Vec<_>>(), vec![2]);

        let completed = ListFilter::new().with(FilterKey::Status, "completed").apply(&rows);
        assert_eq!(completed.iter().map(|s| s.id).collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn test_complete_hidden_for_completed_rows() {
        assert!(can_complete(&schedule(1, "Replace filter", "AC", "scheduled")));
        assert!(can_complete(&schedule(2, "Oil change", "Generator A", "overdue")));
        assert!(!can_complete(&schedule(3, "Clean lens", "CCTV Camera", "completed")));
    }
}
