//! Requests raised by the signed-in employee.

use crate::domain::a004_maintenance_request::api;
use crate::shared::api::client;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, PriorityBadge, StatusBadge};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::state::ListViewModel;
use crate::system::auth::context::{current_user, use_auth};
use contracts::domain::a004_maintenance_request::MaintenanceRequest;
use leptos::prelude::*;
use thaw::Spinner;

const DESCRIPTION_PREVIEW: usize = 80;

#[component]
#[allow(non_snake_case)]
pub fn MyRequests() -> impl IntoView {
    let vm = ListViewModel::<MaintenanceRequest>::new();
    let (auth_state, _) = use_auth();

    let reload = move || {
        let Some(user) = current_user(auth_state) else {
            return;
        };
        vm.load(move || async move { api::fetch_for_user(&client(), &user.email).await });
    };

    reload();

    view! {
        <div class="page">
            <PageHeader title="My Requests" subtitle="Track the status of everything you reported">
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
            </div>

            {move || {
                let rows = vm.visible();
                if rows.is_empty() {
                    return if vm.is_loading() {
                        view! { <div class="list-loading"><Spinner /></div> }.into_any()
                    } else {
                        view! { <div class="empty-state">"You have not submitted any requests yet"</div> }.into_any()
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
                                    <th class="table__header-cell">"Priority"</th>
                                    <th class="table__header-cell">"Status"</th>
                                    <th class="table__header-cell">"Requested"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows.into_iter().map(|r| view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{r.id}</td>
                                        <td class="table__cell">{highlight_matches(&r.equipment_name, &query)}</td>
                                        <td class="table__cell" title=r.description.clone()>
                                            {highlight_matches(&r.short_description(DESCRIPTION_PREVIEW), &query)}
                                        </td>
                                        <td class="table__cell">{r.team_label()}</td>
                                        <td class="table__cell"><PriorityBadge priority=r.priority.display_name() /></td>
                                        <td class="table__cell"><StatusBadge status=r.status.display_name() /></td>
                                        <td class="table__cell">{format_date(r.requested_date)}</td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }.into_any()
            }}
        </div>
    }
}
