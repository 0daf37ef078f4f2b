//! Landing screen of an employee: own request counters and the latest five.

use crate::domain::a004_maintenance_request::api;
use crate::shared::api::client;
use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::{PriorityBadge, StatusBadge};
use crate::shared::date_utils::format_date;
use crate::shared::notifications::use_notifications;
use crate::system::auth::context::{current_user, use_auth};
use contracts::domain::a004_maintenance_request::EmployeeSummary;
use contracts::shared::badge::BadgeClass;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Spinner;

fn count(value: usize) -> Option<u32> {
    u32::try_from(value).ok()
}

/// Greeting line under the dashboard title.
pub fn greeting(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => format!("Welcome back, {}", name.trim()),
        _ => "Welcome back".to_string(),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn EmployeeDashboard() -> impl IntoView {
    let notifications = use_notifications();
    let (auth_state, _) = use_auth();
    let summary = RwSignal::new(None::<EmployeeSummary>);

    if let Some(user) = current_user(auth_state) {
        spawn_local(async move {
            match api::fetch_for_user(&client(), &user.email).await {
                Ok(requests) => summary.set(Some(EmployeeSummary::compute(&requests))),
                Err(e) => {
                    log::warn!("employee dashboard load failed: {}", e);
                    notifications.api_error(&e);
                    summary.set(Some(EmployeeSummary::default()));
                }
            }
        });
    }

    let subtitle = Signal::derive(move || {
        let user = current_user(auth_state);
        Some(greeting(user.as_ref().map(|u| u.display_name())))
    });
    let stat = move |pick: fn(&EmployeeSummary) -> usize| {
        Signal::derive(move || summary.with(|s| s.as_ref().and_then(|s| count(pick(s)))))
    };

    view! {
        <div class="page">
            <PageHeader title="Dashboard" subtitle=subtitle>
                {()}
            </PageHeader>

            <div class="stat-grid">
                <StatCard label="Total Requests" icon_name="clipboard" value=stat(|s| s.total) />
                <StatCard label="Open" icon_name="inbox" value=stat(|s| s.open) tone=BadgeClass::Info />
                <StatCard label="In Progress" icon_name="tool" value=stat(|s| s.in_progress) tone=BadgeClass::Warning />
                <StatCard label="Completed" icon_name="check" value=stat(|s| s.completed) tone=BadgeClass::Success />
            </div>

            <h2 class="section-title">"Recent Requests"</h2>
            {move || match summary.get() {
                None => view! { <div class="list-loading"><Spinner /></div> }.into_any(),
                Some(s) if s.recent.is_empty() => {
                    view! { <div class="empty-state">"No requests yet"</div> }.into_any()
                }
                Some(s) => s
                    .recent
                    .into_iter()
                    .enumerate()
                    .map(|(i, r)| view! {
                        <CardAnimated delay_ms=stagger_delay(i) class="recent-request">
                            <div class="recent-request__head">
                                <span class="recent-request__equipment">{r.equipment_name.clone()}</span>
                                <StatusBadge status=r.status.display_name() />
                            </div>
                            <div class="recent-request__body">{r.short_description(120)}</div>
                            <div class="recent-request__meta">
                                <PriorityBadge priority=r.priority.display_name() />
                                <span>{r.team_label()}</span>
                                <span>{format_date(r.requested_date)}</span>
                            </div>
                        </CardAnimated>
                    })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting() {
        assert_eq!(greeting(Some(" Asha ")), "Welcome back, Asha");
        assert_eq!(greeting(Some("")), "Welcome back");
        assert_eq!(greeting(None), "Welcome back");
    }
}
