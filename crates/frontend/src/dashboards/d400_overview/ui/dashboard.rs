use std::future::Future;

use contracts::dashboards::d400_overview::{
    CriticalAlert, DashboardOverview, RecentActivity, StatusSlice, TeamPerformance, TrendPoint,
    UpcomingTask,
};
use contracts::shared::badge::BadgeClass;
use leptos::prelude::*;

use super::panels::{
    ActivitiesPanel, AlertsPanel, StatusDistribution, TeamPerformancePanel, TrendPanel,
    UpcomingTasksPanel,
};
use crate::dashboards::d400_overview::api;
use crate::shared::api::{client, ApiError};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::Button;
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::state::LatestLoad;

/// Fill one panel; a failed panel shows as empty and only logs.
fn load_panel<T, Fut>(loader: LatestLoad, target: RwSignal<Option<Vec<T>>>, fetch: Fut)
where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    target.set(None);
    loader.spawn(fetch, move |result| {
        let rows = result.unwrap_or_else(|e| {
            log::error!("dashboard {} failed: {}", loader.name(), e);
            Vec::new()
        });
        target.set(Some(rows));
    });
}

#[component]
#[allow(non_snake_case)]
pub fn OverviewDashboard() -> impl IntoView {
    let notifications = use_notifications();
    let trend_days = config().dashboard.trend_days;

    let overview = RwSignal::new(None::<DashboardOverview>);
    let distribution = RwSignal::new(None::<Vec<StatusSlice>>);
    let performance = RwSignal::new(None::<Vec<TeamPerformance>>);
    let alerts = RwSignal::new(None::<Vec<CriticalAlert>>);
    let upcoming = RwSignal::new(None::<Vec<UpcomingTask>>);
    let activities = RwSignal::new(None::<Vec<RecentActivity>>);
    let trends = RwSignal::new(None::<Vec<TrendPoint>>);

    let overview_load = LatestLoad::new("dashboard overview");
    let distribution_load = LatestLoad::new("status distribution");
    let performance_load = LatestLoad::new("team performance");
    let alerts_load = LatestLoad::new("critical alerts");
    let upcoming_load = LatestLoad::new("upcoming tasks");
    let activities_load = LatestLoad::new("recent activities");
    let trends_load = LatestLoad::new("request trends");

    let reload = move || {
        overview.set(None);
        overview_load.spawn(
            async move { api::overview(&client()).await },
            move |result| match result {
                Ok(data) => overview.set(Some(data)),
                Err(e) => {
                    log::error!("dashboard overview failed: {}", e);
                    notifications.error("Failed to load dashboard data");
                }
            },
        );
        load_panel(distribution_load, distribution, async move {
            api::status_distribution(&client()).await
        });
        load_panel(performance_load, performance, async move {
            api::team_performance(&client()).await
        });
        load_panel(alerts_load, alerts, async move { api::alerts(&client()).await });
        load_panel(upcoming_load, upcoming, async move {
            api::upcoming_preventive(&client()).await
        });
        load_panel(activities_load, activities, async move {
            api::activities(&client()).await
        });
        load_panel(trends_load, trends, async move {
            api::request_trends(&client(), trend_days).await
        });
    };

    reload();

    let stat = move |pick: fn(&DashboardOverview) -> u32| {
        Signal::derive(move || overview.with(|o| o.as_ref().map(pick)))
    };
    let operational = Signal::derive(move || {
        overview.with(|o| {
            o.as_ref()
                .map(|o| format!("{:.0}% operational", o.equipment.operational_percentage))
        })
    });

    view! {
        <div class="page dashboard">
            <PageHeader title="Dashboard" subtitle="Maintenance overview">
                <Button variant="secondary" on_click=Callback::new(move |_| reload())>
                    {icon("refresh")}
                    "Refresh"
                </Button>
            </PageHeader>

            <div class="stat-grid">
                <StatCard label="Total Equipment" icon_name="server" value=stat(|o| o.equipment.total) subtitle=operational />
                <StatCard label="Open Requests" icon_name="inbox" value=stat(|o| o.requests.open) tone=BadgeClass::Info />
                <StatCard label="Overdue Schedules" icon_name="alert" value=stat(|o| o.schedules.overdue) tone=BadgeClass::Danger />
                <StatCard label="Active Technicians" icon_name="users" value=stat(|o| o.technicians.active) tone=BadgeClass::Success />
            </div>

            <div class="dashboard-grid">
                <StatusDistribution slices=distribution />
                <TeamPerformancePanel teams=performance />
                <AlertsPanel alerts=alerts />
                <UpcomingTasksPanel tasks=upcoming />
                <ActivitiesPanel activities=activities />
                <TrendPanel points=trends days=trend_days />
            </div>
        </div>
    }
}
