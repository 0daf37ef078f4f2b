//! Cards of the overview dashboard. Each takes its rows as
//! `Signal<Option<Vec<_>>>`, `None` meaning still loading.

use contracts::dashboards::d400_overview::{
    distribution_percentages, trend_peak, CriticalAlert, RecentActivity, StatusSlice,
    TeamPerformance, TrendPoint, UpcomingTask, MAX_ALERTS,
};
use contracts::shared::badge::BadgeClass;
use leptos::prelude::*;
use thaw::Spinner;

use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::ui::{Badge, PriorityBadge, StatusBadge};
use crate::shared::date_utils::{days_label, format_date};
use crate::shared::icons::icon;

/// At most [`MAX_ALERTS`] alerts, in server order.
pub fn visible_alerts(alerts: &[CriticalAlert]) -> &[CriticalAlert] {
    &alerts[..alerts.len().min(MAX_ALERTS)]
}

pub fn severity_class(severity: &str) -> BadgeClass {
    match severity.trim().to_ascii_lowercase().as_str() {
        "critical" => BadgeClass::Danger,
        "high" => BadgeClass::Warning,
        _ => BadgeClass::Info,
    }
}

/// Bar heights in percent of the busiest day.
pub fn trend_heights(points: &[TrendPoint]) -> Vec<f64> {
    let peak = trend_peak(points);
    points
        .iter()
        .map(|p| {
            if peak == 0 {
                0.0
            } else {
                f64::from(p.count) * 100.0 / f64::from(peak)
            }
        })
        .collect()
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

fn body<T, V>(
    rows: Signal<Option<Vec<T>>>,
    empty: &'static str,
    render: impl Fn(Vec<T>) -> V + Send + Sync + 'static,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    V: IntoView + 'static,
{
    move || match rows.get() {
        None => view! { <div class="list-loading"><Spinner /></div> }.into_any(),
        Some(list) if list.is_empty() => view! { <p class="empty-state">{empty}</p> }.into_any(),
        Some(list) => render(list).into_any(),
    }
}

#[component]
fn PanelCard(
    #[prop(into)] title: String,
    #[prop(into)] icon_name: String,
    delay_ms: u32,
    children: Children,
) -> impl IntoView {
    view! {
        <CardAnimated delay_ms=delay_ms class="dashboard-panel">
            <div class="dashboard-panel__title">
                {icon(&icon_name)}
                <span>{title}</span>
            </div>
            {children()}
        </CardAnimated>
    }
}

#[component]
pub fn StatusDistribution(#[prop(into)] slices: Signal<Option<Vec<StatusSlice>>>) -> impl IntoView {
    view! {
        <PanelCard title="Equipment Status" icon_name="pie" delay_ms=0>
            {body(slices, "No equipment data available", |list: Vec<StatusSlice>| {
                let widths = distribution_percentages(&list);
                list.into_iter()
                    .zip(widths)
                    .map(|(slice, width)| {
                        let style = format!("width: {:.1}%; background-color: {};", width, slice.color);
                        view! {
                            <div class="chart-bar">
                                <span class="chart-bar__label">{slice.status}</span>
                                <div class="chart-bar__track">
                                    <div class="chart-bar__fill" style=style></div>
                                </div>
                                <span class="chart-bar__value">{slice.count}</span>
                            </div>
                        }
                    })
                    .collect_view()
            })}
        </PanelCard>
    }
}

#[component]
pub fn TeamPerformancePanel(#[prop(into)] teams: Signal<Option<Vec<TeamPerformance>>>) -> impl IntoView {
    view! {
        <PanelCard title="Team Performance" icon_name="users" delay_ms=60>
            {body(teams, "No team data available", |list: Vec<TeamPerformance>| {
                list.into_iter()
                    .map(|team| {
                        let style = format!("width: {:.1}%;", clamp_percent(team.completion_rate));
                        view! {
                            <div class="performance-item">
                                <div class="performance-item__header">
                                    <span class="performance-item__name">{team.team_name}</span>
                                    <span class="performance-item__rate">{format!("{:.0}%", team.completion_rate)}</span>
                                </div>
                                <div class="performance-item__bar">
                                    <div class="performance-item__fill" style=style></div>
                                </div>
                                <div class="performance-item__details">
                                    <span>{format!("Total: {}", team.total_requests)}</span>
                                    <span>{format!("Completed: {}", team.completed)}</span>
                                    <span>{format!("Open: {}", team.open)}</span>
                                    <span>{format!("Technicians: {}", team.technician_count)}</span>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
            })}
        </PanelCard>
    }
}

#[component]
pub fn AlertsPanel(#[prop(into)] alerts: Signal<Option<Vec<CriticalAlert>>>) -> impl IntoView {
    view! {
        <PanelCard title="Critical Alerts" icon_name="alert" delay_ms=120>
            {body(alerts, "No critical alerts", |list: Vec<CriticalAlert>| {
                visible_alerts(&list)
                    .iter()
                    .cloned()
                    .map(|alert| {
                        let class = severity_class(&alert.severity);
                        view! {
                            <div class=format!("alert-item alert-item--{}", class.tone())>
                                <div class="alert-item__message">
                                    <Badge class=class text=alert.severity.clone() />
                                    <span>{alert.message}</span>
                                </div>
                                <div class="alert-item__details">{alert.details}</div>
                            </div>
                        }
                    })
                    .collect_view()
            })}
        </PanelCard>
    }
}

#[component]
pub fn UpcomingTasksPanel(#[prop(into)] tasks: Signal<Option<Vec<UpcomingTask>>>) -> impl IntoView {
    view! {
        <PanelCard title="Upcoming Preventive Tasks" icon_name="calendar" delay_ms=180>
            {body(tasks, "No upcoming tasks", |list: Vec<UpcomingTask>| {
                list.into_iter()
                    .map(|task| view! {
                        <div class="task-item">
                            <div class="task-item__info">
                                <div class="task-item__name">{task.task}</div>
                                <div class="task-item__equipment">{task.equipment}</div>
                            </div>
                            <div class="task-item__due">
                                <div>{format_date(task.due_date)}</div>
                                <div class="task-item__days">{days_label(task.days_until)}</div>
                            </div>
                        </div>
                    })
                    .collect_view()
            })}
        </PanelCard>
    }
}

#[component]
pub fn ActivitiesPanel(#[prop(into)] activities: Signal<Option<Vec<RecentActivity>>>) -> impl IntoView {
    view! {
        <PanelCard title="Recent Activities" icon_name="activity" delay_ms=240>
            {body(activities, "No recent activities", |list: Vec<RecentActivity>| {
                list.into_iter()
                    .map(|activity| view! {
                        <div class="activity-item">
                            <div class="activity-item__icon">{icon("clipboard")}</div>
                            <div class="activity-item__content">
                                <div class="activity-item__title">{activity.title}</div>
                                <div class="activity-item__meta">
                                    <StatusBadge status=activity.status />
                                    <PriorityBadge priority=activity.priority />
                                    <span>{format_date(activity.date)}</span>
                                </div>
                            </div>
                        </div>
                    })
                    .collect_view()
            })}
        </PanelCard>
    }
}

#[component]
pub fn TrendPanel(
    #[prop(into)] points: Signal<Option<Vec<TrendPoint>>>,
    days: u32,
) -> impl IntoView {
    view! {
        <PanelCard title=format!("Requests, last {} days", days) icon_name="trending" delay_ms=300>
            {body(points, "No requests in this period", |list: Vec<TrendPoint>| {
                let heights = trend_heights(&list);
                view! {
                    <div class="trend-chart">
                        {list.into_iter()
                            .zip(heights)
                            .map(|(point, height)| {
                                let style = format!("height: {:.1}%;", height);
                                let title = format!("{}: {}", format_date(point.date), point.count);
                                view! { <div class="trend-chart__bar" style=style title=title></div> }
                            })
                            .collect_view()}
                    </div>
                }
            })}
        </PanelCard>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn alert(id: i64, severity: &str) -> CriticalAlert {
        CriticalAlert {
            alert_type: "request".into(),
            severity: severity.into(),
            message: format!("Alert {}", id),
            details: String::new(),
            id,
        }
    }

    #[test]
    fn test_alerts_capped() {
        let alerts: Vec<_> = (1..=8).map(|i| alert(i, "high")).collect();
        let shown = visible_alerts(&alerts);
        assert_eq!(shown.len(), MAX_ALERTS);
        assert_eq!(shown[0].id, 1);
        assert_eq!(visible_alerts(&alerts[..2]).len(), 2);
    }

    #[test]
    fn test_severity_class() {
        assert_eq!(severity_class("critical"), BadgeClass::Danger);
        assert_eq!(severity_class("High"), BadgeClass::Warning);
        assert_eq!(severity_class("low"), BadgeClass::Info);
    }

    #[test]
    fn test_trend_heights() {
        let point = |d: u32, count: u32| TrendPoint {
            date: NaiveDate::from_ymd_opt(2025, 6, d),
            count,
        };
        assert_eq!(trend_heights(&[point(1, 2), point(2, 4), point(3, 0)]), vec![50.0, 100.0, 0.0]);
        assert_eq!(trend_heights(&[point(1, 0)]), vec![0.0]);
    }
}
