use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a004_maintenance_request::RequestStatistics;
use crate::domain::common::dates;

/// Alerts shown in the critical panel
pub const MAX_ALERTS: usize = 5;

/// Equipment counters (`GET /equipment/statistics`, and the `equipment`
/// block of the overview)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquipmentStatistics {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub by_status: BTreeMap<String, u32>,
    #[serde(default)]
    pub operational_percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleCounters {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub overdue: u32,
    #[serde(default)]
    pub due_this_week: u32,
    #[serde(default)]
    pub scheduled: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamCounters {
    #[serde(default)]
    pub total: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnicianCounters {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub active: u32,
}

/// `GET /dashboard/overview`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardOverview {
    #[serde(default)]
    pub equipment: EquipmentStatistics,
    #[serde(default)]
    pub requests: RequestStatistics,
    #[serde(default)]
    pub schedules: ScheduleCounters,
    #[serde(default)]
    pub teams: TeamCounters,
    #[serde(default)]
    pub technicians: TechnicianCounters,
}

/// Entry of `GET /dashboard/activities`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentActivity {
    #[serde(rename = "type", default)]
    pub activity_type: String,
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default, with = "dates")]
    pub date: Option<NaiveDate>,
}

/// Entry of `GET /dashboard/alerts`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriticalAlert {
    #[serde(rename = "type", default)]
    pub alert_type: String,
    /// `critical` or `high`
    #[serde(default)]
    pub severity: String,
    pub message: String,
    #[serde(default)]
    pub details: String,
    pub id: i64,
}

/// Entry of `GET /dashboard/teams/performance`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamPerformance {
    pub team_id: i64,
    pub team_name: String,
    #[serde(default)]
    pub total_requests: u32,
    #[serde(default)]
    pub completed: u32,
    #[serde(default)]
    pub open: u32,
    /// Percent, 0..=100
    #[serde(default)]
    pub completion_rate: f64,
    #[serde(default)]
    pub technician_count: u32,
}

/// Entry of `GET /dashboard/equipment/status-distribution`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSlice {
    pub status: String,
    pub count: u32,
    #[serde(default)]
    pub color: String,
}

/// Entry of `GET /dashboard/requests/trends?days=N`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    #[serde(with = "dates")]
    pub date: Option<NaiveDate>,
    pub count: u32,
}

/// Entry of `GET /dashboard/preventive/upcoming`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingTask {
    pub id: i64,
    pub task: String,
    #[serde(default)]
    pub equipment: String,
    #[serde(default, with = "dates")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub days_until: i64,
    #[serde(default)]
    pub status: String,
}

/// Width of each distribution bar in percent. All zero when nothing is counted.
pub fn distribution_percentages(slices: &[StatusSlice]) -> Vec<f64> {
    let total: u32 = slices.iter().map(|s| s.count).sum();
    slices
        .iter()
        .map(|s| {
            if total == 0 {
                0.0
            } else {
                f64::from(s.count) * 100.0 / f64::from(total)
            }
        })
        .collect()
}

/// Highest day count in a trend series, for scaling the bars.
pub fn trend_peak(points: &[TrendPoint]) -> u32 {
    points.iter().map(|p| p.count).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice(status: &str, count: u32) -> StatusSlice {
        StatusSlice {
            status: status.into(),
            count,
            color: String::new(),
        }
    }

    #[test]
    fn test_distribution_percentages() {
        let slices = vec![slice("Operational", 3), slice("Breakdown", 1)];
        assert_eq!(distribution_percentages(&slices), vec![75.0, 25.0]);
    }

    #[test]
    fn test_distribution_zero_total() {
        let slices = vec![slice("Operational", 0), slice("Scrap", 0)];
        assert_eq!(distribution_percentages(&slices), vec![0.0, 0.0]);
        assert!(distribution_percentages(&[]).is_empty());
    }

    #[test]
    fn test_decode_overview() {
        let body = serde_json::json!({
            "equipment": {"total": 10, "by_status": {"operational": 8}, "operational_percentage": 80.0},
            "requests": {"total": 4, "open": 2, "by_status": {"new": 2}, "by_type": {"corrective": 4}},
            "schedules": {"total": 3, "overdue": 1, "due_this_week": 1, "scheduled": 2},
            "teams": {"total": 2},
            "technicians": {"total": 5, "active": 4}
        });
        let overview: DashboardOverview = serde_json::from_value(body).unwrap();
        assert_eq!(overview.requests.open, 2);
        assert_eq!(overview.technicians.active, 4);
        assert_eq!(overview.equipment.by_status.get("operational"), Some(&8));
    }
}
