use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::common::{dates, AggregateRoot};
use crate::enums::{Frequency, ScheduleStatus};
use crate::shared::validation::{ValidationErrors, ValidationRules};

pub type ScheduleId = i64;

/// Window of the "due this week" counter, inclusive of today
pub const DUE_SOON_DAYS: i64 = 7;

// ============================================================================
// Aggregate Root
// ============================================================================

/// Recurring preventive maintenance task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreventiveSchedule {
    pub id: ScheduleId,
    #[serde(default)]
    pub equipment_id: Option<i64>,
    #[serde(default)]
    pub equipment_name: String,
    pub task_name: String,
    #[serde(default)]
    pub frequency: Frequency,
    #[serde(default, with = "dates")]
    pub last_completed: Option<NaiveDate>,
    #[serde(default, with = "dates")]
    pub next_due: Option<NaiveDate>,
    /// Computed by the server at read time
    #[serde(default)]
    pub is_overdue: bool,
    #[serde(default)]
    pub status: ScheduleStatus,
}

impl PreventiveSchedule {
    pub fn is_completed(&self) -> bool {
        self.status == ScheduleStatus::Completed
    }

    /// Overdue and still open
    pub fn counts_as_overdue(&self) -> bool {
        self.is_overdue && !self.is_completed()
    }

    pub fn due_within(&self, today: NaiveDate, days: i64) -> bool {
        match self.next_due {
            Some(due) => !self.is_completed() && due >= today && due <= today + Duration::days(days),
            None => false,
        }
    }

    /// Days from `today` until due; negative when late.
    pub fn days_until_due(&self, today: NaiveDate) -> Option<i64> {
        self.next_due.map(|due| (due - today).num_days())
    }

    pub fn to_dto(&self) -> PreventiveScheduleDto {
        PreventiveScheduleDto {
            id: Some(self.id),
            equipment_id: self.equipment_id,
            task_name: self.task_name.clone(),
            frequency: self.frequency,
            next_due: self.next_due,
            last_completed: self.last_completed,
        }
    }
}

impl AggregateRoot for PreventiveSchedule {
    type Id = ScheduleId;

    fn id(&self) -> Option<Self::Id> {
        Some(self.id)
    }

    fn display_name(&self) -> String {
        self.task_name.clone()
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "preventive-schedules"
    }

    fn element_name() -> &'static str {
        "Preventive Schedule"
    }

    fn list_name() -> &'static str {
        "Preventive Maintenance"
    }
}

// ============================================================================
// Stats
// ============================================================================

/// Counters above the schedule table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScheduleStats {
    pub total: usize,
    pub overdue: usize,
    pub due_this_week: usize,
}

impl ScheduleStats {
    pub fn compute(schedules: &[PreventiveSchedule], today: NaiveDate) -> Self {
        Self {
            total: schedules.len(),
            overdue: schedules.iter().filter(|s| s.counts_as_overdue()).count(),
            due_this_week: schedules
                .iter()
                .filter(|s| s.due_within(today, DUE_SOON_DAYS))
                .count(),
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreventiveScheduleDto {
    #[serde(skip_serializing, default)]
    pub id: Option<ScheduleId>,
    pub equipment_id: Option<i64>,
    pub task_name: String,
    pub frequency: Frequency,
    #[serde(default, with = "dates")]
    pub next_due: Option<NaiveDate>,
    #[serde(default, with = "dates")]
    pub last_completed: Option<NaiveDate>,
}

impl PreventiveScheduleDto {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.equipment_id.is_none() {
            errors.push("equipment_id", "Please select equipment");
        }
        errors.check(
            "task_name",
            "Task name",
            &self.task_name,
            ValidationRules::required().trimmed().max_length(200),
        );
        if self.next_due.is_none() {
            errors.push("next_due", "Next due date is required");
        }
        errors.into_result()
    }

    /// Due date suggested from the last completion and the frequency.
    pub fn suggested_next_due(&self) -> Option<NaiveDate> {
        self.last_completed
            .map(|done| self.frequency.next_due_after(done))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn schedule(id: i64, next_due: Option<NaiveDate>, overdue: bool, status: &str) -> PreventiveSchedule {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "task_name": "Inspect",
            "frequency": "weekly",
            "next_due": next_due.map(|d| d.to_string()),
            "is_overdue": overdue,
            "status": status,
        }))
        .unwrap()
    }

    #[test]
    fn test_stats() {
        let today = day(2025, 6, 10);
        let schedules = vec![
            schedule(1, Some(day(2025, 6, 1)), true, "overdue"),
            schedule(2, Some(day(2025, 6, 1)), true, "completed"),
            schedule(3, Some(day(2025, 6, 10)), false, "scheduled"),
            schedule(4, Some(day(2025, 6, 17)), false, "scheduled"),
            schedule(5, Some(day(2025, 6, 18)), false, "scheduled"),
            schedule(6, Some(day(2025, 6, 12)), false, "completed"),
            schedule(7, None, false, "scheduled"),
        ];
        let stats = ScheduleStats::compute(&schedules, today);
        assert_eq!(stats.total, 7);
        assert_eq!(stats.overdue, 1);
        assert_eq!(stats.due_this_week, 2);
    }

    #[test]
    fn test_days_until_due() {
        let s = schedule(1, Some(day(2025, 6, 1)), true, "overdue");
        assert_eq!(s.days_until_due(day(2025, 6, 4)), Some(-3));
    }

    #[test]
    fn test_dto_suggests_next_due() {
        let dto = PreventiveScheduleDto {
            frequency: Frequency::Quarterly,
            last_completed: Some(day(2025, 1, 1)),
            ..Default::default()
        };
        assert_eq!(dto.suggested_next_due(), Some(day(2025, 4, 1)));
        let errors = dto.validate().unwrap_err();
        assert!(errors.get("next_due").is_some());
        assert!(errors.get("task_name").is_some());
    }
}
