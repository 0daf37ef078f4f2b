use contracts::domain::a005_preventive_schedule::{
    PreventiveSchedule, PreventiveScheduleDto, ScheduleId,
};
use contracts::domain::common::AggregateRoot;
use contracts::enums::Frequency;
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a005_preventive_schedule::api;
use crate::shared::api::client;
use crate::shared::date_utils::format_date;
use crate::shared::notifications::NotificationService;
use crate::shared::state::FormTarget;

/// Hint under the frequency select: the interval, and the due date it
/// implies when a last completion is known.
pub fn interval_preview(dto: &PreventiveScheduleDto) -> String {
    let every = match dto.frequency {
        Frequency::Daily => "Every day".to_string(),
        f => format!("Every {} days", f.interval_days()),
    };
    match dto.suggested_next_due() {
        Some(due) => format!("{}, next due {}", every, format_date(Some(due))),
        None => every,
    }
}

#[derive(Clone, Copy)]
pub struct ScheduleDetailsViewModel {
    pub form: RwSignal<PreventiveScheduleDto>,
    pub errors: RwSignal<ValidationErrors>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    notifications: Option<NotificationService>,
}

impl ScheduleDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(PreventiveScheduleDto::default()),
            errors: RwSignal::new(ValidationErrors::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            notifications: use_context::<NotificationService>(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn field_error(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    }

    pub fn load_if_needed(&self, id: Option<ScheduleId>) {
        let Some(id) = id else {
            return;
        };
        let form = self.form;
        let error = self.error;
        spawn_local(async move {
            match api::fetch_by_id(&client(), id).await {
                Ok(schedule) => form.set(schedule.to_dto()),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    }

    /// Changing the frequency or the last completion refreshes an empty due date.
    pub fn fill_next_due(&self) {
        self.form.update(|f| {
            if f.next_due.is_none() {
                f.next_due = f.suggested_next_due();
            }
        });
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        if let Err(errors) = current.validate() {
            self.errors.set(errors);
            return;
        }
        self.errors.set(ValidationErrors::new());

        let target = FormTarget::from(current.id);
        let error = self.error;
        let saving = self.saving;
        let notifications = self.notifications;
        saving.set(true);
        spawn_local(async move {
            let result = api::save(&client(), &current).await;
            saving.set(false);
            match result {
                Ok(()) => {
                    if let Some(n) = notifications {
                        n.success(target.saved_message("Schedule"));
                    }
                    on_saved.run(());
                }
                Err(e) => {
                    log::warn!(
                        "{} save failed: {}",
                        PreventiveSchedule::element_name(),
                        e
                    );
                    error.set(Some(e.user_message()));
                    if let Some(n) = notifications {
                        n.api_error(&e);
                    }
                }
            }
        });
    }
}

impl Default for ScheduleDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_interval_preview() {
        let mut dto = PreventiveScheduleDto {
            frequency: Frequency::Weekly,
            ..Default::default()
        };
        assert_eq!(interval_preview(&dto), "Every 7 days");

        dto.frequency = Frequency::Daily;
        assert_eq!(interval_preview(&dto), "Every day");

        dto.frequency = Frequency::Monthly;
        dto.last_completed = NaiveDate::from_ymd_opt(2025, 6, 1);
        assert_eq!(interval_preview(&dto), "Every 30 days, next due Jul 1, 2025");
    }
}
