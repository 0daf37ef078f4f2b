use contracts::domain::a001_equipment::{Equipment, EquipmentDto, EquipmentId};
use contracts::domain::common::AggregateRoot;
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_equipment::api;
use crate::shared::api::client;
use crate::shared::notifications::NotificationService;
use crate::shared::state::FormTarget;

/// ViewModel for the equipment form
#[derive(Clone, Copy)]
pub struct EquipmentDetailsViewModel {
    pub form: RwSignal<EquipmentDto>,
    pub errors: RwSignal<ValidationErrors>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    notifications: Option<NotificationService>,
}

impl EquipmentDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(EquipmentDto::default()),
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

    pub fn load_if_needed(&self, id: Option<EquipmentId>) {
        let Some(id) = id else {
            return;
        };
        let form = self.form;
        let error = self.error;
        spawn_local(async move {
            match api::fetch_by_id(&client(), id).await {
                Ok(equipment) => form.set(equipment.to_dto()),
                Err(e) => error.set(Some(e.user_message())),
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
                        n.success(target.saved_message(Equipment::element_name()));
                    }
                    on_saved.run(());
                }
                Err(e) => {
                    log::warn!("equipment save failed: {}", e);
                    error.set(Some(e.user_message()));
                    if let Some(n) = notifications {
                        n.api_error(&e);
                    }
                }
            }
        });
    }
}

impl Default for EquipmentDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
