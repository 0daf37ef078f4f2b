use contracts::domain::a002_team::{Team, TeamDto, TeamId};
use contracts::domain::common::AggregateRoot;
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_team::api;
use crate::shared::api::client;
use crate::shared::notifications::NotificationService;
use crate::shared::state::FormTarget;

#[derive(Clone, Copy)]
pub struct TeamDetailsViewModel {
    pub form: RwSignal<TeamDto>,
    pub errors: RwSignal<ValidationErrors>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    notifications: Option<NotificationService>,
}

impl TeamDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(TeamDto::default()),
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

    pub fn load_if_needed(&self, id: Option<TeamId>) {
        if let Some(id) = id {
            let form = self.form;
            let error = self.error;
            spawn_local(async move {
                match api::fetch_by_id(&client(), id).await {
                    Ok(team) => form.set(team.to_dto()),
                    Err(e) => error.set(Some(e.user_message())),
                }
            });
        }
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        if let Err(errors) = current.validate() {
            self.errors.set(errors);
            return;
        }
        self.errors.set(ValidationErrors::new());

        let target = FormTarget::from(current.id);
        let (error, saving, notifications) = (self.error, self.saving, self.notifications);
        saving.set(true);
        spawn_local(async move {
            let result = api::save(&client(), &current).await;
            saving.set(false);
            match result {
                Ok(()) => {
                    if let Some(n) = notifications {
                        n.success(target.saved_message(Team::element_name()));
                    }
                    on_saved.run(());
                }
                Err(e) => {
                    error.set(Some(e.user_message()));
                    if let Some(n) = notifications {
                        n.api_error(&e);
                    }
                }
            }
        });
    }
}

impl Default for TeamDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
