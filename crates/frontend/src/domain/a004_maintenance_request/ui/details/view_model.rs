use contracts::domain::a003_technician::Technician;
use contracts::domain::a004_maintenance_request::{MaintenanceRequestDto, RequestId};
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a003_technician::api as technician_api;
use crate::domain::a004_maintenance_request::api;
use crate::shared::api::client;
use crate::shared::notifications::NotificationService;
use crate::shared::state::{FormTarget, LatestLoad};

#[derive(Clone, Copy)]
pub struct RequestDetailsViewModel {
    pub form: RwSignal<MaintenanceRequestDto>,
    pub errors: RwSignal<ValidationErrors>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    /// Technicians offered for assignment; narrowed to the chosen team
    pub technicians: RwSignal<Vec<Technician>>,
    technicians_load: LatestLoad,
    notifications: Option<NotificationService>,
}

impl RequestDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(MaintenanceRequestDto::default()),
            errors: RwSignal::new(ValidationErrors::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            technicians: RwSignal::new(Vec::new()),
            technicians_load: LatestLoad::new("technician options"),
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

    pub fn load_if_needed(&self, id: Option<RequestId>) {
        let Some(id) = id else { return };
        let (form, error) = (self.form, self.error);
        spawn_local(async move {
            match api::fetch_by_id(&client(), id).await {
                Ok(request) => form.set(request.to_dto()),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    }

    /// Reload the technician options for `team_id` (all technicians when `None`).
    pub fn load_technicians(&self, team_id: Option<i64>) {
        let technicians = self.technicians;
        self.technicians_load.spawn(
            async move {
                let client = client();
                match team_id {
                    Some(team_id) => technician_api::fetch_by_team(&client, team_id).await,
                    None => technician_api::fetch_all(&client).await,
                }
            },
            move |result| match result {
                Ok(list) => technicians.set(list),
                Err(e) => log::warn!("technicians for request form: {}", e),
            },
        );
    }

    /// Change the team override; a technician from another team is dropped.
    pub fn set_team(&self, team_id: Option<i64>) {
        let technicians = self.technicians.get_untracked();
        self.form.update(|f| {
            f.assigned_team_id = team_id;
            if let (Some(team), Some(tech)) = (team_id, f.assigned_technician_id) {
                let same_team = technicians
                    .iter()
                    .any(|t| t.id == tech && t.team_id == Some(team));
                if !same_team {
                    f.assigned_technician_id = None;
                }
            }
        });
        self.load_technicians(team_id);
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
                        n.success(target.saved_message("Request"));
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

impl Default for RequestDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
