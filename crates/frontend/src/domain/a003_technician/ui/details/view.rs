use super::view_model::TechnicianDetailsViewModel;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::icons::icon;
use contracts::domain::a002_team::Team;
use contracts::domain::a003_technician::{TechnicianId, DEFAULT_SKILL_LEVEL};
use contracts::enums::TechnicianStatus;
use contracts::domain::common::parse_optional_id;
use leptos::prelude::*;

#[component]
pub fn TechnicianDetails(
    id: Option<TechnicianId>,
    #[prop(into)] teams: Signal<Vec<Team>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = TechnicianDetailsViewModel::new();
    vm.load_if_needed(id);

    let team_options = Signal::derive(move || {
        teams
            .get()
            .into_iter()
            .map(|t| (t.id.to_string(), t.name))
            .collect::<Vec<_>>()
    });
    let status_options = Signal::derive(|| {
        TechnicianStatus::all()
            .into_iter()
            .map(|s| (s.code().to_string(), s.display_name().to_string()))
            .collect::<Vec<_>>()
    });

    view! {
        <form class="details-form" on:submit=move |ev| {
            ev.prevent_default();
            vm.save_command(on_saved);
        }>
            {move || vm.error.get().map(|e| view! { <div class="form__error">{e}</div> })}

            <Input
                label="Name"
                id="technician-name"
                required=true
                value=Signal::derive(move || vm.form.with(|f| f.name.clone()))
                on_input=Callback::new(move |v: String| vm.form.update(|f| f.name = v))
                error=vm.field_error("name")
            />
            <div class="form__row">
                <Input
                    label="Email"
                    id="technician-email"
                    input_type="email"
                    required=true
                    value=Signal::derive(move || vm.form.with(|f| f.email.clone()))
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.email = v))
                    error=vm.field_error("email")
                />
                <Input
                    label="Phone"
                    id="technician-phone"
                    input_type="tel"
                    value=Signal::derive(move || vm.form.with(|f| f.phone.clone()))
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.phone = v))
                    error=vm.field_error("phone")
                />
            </div>
            <div class="form__row">
                <Select
                    label="Team"
                    id="technician-team"
                    placeholder="Select team"
                    options=team_options
                    value=Signal::derive(move || {
                        vm.form.with(|f| f.team_id.map(|id| id.to_string()).unwrap_or_default())
                    })
                    on_change=Callback::new(move |v: String| vm.form.update(|f| f.team_id = parse_optional_id(&v)))
                    error=vm.field_error("team_id")
                />
                <Input
                    label="Skill Level"
                    id="technician-skill"
                    value=Signal::derive(move || vm.form.with(|f| f.skill_level.clone()))
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.skill_level = v))
                    placeholder=DEFAULT_SKILL_LEVEL
                />
                <Select
                    label="Status"
                    id="technician-status"
                    options=status_options
                    value=Signal::derive(move || vm.form.with(|f| f.status.code().to_string()))
                    on_change=Callback::new(move |v: String| {
                        if let Some(status) = TechnicianStatus::from_code(&v) {
                            vm.form.update(|f| f.status = status);
                        }
                    })
                />
            </div>

            <div class="details-actions">
                <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                    "Cancel"
                </Button>
                <Button button_type="submit" disabled=Signal::derive(move || vm.saving.get())>
                    {icon("check")}
                    {move || if vm.is_edit_mode() { "Update Technician" } else { "Save Technician" }}
                </Button>
            </div>
        </form>
    }
}
