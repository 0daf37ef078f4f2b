use super::view_model::TeamDetailsViewModel;
use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::icons::icon;
use contracts::domain::a002_team::TeamId;
use leptos::prelude::*;

#[component]
pub fn TeamDetails(
    id: Option<TeamId>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = TeamDetailsViewModel::new();
    vm.load_if_needed(id);

    view! {
        <form class="details-form" on:submit=move |ev| {
            ev.prevent_default();
            vm.save_command(on_saved);
        }>
            {move || vm.error.get().map(|e| view! { <div class="form__error">{e}</div> })}

            <Input
                label="Team Name"
                id="team-name"
                required=true
                value=Signal::derive(move || vm.form.with(|f| f.name.clone()))
                on_input=Callback::new(move |v: String| vm.form.update(|f| f.name = v))
                placeholder="e.g. Network Team"
                error=vm.field_error("name")
            />
            <Input
                label="Department"
                id="team-department"
                required=true
                value=Signal::derive(move || vm.form.with(|f| f.department.clone()))
                on_input=Callback::new(move |v: String| vm.form.update(|f| f.department = v))
                error=vm.field_error("department")
            />
            <Textarea
                label="Specialization"
                id="team-specialization"
                rows=3
                value=Signal::derive(move || vm.form.with(|f| f.specialization.clone()))
                on_input=Callback::new(move |v: String| vm.form.update(|f| f.specialization = v))
                placeholder="What this team services"
                error=vm.field_error("specialization")
            />

            <div class="details-actions">
                <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                    "Cancel"
                </Button>
                <Button button_type="submit" disabled=Signal::derive(move || vm.saving.get())>
                    {icon("check")}
                    {move || if vm.is_edit_mode() { "Update Team" } else { "Create Team" }}
                </Button>
            </div>
        </form>
    }
}
