use super::view_model::EquipmentDetailsViewModel;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::icons::icon;
use contracts::domain::a001_equipment::EquipmentId;
use contracts::domain::a002_team::Team;
use contracts::enums::EquipmentStatus;
use contracts::domain::common::parse_optional_id;
use leptos::prelude::*;

#[component]
pub fn EquipmentDetails(
    id: Option<EquipmentId>,
    /// Teams for the assignment select; may still be loading
    #[prop(into)]
    teams: Signal<Vec<Team>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = EquipmentDetailsViewModel::new();
    vm.load_if_needed(id);

    let team_options = Signal::derive(move || {
        teams
            .get()
            .into_iter()
            .map(|t| (t.id.to_string(), t.name))
            .collect::<Vec<_>>()
    });
    let status_options = Signal::derive(|| {
        EquipmentStatus::all()
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
                id="equipment-name"
                required=true
                value=Signal::derive(move || vm.form.with(|f| f.name.clone()))
                on_input=Callback::new(move |v: String| vm.form.update(|f| f.name = v))
                placeholder="e.g. Server Rack"
                error=vm.field_error("name")
            />
            <div class="form__row">
                <Input
                    label="Type"
                    id="equipment-type"
                    required=true
                    value=Signal::derive(move || vm.form.with(|f| f.equipment_type.clone()))
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.equipment_type = v))
                    placeholder="e.g. Network"
                    error=vm.field_error("type")
                />
                <Input
                    label="Department"
                    id="equipment-department"
                    required=true
                    value=Signal::derive(move || vm.form.with(|f| f.department.clone()))
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.department = v))
                    error=vm.field_error("department")
                />
            </div>
            <div class="form__row">
                <Select
                    label="Assigned Team"
                    id="equipment-team"
                    placeholder="Select team"
                    options=team_options
                    value=Signal::derive(move || {
                        vm.form.with(|f| f.assigned_team_id.map(|id| id.to_string()).unwrap_or_default())
                    })
                    on_change=Callback::new(move |v: String| {
                        vm.form.update(|f| f.assigned_team_id = parse_optional_id(&v))
                    })
                />
                <Select
                    label="Status"
                    id="equipment-status"
                    options=status_options
                    value=Signal::derive(move || vm.form.with(|f| f.status.code().to_string()))
                    on_change=Callback::new(move |v: String| {
                        if let Some(status) = EquipmentStatus::from_code(&v) {
                            vm.form.update(|f| f.status = status);
                        }
                    })
                />
            </div>
            <div class="form__row">
                <DateInput
                    label="Purchase Date"
                    value=Signal::derive(move || vm.form.with(|f| f.purchase_date))
                    on_change=Callback::new(move |d| vm.form.update(|f| f.purchase_date = d))
                />
                <DateInput
                    label="Warranty Expiry"
                    value=Signal::derive(move || vm.form.with(|f| f.warranty_expiry))
                    on_change=Callback::new(move |d| vm.form.update(|f| f.warranty_expiry = d))
                    error=vm.field_error("warranty_expiry")
                />
            </div>

            <div class="details-actions">
                <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                    {icon("x")}
                    "Cancel"
                </Button>
                <Button button_type="submit" disabled=Signal::derive(move || vm.saving.get())>
                    {icon("check")}
                    {move || if vm.is_edit_mode() { "Update Equipment" } else { "Save Equipment" }}
                </Button>
            </div>
        </form>
    }
}
