use super::view_model::{interval_preview, ScheduleDetailsViewModel};
use crate::shared::components::date_input::DateInput;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::icons::icon;
use contracts::domain::a001_equipment::Equipment;
use contracts::domain::a005_preventive_schedule::ScheduleId;
use contracts::enums::Frequency;
use contracts::domain::common::parse_optional_id;
use leptos::prelude::*;

#[component]
pub fn ScheduleDetails(
    id: Option<ScheduleId>,
    #[prop(into)] equipment: Signal<Vec<Equipment>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ScheduleDetailsViewModel::new();
    vm.load_if_needed(id);

    let equipment_options = Signal::derive(move || {
        equipment
            .get()
            .into_iter()
            .map(|e| (e.id.to_string(), e.name))
            .collect::<Vec<_>>()
    });
    let frequency_options = Signal::derive(|| {
        Frequency::all()
            .into_iter()
            .map(|f| (f.code().to_string(), f.display_name().to_string()))
            .collect::<Vec<_>>()
    });

    view! {
        <form class="details-form" on:submit=move |ev| {
            ev.prevent_default();
            vm.save_command(on_saved);
        }>
            {move || vm.error.get().map(|e| view! { <div class="form__error">{e}</div> })}

            <Select
                label="Equipment"
                id="schedule-equipment"
                placeholder="Select equipment"
                options=equipment_options
                value=Signal::derive(move || {
                    vm.form.with(|f| f.equipment_id.map(|id| id.to_string()).unwrap_or_default())
                })
                on_change=Callback::new(move |v: String| vm.form.update(|f| f.equipment_id = parse_optional_id(&v)))
                error=vm.field_error("equipment_id")
            />
            <Input
                label="Task Name"
                id="schedule-task"
                required=true
                value=Signal::derive(move || vm.form.with(|f| f.task_name.clone()))
                on_input=Callback::new(move |v: String| vm.form.update(|f| f.task_name = v))
                placeholder="e.g. Replace air filter"
                error=vm.field_error("task_name")
            />
            <Select
                label="Frequency"
                id="schedule-frequency"
                options=frequency_options
                value=Signal::derive(move || vm.form.with(|f| f.frequency.code().to_string()))
                on_change=Callback::new(move |v: String| {
                    if let Some(freq) = Frequency::from_code(&v) {
                        vm.form.update(|f| f.frequency = freq);
                        vm.fill_next_due();
                    }
                })
            />
            <div class="form__hint">{move || vm.form.with(interval_preview)}</div>
            <div class="form__row">
                <DateInput
                    label="Last Completed"
                    value=Signal::derive(move || vm.form.with(|f| f.last_completed))
                    on_change=Callback::new(move |d| {
                        vm.form.update(|f| f.last_completed = d);
                        vm.fill_next_due();
                    })
                />
                <DateInput
                    label="Next Due"
                    value=Signal::derive(move || vm.form.with(|f| f.next_due))
                    on_change=Callback::new(move |d| vm.form.update(|f| f.next_due = d))
                    error=vm.field_error("next_due")
                />
            </div>

            <div class="details-actions">
                <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                    {icon("x")}
                    "Cancel"
                </Button>
                <Button button_type="submit" disabled=Signal::derive(move || vm.saving.get())>
                    {icon("check")}
                    {move || if vm.is_edit_mode() { "Update Schedule" } else { "Save Schedule" }}
                </Button>
            </div>
        </form>
    }
}
