use super::view_model::RequestDetailsViewModel;
use crate::shared::components::ui::{Button, Select, Textarea};
use crate::shared::icons::icon;
use contracts::domain::a001_equipment::Equipment;
use contracts::domain::a002_team::Team;
use contracts::domain::a004_maintenance_request::RequestId;
use contracts::enums::{Priority, RequestStatus, RequestType};
use contracts::domain::common::parse_optional_id;
use leptos::prelude::*;

fn enum_options<T>(all: Vec<T>, code: fn(&T) -> &'static str, label: fn(&T) -> &'static str) -> Vec<(String, String)> {
    all.iter()
        .map(|v| (code(v).to_string(), label(v).to_string()))
        .collect()
}

#[component]
pub fn RequestDetails(
    id: Option<RequestId>,
    #[prop(into)] equipment: Signal<Vec<Equipment>>,
    #[prop(into)] teams: Signal<Vec<Team>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = RequestDetailsViewModel::new();
    vm.load_if_needed(id);
    vm.load_technicians(None);

    let equipment_options = Signal::derive(move || {
        equipment
            .get()
            .iter()
            .map(|e| (e.id.to_string(), e.select_label()))
            .collect::<Vec<_>>()
    });
    let team_options = Signal::derive(move || {
        teams
            .get()
            .into_iter()
            .map(|t| (t.id.to_string(), t.name))
            .collect::<Vec<_>>()
    });
    let technician_options = Signal::derive(move || {
        vm.technicians
            .get()
            .into_iter()
            .map(|t| (t.id.to_string(), t.name))
            .collect::<Vec<_>>()
    });
    let type_options = Signal::derive(|| enum_options(RequestType::all(), RequestType::code, RequestType::display_name));
    let priority_options = Signal::derive(|| enum_options(Priority::all(), Priority::code, Priority::display_name));
    let status_options = Signal::derive(|| enum_options(RequestStatus::all(), RequestStatus::code, RequestStatus::display_name));

    view! {
        <form class="details-form" on:submit=move |ev| {
            ev.prevent_default();
            vm.save_command(on_saved);
        }>
            {move || vm.error.get().map(|e| view! { <div class="form__error">{e}</div> })}

            <Select
                label="Equipment"
                id="request-equipment"
                placeholder="Select Equipment"
                options=equipment_options
                value=Signal::derive(move || {
                    vm.form.with(|f| f.equipment_id.map(|id| id.to_string()).unwrap_or_default())
                })
                on_change=Callback::new(move |v: String| vm.form.update(|f| f.equipment_id = parse_optional_id(&v)))
                error=vm.field_error("equipment_id")
            />
            <div class="form__row">
                <Select
                    label="Type"
                    id="request-type"
                    options=type_options
                    value=Signal::derive(move || vm.form.with(|f| f.request_type.code().to_string()))
                    on_change=Callback::new(move |v: String| {
                        if let Some(kind) = RequestType::from_code(&v) {
                            vm.form.update(|f| f.request_type = kind);
                        }
                    })
                />
                <Select
                    label="Priority"
                    id="request-priority"
                    options=priority_options
                    value=Signal::derive(move || vm.form.with(|f| f.priority.code().to_string()))
                    on_change=Callback::new(move |v: String| {
                        if let Some(priority) = Priority::from_code(&v) {
                            vm.form.update(|f| f.priority = priority);
                        }
                    })
                />
                <Select
                    label="Status"
                    id="request-status"
                    options=status_options
                    value=Signal::derive(move || vm.form.with(|f| f.status.code().to_string()))
                    on_change=Callback::new(move |v: String| {
                        if let Some(status) = RequestStatus::from_code(&v) {
                            vm.form.update(|f| f.status = status);
                        }
                    })
                />
            </div>
            <Textarea
                label="Description"
                id="request-description"
                rows=3
                value=Signal::derive(move || vm.form.with(|f| f.description.clone()))
                on_input=Callback::new(move |v: String| vm.form.update(|f| f.description = v))
                error=vm.field_error("description")
            />
            <Textarea
                label="Notes"
                id="request-notes"
                rows=2
                value=Signal::derive(move || vm.form.with(|f| f.notes.clone()))
                on_input=Callback::new(move |v: String| vm.form.update(|f| f.notes = v))
                error=vm.field_error("notes")
            />
            <div class="form__row">
                <Select
                    label="Assigned Team"
                    id="request-team"
                    placeholder="Auto (based on equipment)"
                    options=team_options
                    value=Signal::derive(move || {
                        vm.form.with(|f| f.assigned_team_id.map(|id| id.to_string()).unwrap_or_default())
                    })
                    on_change=Callback::new(move |v: String| vm.set_team(parse_optional_id(&v)))
                />
                <Select
                    label="Assigned Technician"
                    id="request-technician"
                    placeholder="Unassigned"
                    options=technician_options
                    value=Signal::derive(move || {
                        vm.form.with(|f| f.assigned_technician_id.map(|id| id.to_string()).unwrap_or_default())
                    })
                    on_change=Callback::new(move |v: String| {
                        vm.form.update(|f| f.assigned_technician_id = parse_optional_id(&v))
                    })
                />
            </div>

            <div class="details-actions">
                <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                    "Cancel"
                </Button>
                <Button button_type="submit" disabled=Signal::derive(move || vm.saving.get())>
                    {icon("check")}
                    {move || if vm.is_edit_mode() { "Update Request" } else { "Create Request" }}
                </Button>
            </div>
        </form>
    }
}
