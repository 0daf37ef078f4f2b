//! Employee request submission with automatic team routing.

use crate::domain::a004_maintenance_request::api;
use crate::shared::api::client;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, Input, Select, Textarea};
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::system::auth::context::{current_user, use_auth};
use contracts::domain::a004_maintenance_request::SubmitRequestDto;
use contracts::enums::Priority;
use contracts::shared::team_routing::{EquipmentChoice, TeamCatalog, OTHER_EQUIPMENT};
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Equipment select entries: the catalog in order, then "Other".
pub fn equipment_options(catalog: &TeamCatalog) -> Vec<(String, String)> {
    catalog
        .equipment_names()
        .into_iter()
        .map(|name| (name.to_string(), name.to_string()))
        .chain(std::iter::once((
            OTHER_EQUIPMENT.to_string(),
            "Other (not listed)".to_string(),
        )))
        .collect()
}

/// Team shown in the read-only "Assigned Team" field; empty until equipment is picked.
pub fn team_preview(catalog: &TeamCatalog, selected: &str) -> String {
    if selected.is_empty() {
        return String::new();
    }
    catalog
        .resolve(&EquipmentChoice::from_form(selected, ""))
        .to_string()
}

#[component]
#[allow(non_snake_case)]
pub fn SubmitRequest() -> impl IntoView {
    let catalog = config().team_routing.clone();
    let notifications = use_notifications();
    let (auth_state, _) = use_auth();

    let selected = RwSignal::new(String::new());
    let other_name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let priority = RwSignal::new(Priority::default());
    let errors = RwSignal::new(ValidationErrors::new());
    let submitting = RwSignal::new(false);
    let submitted = RwSignal::new(false);

    let field_error = move |field: &'static str| {
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    };

    let team = {
        let catalog = catalog.clone();
        Signal::derive(move || team_preview(&catalog, &selected.get()))
    };

    let submit = {
        let catalog = catalog.clone();
        move || {
            let user = current_user(auth_state);
            let (name, email) = user
                .map(|u| (u.display_name().to_string(), u.email))
                .unwrap_or_default();
            let choice = EquipmentChoice::from_form(&selected.get_untracked(), &other_name.get_untracked());
            let dto = SubmitRequestDto::new(
                &name,
                &email,
                &choice,
                &catalog,
                &description.get_untracked(),
                priority.get_untracked(),
            );
            if let Err(e) = dto.validate() {
                errors.set(e);
                return;
            }
            errors.set(ValidationErrors::new());
            submitting.set(true);
            spawn_local(async move {
                let result = api::submit(&client(), &dto).await;
                submitting.set(false);
                match result {
                    Ok(()) => {
                        log::info!("request submitted for {} (team {})", dto.equipment, dto.team);
                        notifications.success("Request submitted successfully");
                        selected.set(String::new());
                        other_name.set(String::new());
                        description.set(String::new());
                        priority.set(Priority::default());
                        submitted.set(true);
                    }
                    Err(e) => notifications.api_error(&e),
                }
            });
        }
    };

    let priority_options = Signal::derive(|| {
        Priority::all()
            .into_iter()
            .map(|p| (p.code().to_string(), p.display_name().to_string()))
            .collect::<Vec<_>>()
    });
    let equipment_choices = Signal::derive(move || equipment_options(&config().team_routing));

    view! {
        <div class="page page--narrow">
            <PageHeader title="Create Request" subtitle="Report a problem with your equipment">
                {()}
            </PageHeader>

            <Show when=move || submitted.get()>
                <div class="success-panel">
                    {icon("check")}
                    <span>"Your request was sent to the responsible team."</span>
                    <Button variant="ghost" size="sm" on_click=Callback::new(move |_| submitted.set(false))>
                        "Dismiss"
                    </Button>
                </div>
            </Show>

            <form class="details-form" on:submit=move |ev| {
                ev.prevent_default();
                submit();
            }>
                <Select
                    label="Equipment"
                    id="submit-equipment"
                    placeholder="Select equipment"
                    options=equipment_choices
                    value=selected
                    on_change=Callback::new(move |v: String| selected.set(v))
                    error=field_error("equipment")
                />
                <Show when=move || selected.get() == OTHER_EQUIPMENT>
                    <Input
                        label="Equipment Name"
                        id="submit-other"
                        value=other_name
                        on_input=Callback::new(move |v: String| other_name.set(v))
                        placeholder="Describe the equipment"
                    />
                </Show>
                <Input
                    label="Assigned Team"
                    id="submit-team"
                    value=team
                    disabled=true
                />
                <Select
                    label="Priority"
                    id="submit-priority"
                    options=priority_options
                    value=Signal::derive(move || priority.get().code().to_string())
                    on_change=Callback::new(move |v: String| {
                        if let Some(p) = Priority::from_code(&v) {
                            priority.set(p);
                        }
                    })
                />
                <Textarea
                    label="Description"
                    id="submit-description"
                    rows=4
                    value=description
                    on_input=Callback::new(move |v: String| description.set(v))
                    placeholder="What is wrong?"
                    error=field_error("description")
                />
                <div class="details-actions">
                    <Button button_type="submit" disabled=Signal::derive(move || submitting.get())>
                        {icon("send")}
                        "Submit Request"
                    </Button>
                </div>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_preview_follows_catalog() {
        let catalog = TeamCatalog::builtin();
        assert_eq!(team_preview(&catalog, ""), "");
        assert_eq!(team_preview(&catalog, "Server Rack"), "Network Team");
        assert_eq!(team_preview(&catalog, OTHER_EQUIPMENT), "Maintenance Team");
        assert_eq!(team_preview(&catalog, "Coffee Machine"), catalog.default_team);
    }

    #[test]
    fn test_equipment_options_end_with_other() {
        let options = equipment_options(&TeamCatalog::builtin());
        assert_eq!(options.len(), 9);
        assert_eq!(options.last().map(|(v, _)| v.as_str()), Some(OTHER_EQUIPMENT));
        assert!(options.iter().any(|(v, _)| v == "CCTV Camera"));
    }
}
