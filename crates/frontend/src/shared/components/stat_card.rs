use crate::shared::icons::icon;
use contracts::shared::badge::BadgeClass;
use leptos::prelude::*;

/// Counter tile of the dashboards and list headers
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] icon_name: String,
    /// `None` while loading
    #[prop(into)]
    value: Signal<Option<u32>>,
    #[prop(optional)] tone: Option<BadgeClass>,
    #[prop(into, optional)] subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let tone_class = match tone {
        Some(BadgeClass::Success) => "stat-card stat-card--success",
        Some(BadgeClass::Warning) => "stat-card stat-card--warning",
        Some(BadgeClass::Danger) => "stat-card stat-card--error",
        Some(BadgeClass::Info) => "stat-card stat-card--info",
        _ => "stat-card",
    };

    view! {
        <div class=tone_class>
            <div class="stat-card__icon">{icon(&icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {move || value.get().map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())}
                </div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}
