use contracts::shared::badge::{classify_priority, classify_status, BadgeClass};
use leptos::prelude::*;
use thaw::{Badge as ThawBadge, BadgeAppearance, BadgeColor};

pub fn badge_color(class: BadgeClass) -> BadgeColor {
    match class {
        BadgeClass::Success => BadgeColor::Success,
        BadgeClass::Warning => BadgeColor::Warning,
        BadgeClass::Danger => BadgeColor::Danger,
        BadgeClass::Info => BadgeColor::Informative,
        BadgeClass::Secondary => BadgeColor::Subtle,
    }
}

/// Tinted badge for one display class
#[component]
pub fn Badge(class: BadgeClass, #[prop(into)] text: String) -> impl IntoView {
    view! {
        <ThawBadge
            appearance=BadgeAppearance::Tint
            color=badge_color(class)
            class=class.css_class()
        >
            {text}
        </ThawBadge>
    }
}

/// Badge for a raw status string from any resource
#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let class = classify_status(&status);
    view! { <Badge class=class text=status /> }
}

#[component]
pub fn PriorityBadge(#[prop(into)] priority: String) -> impl IntoView {
    let class = classify_priority(&priority);
    view! { <Badge class=class text=priority.to_uppercase() /> }
}
