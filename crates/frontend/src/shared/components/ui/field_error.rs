use leptos::prelude::*;

/// Inline validation message under a form control
#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="form__error">{move || message.get().unwrap_or_default()}</div>
        </Show>
    }
}
