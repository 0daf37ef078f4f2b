use leptos::prelude::*;

use super::FieldError;

/// Labelled select over `(value, label)` pairs.
///
/// Options may arrive after the current value is set; the selection follows
/// `value` whenever either changes.
#[component]
pub fn Select(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    /// Leading option with an empty value, e.g. "All Status"
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional, into)] id: MaybeProp<String>,
    #[prop(optional, into)] error: Signal<Option<String>>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group" class:form__group--invalid=move || error.get().is_some()>
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>{l}</label>
            })}
            <select
                id=select_id
                class="form__select"
                prop:value=move || {
                    // re-run when options arrive
                    options.track();
                    value.get()
                }
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                {move || placeholder.get().map(|p| view! { <option value="">{p}</option> })}
                <For
                    each=move || options.get()
                    key=|(val, label)| format!("{}|{}", val, label)
                    children=move |(val, label)| {
                        let val_for_check = val.clone();
                        view! {
                            <option value=val selected=move || value.get() == val_for_check>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
            <FieldError message=error />
        </div>
    }
}
