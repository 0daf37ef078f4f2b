use chrono::NaiveDate;
use contracts::domain::common::dates::{parse_date, DATE_FORMAT};
use leptos::prelude::*;

use super::ui::FieldError;

/// Native date picker bound to an optional `NaiveDate`
#[component]
pub fn DateInput(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<Option<NaiveDate>>,
    on_change: Callback<Option<NaiveDate>>,
    #[prop(optional, into)] error: Signal<Option<String>>,
) -> impl IntoView {
    let text = move || {
        value
            .get()
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_default()
    };

    view! {
        <div class="form__group" class:form__group--invalid=move || error.get().is_some()>
            {move || label.get().map(|l| view! { <label class="form__label">{l}</label> })}
            <input
                type="date"
                class="form__input"
                prop:value=text
                on:input=move |ev| on_change.run(parse_date(&event_target_value(&ev)))
            />
            <FieldError message=error />
        </div>
    }
}
