//! Search and selector filtering shared by the list screens.
use std::collections::BTreeMap;

use contracts::enums::normalize_code;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Discrete selectors a list can be narrowed by
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterKey {
    Status,
    Type,
    Priority,
    Team,
}

/// Row type that can be searched and narrowed by selectors.
pub trait Searchable {
    /// Text fields the search box looks into
    fn search_fields(&self) -> Vec<&str>;

    /// Value compared against the selector for `key`; `None` never matches
    /// a non-empty selector.
    fn filter_value(&self, _key: FilterKey) -> Option<String> {
        None
    }

    /// Case-insensitive substring match over [`Searchable::search_fields`].
    fn matches_search(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Search text plus selector values. An empty selector means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub query: String,
    pub selectors: BTreeMap<FilterKey, String>,
}

impl ListFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: &str) -> Self {
        self.query = query.to_string();
        self
    }

    pub fn with(mut self, key: FilterKey, value: &str) -> Self {
        self.set(key, value);
        self
    }

    /// `""` and `"all"` clear the selector.
    pub fn set(&mut self, key: FilterKey, value: &str) {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            self.selectors.remove(&key);
        } else {
            self.selectors.insert(key, value.to_string());
        }
    }

    pub fn selector(&self, key: FilterKey) -> &str {
        self.selectors.get(&key).map(String::as_str).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.selectors.is_empty()
    }

    pub fn matches<T: Searchable>(&self, item: &T) -> bool {
        item.matches_search(&self.query)
            && self.selectors.iter().all(|(key, wanted)| {
                item.filter_value(*key)
                    .map(|v| normalize_code(&v) == normalize_code(wanted))
                    .unwrap_or(false)
            })
    }

    /// Matching rows in input order. `items` is left untouched.
    pub fn apply<T: Searchable + Clone>(&self, items: &[T]) -> Vec<T> {
        items
            .iter()
            .filter(|item| self.matches(*item))
            .cloned()
            .collect()
    }
}

/// Filter `items` by a search query only.
pub fn filter_list<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    ListFilter::new().with_query(query).apply(items)
}

/// Highlight case-insensitive occurrences of `filter` in `text`.
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let filter_lower = filter.trim().to_lowercase();
    let text_lower = text.to_lowercase();
    // Byte offsets of the lowered text only line up with `text` for ASCII.
    if filter_lower.is_empty() || !text.is_ascii() || !text_lower.contains(&filter_lower) {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let start = last_pos + pos;
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        let end = start + filter_lower.len();
        parts.push(view! { <mark class="search-hit">{text[start..end].to_string()}</mark> }.into_any());
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Search box with a 300 ms debounce and a clear button
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    // Replacing the pending timeout drops, and so cancels, the previous one.
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let timeout = Timeout::new(300, move || on_change.run(new_value));
        pending.set_value(Some(timeout));
    };

    let clear_filter = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || !value.get().trim().is_empty()
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        dept: &'static str,
        status: &'static str,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name, self.dept]
        }

        fn filter_value(&self, key: FilterKey) -> Option<String> {
            match key {
                FilterKey::Status => Some(self.status.to_string()),
                _ => None,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Generator A", dept: "Plant", status: "operational" },
            Row { name: "Laptop 01", dept: "IT", status: "maintenance" },
            Row { name: "Laptop 02", dept: "IT", status: "operational" },
            Row { name: "CCTV Camera", dept: "Security", status: "breakdown" },
        ]
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let found = filter_list(&rows(), "LAPTOP");
        assert_eq!(found.len(), 2);
        assert_eq!(filter_list(&rows(), "securi")[0].name, "CCTV Camera");
    }

    #[test]
    fn test_empty_filter_keeps_everything_in_order() {
        let all = ListFilter::new().apply(&rows());
        assert_eq!(all, rows());
    }

    #[test]
    fn test_selector_and_search_combine() {
        let filter = ListFilter::new()
            .with_query("laptop")
            .with(FilterKey::Status, "Operational");
        let found = filter.apply(&rows());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Laptop 02");
    }

    #[test]
    fn test_all_clears_selector() {
        let mut filter = ListFilter::new().with(FilterKey::Status, "breakdown");
        assert_eq!(filter.apply(&rows()).len(), 1);
        filter.set(FilterKey::Status, "all");
        assert!(filter.is_empty());
    }

    #[test]
    fn test_unsupported_selector_matches_nothing() {
        let filter = ListFilter::new().with(FilterKey::Team, "IT Support");
        assert!(filter.apply(&rows()).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let source = rows();
        let filter = ListFilter::new().with_query("a").with(FilterKey::Status, "operational");
        let once = filter.apply(&source);
        let twice = filter.apply(&source);
        assert_eq!(once, twice);
        assert_eq!(filter.apply(&once), once);
        assert_eq!(source, rows());
    }
}
