use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Open tabs, the active one and sidebar visibility.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Restores the tab named by `?active=` and keeps the query string in
    /// sync with the active tab afterwards.
    pub fn init_router_integration(&self, title_for: fn(&str) -> &'static str) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(active_key) = params.get("active") {
            let title = match title_for(active_key) {
                "" => active_key.as_str(),
                label => label,
            };
            self.open_tab(active_key, title);
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let query_string =
                serde_qs::to_string(&HashMap::from([("active".to_string(), active_key)]))
                    .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search == new_url {
                return;
            }
            if let Some(history) = window().and_then(|w| w.history().ok()) {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&new_url),
                );
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        log::debug!("open_tab: key='{}', title='{}'", key, title);
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: title.to_string(),
                })
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    /// Closing the active tab activates the last remaining one.
    pub fn close_tab(&self, key: &str) {
        log::debug!("close_tab: key='{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    /// Drops every tab, used on logout.
    pub fn reset(&self) {
        self.opened.set(vec![]);
        self.active.set(None);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(ctx: &AppGlobalContext) -> Vec<String> {
        ctx.opened
            .get_untracked()
            .into_iter()
            .map(|t| t.key)
            .collect()
    }

    #[test]
    fn test_open_is_idempotent() {
        let ctx = AppGlobalContext::new();
        ctx.open_tab("a001_equipment", "Equipment");
        ctx.open_tab("a002_team", "Teams");
        ctx.open_tab("a001_equipment", "Equipment");
        assert_eq!(keys(&ctx), vec!["a001_equipment", "a002_team"]);
        assert_eq!(ctx.active.get_untracked().as_deref(), Some("a001_equipment"));
    }

    #[test]
    fn test_closing_active_tab_falls_back_to_last() {
        let ctx = AppGlobalContext::new();
        ctx.open_tab("a001_equipment", "Equipment");
        ctx.open_tab("a002_team", "Teams");
        ctx.open_tab("a003_technician", "Technicians");
        ctx.activate_tab("a002_team");

        ctx.close_tab("a001_equipment");
        assert_eq!(ctx.active.get_untracked().as_deref(), Some("a002_team"));

        ctx.close_tab("a002_team");
        assert_eq!(ctx.active.get_untracked().as_deref(), Some("a003_technician"));

        ctx.close_tab("a003_technician");
        assert_eq!(ctx.active.get_untracked(), None);
    }
}
