use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::list_state::{ListState, LoadOutcome};
use crate::shared::api::ApiError;
use crate::shared::list_utils::{FilterKey, ListFilter, Searchable};
use crate::shared::notifications::NotificationService;

/// Reactive owner of one screen's collection and filter.
///
/// Loads go through [`ListState`] tickets, so a slow earlier answer never
/// overwrites a later one. Load failures raise a toast when a
/// [`NotificationService`] is in context.
pub struct ListViewModel<T: Send + Sync + 'static> {
    pub state: RwSignal<ListState<T>>,
    pub filter: RwSignal<ListFilter>,
    notifications: Option<NotificationService>,
}

impl<T: Send + Sync + 'static> Clone for ListViewModel<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListViewModel<T> {}

impl<T> ListViewModel<T>
where
    T: Searchable + Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ListState::new()),
            filter: RwSignal::new(ListFilter::new()),
            notifications: use_context::<NotificationService>(),
        }
    }

    /// Start a load; whatever the answer, only the newest load is applied.
    pub fn load<F, Fut>(&self, fetch: F)
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
    {
        let Some(ticket) = self.state.try_update(|s| s.begin_load()) else {
            return;
        };
        let state = self.state;
        let notifications = self.notifications;
        spawn_local(async move {
            let result = fetch().await;
            if let Some(LoadOutcome::Failed(e)) = state.try_update(|s| s.complete_load(ticket, result)) {
                if let Some(n) = notifications {
                    n.api_error(&e);
                }
            }
        });
    }

    /// Run an operation that answers with the fresh collection, such as a
    /// mutation followed by its reload. On failure the rows stay and
    /// `on_error` gets the error.
    pub fn refresh_with<F, Fut, E>(&self, op: F, on_error: impl FnOnce(E) + 'static)
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result<Vec<T>, E>> + 'static,
        E: 'static,
    {
        let Some(ticket) = self.state.try_update(|s| s.begin_load()) else {
            return;
        };
        let state = self.state;
        spawn_local(async move {
            match op().await {
                Ok(rows) => {
                    state.try_update(|s| s.complete_load(ticket, Ok(rows)));
                }
                Err(e) => {
                    state.try_update(|s| s.abandon(ticket));
                    on_error(e);
                }
            }
        });
    }

    /// Rows passing the current filter, in load order.
    pub fn visible(&self) -> Vec<T> {
        let filter = self.filter.get();
        self.state.with(|s| filter.apply(s.items()))
    }

    pub fn all(&self) -> Vec<T> {
        self.state.with(|s| s.items().to_vec())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading())
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error().map(str::to_string))
    }

    pub fn set_query(&self, query: String) {
        self.filter.update(|f| f.query = query);
    }

    pub fn set_selector(&self, key: FilterKey, value: &str) {
        self.filter.update(|f| f.set(key, value));
    }

    pub fn selector(&self, key: FilterKey) -> String {
        self.filter.with(|f| f.selector(key).to_string())
    }
}

impl<T> Default for ListViewModel<T>
where
    T: Searchable + Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
