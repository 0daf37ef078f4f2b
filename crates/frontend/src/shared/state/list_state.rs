//! Collection state of one list screen, with a stale-response guard.
//!
//! Every load takes a [`LoadTicket`] from [`ListState::begin_load`]. Only
//! the most recently issued ticket may write the collection; answers for
//! older tickets are dropped. Nothing is cancelled in flight.

use super::load_gate::{LoadGate, LoadTicket};
use crate::shared::api::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Applied,
    /// Latest load failed; the previous rows are kept
    Failed(ApiError),
    /// A newer load was started; the result was discarded
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    items: Vec<T>,
    loading: bool,
    error: Option<String>,
    gate: LoadGate,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            gate: LoadGate::new(),
        }
    }
}

impl<T> ListState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.loading = true;
        self.gate.begin()
    }

    pub fn is_latest(&self, ticket: LoadTicket) -> bool {
        self.gate.is_latest(ticket)
    }

    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<T>, ApiError>,
    ) -> LoadOutcome {
        if !self.is_latest(ticket) {
            log::debug!(
                "discarding stale load #{} (latest #{})",
                ticket.number(),
                self.gate.latest()
            );
            return LoadOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
                LoadOutcome::Applied
            }
            Err(e) => {
                self.error = Some(e.user_message());
                LoadOutcome::Failed(e)
            }
        }
    }

    /// Close the latest load without touching the rows or the error.
    /// Returns `false` for a stale ticket.
    pub fn abandon(&mut self, ticket: LoadTicket) -> bool {
        if !self.is_latest(ticket) {
            return false;
        }
        self.loading = false;
        true
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_order_loads_apply_latest_only() {
        let mut state: ListState<&str> = ListState::new();
        let first = state.begin_load();
        let second = state.begin_load();

        assert_eq!(state.complete_load(second, Ok(vec!["fresh"])), LoadOutcome::Applied);
        assert_eq!(state.complete_load(first, Ok(vec!["old", "rows"])), LoadOutcome::Stale);
        assert_eq!(state.items(), &["fresh"]);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_stale_result_does_not_clear_loading() {
        let mut state: ListState<i32> = ListState::new();
        let first = state.begin_load();
        let _second = state.begin_load();
        assert_eq!(state.complete_load(first, Ok(vec![1])), LoadOutcome::Stale);
        assert!(state.is_loading());
        assert!(state.is_empty());
    }

    #[test]
    fn test_failure_keeps_previous_rows() {
        let mut state: ListState<i32> = ListState::new();
        let t = state.begin_load();
        state.complete_load(t, Ok(vec![1, 2]));

        let t = state.begin_load();
        let err = ApiError::Network("down".into());
        assert_eq!(state.complete_load(t, Err(err.clone())), LoadOutcome::Failed(err));
        assert_eq!(state.items(), &[1, 2]);
        assert_eq!(
            state.error(),
            Some("Unable to connect to server. Please try again.")
        );

        let t = state.begin_load();
        state.complete_load(t, Ok(vec![3]));
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_abandon_keeps_rows() {
        let mut state: ListState<i32> = ListState::new();
        let t = state.begin_load();
        state.complete_load(t, Ok(vec![1, 2]));

        let older = state.begin_load();
        let newer = state.begin_load();
        assert!(!state.abandon(older));
        assert!(state.is_loading());
        assert!(state.abandon(newer));
        assert!(!state.is_loading());
        assert_eq!(state.items(), &[1, 2]);
        assert_eq!(state.error(), None);
    }
}
