//! Latest-wins guard for loads that race each other.
//!
//! [`LoadGate`] hands out increasing [`LoadTicket`]s; an answer may be
//! applied only while its ticket is still the newest one issued.
//! [`LatestLoad`] wraps a gate for reactive values that are not a list
//! screen's own collection: dashboard panels, counters, select options.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn number(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadGate {
    issued: u64,
}

impl LoadGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> LoadTicket {
        self.issued += 1;
        LoadTicket(self.issued)
    }

    pub fn is_latest(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.issued
    }

    pub fn latest(&self) -> u64 {
        self.issued
    }
}

#[derive(Clone, Copy)]
pub struct LatestLoad {
    name: &'static str,
    gate: StoredValue<LoadGate>,
}

impl LatestLoad {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            gate: StoredValue::new(LoadGate::new()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Run `fetch` and hand its answer to `apply`, unless another load was
    /// started through this loader in the meantime.
    pub fn spawn<T, Fut>(&self, fetch: Fut, apply: impl FnOnce(T) + 'static)
    where
        T: 'static,
        Fut: Future<Output = T> + 'static,
    {
        let mut gate = self.gate.get_value();
        let ticket = gate.begin();
        self.gate.set_value(gate);

        let (name, stored) = (self.name, self.gate);
        spawn_local(async move {
            let value = fetch.await;
            match stored.try_get_value() {
                Some(gate) if gate.is_latest(ticket) => apply(value),
                Some(gate) => log::debug!(
                    "discarding stale {} load #{} (latest #{})",
                    name,
                    ticket.number(),
                    gate.latest()
                ),
                None => log::debug!("{} load finished after its view was dropped", name),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_loads_finish_out_of_order() {
        let mut gate = LoadGate::new();
        let first = gate.begin();
        let second = gate.begin();

        let mut shown = None;
        // second answers first, then the slower first one arrives
        for (ticket, rows) in [(second, "fresh"), (first, "old")] {
            if gate.is_latest(ticket) {
                shown = Some(rows);
            }
        }
        assert_eq!(shown, Some("fresh"));
        assert_eq!(gate.latest(), 2);
    }

    #[test]
    fn test_single_load_is_latest() {
        let mut gate = LoadGate::new();
        let only = gate.begin();
        assert!(gate.is_latest(only));
        let _next = gate.begin();
        assert!(!gate.is_latest(only));
    }
}
