//! Vote accumulation and the per-browser daily ledger.
//!
//! This crate holds the bookkeeping behind the optimistic vote button:
//! rapid clicks on one project are accumulated locally and flushed to the
//! server as a single request once the burst pauses. The UI layer owns the
//! timers and network calls; everything here is synchronous state.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Quiet period after the last click before the pending count is flushed.
pub const VOTE_DEBOUNCE_MS: u32 = 800;

/// Soft cap on votes per browser per day. Client-enforced only; trivially
/// bypassable and deliberately not a security control.
pub const DAILY_VOTE_CAP: u32 = 20;

/// Local storage key for the persisted [`DailyLedger`].
pub const LEDGER_STORAGE_KEY: &str = "voteHistory";

/// Pending vote counts per project id, between clicks and flush.
///
/// Each id accumulates independently; votes are commutative increments so
/// no cross-id ordering is needed.
#[derive(Debug, Default)]
pub struct VoteAccumulator {
    pending: HashMap<String, u32>,
}

impl VoteAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one click for `id` and return the new pending count.
    pub fn record(&mut self, id: &str) -> u32 {
        let count = self.pending.entry(id.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    /// Current pending count for `id`.
    pub fn pending(&self, id: &str) -> u32 {
        self.pending.get(id).copied().unwrap_or(0)
    }

    /// Drain the pending count for `id`, resetting it to zero.
    ///
    /// Called when the flush timer fires; the returned value is the `count`
    /// carried by the single network request.
    pub fn take(&mut self, id: &str) -> u32 {
        self.pending.remove(id).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Date-keyed count of votes cast by this browser, persisted in local
/// storage under [`LEDGER_STORAGE_KEY`].
///
/// Keys are locale-formatted date strings produced by the caller; the
/// ledger itself is format-agnostic and only compares keys for equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailyLedger {
    days: BTreeMap<String, u32>,
}

impl DailyLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Votes recorded for the given day.
    pub fn votes_on(&self, date: &str) -> u32 {
        self.days.get(date).copied().unwrap_or(0)
    }

    /// Whether the given day has reached [`DAILY_VOTE_CAP`].
    pub fn at_cap(&self, date: &str) -> bool {
        self.votes_on(date) >= DAILY_VOTE_CAP
    }

    /// Votes still available for the given day.
    pub fn remaining(&self, date: &str) -> u32 {
        DAILY_VOTE_CAP.saturating_sub(self.votes_on(date))
    }

    /// Record `count` votes on the given day.
    pub fn record(&mut self, date: &str, count: u32) {
        *self.days.entry(date.to_string()).or_insert(0) += count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rapid_clicks_accumulate_into_one_flush() {
        let mut acc = VoteAccumulator::new();

        for _ in 0..5 {
            acc.record("x");
        }

        assert_eq!(acc.pending("x"), 5);
        // One flush carries the whole burst.
        assert_eq!(acc.take("x"), 5);
        assert_eq!(acc.pending("x"), 0);
        assert!(acc.is_empty());
    }

    #[test]
    fn test_ids_accumulate_independently() {
        let mut acc = VoteAccumulator::new();

        acc.record("a");
        acc.record("a");
        acc.record("b");

        assert_eq!(acc.pending("a"), 2);
        assert_eq!(acc.pending("b"), 1);
        assert_eq!(acc.take("a"), 2);
        assert_eq!(acc.pending("b"), 1);
    }

    #[test]
    fn test_take_on_unknown_id_is_zero() {
        let mut acc = VoteAccumulator::new();
        assert_eq!(acc.take("nope"), 0);
    }

    #[test]
    fn test_ledger_counts_per_day() {
        let mut ledger = DailyLedger::new();

        ledger.record("1/2/2026", 3);
        ledger.record("1/2/2026", 1);
        ledger.record("1/3/2026", 2);

        assert_eq!(ledger.votes_on("1/2/2026"), 4);
        assert_eq!(ledger.votes_on("1/3/2026"), 2);
        assert_eq!(ledger.votes_on("1/4/2026"), 0);
    }

    #[test]
    fn test_ledger_cap_blocks_at_twenty() {
        let mut ledger = DailyLedger::new();
        let today = "1/2/2026";

        for _ in 0..DAILY_VOTE_CAP {
            assert!(!ledger.at_cap(today));
            ledger.record(today, 1);
        }

        assert!(ledger.at_cap(today));
        assert_eq!(ledger.remaining(today), 0);
        // A different day is unaffected.
        assert!(!ledger.at_cap("1/3/2026"));
        assert_eq!(ledger.remaining("1/3/2026"), DAILY_VOTE_CAP);
    }

    #[test]
    fn test_ledger_persistence_shape() {
        let mut ledger = DailyLedger::new();
        ledger.record("1/2/2026", 7);

        // Stored as a plain date -> count object, matching the
        // `voteHistory` local storage format.
        let json = serde_json::to_string(&ledger).unwrap();
        assert_eq!(json, r#"{"1/2/2026":7}"#);

        let parsed: DailyLedger = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ledger);
    }
}
