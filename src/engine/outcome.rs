use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::engine::item::Item;

const MASTERY_MIN_CORRECT: u64 = 3;
const MASTERY_RATIO: u64 = 2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeCounter {
    pub correct: u64,
    pub wrong: u64,
}

impl OutcomeCounter {
    pub fn new(correct: u64, wrong: u64) -> Self {
        Self { correct, wrong }
    }

    pub fn record(&mut self, was_correct: bool) {
        if was_correct {
            self.correct = self.correct.saturating_add(1);
        } else {
            self.wrong = self.wrong.saturating_add(1);
        }
    }

    pub fn is_mastered(&self) -> bool {
        is_mastered(self)
    }
}

/// An item is mastered once it has at least three correct answers and more
/// than twice as many correct answers as wrong ones.
pub fn is_mastered(counter: &OutcomeCounter) -> bool {
    counter.correct >= MASTERY_MIN_CORRECT
        && counter.correct > counter.wrong.saturating_mul(MASTERY_RATIO)
}

/// Per-item outcome counters keyed by item id. Serializes as a plain JSON
/// object so the persisted payload is `{"<id>": {"correct": n, "wrong": n}}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatsMap {
    pub counters: HashMap<String, OutcomeCounter>,
}

impl StatsMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counter for `id`; absent entries read as `{0, 0}`.
    pub fn counter(&self, id: &str) -> OutcomeCounter {
        self.counters.get(id).copied().unwrap_or_default()
    }

    pub fn record(&mut self, id: &str, was_correct: bool) {
        self.counters
            .entry(id.to_string())
            .or_default()
            .record(was_correct);
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }
}

impl FromIterator<(String, OutcomeCounter)> for StatsMap {
    fn from_iter<I: IntoIterator<Item = (String, OutcomeCounter)>>(iter: I) -> Self {
        Self {
            counters: iter.into_iter().collect(),
        }
    }
}

pub fn count_mastered<T: Item>(pool: &[T], stats: &StatsMap) -> usize {
    pool.iter()
        .filter(|item| {
            stats
                .counters
                .get(item.id())
                .is_some_and(|counter| counter.is_mastered())
        })
        .count()
}
