use rand::Rng;

use crate::engine::item::Item;
use crate::engine::outcome::{OutcomeCounter, StatsMap};

const BASE_WEIGHT: f64 = 1.0;
const WRONG_WEIGHT: f64 = 3.0;
const CORRECT_WEIGHT: f64 = 0.5;
const MIN_WEIGHT: f64 = 0.1;

/// Draw weight for an item: misses push it up, hits pull it down to a floor
/// so nothing ever leaves rotation.
pub fn item_weight(counter: OutcomeCounter) -> f64 {
    let weight = BASE_WEIGHT + WRONG_WEIGHT * counter.wrong as f64
        - CORRECT_WEIGHT * counter.correct as f64;
    weight.max(MIN_WEIGHT)
}

/// Inverse-CDF draw over `pool` proportional to `item_weight`. Earlier items
/// win at a boundary. Returns `None` only for an empty pool.
pub fn pick_weighted<'a, T: Item, R: Rng + ?Sized>(
    pool: &'a [T],
    stats: &StatsMap,
    rng: &mut R,
) -> Option<&'a T> {
    if pool.is_empty() {
        return None;
    }

    let weights: Vec<f64> = pool
        .iter()
        .map(|item| item_weight(stats.counter(item.id())))
        .collect();
    let total: f64 = weights.iter().sum();

    let mut roll = rng.gen_range(0.0..total);
    for (item, weight) in pool.iter().zip(&weights) {
        roll -= weight;
        if roll <= 0.0 {
            tracing::debug!(id = item.id(), weight, total, "picked weighted item");
            return Some(item);
        }
    }

    // Rounding can leave a sliver of roll after the last subtraction.
    pool.last()
}
