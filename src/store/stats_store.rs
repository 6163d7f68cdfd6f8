use crate::engine::StatsMap;
use crate::store::kv::KeyValueStore;

/// Fixed key the whole stats map is stored under.
pub const STATS_KEY: &str = "verb_stats";

/// Sole writer of per-item outcome counters.
///
/// Reads fail open: a missing, unreadable or corrupt payload loads as an
/// empty map. Writes are reported through `tracing` and never abort the
/// session; the returned in-memory map stays authoritative.
///
/// `record_outcome` is a plain read-modify-write with no locking. One quiz
/// session per store is assumed; concurrent writers lose updates.
pub struct StatsStore<S: KeyValueStore> {
    backend: S,
}

impl<S: KeyValueStore> StatsStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn load(&self) -> StatsMap {
        match self.backend.get(STATS_KEY) {
            Ok(Some(json)) => serde_json::from_str(&json).unwrap_or_else(|e| {
                tracing::warn!("ignoring corrupt stats payload: {e}");
                StatsMap::default()
            }),
            Ok(None) => StatsMap::default(),
            Err(e) => {
                tracing::warn!("failed to read stats, starting empty: {e:#}");
                StatsMap::default()
            }
        }
    }

    /// Persist `stats` verbatim. Returns whether the write reached storage.
    pub fn save(&self, stats: &StatsMap) -> bool {
        let json = match serde_json::to_string(stats) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("failed to serialize stats: {e}");
                return false;
            }
        };
        match self.backend.set(STATS_KEY, &json) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("failed to save stats: {e:#}");
                false
            }
        }
    }

    pub fn record_outcome(&self, item_id: &str, was_correct: bool) -> StatsMap {
        let mut stats = self.load();
        stats.record(item_id, was_correct);
        self.save(&stats);
        stats
    }
}
