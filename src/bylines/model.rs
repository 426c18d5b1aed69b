use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A tracked writer. Ids are decimal strings assigned by the store; they are
/// canonicalized on every open, so callers must not cache them across a
/// reopen (see `roster`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Writer {
    pub id: String,
    pub name: String,
}

/// Cumulative counters attached to a writer, keyed by writer id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub articles: u64,
    pub views: u64,
}

/// The persisted aggregate. The writer/stats pairing is enforced by the
/// repair pass on open, not by the serialized form, which may have drifted
/// through external edits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreDocument {
    pub writers: Vec<Writer>,
    pub stats: BTreeMap<String, Stats>,
}

/// One ranked leaderboard row. Derived on every query, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    pub id: String,
    pub name: String,
    pub articles: u64,
    pub views: u64,
    pub avg_views: u64,
}

/// Aggregate totals over the whole roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_writers: usize,
    pub total_articles: u64,
    pub total_views: u64,
    pub avg_views_per_article: u64,
}

/// Views-per-article average, rounded half-up; zero articles yields zero.
pub fn rounded_avg(views: u64, articles: u64) -> u64 {
    if articles == 0 {
        0
    } else {
        (views as f64 / articles as f64).round() as u64
    }
}
