//! # Writer Statistics Store
//!
//! [`WriterStore`] owns the canonical roster document: it assigns writer
//! identifiers, repairs inconsistent identifiers on open, and projects the
//! ranked leaderboard. It is constructed explicitly and handed to the API
//! facade at startup; there is no process-global instance.
//!
//! ## Identifier repair happens on EVERY open
//!
//! Opening a store canonicalizes writer ids to the compact sequence
//! `"1".."n"` (in persisted order) and rewrites the data file, even when the
//! existing ids are already unique. Duplicate and sparse ids are therefore
//! self-healing, but ids are NOT stable across a reopen if the file was
//! edited externally: callers must not cache ids across an open boundary.
//!
//! ## Persistence contract
//!
//! Mutations apply to the in-memory document only; the command layer calls
//! [`WriterStore::persist`] after every mutation. A failed save leaves the
//! in-memory state correct, so callers downgrade it to a warning rather
//! than rolling back.

use crate::error::Result;
use crate::model::{rounded_avg, LeaderboardEntry, Stats, StoreDocument, Summary, Writer};
use crate::store::Persistence;
use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;

/// Report from opening a store.
#[derive(Debug, Default)]
pub struct OpenReport {
    pub writers: usize,
    pub remapped_ids: usize,
    /// Set when the repaired document could not be written back.
    pub persist_warning: Option<String>,
}

pub struct WriterStore<S: Persistence> {
    backend: S,
    doc: StoreDocument,
}

impl<S: Persistence> WriterStore<S> {
    /// Open the store: load the persisted document (empty when absent), run
    /// the identifier-repair pass, and write the repaired document back.
    ///
    /// An unreadable existing file is fatal. A failed write-back of the
    /// repaired document is not; it is surfaced in the report instead.
    pub fn open(backend: S) -> Result<(Self, OpenReport)> {
        let mut store = Self {
            backend,
            doc: StoreDocument::default(),
        };
        let mut report = OpenReport::default();

        if let Some(doc) = store.backend.load()? {
            store.doc = doc;
            report.remapped_ids = store.repair();
            report.persist_warning = store.persist().err().map(|e| e.to_string());
        }
        report.writers = store.doc.writers.len();
        Ok((store, report))
    }

    pub fn document(&self) -> &StoreDocument {
        &self.doc
    }

    pub fn location(&self) -> Option<PathBuf> {
        self.backend.location()
    }

    /// Write the current document to the backend.
    pub fn persist(&mut self) -> Result<()> {
        self.backend.save(&self.doc)
    }

    /// Explicit close; flushes the current document.
    pub fn close(mut self) -> Result<()> {
        self.persist()
    }

    /// Canonicalize writer ids to `"1".."n"` in storage order, carrying each
    /// writer's stats over to its new id (zeroed stats are synthesized when
    /// the old id had none). Returns how many ids changed.
    ///
    /// The counter only moves forward, so the pass stays O(n) even though
    /// every writer rescans from it. Stats entries not attached to any
    /// writer do not survive the pass.
    pub fn repair(&mut self) -> usize {
        let old_stats = std::mem::take(&mut self.doc.stats);
        let mut assigned: HashSet<String> = HashSet::new();
        let mut repaired: BTreeMap<String, Stats> = BTreeMap::new();
        let mut next_id: u64 = 1;
        let mut remapped = 0;

        for writer in &mut self.doc.writers {
            while assigned.contains(next_id.to_string().as_str()) {
                next_id += 1;
            }
            let new_id = next_id.to_string();
            assigned.insert(new_id.clone());
            next_id += 1;

            let entry = old_stats.get(&writer.id).copied().unwrap_or_default();
            repaired.insert(new_id.clone(), entry);
            if writer.id != new_id {
                remapped += 1;
            }
            writer.id = new_id;
        }

        self.doc.stats = repaired;
        remapped
    }

    /// Append a new writer under the smallest free positive integer id, with
    /// zeroed stats. Returns the new id.
    pub fn add_writer(&mut self, name: &str) -> String {
        let existing: HashSet<&str> = self.doc.writers.iter().map(|w| w.id.as_str()).collect();
        let mut next_id: u64 = 1;
        while existing.contains(next_id.to_string().as_str()) {
            next_id += 1;
        }

        let id = next_id.to_string();
        self.doc.writers.push(Writer {
            id: id.clone(),
            name: name.to_string(),
        });
        self.doc.stats.insert(id.clone(), Stats::default());
        id
    }

    /// Overwrite the stats entry for `id`. The entry is created even when no
    /// writer with that id exists; see the module docs for this laxity.
    pub fn set_stats(&mut self, id: &str, articles: u64, views: u64) {
        self.doc
            .stats
            .insert(id.to_string(), Stats { articles, views });
    }

    pub fn has_writer(&self, id: &str) -> bool {
        self.doc.writers.iter().any(|w| w.id == id)
    }

    /// Remove a writer and its stats. Unknown ids are a no-op, not an error.
    /// Returns whether a writer was actually removed.
    pub fn remove_writer(&mut self, id: &str) -> bool {
        let before = self.doc.writers.len();
        self.doc.writers.retain(|w| w.id != id);
        self.doc.stats.remove(id);
        self.doc.writers.len() != before
    }

    /// Project the ranked leaderboard: descending `(articles, views)`, with
    /// storage order preserved on full ties (stable sort). Pure; never
    /// mutates stored state.
    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        let mut entries: Vec<LeaderboardEntry> = self
            .doc
            .writers
            .iter()
            .map(|w| {
                let stats = self.doc.stats.get(&w.id).copied().unwrap_or_default();
                LeaderboardEntry {
                    id: w.id.clone(),
                    name: w.name.clone(),
                    articles: stats.articles,
                    views: stats.views,
                    avg_views: rounded_avg(stats.views, stats.articles),
                }
            })
            .collect();
        entries.sort_by(|a, b| b.articles.cmp(&a.articles).then(b.views.cmp(&a.views)));
        entries
    }

    /// Aggregate totals over the current roster.
    pub fn summary(&self) -> Summary {
        let mut total_articles = 0;
        let mut total_views = 0;
        for w in &self.doc.writers {
            let s = self.doc.stats.get(&w.id).copied().unwrap_or_default();
            total_articles += s.articles;
            total_views += s.views;
        }
        Summary {
            total_writers: self.doc.writers.len(),
            total_articles,
            total_views,
            avg_views_per_article: rounded_avg(total_views, total_articles),
        }
    }
}
