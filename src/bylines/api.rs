//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the
//! single entry point for all bylines operations, regardless of the UI
//! being used: the CLI here, or a REST/GUI front-end elsewhere.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (trims names, parses date strings)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs` and `roster.rs`
//! - **I/O operations**: No stdout, stderr, or file formatting
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Generic Over Persistence
//!
//! `BylinesApi<S: Persistence>` is generic over the storage backend:
//! - Production: `BylinesApi<FileStore>`
//! - Testing: `BylinesApi<InMemoryStore>`
//!
//! This enables testing the API layer without touching the filesystem.

use crate::commands;
use crate::config::BylinesConfig;
use crate::error::{BylinesError, Result};
use crate::report::ReportStyle;
use crate::roster::{OpenReport, WriterStore};
use crate::store::Persistence;
use chrono::NaiveDate;
use std::path::PathBuf;

/// The main API facade for bylines operations.
///
/// Owns the store for its whole lifetime; construct it once at startup and
/// pass it to whatever front-end is in play.
pub struct BylinesApi<S: Persistence> {
    store: WriterStore<S>,
    data_dir: PathBuf,
}

impl<S: Persistence> BylinesApi<S> {
    /// Open the store and wrap it. The open-time repair report is returned
    /// so the caller can surface its warnings.
    pub fn open(backend: S, data_dir: PathBuf) -> Result<(Self, OpenReport)> {
        let (store, report) = WriterStore::open(backend)?;
        Ok((Self { store, data_dir }, report))
    }

    pub fn create_writer(&mut self, name: &str) -> Result<commands::CmdResult> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BylinesError::Validation(
                "Writer name cannot be empty".to_string(),
            ));
        }
        commands::add::run(&mut self.store, name)
    }

    pub fn list_leaderboard(&self) -> Result<commands::CmdResult> {
        commands::leaderboard::run(&self.store)
    }

    pub fn set_stats(&mut self, id: &str, articles: u64, views: u64) -> Result<commands::CmdResult> {
        commands::set_stats::run(&mut self.store, id, articles, views)
    }

    pub fn delete_writer(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, id)
    }

    /// Render a report. Dates are `YYYY-MM-DD` strings; supplying only one
    /// of them drops the subtitle (not just the missing end).
    pub fn render_report(
        &self,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<commands::CmdResult> {
        let start = parse_date(start)?;
        let end = parse_date(end)?;
        let config = BylinesConfig::load(&self.data_dir)?;
        let style = ReportStyle {
            font: config.font_source(),
            ..ReportStyle::default()
        };
        commands::report::run(&self.store, start, end, &style)
    }

    pub fn doctor(&mut self) -> Result<commands::CmdResult> {
        commands::doctor::run(&mut self.store)
    }

    pub fn store_path(&self) -> Result<commands::CmdResult> {
        commands::paths::run(&self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    /// Flush the document and drop the store.
    pub fn close(self) -> Result<()> {
        self.store.close()
    }
}

fn parse_date(input: Option<&str>) -> Result<Option<NaiveDate>> {
    match input {
        None => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| {
                BylinesError::Validation(format!("Invalid date (expected YYYY-MM-DD): {}", s))
            }),
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, ReportArtifact};
