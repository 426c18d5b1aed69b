use crate::config::BylinesConfig;
use crate::model::{LeaderboardEntry, Summary};
use crate::report::ReportImage;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod doctor;
pub mod helpers;
pub mod leaderboard;
pub mod paths;
pub mod remove;
pub mod report;
pub mod set_stats;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A rendered report plus its conventional filename.
#[derive(Debug, Clone)]
pub struct ReportArtifact {
    pub filename: String,
    pub image: ReportImage,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub new_id: Option<String>,
    pub entries: Vec<LeaderboardEntry>,
    pub summary: Option<Summary>,
    pub report: Option<ReportArtifact>,
    pub store_path: Option<PathBuf>,
    pub config: Option<BylinesConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_entries(mut self, entries: Vec<LeaderboardEntry>) -> Self {
        self.entries = entries;
        self
    }

    pub fn with_summary(mut self, summary: Summary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_report(mut self, report: ReportArtifact) -> Self {
        self.report = Some(report);
        self
    }

    pub fn with_config(mut self, config: BylinesConfig) -> Self {
        self.config = Some(config);
        self
    }
}
