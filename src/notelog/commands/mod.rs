use crate::config::NotelogConfig;
use crate::model::{Alignment, DisplayEntry};

pub mod add;
pub mod config;
pub mod count;
pub mod helpers;
pub mod list;
pub mod status;

#[derive(Debug, Clone, PartialEq, Eq)]
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

#[derive(Debug, Default)]
pub struct CmdResult {
    pub entries: Vec<DisplayEntry>,
    pub note_count: Option<usize>,
    pub alignment: Option<Alignment>,
    pub config: Option<NotelogConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_entries(mut self, entries: Vec<DisplayEntry>) -> Self {
        self.entries = entries;
        self
    }

    pub fn with_note_count(mut self, count: usize) -> Self {
        self.note_count = Some(count);
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn with_config(mut self, config: NotelogConfig) -> Self {
        self.config = Some(config);
        self
    }
}
