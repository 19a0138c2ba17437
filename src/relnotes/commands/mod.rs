use crate::config::RelnotesConfig;
use std::collections::BTreeMap;
use std::path::PathBuf;

pub mod config;
pub mod extract;
pub mod merge;
pub mod update;

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

/// Structured outcome of every operation. The CLI decides how to show it.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Text meant for stdout as is (an extracted section)
    pub output: Option<String>,
    /// Documents written by the operation
    pub written: Vec<PathBuf>,
    /// Identifiers captured while running a pipeline, by name
    pub captured: BTreeMap<String, String>,
    pub config: Option<RelnotesConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_output(mut self, output: String) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_written(mut self, path: PathBuf) -> Self {
        self.written.push(path);
        self
    }

    pub fn with_config(mut self, config: RelnotesConfig) -> Self {
        self.config = Some(config);
        self
    }
}
