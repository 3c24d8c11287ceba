//! Tagged output lines handed to the renderer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Echo of a submitted line, drawn behind a prompt.
    Input,
    Output,
    System,
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalLine {
    pub kind: LineKind,
    pub content: String,
    /// Prompt path (`~`, `~/docs`) for `input` lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl TerminalLine {
    pub fn new(kind: LineKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            path: None,
        }
    }

    pub fn input(content: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Input,
            content: content.into(),
            path: Some(path.into()),
        }
    }

    pub fn output(content: impl Into<String>) -> Self {
        Self::new(LineKind::Output, content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(LineKind::System, content)
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self::new(LineKind::Error, content)
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self::new(LineKind::Success, content)
    }
}
