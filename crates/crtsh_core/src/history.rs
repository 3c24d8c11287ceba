//! Command history with a browse cursor.

use std::collections::VecDeque;

/// Previously submitted lines, oldest first, plus the position of an
/// in-progress history browse.
///
/// `browse` counts back from the newest entry: `Some(0)` is the newest line,
/// `None` means the user is editing live input.
#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    entries: VecDeque<String>,
    max_entries: Option<usize>,
    browse: Option<usize>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A history that evicts its oldest entry beyond `max_entries`.
    pub fn with_capacity_limit(max_entries: usize) -> Self {
        Self {
            max_entries: Some(max_entries.max(1)),
            ..Self::default()
        }
    }

    /// Record a submitted line and leave browse mode. Blank lines are
    /// ignored.
    pub fn push(&mut self, line: &str) {
        let line = line.trim();
        self.browse = None;
        if line.is_empty() {
            return;
        }
        self.entries.push_back(line.to_string());
        if let Some(max) = self.max_entries {
            while self.entries.len() > max {
                self.entries.pop_front();
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// The `n`-th most recent entry (`0` = newest).
    pub fn recent(&self, n: usize) -> Option<&str> {
        let len = self.entries.len();
        if n >= len {
            return None;
        }
        self.entries.get(len - 1 - n).map(String::as_str)
    }

    pub fn browse_position(&self) -> Option<usize> {
        self.browse
    }

    /// Step toward older entries (ArrowUp). Clamps at the oldest entry and
    /// returns `None` only when the history is empty.
    pub fn older(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let next = match self.browse {
            None => 0,
            Some(i) => (i + 1).min(self.entries.len() - 1),
        };
        self.browse = Some(next);
        self.recent(next)
    }

    /// Step toward newer entries (ArrowDown). Stepping past the newest entry
    /// returns to live input, reported as `Some("")`; `None` when not
    /// browsing at all.
    pub fn newer(&mut self) -> Option<&str> {
        match self.browse {
            None => None,
            Some(0) => {
                self.browse = None;
                Some("")
            }
            Some(i) => {
                self.browse = Some(i - 1);
                self.recent(i - 1)
            }
        }
    }

    /// Leave browse mode without recording anything.
    pub fn reset_browse(&mut self) {
        self.browse = None;
    }
}
