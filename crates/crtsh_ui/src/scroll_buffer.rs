use std::collections::VecDeque;

use crtsh_core::{ExecutionResult, SideEffect, TerminalLine};

pub const DEFAULT_CAPACITY: usize = 10_000;

/// Append-only scrollback log of rendered lines.
#[derive(Debug, Clone)]
pub struct ScrollBuffer {
    lines: VecDeque<TerminalLine>,
    capacity: usize,
}

impl Default for ScrollBuffer {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl ScrollBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Push a new line into the buffer, evicting old lines when over capacity.
    pub fn push(&mut self, line: TerminalLine) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TerminalLine> {
        self.lines.iter()
    }

    /// Append the lines of `result`, then apply its effect if it concerns the
    /// scrollback. Returns the lines that were appended and still survive,
    /// plus the effect for the caller to act on.
    pub fn apply(&mut self, result: ExecutionResult) -> (Vec<TerminalLine>, Option<SideEffect>) {
        let ExecutionResult { lines, effect } = result;
        for line in &lines {
            self.push(line.clone());
        }
        if effect == Some(SideEffect::ClearScrollback) {
            self.clear();
            return (Vec::new(), effect);
        }
        (lines, effect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_oldest() {
        let mut buf = ScrollBuffer::with_capacity(3);
        for i in 0..5 {
            buf.push(TerminalLine::output(format!("line {i}")));
        }
        let kept: Vec<_> = buf.iter().map(|l| l.content.as_str()).collect();
        assert_eq!(kept, vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn clear_wipes_its_own_echo() {
        let mut buf = ScrollBuffer::default();
        buf.push(TerminalLine::output("old"));
        let mut result = ExecutionResult::with_effect(SideEffect::ClearScrollback);
        result.push(TerminalLine::input("clear", "~"));
        let (shown, effect) = buf.apply(result);
        assert!(shown.is_empty());
        assert!(buf.is_empty());
        assert_eq!(effect, Some(SideEffect::ClearScrollback));
    }

    #[test]
    fn other_effects_keep_lines() {
        let mut buf = ScrollBuffer::default();
        let mut result = ExecutionResult::with_effect(SideEffect::Logout);
        result.push(TerminalLine::system("bye"));
        let (shown, effect) = buf.apply(result);
        assert_eq!(shown.len(), 1);
        assert_eq!(buf.len(), 1);
        assert_eq!(effect, Some(SideEffect::Logout));
    }
}
