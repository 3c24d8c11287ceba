//! rustyline integration: tab completion and ghost hints backed by the
//! completion engine, and ArrowUp/ArrowDown bound to the session history.

use std::borrow::Cow;
use std::sync::{Arc, Mutex};

use rustyline::{
    completion::{Completer, Pair},
    highlight::Highlighter,
    hint::{Hint, Hinter},
    validate::Validator,
    Cmd, ConditionalEventHandler, Context as RustylineContext, Event, EventContext, Helper,
    Movement, RepeatCount,
};

use crtsh_core::{SessionSnapshot, ShellContext};

use crate::completion::{complete, Completion};
use crate::render::Renderer;

/// Session shared between the REPL loop and the editor callbacks.
pub type SharedSession = Arc<Mutex<ShellContext>>;

fn snapshot(session: &SharedSession) -> Option<SessionSnapshot> {
    session.lock().ok().map(|ctx| ctx.snapshot())
}

/// Inline preview of the best candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GhostHint {
    suffix: String,
}

impl GhostHint {
    pub fn new(line: &str, completion: &Completion) -> Option<Self> {
        if !completion.has_ghost() {
            return None;
        }
        let accepted = completion.accept_ghost(line);
        Some(Self {
            suffix: accepted[line.len()..].to_string(),
        })
    }
}

impl Hint for GhostHint {
    fn display(&self) -> &str {
        &self.suffix
    }

    fn completion(&self) -> Option<&str> {
        Some(&self.suffix)
    }
}

pub struct CrtshHelper {
    session: SharedSession,
    renderer: Renderer,
}

impl CrtshHelper {
    pub fn new(session: SharedSession, renderer: Renderer) -> Self {
        Self { session, renderer }
    }
}

impl Completer for CrtshHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &RustylineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let Some(snap) = snapshot(&self.session) else {
            return Ok((pos, Vec::new()));
        };
        let typed = &line[..pos];
        let completion = complete(typed, &snap);
        let pairs = completion
            .candidates
            .iter()
            .map(|candidate| Pair {
                display: candidate.clone(),
                replacement: completion.accept_candidate(typed, candidate),
            })
            .collect();
        Ok((0, pairs))
    }
}

impl Hinter for CrtshHelper {
    type Hint = GhostHint;

    fn hint(&self, line: &str, pos: usize, _ctx: &RustylineContext<'_>) -> Option<GhostHint> {
        if pos < line.len() {
            return None;
        }
        let snap = snapshot(&self.session)?;
        GhostHint::new(line, &complete(line, &snap))
    }
}

impl Highlighter for CrtshHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        if self.renderer.color_enabled() {
            Cow::Owned(self.renderer.ghost(hint))
        } else {
            Cow::Borrowed(hint)
        }
    }
}

impl Validator for CrtshHelper {}

impl Helper for CrtshHelper {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Older,
    Newer,
}

/// Replaces the buffer with the next history entry in `direction`. Falls
/// through to the default key binding when there is nothing to browse.
pub struct HistoryBrowse {
    session: SharedSession,
    direction: Direction,
}

impl HistoryBrowse {
    pub fn new(session: SharedSession, direction: Direction) -> Self {
        Self { session, direction }
    }

    /// Text the buffer should hold after one step, if any.
    pub fn step(&self) -> Option<String> {
        let mut ctx = self.session.lock().ok()?;
        let history = ctx.history_mut();
        let entry = match self.direction {
            Direction::Older => history.older(),
            Direction::Newer => history.newer(),
        };
        entry.map(str::to_string)
    }
}

impl ConditionalEventHandler for HistoryBrowse {
    fn handle(
        &self,
        _evt: &Event,
        _n: RepeatCount,
        _positive: bool,
        _ctx: &EventContext,
    ) -> Option<Cmd> {
        self.step()
            .map(|text| Cmd::Replace(Movement::WholeBuffer, Some(text)))
    }
}
