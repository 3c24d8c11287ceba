//! Completion engine
//!
//! Computes, for the text typed so far, the ordered candidate list and the
//! ghost suffix shown inline after the caret. Everything here is a pure
//! function of `(input, snapshot)`: nothing is cached between keystrokes and
//! nothing in the session is touched.

use crtsh_builtins::flags_for;
use crtsh_core::{FileSystemNode, SessionSnapshot};
use crtsh_parser::BuiltinKind;

/// Which segment of the input the candidates complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionContext {
    /// Still typing the first word.
    Command,
    /// Past the first space; `command` is the lowercased first word.
    Argument { command: String },
}

/// Result of one completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub context: CompletionContext,
    /// The fragment candidates are matched against; the command word is
    /// lowercased.
    pub fragment: String,
    pub candidates: Vec<String>,
    /// Remainder of the first candidate beyond `fragment`; empty when there is
    /// nothing to preview.
    pub ghost: String,
}

impl Completion {
    fn empty(context: CompletionContext, fragment: String) -> Self {
        Self {
            context,
            fragment,
            candidates: Vec::new(),
            ghost: String::new(),
        }
    }

    pub fn has_ghost(&self) -> bool {
        !self.ghost.is_empty()
    }

    /// `input` with the ghost suffix appended.
    pub fn accept_ghost(&self, input: &str) -> String {
        format!("{input}{}", self.ghost)
    }

    /// `input` rewritten to use `candidate` for the active segment.
    pub fn accept_candidate(&self, input: &str, candidate: &str) -> String {
        match &self.context {
            CompletionContext::Command => candidate.to_string(),
            CompletionContext::Argument { .. } => {
                let command = input.split(' ').next().unwrap_or_default();
                format!("{command} {candidate}")
            }
        }
    }
}

/// Complete `input` against the session state in `snapshot`.
pub fn complete(input: &str, snapshot: &SessionSnapshot) -> Completion {
    let mut parts = input.split(' ');
    let command = parts.next().unwrap_or_default();
    let rest: Vec<&str> = parts.collect();

    if input.is_empty() {
        return Completion::empty(CompletionContext::Command, String::new());
    }

    let (context, fragment, candidates) = if rest.is_empty() {
        let typed = command.to_lowercase();
        let candidates = BuiltinKind::names()
            .filter(|name| name.starts_with(&typed))
            .map(str::to_string)
            .collect();
        (CompletionContext::Command, typed, candidates)
    } else {
        let command = command.to_lowercase();
        let arg = rest.join(" ");
        let candidates = argument_candidates(&command, &arg, snapshot);
        (CompletionContext::Argument { command }, arg, candidates)
    };

    let ghost = ghost_suffix(&fragment, &candidates);
    Completion {
        context,
        fragment,
        candidates,
        ghost,
    }
}

/// Closed per-command argument table: `cd` offers `..` and directories,
/// `cat` offers files, launchers offer their model flags.
fn argument_candidates(command: &str, arg: &str, snapshot: &SessionSnapshot) -> Vec<String> {
    let Some(kind) = BuiltinKind::from_name(command) else {
        return Vec::new();
    };
    let names: Vec<String> = match kind {
        BuiltinKind::Cd => {
            let dir = snapshot.cursor.current_directory(&snapshot.fs);
            std::iter::once("..".to_string())
                .chain(
                    dir.entries()
                        .filter(|(_, node)| node.is_dir())
                        .map(|(name, _)| name.to_string()),
                )
                .collect()
        }
        BuiltinKind::Cat => {
            let dir = snapshot.cursor.current_directory(&snapshot.fs);
            dir.entries()
                .filter(|(_, node)| matches!(node, FileSystemNode::File(_)))
                .map(|(name, _)| name.to_string())
                .collect()
        }
        other => flags_for(other).iter().map(|f| f.to_string()).collect(),
    };
    names.into_iter().filter(|n| n.starts_with(arg)).collect()
}

fn ghost_suffix(fragment: &str, candidates: &[String]) -> String {
    match candidates.first() {
        Some(best) if best.len() > fragment.len() && best.starts_with(fragment) => {
            best[fragment.len()..].to_string()
        }
        _ => String::new(),
    }
}
