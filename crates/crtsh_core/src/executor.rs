//! Builtin command contract and the result of running one line.

use crtsh_parser::BuiltinKind;

use crate::context::ShellContext;
use crate::error::ShellResult;
use crate::output::TerminalLine;

/// External subsystems a command can ask the front end to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppKind {
    /// System monitor.
    Sys,
    /// Global site map.
    Map,
    /// Bio-scanner.
    Scan,
    /// AI chat core.
    Ai,
    /// Surveillance cameras.
    Cam,
}

impl AppKind {
    pub fn title(self) -> &'static str {
        match self {
            AppKind::Sys => "SYSTEM MONITOR",
            AppKind::Map => "GLOBAL DEFENSE MAP",
            AppKind::Scan => "BIO-SCANNER",
            AppKind::Ai => "AI CORE",
            AppKind::Cam => "SURVEILLANCE",
        }
    }
}

/// Model preference passed through to a launched subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelHint {
    Flash,
    Pro,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    pub app: AppKind,
    pub model: Option<ModelHint>,
}

/// Work the interpreter hands back to its caller instead of doing itself.
/// The interpreter never waits on any of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideEffect {
    /// Empty the scrollback log.
    ClearScrollback,
    /// Ask the user for a file to import into the current directory.
    RequestImport,
    Launch(LaunchRequest),
    Logout,
}

/// Outcome of one submitted line: lines to append, then an optional effect
/// to apply after appending them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExecutionResult {
    pub lines: Vec<TerminalLine>,
    pub effect: Option<SideEffect>,
}

impl ExecutionResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lines(lines: Vec<TerminalLine>) -> Self {
        Self {
            lines,
            effect: None,
        }
    }

    pub fn with_effect(effect: SideEffect) -> Self {
        Self {
            lines: Vec::new(),
            effect: Some(effect),
        }
    }

    pub fn push(&mut self, line: TerminalLine) -> &mut Self {
        self.lines.push(line);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.effect.is_none()
    }
}

/// A built-in command.
pub trait Builtin: Send + Sync {
    /// Which entry of the command table this builtin serves.
    fn kind(&self) -> BuiltinKind;

    /// One-line description for `help`.
    fn synopsis(&self) -> &'static str;

    /// Usage string, e.g. `cat <file>`.
    fn usage(&self) -> &'static str;

    /// Whether the command can change the filesystem or cursor.
    fn affects_shell_state(&self) -> bool {
        false
    }

    /// Run the command. Errors are reported by the caller as `error` lines;
    /// an `Err` must leave `ctx` exactly as it was.
    fn execute(&self, ctx: &mut ShellContext, args: &[String]) -> ShellResult<ExecutionResult>;

    fn name(&self) -> &'static str {
        self.kind().name()
    }
}
