//! Line dispatcher.

use crtsh_core::{
    crtsh_debug_span, crtsh_log_debug, ExecutionResult, ShellContext, ShellError, ShellResult,
    TerminalLine,
};
use crtsh_parser::{parse, CommandKind, ParseError};

use crate::builtin_for;

/// Runs submitted lines against a [`ShellContext`].
///
/// Stateless: all session state lives in the context, so one interpreter can
/// serve any number of sessions.
#[derive(Debug, Default, Clone, Copy)]
pub struct Interpreter;

impl Interpreter {
    pub fn new() -> Self {
        Self
    }

    /// Execute one raw line.
    ///
    /// Blank input is a no-op: nothing is echoed or recorded. Otherwise the
    /// trimmed line is appended to history, echoed behind the prompt path
    /// captured before execution, and followed by the command's own output
    /// or a single error line.
    pub fn execute(&self, ctx: &mut ShellContext, line: &str) -> ExecutionResult {
        let command = match parse(line) {
            Ok(command) => command,
            Err(ParseError::EmptyInput) => return ExecutionResult::new(),
        };

        let prompt = ctx.cursor().prompt_path();
        ctx.history_mut().push(&command.raw);
        let mut result = ExecutionResult::with_lines(vec![TerminalLine::input(
            command.raw.as_str(),
            prompt,
        )]);

        match self.dispatch(ctx, &command.kind, &command.args) {
            Ok(output) => {
                result.lines.extend(output.lines);
                result.effect = output.effect;
            }
            Err(err) => {
                crtsh_log_debug!(line = %command.raw, error = %err, "command failed");
                result.push(TerminalLine::error(describe(&command.kind, &err)));
            }
        }
        result
    }

    fn dispatch(
        &self,
        ctx: &mut ShellContext,
        kind: &CommandKind,
        args: &[String],
    ) -> ShellResult<ExecutionResult> {
        match kind {
            CommandKind::Builtin(kind) => {
                let _span = crtsh_debug_span!("builtin", name = kind.name()).entered();
                crtsh_log_debug!(args = args.len(), "dispatch");
                builtin_for(*kind).execute(ctx, args)
            }
            CommandKind::Unknown(name) => Err(ShellError::unknown_command(name)),
        }
    }
}

fn describe(kind: &CommandKind, err: &ShellError) -> String {
    match kind {
        CommandKind::Builtin(kind) => format!("{}: {}", kind.name(), err.user_message()),
        CommandKind::Unknown(_) => err.user_message().to_string(),
    }
}
