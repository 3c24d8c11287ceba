//! `pwd` builtin – print the current directory.
//!
//! Names are joined with `/` below the root; at the root the line is empty.

use crtsh_core::{Builtin, ExecutionResult, ShellContext, ShellResult, TerminalLine};
use crtsh_parser::BuiltinKind;

/// The `pwd` builtin command implementation
pub struct PwdCommand;

impl Builtin for PwdCommand {
    fn kind(&self) -> BuiltinKind {
        BuiltinKind::Pwd
    }

    fn synopsis(&self) -> &'static str {
        "Print the current directory"
    }

    fn usage(&self) -> &'static str {
        "pwd"
    }

    fn execute(&self, ctx: &mut ShellContext, _args: &[String]) -> ShellResult<ExecutionResult> {
        Ok(ExecutionResult::with_lines(vec![TerminalLine::output(
            ctx.cursor().display(),
        )]))
    }
}
