//! `clear` builtin – wipe the scrollback.

use crtsh_core::{Builtin, ExecutionResult, ShellContext, ShellResult, SideEffect};
use crtsh_parser::BuiltinKind;

/// The `clear` builtin command implementation
pub struct ClearCommand;

impl Builtin for ClearCommand {
    fn kind(&self) -> BuiltinKind {
        BuiltinKind::Clear
    }

    fn synopsis(&self) -> &'static str {
        "Clear the terminal"
    }

    fn usage(&self) -> &'static str {
        "clear"
    }

    fn execute(&self, _ctx: &mut ShellContext, _args: &[String]) -> ShellResult<ExecutionResult> {
        Ok(ExecutionResult::with_effect(SideEffect::ClearScrollback))
    }
}
