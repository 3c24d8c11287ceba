//! `logout` builtin – end the session.

use crtsh_core::{Builtin, ExecutionResult, ShellContext, ShellResult, SideEffect, TerminalLine};
use crtsh_parser::BuiltinKind;

/// The `logout` builtin command implementation
pub struct LogoutCommand;

impl Builtin for LogoutCommand {
    fn kind(&self) -> BuiltinKind {
        BuiltinKind::Logout
    }

    fn synopsis(&self) -> &'static str {
        "Terminate the session"
    }

    fn usage(&self) -> &'static str {
        "logout"
    }

    fn execute(&self, ctx: &mut ShellContext, _args: &[String]) -> ShellResult<ExecutionResult> {
        let mut result = ExecutionResult::with_effect(SideEffect::Logout);
        result.push(TerminalLine::system(format!("session closed for {}", ctx.user())));
        Ok(result)
    }
}
