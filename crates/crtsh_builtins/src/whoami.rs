//! `whoami` builtin – report the session user and clearance.

use crtsh_core::{
    Builtin, ClearanceLevel, ExecutionResult, ShellContext, ShellResult, TerminalLine,
};
use crtsh_parser::BuiltinKind;

/// The `whoami` builtin command implementation
pub struct WhoamiCommand;

impl Builtin for WhoamiCommand {
    fn kind(&self) -> BuiltinKind {
        BuiltinKind::Whoami
    }

    fn synopsis(&self) -> &'static str {
        "Show the current user and clearance"
    }

    fn usage(&self) -> &'static str {
        "whoami"
    }

    fn execute(&self, ctx: &mut ShellContext, _args: &[String]) -> ShellResult<ExecutionResult> {
        let mut result = ExecutionResult::new();
        result.push(TerminalLine::output(format!("user: {}", ctx.user())));
        if ctx.is_high_command() {
            result.push(TerminalLine::success(format!(
                "clearance: {} (high command)",
                ClearanceLevel::Omega.label()
            )));
        } else {
            result.push(TerminalLine::output(format!(
                "clearance: {} (restricted)",
                ClearanceLevel::II.label()
            )));
            result.push(TerminalLine::system(
                "warning: high-security terminal, some functions may be locked",
            ));
        }
        Ok(result)
    }
}
