//! `comms` builtin – list the secure contacts directory.

use crtsh_core::{Builtin, ExecutionResult, ShellContext, ShellResult, TerminalLine};
use crtsh_parser::BuiltinKind;

/// The `comms` builtin command implementation
pub struct CommsCommand;

impl Builtin for CommsCommand {
    fn kind(&self) -> BuiltinKind {
        BuiltinKind::Comms
    }

    fn synopsis(&self) -> &'static str {
        "List secure contacts"
    }

    fn usage(&self) -> &'static str {
        "comms"
    }

    fn execute(&self, ctx: &mut ShellContext, _args: &[String]) -> ShellResult<ExecutionResult> {
        let mut result = ExecutionResult::new();
        result.push(TerminalLine::system("secure contacts:"));
        if ctx.contacts().is_empty() {
            result.push(TerminalLine::output("(none)"));
        }
        for contact in ctx.contacts() {
            result.push(TerminalLine::output(format!(
                "[{}] {} - {}",
                contact.id, contact.name, contact.role
            )));
        }
        result.push(TerminalLine::system("use 'ai' to open a secure channel"));
        Ok(result)
    }
}
