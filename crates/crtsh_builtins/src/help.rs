//! `help` builtin – list every command with its usage.

use crtsh_core::{Builtin, ExecutionResult, ShellContext, ShellResult, TerminalLine};
use crtsh_parser::BuiltinKind;

use crate::{builtin_for, launch};

/// The `help` builtin command implementation
pub struct HelpCommand;

impl Builtin for HelpCommand {
    fn kind(&self) -> BuiltinKind {
        BuiltinKind::Help
    }

    fn synopsis(&self) -> &'static str {
        "Show this list"
    }

    fn usage(&self) -> &'static str {
        "help"
    }

    fn execute(&self, _ctx: &mut ShellContext, _args: &[String]) -> ShellResult<ExecutionResult> {
        let (launchers, commands): (Vec<_>, Vec<_>) = BuiltinKind::ALL
            .iter()
            .copied()
            .partition(|kind| launch::app_for(*kind).is_some());

        let mut result = ExecutionResult::new();
        result.push(TerminalLine::system("available commands:"));
        for kind in commands {
            result.push(TerminalLine::output(entry(kind)));
        }
        result.push(TerminalLine::system("visual subsystems:"));
        for kind in launchers {
            result.push(TerminalLine::output(entry(kind)));
        }
        Ok(result)
    }
}

fn entry(kind: BuiltinKind) -> String {
    let builtin = builtin_for(kind);
    format!("  {:<16}{}", builtin.usage(), builtin.synopsis())
}
