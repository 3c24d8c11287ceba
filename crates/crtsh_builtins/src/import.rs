//! `import` builtin – ask the front end for a host file to bring in.
//!
//! The command itself only announces the request; the caller picks the file
//! and hands its content to `ShellContext::import_file`.

use crtsh_core::{Builtin, ExecutionResult, ShellContext, ShellResult, SideEffect, TerminalLine};
use crtsh_parser::BuiltinKind;

/// The `import` builtin command implementation (also answers to `upload`)
pub struct ImportCommand;

impl Builtin for ImportCommand {
    fn kind(&self) -> BuiltinKind {
        BuiltinKind::Import
    }

    fn synopsis(&self) -> &'static str {
        "Import a file into the current directory"
    }

    fn usage(&self) -> &'static str {
        "import"
    }

    fn execute(&self, _ctx: &mut ShellContext, _args: &[String]) -> ShellResult<ExecutionResult> {
        let mut result = ExecutionResult::with_effect(SideEffect::RequestImport);
        result.push(TerminalLine::system("initializing tape reader..."));
        Ok(result)
    }
}
