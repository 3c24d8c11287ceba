//! `cd` builtin – move the navigation cursor.
//!
//! `cd` with no operand returns to the root, `cd ..` climbs one level and
//! stays put at the root, anything else must name a child directory of the
//! current directory.

use crtsh_core::{Builtin, ExecutionResult, ShellContext, ShellResult};
use crtsh_parser::BuiltinKind;

/// The `cd` builtin command implementation
pub struct CdCommand;

impl Builtin for CdCommand {
    fn kind(&self) -> BuiltinKind {
        BuiltinKind::Cd
    }

    fn synopsis(&self) -> &'static str {
        "Change the current directory"
    }

    fn usage(&self) -> &'static str {
        "cd <dir>"
    }

    fn affects_shell_state(&self) -> bool {
        true
    }

    fn execute(&self, ctx: &mut ShellContext, args: &[String]) -> ShellResult<ExecutionResult> {
        let target = args.first().map(String::as_str).unwrap_or("/");
        ctx.change_directory(target)?;
        Ok(ExecutionResult::new())
    }
}
