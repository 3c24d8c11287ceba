//! `touch` builtin – create or overwrite a file in the current directory.
//!
//! The new file always holds the fixed placeholder text; only the first
//! operand is used.

use crtsh_core::{
    Builtin, ExecutionResult, ShellContext, ShellError, ShellResult, TerminalLine,
    PLACEHOLDER_CONTENT,
};
use crtsh_parser::BuiltinKind;

/// The `touch` builtin command implementation
pub struct TouchCommand;

impl Builtin for TouchCommand {
    fn kind(&self) -> BuiltinKind {
        BuiltinKind::Touch
    }

    fn synopsis(&self) -> &'static str {
        "Create a new file"
    }

    fn usage(&self) -> &'static str {
        "touch <name>"
    }

    fn affects_shell_state(&self) -> bool {
        true
    }

    fn execute(&self, ctx: &mut ShellContext, args: &[String]) -> ShellResult<ExecutionResult> {
        let name = args
            .first()
            .ok_or_else(|| ShellError::missing_argument(self.usage()))?;
        ctx.write_file(name, PLACEHOLDER_CONTENT)?;
        Ok(ExecutionResult::with_lines(vec![TerminalLine::success(
            format!("created {name}"),
        )]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutils::{args, sample_context};
    use crtsh_core::error::RuntimeErrorKind;
    use crtsh_core::LineKind;

    #[test]
    fn creates_placeholder_file() {
        let mut ctx = sample_context("guest");
        let out = TouchCommand.execute(&mut ctx, &args(&["a.txt"])).unwrap();
        assert_eq!(out.lines[0].kind, LineKind::Success);
        let node = ctx.filesystem().resolve(&["root", "a.txt"]).unwrap();
        assert_eq!(node.as_file().unwrap().content, PLACEHOLDER_CONTENT);
    }

    #[test]
    fn overwrites_a_directory_entry() {
        let mut ctx = sample_context("guest");
        TouchCommand.execute(&mut ctx, &args(&["documents"])).unwrap();
        let node = ctx.filesystem().resolve(&["root", "documents"]).unwrap();
        assert_eq!(node.as_file().unwrap().content, PLACEHOLDER_CONTENT);
    }

    #[test]
    fn refuses_read_only_files() {
        let mut ctx = sample_context("guest");
        let before = ctx.filesystem().clone();
        let err = TouchCommand.execute(&mut ctx, &args(&["readme.txt"])).unwrap_err();
        assert!(err.is_runtime(RuntimeErrorKind::ReadOnly));
        let err = TouchCommand.execute(&mut ctx, &[]).unwrap_err();
        assert!(err.is_runtime(RuntimeErrorKind::MissingArgument));
        assert!(ctx.filesystem().ptr_eq(&before));
    }
}
