//! `ls` builtin – list the current directory.

use crtsh_core::{Builtin, ExecutionResult, NodeKind, ShellContext, ShellResult, TerminalLine};
use crtsh_parser::BuiltinKind;

/// Marker printed for a directory with no children.
pub const EMPTY_MARKER: &str = "(empty)";

/// The `ls` builtin command implementation
pub struct LsCommand;

impl Builtin for LsCommand {
    fn kind(&self) -> BuiltinKind {
        BuiltinKind::Ls
    }

    fn synopsis(&self) -> &'static str {
        "List directory contents"
    }

    fn usage(&self) -> &'static str {
        "ls"
    }

    fn execute(&self, ctx: &mut ShellContext, _args: &[String]) -> ShellResult<ExecutionResult> {
        let entries = ctx.filesystem().list_children(ctx.cursor().path())?;
        if entries.is_empty() {
            return Ok(ExecutionResult::with_lines(vec![TerminalLine::output(EMPTY_MARKER)]));
        }
        let lines = entries
            .into_iter()
            .map(|(name, kind)| match kind {
                NodeKind::Dir => TerminalLine::output(format!("{name}/")),
                NodeKind::File => TerminalLine::output(name),
            })
            .collect();
        Ok(ExecutionResult::with_lines(lines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutils::{contents, sample_context};

    #[test]
    fn lists_in_byte_order_with_dir_suffix() {
        let mut ctx = sample_context("guest");
        let out = LsCommand.execute(&mut ctx, &[]).unwrap();
        assert_eq!(contents(&out), vec!["documents/", "logs/", "readme.txt"]);
    }

    #[test]
    fn empty_directory_prints_marker() {
        let mut ctx = sample_context("guest");
        ctx.change_directory("logs").unwrap();
        let out = LsCommand.execute(&mut ctx, &[]).unwrap();
        assert_eq!(contents(&out), vec![EMPTY_MARKER]);
    }
}
