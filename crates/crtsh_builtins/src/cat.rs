//! `cat` builtin – print a file from the current directory.

use crtsh_core::{
    Builtin, ExecutionResult, FileSystemNode, ShellContext, ShellError, ShellResult, TerminalLine,
};
use crtsh_parser::BuiltinKind;

/// The `cat` builtin command implementation
pub struct CatCommand;

impl Builtin for CatCommand {
    fn kind(&self) -> BuiltinKind {
        BuiltinKind::Cat
    }

    fn synopsis(&self) -> &'static str {
        "Print the contents of a file"
    }

    fn usage(&self) -> &'static str {
        "cat <file>"
    }

    fn execute(&self, ctx: &mut ShellContext, args: &[String]) -> ShellResult<ExecutionResult> {
        let name = args
            .first()
            .ok_or_else(|| ShellError::missing_argument(self.usage()))?;
        let dir = ctx.current_directory();
        match dir.child(name) {
            Some(FileSystemNode::File(file)) => Ok(ExecutionResult::with_lines(vec![
                TerminalLine::output(file.content.clone()),
            ])),
            Some(FileSystemNode::Dir(_)) => Err(ShellError::not_a_file(name)),
            None => Err(ShellError::not_found("file", name)),
        }
    }
}
