//! `tree` builtin – draw the current directory recursively.
//!
//! ```text
//! .
//! ├── documents/
//! │   └── notes.txt
//! └── readme.txt
//! ```

use crtsh_core::{
    Builtin, DirectoryNode, ExecutionResult, FileSystemNode, ShellContext, ShellResult,
    TerminalLine,
};
use crtsh_parser::BuiltinKind;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const BLANK: &str = "    ";

/// The `tree` builtin command implementation
pub struct TreeCommand;

impl Builtin for TreeCommand {
    fn kind(&self) -> BuiltinKind {
        BuiltinKind::Tree
    }

    fn synopsis(&self) -> &'static str {
        "Show the directory structure below here"
    }

    fn usage(&self) -> &'static str {
        "tree"
    }

    fn execute(&self, ctx: &mut ShellContext, _args: &[String]) -> ShellResult<ExecutionResult> {
        let mut rendered = vec![".".to_string()];
        render(&ctx.current_directory(), "", &mut rendered);
        Ok(ExecutionResult::with_lines(
            rendered.into_iter().map(TerminalLine::output).collect(),
        ))
    }
}

/// Append one line per descendant of `dir`, depth first.
pub fn render(dir: &DirectoryNode, prefix: &str, out: &mut Vec<String>) {
    let count = dir.children.len();
    for (i, (name, node)) in dir.entries().enumerate() {
        let last = i + 1 == count;
        let connector = if last { LAST_BRANCH } else { BRANCH };
        let suffix = if node.is_dir() { "/" } else { "" };
        out.push(format!("{prefix}{connector}{name}{suffix}"));
        if let FileSystemNode::Dir(sub) = node {
            let child_prefix = format!("{prefix}{}", if last { BLANK } else { PIPE });
            render(sub, &child_prefix, out);
        }
    }
}
