use crtsh_core::{DirectoryNode, FileNode, FileSystem, ShellContext, ROOT_NAME};

/// Small tree shared by the builtin unit tests:
///
/// ```text
/// root/
///   readme.txt (read-only)
///   documents/
///     notes.txt
///     archive/
///   logs/
/// ```
pub fn sample_context(user: &str) -> ShellContext {
    let fs = FileSystem::new(
        DirectoryNode::new(ROOT_NAME)
            .with_file(FileNode::new("readme.txt", "welcome").read_only())
            .with_dir(
                DirectoryNode::new("documents")
                    .with_file(FileNode::new("notes.txt", "remember"))
                    .with_dir(DirectoryNode::new("archive")),
            )
            .with_dir(DirectoryNode::new("logs")),
    )
    .expect("sample tree is valid");
    ShellContext::new(fs, user)
}

pub fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn contents(result: &crtsh_core::ExecutionResult) -> Vec<&str> {
    result.lines.iter().map(|l| l.content.as_str()).collect()
}
