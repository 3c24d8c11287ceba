//! Current-working-directory tracking.

use std::sync::Arc;

use crate::error::{ShellError, ShellResult};
use crate::vfs::{DirectoryNode, FileSystem, FileSystemNode, ROOT_NAME};

/// The current directory as a list of segments starting at the root.
///
/// A cursor is only ever built or moved through checked operations, so its
/// path always resolves to a directory in the store it was validated against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationCursor {
    path: Vec<String>,
}

impl Default for NavigationCursor {
    fn default() -> Self {
        Self {
            path: vec![ROOT_NAME.to_string()],
        }
    }
}

impl NavigationCursor {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn is_root(&self) -> bool {
        self.path.len() == 1
    }

    /// Segments below the root joined by `/`; empty at the root.
    pub fn display(&self) -> String {
        self.path[1..].join("/")
    }

    /// Prompt form of the path: `~` at the root, `~/a/b` below it.
    pub fn prompt_path(&self) -> String {
        if self.is_root() {
            "~".to_string()
        } else {
            format!("~/{}", self.display())
        }
    }

    /// Compute the cursor after `cd target`. `..` pops a segment (a no-op at
    /// the root), `/` or an empty target returns to the root, and anything
    /// else must name a child directory of the current directory.
    pub fn change_directory(&self, fs: &FileSystem, target: &str) -> ShellResult<NavigationCursor> {
        match target {
            ".." => {
                let mut next = self.clone();
                if !next.is_root() {
                    next.path.pop();
                }
                Ok(next)
            }
            "" | "/" => Ok(Self::root()),
            name => match self.current_directory(fs).child(name) {
                Some(FileSystemNode::Dir(_)) => {
                    let mut next = self.clone();
                    next.path.push(name.to_string());
                    Ok(next)
                }
                Some(FileSystemNode::File(_)) => Err(ShellError::not_a_directory(name)),
                None => Err(ShellError::not_found("directory", name)),
            },
        }
    }

    /// The directory the cursor points at.
    ///
    /// Writes only replace entries of the current directory, so a cursor
    /// validated against an earlier version still resolves. Should it not (a
    /// foreign store), a warning is logged and the deepest resolvable ancestor
    /// is returned instead.
    pub fn current_directory(&self, fs: &FileSystem) -> Arc<DirectoryNode> {
        let mut dir = Arc::clone(fs.root());
        for (depth, segment) in self.path[1..].iter().enumerate() {
            match dir.child(segment) {
                Some(FileSystemNode::Dir(child)) => dir = Arc::clone(child),
                _ => {
                    crate::crtsh_log_warn!(
                        path = %self.display(),
                        missing = %segment,
                        depth,
                        "cursor does not resolve in this store; using nearest ancestor"
                    );
                    break;
                }
            }
        }
        dir
    }

    /// Whether the path resolves to a directory in `fs`.
    pub fn is_valid_in(&self, fs: &FileSystem) -> bool {
        fs.resolve_dir(&self.path).is_some()
    }
}
