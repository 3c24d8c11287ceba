//! In-memory filesystem store.
//!
//! The tree is persistent: directories hold their children behind `Arc`, and
//! a mutation rebuilds only the directories on the path from the root to the
//! changed entry. Every other subtree is shared with the previous version, so
//! a `FileSystem` value (or any node handle taken from it) is an immutable
//! snapshot that later inserts cannot disturb.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{ShellError, ShellResult};

/// Reserved name of the root directory. It heads every cursor path but is
/// never shown as a path segment.
pub const ROOT_NAME: &str = "root";

fn is_false(b: &bool) -> bool {
    !*b
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNode {
    pub name: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, rename = "readOnly", alias = "read_only", skip_serializing_if = "is_false")]
    pub read_only: bool,
}

impl FileNode {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            read_only: false,
        }
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DirectoryNode {
    pub name: String,
    #[serde(default)]
    pub children: BTreeMap<String, FileSystemNode>,
}

impl DirectoryNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: BTreeMap::new(),
        }
    }

    /// Builder used by seeds and tests.
    pub fn with_file(mut self, file: FileNode) -> Self {
        self.children
            .insert(file.name.clone(), FileSystemNode::File(Arc::new(file)));
        self
    }

    /// Builder used by seeds and tests.
    pub fn with_dir(mut self, dir: DirectoryNode) -> Self {
        self.children
            .insert(dir.name.clone(), FileSystemNode::Dir(Arc::new(dir)));
        self
    }

    pub fn child(&self, name: &str) -> Option<&FileSystemNode> {
        self.children.get(name)
    }

    /// Children in listing order (byte-wise by name).
    pub fn entries(&self) -> impl Iterator<Item = (&str, &FileSystemNode)> {
        self.children.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    File,
    Dir,
}

/// A node handle. Cloning is cheap and the handle never observes later
/// mutations of the store it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FileSystemNode {
    #[serde(rename = "FILE")]
    File(Arc<FileNode>),
    #[serde(rename = "DIR")]
    Dir(Arc<DirectoryNode>),
}

impl FileSystemNode {
    pub fn name(&self) -> &str {
        match self {
            FileSystemNode::File(f) => &f.name,
            FileSystemNode::Dir(d) => &d.name,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            FileSystemNode::File(_) => NodeKind::File,
            FileSystemNode::Dir(_) => NodeKind::Dir,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind() == NodeKind::Dir
    }

    pub fn as_file(&self) -> Option<&Arc<FileNode>> {
        match self {
            FileSystemNode::File(f) => Some(f),
            FileSystemNode::Dir(_) => None,
        }
    }

    pub fn as_dir(&self) -> Option<&Arc<DirectoryNode>> {
        match self {
            FileSystemNode::Dir(d) => Some(d),
            FileSystemNode::File(_) => None,
        }
    }
}

/// The filesystem store: a root directory plus path resolution and
/// copy-on-write insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSystem {
    root: Arc<DirectoryNode>,
}

impl Default for FileSystem {
    fn default() -> Self {
        Self {
            root: Arc::new(DirectoryNode::new(ROOT_NAME)),
        }
    }
}

impl FileSystem {
    /// Build a store from a seed tree, checking the shape a seed must have:
    /// the root is named `root` and every child key equals the child's name.
    pub fn new(root: DirectoryNode) -> ShellResult<Self> {
        if root.name != ROOT_NAME {
            return Err(ShellError::invalid_seed(format!(
                "root directory must be named '{ROOT_NAME}', found '{}'",
                root.name
            )));
        }
        validate_dir(&root, ROOT_NAME)?;
        Ok(Self {
            root: Arc::new(root),
        })
    }

    pub fn root(&self) -> &Arc<DirectoryNode> {
        &self.root
    }

    /// Whether two stores share the same root allocation, i.e. one is an
    /// unmodified copy of the other.
    pub fn ptr_eq(&self, other: &FileSystem) -> bool {
        Arc::ptr_eq(&self.root, &other.root)
    }

    /// Resolve a full path (`["root", ...]`). `None` when the path does not
    /// start at the root, names a missing entry, or walks through a file.
    pub fn resolve<S: AsRef<str>>(&self, path: &[S]) -> Option<FileSystemNode> {
        let rest = strip_root(path)?;
        let mut node = FileSystemNode::Dir(Arc::clone(&self.root));
        for segment in rest {
            let next = node.as_dir()?.child(segment.as_ref())?.clone();
            node = next;
        }
        Some(node)
    }

    /// Resolve a path that must name a directory.
    pub fn resolve_dir<S: AsRef<str>>(&self, path: &[S]) -> Option<Arc<DirectoryNode>> {
        match self.resolve(path)? {
            FileSystemNode::Dir(dir) => Some(dir),
            FileSystemNode::File(_) => None,
        }
    }

    /// List a directory as `(name, kind)` pairs in listing order.
    pub fn list_children<S: AsRef<str>>(&self, path: &[S]) -> ShellResult<Vec<(String, NodeKind)>> {
        match self.resolve(path) {
            Some(FileSystemNode::Dir(dir)) => Ok(dir
                .entries()
                .map(|(name, node)| (name.to_string(), node.kind()))
                .collect()),
            Some(FileSystemNode::File(f)) => Err(ShellError::not_a_directory(&f.name)),
            None => Err(ShellError::not_found("directory", &display_path(path))),
        }
    }

    /// Return a new store in which the directory at `parent_path` maps
    /// `name` to a file holding `content`. Whatever entry already has that
    /// name is replaced, unless it is a read-only file. `self` is left
    /// untouched.
    pub fn insert_file<S: AsRef<str>>(
        &self,
        parent_path: &[S],
        name: &str,
        content: impl Into<String>,
    ) -> ShellResult<FileSystem> {
        if !is_valid_name(name) {
            return Err(ShellError::invalid_name(name));
        }
        let rest = strip_root(parent_path)
            .ok_or_else(|| ShellError::not_found("directory", &display_path(parent_path)))?;
        let file = FileNode::new(name, content);
        let root = insert_into(&self.root, rest, file)?;
        Ok(FileSystem {
            root: Arc::new(root),
        })
    }
}

fn strip_root<S: AsRef<str>>(path: &[S]) -> Option<&[S]> {
    match path.split_first() {
        Some((first, rest)) if first.as_ref() == ROOT_NAME => Some(rest),
        _ => None,
    }
}

fn display_path<S: AsRef<str>>(path: &[S]) -> String {
    path.iter()
        .skip(1)
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("/")
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains('/')
}

fn insert_into<S: AsRef<str>>(
    dir: &DirectoryNode,
    rest: &[S],
    file: FileNode,
) -> ShellResult<DirectoryNode> {
    let mut next = dir.clone();
    match rest.split_first() {
        None => {
            if let Some(FileSystemNode::File(existing)) = dir.child(&file.name) {
                if existing.read_only {
                    return Err(ShellError::read_only(&file.name));
                }
            }
            next.children
                .insert(file.name.clone(), FileSystemNode::File(Arc::new(file)));
        }
        Some((segment, tail)) => {
            let segment = segment.as_ref();
            let child = match dir.child(segment) {
                Some(FileSystemNode::Dir(child)) => insert_into(child, tail, file)?,
                Some(FileSystemNode::File(_)) => return Err(ShellError::not_a_directory(segment)),
                None => return Err(ShellError::not_found("directory", segment)),
            };
            next.children
                .insert(segment.to_string(), FileSystemNode::Dir(Arc::new(child)));
        }
    }
    Ok(next)
}

fn validate_dir(dir: &DirectoryNode, path: &str) -> ShellResult<()> {
    for (key, child) in &dir.children {
        if key != child.name() {
            return Err(ShellError::invalid_seed(format!(
                "entry '{key}' under '{path}' is named '{}'",
                child.name()
            )));
        }
        if !is_valid_name(key) {
            return Err(ShellError::invalid_seed(format!("invalid entry name '{key}' under '{path}'")));
        }
        if let FileSystemNode::Dir(sub) = child {
            validate_dir(sub, &format!("{path}/{key}"))?;
        }
    }
    Ok(())
}
