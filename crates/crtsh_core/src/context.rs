//! Session state owned by one interpreter instance.

use std::sync::Arc;

use crate::cursor::NavigationCursor;
use crate::error::ShellResult;
use crate::history::CommandHistory;
use crate::seed::{Contact, SeedData};
use crate::vfs::{DirectoryNode, FileSystem};

/// User names granted the highest clearance, compared case-insensitively.
const HIGH_COMMAND_NAMES: [&str; 5] = ["Ω", "Omega", "Observer", "观察者", "Observation"];

/// Text written by `touch` into newly created files.
pub const PLACEHOLDER_CONTENT: &str = "New file content...";

/// Filesystem, cursor and history of one terminal session, plus the
/// read-mostly data the builtins consult.
#[derive(Debug, Clone)]
pub struct ShellContext {
    fs: FileSystem,
    cursor: NavigationCursor,
    history: CommandHistory,
    user: String,
    contacts: Vec<Contact>,
}

/// Immutable view of the state completion reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub fs: FileSystem,
    pub cursor: NavigationCursor,
}

impl ShellContext {
    pub fn new(fs: FileSystem, user: impl Into<String>) -> Self {
        Self {
            fs,
            cursor: NavigationCursor::root(),
            history: CommandHistory::new(),
            user: user.into(),
            contacts: Vec::new(),
        }
    }

    pub fn from_seed(seed: SeedData, user: impl Into<String>) -> ShellResult<Self> {
        let (fs, contacts) = seed.into_parts()?;
        let mut ctx = Self::new(fs, user);
        ctx.contacts = contacts;
        Ok(ctx)
    }

    pub fn with_history(mut self, history: CommandHistory) -> Self {
        self.history = history;
        self
    }

    pub fn filesystem(&self) -> &FileSystem {
        &self.fs
    }

    pub fn cursor(&self) -> &NavigationCursor {
        &self.cursor
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut CommandHistory {
        &mut self.history
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            fs: self.fs.clone(),
            cursor: self.cursor.clone(),
        }
    }

    /// Whether the user holds the highest clearance.
    pub fn is_high_command(&self) -> bool {
        let name = self.user.trim().to_lowercase();
        HIGH_COMMAND_NAMES.iter().any(|h| h.to_lowercase() == name)
    }

    pub fn current_directory(&self) -> Arc<DirectoryNode> {
        self.cursor.current_directory(&self.fs)
    }

    /// Move the cursor; on error the cursor is unchanged.
    pub fn change_directory(&mut self, target: &str) -> ShellResult<()> {
        self.cursor = self.cursor.change_directory(&self.fs, target)?;
        Ok(())
    }

    /// Create or overwrite a file in the current directory.
    pub fn write_file(&mut self, name: &str, content: impl Into<String>) -> ShellResult<()> {
        self.fs = self.fs.insert_file(self.cursor.path(), name, content)?;
        crate::crtsh_log_info!(dir = %self.cursor.prompt_path(), name, "file written");
        Ok(())
    }

    /// Entry point for the import collaborator: store `content` under `name`
    /// in the current directory.
    pub fn import_file(&mut self, name: &str, content: impl Into<String>) -> ShellResult<()> {
        self.write_file(name, content)
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn add_contact(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// Remove a contact by id; `false` when no contact had that id.
    pub fn delete_contact(&mut self, id: &str) -> bool {
        let before = self.contacts.len();
        self.contacts.retain(|c| c.id != id);
        self.contacts.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuntimeErrorKind;
    use crate::seed::{ClearanceLevel, ContactStatus};
    use crate::vfs::{FileNode, ROOT_NAME};

    fn ctx(user: &str) -> ShellContext {
        let fs = FileSystem::new(
            DirectoryNode::new(ROOT_NAME)
                .with_dir(DirectoryNode::new("documents"))
                .with_file(FileNode::new("locked", "x").read_only()),
        )
        .unwrap();
        ShellContext::new(fs, user)
    }

    #[test]
    fn high_command_names_ignore_case_and_padding() {
        assert!(ctx(" omega ").is_high_command());
        assert!(ctx("Ω").is_high_command());
        assert!(!ctx("guest").is_high_command());
    }

    #[test]
    fn import_lands_in_current_directory() {
        let mut c = ctx("guest");
        c.change_directory("documents").unwrap();
        c.import_file("report.md", "# hi").unwrap();
        assert!(c
            .filesystem()
            .resolve(&["root", "documents", "report.md"])
            .is_some());
    }

    #[test]
    fn failed_write_leaves_store_untouched() {
        let mut c = ctx("guest");
        let before = c.filesystem().clone();
        let err = c.write_file("locked", "y").unwrap_err();
        assert!(err.is_runtime(RuntimeErrorKind::ReadOnly));
        assert!(c.filesystem().ptr_eq(&before));
    }

    #[test]
    fn snapshot_is_isolated_from_later_writes() {
        let mut c = ctx("guest");
        let snap = c.snapshot();
        c.write_file("new.txt", "x").unwrap();
        assert!(snap.fs.resolve(&["root", "new.txt"]).is_none());
    }

    #[test]
    fn contacts_add_and_delete() {
        let mut c = ctx("guest");
        c.add_contact(Contact {
            id: "X".into(),
            name: "Test".into(),
            role: "Tester".into(),
            status: ContactStatus::Online,
            clearance: ClearanceLevel::I,
            bio: String::new(),
            persona_prompt: String::new(),
        });
        assert_eq!(c.contacts().len(), 1);
        assert!(c.delete_contact("X"));
        assert!(!c.delete_contact("X"));
    }
}
