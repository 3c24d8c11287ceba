//! Seed data loaded once before the first command.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ShellError, ShellResult};
use crate::vfs::{DirectoryNode, FileSystem};

/// Seed shipped with the binary.
pub const DEFAULT_SEED_JSON: &str = include_str!("../assets/seed.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClearanceLevel {
    I,
    II,
    III,
    IV,
    #[serde(rename = "Ω-IX", alias = "OMEGA")]
    Omega,
}

impl ClearanceLevel {
    pub fn label(self) -> &'static str {
        match self {
            ClearanceLevel::I => "Level-I",
            ClearanceLevel::II => "Level-II",
            ClearanceLevel::III => "Level-III",
            ClearanceLevel::IV => "Level-IV",
            ClearanceLevel::Omega => "Ω-IX",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContactStatus {
    Online,
    Offline,
    Busy,
    Kia,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub role: String,
    pub status: ContactStatus,
    pub clearance: ClearanceLevel,
    #[serde(default)]
    pub bio: String,
    /// Instructions handed to the AI collaborator when chatting as this
    /// contact.
    #[serde(default)]
    pub persona_prompt: String,
}

/// Raw seed document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedData {
    pub filesystem: DirectoryNode,
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

impl SeedData {
    pub fn from_json(json: &str) -> ShellResult<Self> {
        let seed: SeedData = serde_json::from_str(json)?;
        Ok(seed)
    }

    pub fn from_file(path: impl AsRef<Path>) -> ShellResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| ShellError::from(e).with_context("path", path.display().to_string()))?;
        Self::from_json(&json).map_err(|e| e.with_context("path", path.display().to_string()))
    }

    pub fn builtin() -> ShellResult<Self> {
        Self::from_json(DEFAULT_SEED_JSON)
    }

    /// Validate the tree and split the seed into store and contacts.
    pub fn into_parts(self) -> ShellResult<(FileSystem, Vec<Contact>)> {
        Ok((FileSystem::new(self.filesystem)?, self.contacts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_seed_loads() {
        let (fs, contacts) = SeedData::builtin().unwrap().into_parts().unwrap();
        assert!(fs.resolve(&["root", "readme.txt"]).is_some());
        assert!(fs.resolve_dir(&["root", "documents"]).is_some());
        assert!(!contacts.is_empty());
    }

    #[test]
    fn clearance_accepts_symbolic_name() {
        let c: ClearanceLevel = serde_json::from_str("\"Ω-IX\"").unwrap();
        assert_eq!(c, ClearanceLevel::Omega);
        let c: ClearanceLevel = serde_json::from_str("\"OMEGA\"").unwrap();
        assert_eq!(c.label(), "Ω-IX");
    }

    #[test]
    fn malformed_seed_is_a_serialization_error() {
        let err = SeedData::from_json("{\"filesystem\": 3}").unwrap_err();
        assert!(!err.is_recoverable());
    }
}
