//! Error handling for crtsh.
//!
//! Every failure inside a command dispatch is recovered locally and turned
//! into an `error` output line; the types here carry enough structure for
//! callers and tests to tell the failures apart.

use std::collections::BTreeMap;
use std::fmt;

use crtsh_parser::ParseError;

/// Result type for all crtsh operations
pub type ShellResult<T> = Result<T, ShellError>;

/// Main error type for all crtsh operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellError {
    pub kind: ErrorKind,
    pub message: String,
    pub context: BTreeMap<String, String>,
}

/// Categories of errors that can occur in crtsh
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    Parse(ParseErrorKind),
    Runtime(RuntimeErrorKind),
    Io(IoErrorKind),
    Config(ConfigErrorKind),
    Serialization(SerializationErrorKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    EmptyInput,
    UnknownCommand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeErrorKind {
    MissingArgument,
    NotFound,
    NotADirectory,
    NotAFile,
    ReadOnly,
    InvalidName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoErrorKind {
    NotFound,
    PermissionDenied,
    InvalidData,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorKind {
    InvalidFormat,
    InvalidSeed,
    InvalidValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerializationErrorKind {
    JsonError,
    TomlError,
}

impl ShellError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: BTreeMap::new(),
        }
    }

    pub fn runtime(kind: RuntimeErrorKind, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Runtime(kind), message)
    }

    pub fn unknown_command(command: &str) -> Self {
        Self::new(
            ErrorKind::Parse(ParseErrorKind::UnknownCommand),
            format!("unknown command: {command}"),
        )
        .with_context("command", command)
    }

    pub fn missing_argument(usage: &str) -> Self {
        Self::runtime(
            RuntimeErrorKind::MissingArgument,
            format!("missing operand (usage: {usage})"),
        )
    }

    pub fn not_found(what: &str, name: &str) -> Self {
        Self::runtime(RuntimeErrorKind::NotFound, format!("no such {what}: {name}"))
            .with_context("name", name)
    }

    pub fn not_a_directory(name: &str) -> Self {
        Self::runtime(RuntimeErrorKind::NotADirectory, format!("not a directory: {name}"))
            .with_context("name", name)
    }

    pub fn not_a_file(name: &str) -> Self {
        Self::runtime(RuntimeErrorKind::NotAFile, format!("is a directory: {name}"))
            .with_context("name", name)
    }

    pub fn read_only(name: &str) -> Self {
        Self::runtime(RuntimeErrorKind::ReadOnly, format!("read-only file: {name}"))
            .with_context("name", name)
    }

    pub fn invalid_name(name: &str) -> Self {
        Self::runtime(RuntimeErrorKind::InvalidName, format!("invalid file name: '{name}'"))
            .with_context("name", name)
    }

    pub fn invalid_seed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config(ConfigErrorKind::InvalidSeed), message)
    }

    /// Add context information to the error
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    pub fn is_runtime(&self, kind: RuntimeErrorKind) -> bool {
        self.kind == ErrorKind::Runtime(kind)
    }

    /// The text shown to the user in an `error` output line.
    pub fn user_message(&self) -> &str {
        &self.message
    }

    /// Whether the session can continue after this error.
    ///
    /// Parse and runtime errors come from a single command and never touch
    /// session state; the others surface while loading seed or config data.
    pub fn is_recoverable(&self) -> bool {
        matches!(self.kind, ErrorKind::Parse(_) | ErrorKind::Runtime(_))
    }
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;
        if !self.context.is_empty() {
            write!(f, " (")?;
            for (i, (key, value)) in self.context.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}: {value}")?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Parse(kind) => write!(f, "Parse error: {kind:?}"),
            ErrorKind::Runtime(kind) => write!(f, "Runtime error: {kind:?}"),
            ErrorKind::Io(kind) => write!(f, "I/O error: {kind:?}"),
            ErrorKind::Config(kind) => write!(f, "Configuration error: {kind:?}"),
            ErrorKind::Serialization(kind) => write!(f, "Serialization error: {kind:?}"),
        }
    }
}

impl std::error::Error for ShellError {}

impl From<ParseError> for ShellError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::EmptyInput => {
                ShellError::new(ErrorKind::Parse(ParseErrorKind::EmptyInput), err.to_string())
            }
        }
    }
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => IoErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => IoErrorKind::PermissionDenied,
            std::io::ErrorKind::InvalidData | std::io::ErrorKind::InvalidInput => {
                IoErrorKind::InvalidData
            }
            _ => IoErrorKind::Other,
        };
        ShellError::new(ErrorKind::Io(kind), err.to_string())
    }
}

impl From<serde_json::Error> for ShellError {
    fn from(err: serde_json::Error) -> Self {
        ShellError::new(
            ErrorKind::Serialization(SerializationErrorKind::JsonError),
            err.to_string(),
        )
        .with_context("line", err.line().to_string())
    }
}

impl From<toml::de::Error> for ShellError {
    fn from(err: toml::de::Error) -> Self {
        ShellError::new(
            ErrorKind::Serialization(SerializationErrorKind::TomlError),
            err.message().to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_context() {
        let err = ShellError::not_found("file", "missing.txt");
        assert_eq!(
            err.to_string(),
            "Runtime error: NotFound: no such file: missing.txt (name: missing.txt)"
        );
        assert_eq!(err.user_message(), "no such file: missing.txt");
    }

    #[test]
    fn command_errors_are_recoverable() {
        assert!(ShellError::unknown_command("rm").is_recoverable());
        assert!(ShellError::missing_argument("cat <file>").is_recoverable());
        assert!(!ShellError::invalid_seed("root missing").is_recoverable());
    }

    #[test]
    fn io_errors_map_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ShellError = io.into();
        assert_eq!(err.kind, ErrorKind::Io(IoErrorKind::NotFound));
    }
}
