//! crtsh core library
//!
//! State and contracts shared by every layer of the virtual shell: the
//! persistent filesystem store, the navigation cursor, command history, the
//! session context, and the `Builtin` trait commands implement.

pub use context::{SessionSnapshot, ShellContext, PLACEHOLDER_CONTENT};
pub use cursor::NavigationCursor;
pub use error::{ErrorKind, ShellError, ShellResult};
pub use executor::{AppKind, Builtin, ExecutionResult, LaunchRequest, ModelHint, SideEffect};
pub use history::CommandHistory;
pub use output::{LineKind, TerminalLine};
pub use seed::{ClearanceLevel, Contact, ContactStatus, SeedData};
pub use vfs::{DirectoryNode, FileNode, FileSystem, FileSystemNode, NodeKind, ROOT_NAME};

pub mod context;
pub mod cursor;
pub mod error;
pub mod executor;
pub mod history;
#[cfg(feature = "logging")]
pub mod logging;
pub mod output;
pub mod seed;
pub mod vfs;

#[doc(hidden)]
pub use tracing as __tracing;

// Lightweight logging facade macros – keep call sites but allow stripping them in minimal builds
#[cfg(feature = "minimal-logging")]
#[macro_export]
macro_rules! crtsh_log_debug { ($($tt:tt)*) => {}; }
#[cfg(not(feature = "minimal-logging"))]
#[macro_export]
macro_rules! crtsh_log_debug { ($($tt:tt)*) => { $crate::__tracing::debug!($($tt)*) }; }

#[cfg(feature = "minimal-logging")]
#[macro_export]
macro_rules! crtsh_log_info { ($($tt:tt)*) => {}; }
#[cfg(not(feature = "minimal-logging"))]
#[macro_export]
macro_rules! crtsh_log_info { ($($tt:tt)*) => { $crate::__tracing::info!($($tt)*) }; }

#[cfg(feature = "minimal-logging")]
#[macro_export]
macro_rules! crtsh_log_warn { ($($tt:tt)*) => {}; }
#[cfg(not(feature = "minimal-logging"))]
#[macro_export]
macro_rules! crtsh_log_warn { ($($tt:tt)*) => { $crate::__tracing::warn!($($tt)*) }; }

#[cfg(feature = "minimal-logging")]
#[macro_export]
macro_rules! crtsh_log_error { ($($tt:tt)*) => {}; }
#[cfg(not(feature = "minimal-logging"))]
#[macro_export]
macro_rules! crtsh_log_error { ($($tt:tt)*) => { $crate::__tracing::error!($($tt)*) }; }

// Spans collapse to `Span::none()` so call sites can still `.entered()` them.
#[cfg(feature = "minimal-logging")]
#[macro_export]
macro_rules! crtsh_debug_span { ($($tt:tt)*) => { $crate::__tracing::Span::none() }; }
#[cfg(not(feature = "minimal-logging"))]
#[macro_export]
macro_rules! crtsh_debug_span { ($($tt:tt)*) => { $crate::__tracing::debug_span!($($tt)*) }; }

#[cfg(test)]
mod tests {
    #[test]
    fn facade_macros_expand_in_any_build() {
        let _guard = crate::crtsh_debug_span!("builtin", name = "ls").entered();
        crate::crtsh_log_debug!(args = 0usize, "dispatch");
        crate::crtsh_log_warn!("still inside span");
    }
}
