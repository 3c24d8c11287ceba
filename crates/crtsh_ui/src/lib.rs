//! Terminal front end for crtsh: completion engine, scrollback, ANSI
//! rendering, configuration and the interactive loop.

pub mod app;
pub mod completion;
pub mod config;
pub mod readline;
pub mod render;
pub mod scroll_buffer;

pub use app::{run_once, run_repl, Repl};
pub use completion::{complete, Completion, CompletionContext};
pub use config::TerminalConfig;
pub use render::Renderer;
pub use scroll_buffer::ScrollBuffer;
