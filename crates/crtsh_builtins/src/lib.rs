//! Built-in commands and the dispatcher that runs one input line.
//!
//! Every entry of [`BuiltinKind`] maps to exactly one [`Builtin`]
//! implementation through [`builtin_for`]; the [`Interpreter`] parses a line,
//! records it, echoes it and reports failures as error lines.

use crtsh_core::Builtin;
use crtsh_parser::BuiltinKind;

pub mod cat;
pub mod cd;
pub mod clear;
pub mod comms;
pub mod help;
pub mod import;
pub mod interpreter;
pub mod launch;
pub mod logout;
pub mod ls;
pub mod pwd;
pub mod touch;
pub mod tree;
pub mod whoami;

#[cfg(test)]
pub(crate) mod testutils;

pub use interpreter::Interpreter;
pub use launch::{app_for, flags_for};

/// The implementation serving `kind`.
pub fn builtin_for(kind: BuiltinKind) -> &'static dyn Builtin {
    match kind {
        BuiltinKind::Help => &help::HelpCommand,
        BuiltinKind::Ls => &ls::LsCommand,
        BuiltinKind::Cd => &cd::CdCommand,
        BuiltinKind::Cat => &cat::CatCommand,
        BuiltinKind::Clear => &clear::ClearCommand,
        BuiltinKind::Sys => &launch::SYS,
        BuiltinKind::Map => &launch::MAP,
        BuiltinKind::Scan => &launch::SCAN,
        BuiltinKind::Ai => &launch::AI,
        BuiltinKind::Cam => &launch::CAM,
        BuiltinKind::Pwd => &pwd::PwdCommand,
        BuiltinKind::Whoami => &whoami::WhoamiCommand,
        BuiltinKind::Import => &import::ImportCommand,
        BuiltinKind::Touch => &touch::TouchCommand,
        BuiltinKind::Comms => &comms::CommsCommand,
        BuiltinKind::Tree => &tree::TreeCommand,
        BuiltinKind::Logout => &logout::LogoutCommand,
    }
}
