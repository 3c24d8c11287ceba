//! Command representation produced by the parser.

use std::fmt;

/// The closed set of commands the interpreter knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinKind {
    Help,
    Ls,
    Cd,
    Cat,
    Clear,
    Sys,
    Map,
    Scan,
    Ai,
    Cam,
    Pwd,
    Whoami,
    Import,
    Touch,
    Comms,
    Tree,
    Logout,
}

impl BuiltinKind {
    /// Every builtin, in the order completion offers them.
    pub const ALL: [BuiltinKind; 17] = [
        BuiltinKind::Help,
        BuiltinKind::Ls,
        BuiltinKind::Cd,
        BuiltinKind::Cat,
        BuiltinKind::Clear,
        BuiltinKind::Sys,
        BuiltinKind::Map,
        BuiltinKind::Scan,
        BuiltinKind::Ai,
        BuiltinKind::Cam,
        BuiltinKind::Pwd,
        BuiltinKind::Whoami,
        BuiltinKind::Import,
        BuiltinKind::Touch,
        BuiltinKind::Comms,
        BuiltinKind::Tree,
        BuiltinKind::Logout,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BuiltinKind::Help => "help",
            BuiltinKind::Ls => "ls",
            BuiltinKind::Cd => "cd",
            BuiltinKind::Cat => "cat",
            BuiltinKind::Clear => "clear",
            BuiltinKind::Sys => "sys",
            BuiltinKind::Map => "map",
            BuiltinKind::Scan => "scan",
            BuiltinKind::Ai => "ai",
            BuiltinKind::Cam => "cam",
            BuiltinKind::Pwd => "pwd",
            BuiltinKind::Whoami => "whoami",
            BuiltinKind::Import => "import",
            BuiltinKind::Touch => "touch",
            BuiltinKind::Comms => "comms",
            BuiltinKind::Tree => "tree",
            BuiltinKind::Logout => "logout",
        }
    }

    /// Look up a builtin by its (already lowercased) name. `upload` is
    /// accepted as an alias of `import`.
    pub fn from_name(name: &str) -> Option<Self> {
        if name == "upload" {
            return Some(BuiltinKind::Import);
        }
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    /// Command names in completion order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().map(|kind| kind.name())
    }
}

impl fmt::Display for BuiltinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandKind {
    Builtin(BuiltinKind),
    /// First token did not name a builtin; carries the lowercased token.
    Unknown(String),
}

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub kind: CommandKind,
    /// The trimmed source line, as echoed and recorded in history.
    pub raw: String,
    /// Arguments after the command word, case preserved.
    pub args: Vec<String>,
}

impl Command {
    pub fn builtin(&self) -> Option<BuiltinKind> {
        match self.kind {
            CommandKind::Builtin(kind) => Some(kind),
            CommandKind::Unknown(_) => None,
        }
    }

    pub fn first_arg(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    pub fn has_flag(&self, short: &str, long: &str) -> bool {
        self.args.iter().any(|a| a == short || a == long)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_lookup() {
        for kind in BuiltinKind::ALL {
            assert_eq!(BuiltinKind::from_name(kind.name()), Some(kind));
        }
    }

    #[test]
    fn upload_aliases_import() {
        assert_eq!(BuiltinKind::from_name("upload"), Some(BuiltinKind::Import));
        assert_eq!(BuiltinKind::from_name("rm"), None);
    }

    #[test]
    fn completion_order_starts_with_help() {
        let names: Vec<_> = BuiltinKind::names().collect();
        assert_eq!(names.first(), Some(&"help"));
        assert_eq!(names.len(), 17);
    }
}
