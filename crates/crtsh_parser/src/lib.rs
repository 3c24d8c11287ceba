#![doc = "Command-line parser turning a raw input line into a `Command`."]

pub mod ast;
pub mod lexer;

pub use ast::{BuiltinKind, Command, CommandKind};

/// Errors raised while parsing one input line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input was empty or whitespace only. Callers treat this as a no-op.
    #[error("empty input")]
    EmptyInput,
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Parse one raw input line.
///
/// The first word selects the command and is matched case-insensitively;
/// the remaining words are passed through unchanged.
pub fn parse(input: &str) -> ParseResult<Command> {
    let raw = input.trim();
    let mut words = lexer::tokenize(raw).into_iter().map(|t| match t.kind {
        lexer::TokenKind::Word(w) => w,
    });
    let name = words.next().ok_or(ParseError::EmptyInput)?.to_lowercase();
    let args: Vec<String> = words.collect();

    #[cfg(feature = "debug_parse")]
    eprintln!("parse: name={name:?} args={args:?}");

    let kind = match BuiltinKind::from_name(&name) {
        Some(kind) => CommandKind::Builtin(kind),
        None => CommandKind::Unknown(name),
    };
    Ok(Command {
        kind,
        raw: raw.to_string(),
        args,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_word_is_case_insensitive() {
        let cmd = parse("  CD Documents ").unwrap();
        assert_eq!(cmd.kind, CommandKind::Builtin(BuiltinKind::Cd));
        assert_eq!(cmd.args, vec!["Documents".to_string()]);
        assert_eq!(cmd.raw, "CD Documents");
    }

    #[test]
    fn unknown_command_keeps_lowercased_name() {
        let cmd = parse("Frobnicate now").unwrap();
        assert_eq!(cmd.kind, CommandKind::Unknown("frobnicate".into()));
    }

    #[test]
    fn whitespace_only_is_empty_input() {
        assert_eq!(parse("   \t"), Err(ParseError::EmptyInput));
        assert_eq!(parse(""), Err(ParseError::EmptyInput));
    }
}
