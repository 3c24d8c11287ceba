//! Whitespace tokenizer for shell input lines.
//!
//! A line is a sequence of words separated by runs of whitespace. Quoting,
//! operators and escapes are not part of the grammar.

use logos::Logos;

#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"\s+")]
pub enum TokenKind {
    /// A maximal run of non-whitespace characters.
    #[regex(r"\S+", |lex| lex.slice().to_string())]
    Word(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: std::ops::Range<usize>,
}

impl Token {
    fn new(kind: TokenKind, span: std::ops::Range<usize>) -> Self {
        Self { kind, span }
    }

    pub fn text(&self) -> &str {
        match &self.kind {
            TokenKind::Word(w) => w,
        }
    }
}

/// Tokenize input and return vector of tokens.
///
/// Every character is either part of a word or skipped as whitespace, so the
/// lexer cannot fail; an unmatched slice would be kept as a word of its own.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut lexer = TokenKind::lexer(input);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        let kind = match result {
            Ok(kind) => kind,
            Err(()) => TokenKind::Word(lexer.slice().to_string()),
        };
        tokens.push(Token::new(kind, lexer.span()));
    }
    tokens
}
