use std::fmt;

/// Source location of a token, for error reporting and printing.
///
/// Row and column are zero-based: `row` counts newline bytes consumed
/// before the location, `column` counts bytes since the start of the
/// current line. The `Display` impl renders the conventional 1-based
/// `file:row:column` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: String,
    pub row: usize,
    pub column: usize,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.row + 1, self.column + 1)
    }
}

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Identifier: a letter followed by letters or digits.
    Identifier,
    /// Opening parenthesis `(`.
    OpenParen,
    /// Closing parenthesis `)`.
    CloseParen,
    /// Opening brace `{`.
    OpenCurly,
    /// Closing brace `}`.
    CloseCurly,
    /// Semicolon `;`.
    Semicolon,
    /// Decimal integer literal.
    Number,
    /// Double-quoted string literal.
    String,
    /// Reserved for the `return` keyword; never produced by the lexer,
    /// which has no keyword table.
    Return,
}

impl TokenKind {
    /// Canonical printed name of the kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Identifier => "IDENTITY",
            Self::OpenParen => "OPEN_PAREN",
            Self::CloseParen => "CLOSE_PAREN",
            Self::OpenCurly => "OPEN_CURLY",
            Self::CloseCurly => "CLOSE_CURLY",
            Self::Semicolon => "SEMICOLON",
            Self::Number => "NUMBER",
            Self::String => "STRING",
            Self::Return => "RETURN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single token with its kind, payload, and source location.
///
/// Exactly one of `text`/`number` is populated: `text` for
/// `Identifier` and `String`, `number` for `Number`, neither for
/// punctuation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: Option<String>,
    pub number: Option<i64>,
    pub location: SourceLocation,
}

impl fmt::Display for Token {
    /// Renders the one-line printer form:
    /// `<file>:<row>:<col> (<KIND>[, <payload>])`, with row and column
    /// 1-based, string payloads quoted, identifier payloads bare.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}", self.location, self.kind)?;
        if let Some(text) = &self.text {
            if self.kind == TokenKind::String {
                write!(f, ", \"{text}\"")?;
            } else {
                write!(f, ", {text}")?;
            }
        }
        if let Some(number) = self.number {
            write!(f, ", {number}")?;
        }
        f.write_str(")")
    }
}
