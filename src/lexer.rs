use std::fmt;

use crate::token::{SourceLocation, Token, TokenKind};

/// Classifies a lexer error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// Byte that cannot start any token.
    UnexpectedCharacter(char),
    /// Unterminated double-quoted string.
    UnterminatedString,
    /// Digit run that does not fit in an `i64`.
    NumericOverflow { literal: String },
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedCharacter(ch) => {
                write!(f, "unexpected character: {ch}")
            }
            Self::UnterminatedString => {
                write!(f, "unterminated string literal")
            }
            Self::NumericOverflow { literal } => {
                write!(f, "number literal out of range: {literal}")
            }
        }
    }
}

/// Error produced during lexing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at {location}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub location: SourceLocation,
}

/// Tokenize a complete source string into a sequence of tokens.
///
/// `file` is the identifier carried in every token's location,
/// typically the path the source was read from.
///
/// # Errors
///
/// Returns `LexError` on an unexpected character, an unterminated
/// string literal, or a number literal out of range.
pub fn tokenize(input: &str, file: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(input, file).collect()
}

/// Streaming lexer over an in-memory source buffer.
///
/// The cursor is forward-only: each [`next_token`](Lexer::next_token)
/// call skips whitespace and `#` line comments, then materializes one
/// token by slicing the matched byte run out of the buffer. Rows and
/// columns are tracked zero-based as bytes are consumed.
pub struct Lexer<'a> {
    input: &'a [u8],
    file: String,
    pos: usize,
    line_start: usize,
    row: usize,
}

impl<'a> Lexer<'a> {
    /// Create a lexer over `input`, labelling tokens with `file`.
    #[must_use]
    pub fn new(input: &'a str, file: impl Into<String>) -> Self {
        Self {
            input: input.as_bytes(),
            file: file.into(),
            pos: 0,
            line_start: 0,
            row: 0,
        }
    }

    /// Produce the next token, or `None` once the source is exhausted.
    ///
    /// Calling past exhaustion keeps returning `Ok(None)` without
    /// advancing state.
    ///
    /// # Errors
    ///
    /// Returns `LexError` on an unexpected character, an unterminated
    /// string literal, or a number literal out of range.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.skip_trivia();

        let Some(byte) = self.peek() else {
            return Ok(None);
        };
        let location = self.location();

        match byte {
            b'(' => Ok(Some(self.punctuation(TokenKind::OpenParen, location))),
            b')' => Ok(Some(self.punctuation(TokenKind::CloseParen, location))),
            b'{' => Ok(Some(self.punctuation(TokenKind::OpenCurly, location))),
            b'}' => Ok(Some(self.punctuation(TokenKind::CloseCurly, location))),
            b';' => Ok(Some(self.punctuation(TokenKind::Semicolon, location))),
            b'"' => self.read_string(location).map(Some),
            ch if ch.is_ascii_alphabetic() => Ok(Some(self.read_identifier(location))),
            ch if ch.is_ascii_digit() => self.read_number(location).map(Some),
            other => Err(LexError {
                kind: LexErrorKind::UnexpectedCharacter(char::from(other)),
                location,
            }),
        }
    }

    fn location(&self) -> SourceLocation {
        SourceLocation {
            file: self.file.clone(),
            row: self.row,
            column: self.pos - self.line_start,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn advance(&mut self) {
        if let Some(&byte) = self.input.get(self.pos) {
            self.pos += 1;
            if byte == b'\n' {
                self.row += 1;
                self.line_start = self.pos;
            }
        }
    }

    /// Skip whitespace and `#` line comments, in any interleaving,
    /// up to the first byte of the next token or end of input.
    fn skip_trivia(&mut self) {
        loop {
            while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
                self.advance();
            }
            if self.peek() != Some(b'#') {
                return;
            }
            // Drop the comment through its newline, then re-trim.
            while let Some(byte) = self.peek() {
                self.advance();
                if byte == b'\n' {
                    break;
                }
            }
        }
    }

    fn slice_from(&self, start: usize) -> String {
        String::from_utf8_lossy(&self.input[start..self.pos]).into_owned()
    }

    fn punctuation(&mut self, kind: TokenKind, location: SourceLocation) -> Token {
        self.advance();
        Token {
            kind,
            text: None,
            number: None,
            location,
        }
    }

    fn read_identifier(&mut self, location: SourceLocation) -> Token {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_alphanumeric()) {
            self.advance();
        }
        Token {
            kind: TokenKind::Identifier,
            text: Some(self.slice_from(start)),
            number: None,
            location,
        }
    }

    fn read_number(&mut self, location: SourceLocation) -> Result<Token, LexError> {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.advance();
        }
        let literal = self.slice_from(start);

        // A pure digit run only fails to parse when it exceeds the
        // i64 range.
        let Ok(number) = literal.parse::<i64>() else {
            return Err(LexError {
                kind: LexErrorKind::NumericOverflow { literal },
                location,
            });
        };

        Ok(Token {
            kind: TokenKind::Number,
            text: None,
            number: Some(number),
            location,
        })
    }

    fn read_string(&mut self, location: SourceLocation) -> Result<Token, LexError> {
        self.advance(); // skip opening quote

        let start = self.pos;
        loop {
            match self.peek() {
                None => {
                    return Err(LexError {
                        kind: LexErrorKind::UnterminatedString,
                        location,
                    });
                }
                Some(b'"') => break,
                Some(_) => self.advance(),
            }
        }

        let text = self.slice_from(start);
        self.advance(); // skip closing quote

        Ok(Token {
            kind: TokenKind::String,
            text: Some(text),
            number: None,
            location,
        })
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}
