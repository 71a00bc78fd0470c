//! Lexer for VCL source files.
//!
//! Scans a source file byte by byte into a sequence of classified
//! tokens with zero-based source locations, skipping whitespace and
//! `#` line comments. Identifiers, integer numbers, verbatim string
//! literals, and the fixed punctuation set `( ) { } ;` are the only
//! token classes; anything else is a typed lexical error rather than
//! a crash.
//!
//! # Quick start
//!
//! ## Tokenize a string
//!
//! ```
//! use vcl_lexer::{TokenKind, tokenize};
//!
//! let tokens = tokenize("print(\"hi\"); # greet", "demo.vcl").unwrap();
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(kinds, vec![
//!     TokenKind::Identifier,
//!     TokenKind::OpenParen,
//!     TokenKind::String,
//!     TokenKind::CloseParen,
//!     TokenKind::Semicolon,
//! ]);
//! ```
//!
//! ## Stream tokens one at a time
//!
//! ```
//! use vcl_lexer::Lexer;
//!
//! let mut lexer = Lexer::new("answer 42;", "demo.vcl");
//! while let Some(token) = lexer.next_token().unwrap() {
//!     println!("{token}");
//! }
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod lexer;
pub mod source;
pub mod token;

pub use lexer::{LexError, LexErrorKind, Lexer, tokenize};
pub use source::SourceFile;
pub use token::{SourceLocation, Token, TokenKind};

/// Unified error type covering file access and lexing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source file could not be opened or read.
    #[error("cannot open source file {path}: {source}")]
    SourceUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// A lexer error.
    #[error("{0}")]
    Lex(#[from] LexError),
}

/// Open and tokenize a source file in one step.
pub fn tokenize_path(path: impl AsRef<std::path::Path>) -> Result<Vec<Token>, Error> {
    let source = SourceFile::open(path)?;
    Ok(source.tokenize()?)
}
