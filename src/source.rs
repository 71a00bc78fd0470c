//! Owned source buffer a lexer scans over.

use std::fs;
use std::path::Path;

use crate::Error;
use crate::lexer::{LexError, Lexer};
use crate::token::Token;

/// A source file read fully into memory.
///
/// The underlying file handle is opened, read, and closed inside
/// [`open`](SourceFile::open); scanning happens over the in-memory
/// buffer, so any number of independent lexers can be started from
/// one `SourceFile`.
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: String,
    contents: String,
}

impl SourceFile {
    /// Read the file at `path` into memory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SourceUnavailable`] when the file cannot be
    /// opened or read.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref().display().to_string();
        let contents = fs::read_to_string(&path).map_err(|source| Error::SourceUnavailable {
            path: path.clone(),
            source,
        })?;
        Ok(Self { path, contents })
    }

    /// Path the source was read from, used as the file identifier in
    /// token locations.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Raw source text.
    #[must_use]
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Start a fresh scan over the contents.
    #[must_use]
    pub fn lexer(&self) -> Lexer<'_> {
        Lexer::new(&self.contents, self.path.as_str())
    }

    /// Tokenize the whole file in one step.
    ///
    /// # Errors
    ///
    /// Returns `LexError` on the first lexical error in the file.
    pub fn tokenize(&self) -> Result<Vec<Token>, LexError> {
        self.lexer().collect()
    }
}
