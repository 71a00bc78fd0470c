//! End-to-end tests over on-disk source files.

use std::fs;
use std::path::PathBuf;

use vcl_lexer::{Error, SourceFile, TokenKind, tokenize_path};

fn write_fixture(name: &str, contents: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_TARGET_TMPDIR"));
    path.push(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn open_reads_contents() {
    let path = write_fixture("open.vcl", "main();\n");
    let source = SourceFile::open(&path).expect("open");
    assert_eq!(source.contents(), "main();\n");
    assert_eq!(source.path(), path.display().to_string());
}

#[test]
fn open_missing_file_is_source_unavailable() {
    let mut path = PathBuf::from(env!("CARGO_TARGET_TMPDIR"));
    path.push("does-not-exist.vcl");
    let err = SourceFile::open(&path).unwrap_err();
    assert!(matches!(
        &err,
        Error::SourceUnavailable { path: reported, .. }
        if *reported == path.display().to_string()
    ));
}

#[test]
fn tokenize_path_end_to_end() {
    let path = write_fixture(
        "program.vcl",
        "# entry point\nmain() {\n\tgreet(\"hello world\");\n\tanswer 42;\n}\n",
    );
    let tokens = tokenize_path(&path).expect("tokenize_path");

    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::Identifier,
            TokenKind::OpenParen,
            TokenKind::String,
            TokenKind::CloseParen,
            TokenKind::Semicolon,
            TokenKind::Identifier,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::CloseCurly,
        ]
    );
    assert_eq!(tokens[6].text.as_deref(), Some("hello world"));
    assert_eq!(tokens[10].number, Some(42));

    // Every location carries the path the file was opened from.
    let path_text = path.display().to_string();
    assert!(tokens.iter().all(|t| t.location.file == path_text));
}

#[test]
fn rescan_is_idempotent() {
    let path = write_fixture("rescan.vcl", "a 1; # note\nb 2;\n");
    let source = SourceFile::open(&path).expect("open");
    let first = source.tokenize().expect("tokenize");
    let second = source.tokenize().expect("tokenize");
    assert_eq!(first, second);
}

#[test]
fn printer_lines_use_file_path() {
    let path = write_fixture("lines.vcl", "\nx;\n");
    let tokens = tokenize_path(&path).expect("tokenize_path");
    let line = tokens[0].to_string();
    assert_eq!(line, format!("{}:2:1 (IDENTITY, x)", path.display()));
}

#[test]
fn lex_error_propagates_through_tokenize_path() {
    let path = write_fixture("bad.vcl", "ok;\n\"unclosed\n");
    let err = tokenize_path(&path).unwrap_err();
    assert!(matches!(err, Error::Lex(_)));
    assert!(err.to_string().contains("unterminated string literal"));
}
