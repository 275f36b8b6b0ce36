//! Integration tests for the bndlex scanner over real manifest files

use std::fs;
use std::path::Path;

use bndlex::lexer::{self, TokenKind};
use bndlex::relex::{LexedDocument, TextEdit, verify_resumption};
use bndlex::Span;

/// Every fixture with a manifest extension.
fn fixture_paths() -> Vec<std::path::PathBuf> {
    let fixtures_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let mut paths: Vec<_> = fs::read_dir(&fixtures_dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| {
            path.extension()
                .map(|e| e == "bnd" || e == "MF")
                .unwrap_or(false)
        })
        .collect();
    paths.sort();
    paths
}

fn header_names(source: &str) -> Vec<&str> {
    lexer::lex(source)
        .iter()
        .filter(|t| t.kind == TokenKind::HeaderName)
        .filter_map(|t| t.text(source))
        .collect()
}

/// Test that every fixture resumes cleanly at all token boundaries
#[test]
fn test_fixtures_resume_everywhere() {
    let paths = fixture_paths();
    assert!(paths.len() >= 2, "expected the manifest fixtures to be present");

    for path in paths {
        let source = fs::read_to_string(&path).unwrap();
        let report = verify_resumption(&source).unwrap_or_else(|e| panic!("{}: {}", path.display(), e));
        assert_eq!(
            report.boundaries_checked + report.boundaries_skipped,
            report.tokens,
            "{}",
            path.display()
        );
    }
}

#[test]
fn test_manifest_headers() {
    let source = include_str!("fixtures/MANIFEST.MF");
    assert_eq!(
        header_names(source),
        vec![
            "Manifest-Version",
            "Bundle-ManifestVersion",
            "Bundle-SymbolicName",
            "Bundle-Version",
            "Import-Package",
            "Export-Package",
        ]
    );
}

#[test]
fn test_continuation_line_is_not_a_header() {
    let source = include_str!("fixtures/MANIFEST.MF");
    // ` org.slf4j;resolution:=optional` continues Import-Package.
    assert!(!header_names(source).iter().any(|name| name.contains("slf4j")));
}

#[test]
fn test_comment_is_followed_by_section_end() {
    let source = include_str!("fixtures/MANIFEST.MF");
    let tokens = lexer::lex(source);
    let comment = tokens.iter().position(|t| t.kind == TokenKind::Comment).unwrap();
    assert_eq!(tokens[comment + 1].kind, TokenKind::SectionEnd);
    assert_eq!(tokens[comment + 2].kind, TokenKind::HeaderName);
}

/// Type a new header into the manifest one character at a time
#[test]
fn test_typing_into_manifest() {
    let source = include_str!("fixtures/MANIFEST.MF");
    let mut doc = LexedDocument::new(source);
    let insert_at = source.find("Bundle-Version").unwrap();

    for (i, ch) in "Bundle-Vendor: Example\n".char_indices() {
        let stats = doc.apply_edit(&TextEdit::insert(insert_at + i, ch.to_string())).unwrap();
        assert!(stats.reused > 0);
        assert_eq!(doc.tokens(), lexer::lex(doc.source()).as_slice());
    }
    assert!(header_names(doc.source()).contains(&"Bundle-Vendor"));
}

/// Deleting a line break joins two headers into one line
#[test]
fn test_deleting_line_break() {
    let source = include_str!("fixtures/bundle.bnd");
    let mut doc = LexedDocument::new(source);
    let newline = source.find("(bnd)\n").unwrap() + "(bnd)".len();

    doc.apply_edit(&TextEdit::delete(Span::new(newline, newline + 1))).unwrap();

    assert_eq!(doc.tokens(), lexer::lex(doc.source()).as_slice());
    assert!(!header_names(doc.source()).contains(&"Bundle-Description"));
}

#[test]
fn test_lex_command_on_fixture() {
    let args = bndlex::cli::LexArgs {
        file: Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/bundle.bnd"),
        start: 0,
        end: Some(10_000),
        state: 0,
        format: bndlex::DumpFormat::Json,
        no_text: true,
        no_state: false,
        max_width: 0,
    };
    assert_eq!(bndlex::cli::commands::lex_file(&args).unwrap(), bndlex::cli::ExitCode::SUCCESS);
}
