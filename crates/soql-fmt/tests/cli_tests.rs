//! Tests for the formatter entry points against files on disk.

use std::fs;
use std::io::Write;

use soql_fmt::{process, FmtError, Mode, Outcome, Source};
use tempfile::{NamedTempFile, TempDir};

fn query_file(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

fn run(source: &Source, mode: Mode) -> (Outcome, String) {
    let mut out: Vec<u8> = Vec::new();
    let outcome = process(source, mode, &mut out).unwrap();
    (outcome, String::from_utf8(out).unwrap())
}

// ===================================================================
// Print mode
// ===================================================================

#[test]
fn print_writes_canonical_text() {
    let file = query_file("select Id from Opportunity using scope mine where Amount > 10000\n");
    let source = Source::File(file.path().to_path_buf());

    let (outcome, out) = run(&source, Mode::Print);
    assert_eq!(outcome, Outcome::Reformatted);
    assert_eq!(
        out,
        "SELECT Id FROM Opportunity USING SCOPE mine WHERE Amount > 10000\n"
    );
}

#[test]
fn print_canonical_input_is_unchanged() {
    let file = query_file("SELECT * FROM users WHERE (id = 1 OR age = 18)\n");
    let (outcome, out) = run(&Source::File(file.path().to_path_buf()), Mode::Print);
    assert_eq!(outcome, Outcome::Unchanged);
    assert_eq!(out, "SELECT * FROM users WHERE (id = 1 OR age = 18)\n");
}

#[test]
fn print_script_with_several_statements() {
    let file = query_file("select 1;\n-- second\nselect Id from Account where not Id = 'x';\n");
    let (_, out) = run(&Source::File(file.path().to_path_buf()), Mode::Print);
    assert_eq!(out, "SELECT 1;\nSELECT Id FROM Account WHERE Id <> 'x';\n");
}

// ===================================================================
// Check mode
// ===================================================================

#[test]
fn check_reports_without_writing() {
    let file = query_file("select * from t1, t2");
    let (outcome, out) = run(&Source::File(file.path().to_path_buf()), Mode::Check);
    assert_eq!(outcome, Outcome::Reformatted);
    assert!(out.is_empty());
    assert_eq!(fs::read_to_string(file.path()).unwrap(), "select * from t1, t2");
}

// ===================================================================
// In-place mode
// ===================================================================

#[test]
fn in_place_rewrites_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("query.soql");
    fs::write(&path, "select Name from Opportunity order by Name desc nulls last").unwrap();

    let (outcome, out) = run(&Source::File(path.clone()), Mode::InPlace);
    assert_eq!(outcome, Outcome::Reformatted);
    assert!(out.is_empty());
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "SELECT Name FROM Opportunity ORDER BY Name DESC NULLS LAST\n"
    );

    let (outcome, out) = run(&Source::File(path.clone()), Mode::InPlace);
    assert_eq!(outcome, Outcome::Unchanged);
    assert!(out.is_empty());
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "SELECT Name FROM Opportunity ORDER BY Name DESC NULLS LAST\n"
    );
}

// ===================================================================
// AST mode
// ===================================================================

#[test]
fn ast_prints_json_tree() {
    let file = query_file("SELECT COUNT(*) FROM users");
    let (_, out) = run(&Source::File(file.path().to_path_buf()), Mode::Ast);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(1));
    assert_eq!(value[0]["Select"]["from"]["Table"]["name"], "users");
}

// ===================================================================
// Errors
// ===================================================================

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let source = Source::File(dir.path().join("missing.soql"));
    let err = process(&source, Mode::Print, &mut Vec::<u8>::new()).unwrap_err();
    assert!(matches!(err, FmtError::Io { .. }));
}

#[test]
fn invalid_query_names_the_file() {
    let file = query_file("SELECT * FROM users WHERE id = 1 AND");
    let source = Source::File(file.path().to_path_buf());
    let err = process(&source, Mode::Print, &mut Vec::<u8>::new()).unwrap_err();
    assert!(matches!(&err, FmtError::Parse { origin, .. } if *origin == source.name()));
}
