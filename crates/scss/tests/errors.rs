use rio_scss::{CompileOptions, ScssError, compile, compile_with};

#[test]
fn test_unclosed_block_is_an_error() {
    let err = compile(".a {\n  .b {\n    color: red;\n  }\n").unwrap_err();
    match err {
        ScssError::UnclosedBlock { line, selectors } => {
            assert_eq!(line, 1);
            assert_eq!(selectors, vec![".a".to_string()]);
        }
        other => panic!("expected UnclosedBlock, got {:?}", other),
    }
}

#[test]
fn test_unclosed_error_names_every_context() {
    let err = compile(".a {\n  @media print {\n    .b {\n").unwrap_err();
    assert_eq!(
        err.to_string(),
        "unclosed block opened at line 3: .a > @media print > .a .b"
    );
}

#[test]
fn test_line_numbers_count_removed_declarations() {
    let err = compile("$c: red;\n$d: blue;\n.a {\n").unwrap_err();
    assert!(matches!(err, ScssError::UnclosedBlock { line: 3, .. }));
}

#[test]
fn test_auto_close_recovers() {
    let css = compile_with(
        "@media print {\n  .a {\n    color: black;\n",
        &CompileOptions::lenient(),
    )
    .unwrap();
    assert_eq!(css, "@media print {\n.a {\n  color: black;\n}\n}\n");
}

#[test]
fn test_unexpected_close() {
    let err = compile(".a { color: red; }\n}\n").unwrap_err();
    assert!(matches!(err, ScssError::UnexpectedClose { line: 2 }));
    assert_eq!(err.to_string(), "unexpected '}' at line 2");
}

#[test]
fn test_compile_file_reads_scss_and_passes_css() {
    let dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");

    let scss = rio_scss::compile_file(&dir.join("card.scss"), &CompileOptions::default()).unwrap();
    assert_eq!(scss, ".card .card__title {\n  color: #0a4d8c;\n}\n");

    let css = rio_scss::compile_file(&dir.join("plain.css"), &CompileOptions::default()).unwrap();
    assert_eq!(css, ".plain { color: $kept; }\n");

    let missing = rio_scss::compile_file(&dir.join("missing.scss"), &CompileOptions::default());
    assert!(matches!(missing, Err(ScssError::Io { .. })));
}
