use ead_rio::{EadRioError, LoaderConfig, compile, render_component_styles};
use std::path::PathBuf;

fn fixture_theme() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("crates/components/tests/fixtures/theme")
}

#[test]
fn renders_styles_for_used_components() {
    let block = render_component_styles(LoaderConfig::new(fixture_theme()), &["rio-button"]).unwrap();
    assert!(block.starts_with("<style id='component-styles'>\n/* Component: rio-button */\n"));
    assert!(block.contains(".rio-button:hover {\n  background: #06345f;\n}\n"));
    assert!(block.ends_with("</style>\n"));
}

#[test]
fn no_components_renders_nothing() {
    let none: [&str; 0] = [];
    let block = render_component_styles(LoaderConfig::new(fixture_theme()), &none).unwrap();
    assert!(block.is_empty());
}

#[test]
fn scss_errors_convert() {
    let err: EadRioError = compile(".a {").unwrap_err().into();
    assert!(matches!(err, EadRioError::Scss(_)));
    assert_eq!(err.to_string(), "unclosed block opened at line 1: .a");
}
