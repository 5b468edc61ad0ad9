use rio_scss::compile;

#[test]
fn test_descendant_nesting() {
    let css = compile(".a { .b { color: red; } }").unwrap();
    // No empty `.a { }` rule, only the qualified child.
    assert_eq!(css, ".a .b {\n  color: red;\n}\n");
}

#[test]
fn test_parent_properties_precede_children() {
    let css = compile(".a { color: blue; .b { color: red; } }").unwrap();
    assert_eq!(css, ".a {\n  color: blue;\n}\n.a .b {\n  color: red;\n}\n");
}

#[test]
fn test_ampersand_resolution() {
    let css = compile(".a { &:hover { color: red; } }").unwrap();
    assert_eq!(css, ".a:hover {\n  color: red;\n}\n");
    assert!(!css.contains('&'));
}

#[test]
fn test_deep_recursive_nesting() {
    let source = r#"
    .course-list {
        .course-card {
            &:hover {
                background: blue;
            }
        }
    }
    "#;

    let css = compile(source).expect("deep nested stylesheet should compile");
    // Only the innermost block has declarations.
    assert_eq!(css, ".course-list .course-card:hover {\n  background: blue;\n}\n");
}

#[test]
fn test_bem_suffixes() {
    let source = r#"
.rio-button {
    padding: 12px 24px;
    &--primary {
        background: #0a4d8c;
    }
    &__icon {
        margin-right: 8px;
    }
}
"#;

    insta::assert_snapshot!(compile(source).unwrap(), @r"
.rio-button {
  padding: 12px 24px;
}
.rio-button--primary {
  background: #0a4d8c;
}
.rio-button__icon {
  margin-right: 8px;
}
");
}

#[test]
fn test_selector_lists_combine() {
    let css = compile("h1, h2 {\n  a { color: inherit; }\n}").unwrap();
    assert_eq!(css, "h1 a, h2 a {\n  color: inherit;\n}\n");
}

#[test]
fn test_flat_input_is_unchanged() {
    let source = ".a {\n  color: red;\n}\n.b {\n  margin: 0 auto;\n  padding: 4px;\n}\n";
    assert_eq!(compile(source).unwrap(), source);
}

#[test]
fn test_declaration_order_is_preserved() {
    let source = r#"
.card {
    display: flex;
    .title { font-size: 18px; }
    gap: 12px;
    .meta { opacity: 0.7; }
}
"#;
    let css = compile(source).unwrap();
    let order: Vec<&str> = css.lines().filter(|l| !l.starts_with(' ') && l.ends_with('{')).collect();
    assert_eq!(order, [".card {", ".card .title {", ".card {", ".card .meta {"]);
}

#[test]
fn test_value_continued_on_next_line() {
    let source = ".course-card {\n  font-family:\n    \"Titillium\", sans-serif;\n  box-shadow:\n    0 1px 2px black,\n    0 4px 8px gray;\n}\n";
    assert_eq!(
        compile(source).unwrap(),
        ".course-card {\n  font-family: \"Titillium\", sans-serif;\n  box-shadow: 0 1px 2px black, 0 4px 8px gray;\n}\n"
    );
}
