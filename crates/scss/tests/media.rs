use rio_scss::compile;

#[test]
fn test_media_wrapping() {
    let css = compile("@media (max-width: 768px) { .a { color: red; } }").unwrap();
    assert_eq!(css, "@media (max-width: 768px) {\n.a {\n  color: red;\n}\n}\n");
}

#[test]
fn test_media_inside_selector_keeps_ancestor_prefix() {
    let source = r#"
.course-card {
    padding: 24px;
    @media (max-width: 768px) {
        .course-card__title {
            font-size: 16px;
        }
    }
}
"#;

    insta::assert_snapshot!(compile(source).unwrap(), @r"
.course-card {
  padding: 24px;
}
@media (max-width: 768px) {
.course-card .course-card__title {
  font-size: 16px;
}
}
");
}

#[test]
fn test_media_does_not_join_selectors() {
    let source = ".a {\n  @media print {\n    &:after { content: \"\"; }\n  }\n}\n";
    let css = compile(source).unwrap();
    assert!(css.contains(".a:after {\n"));
    assert!(!css.contains("print .a"));
}

#[test]
fn test_supports_is_a_group_rule() {
    let css = compile("@supports (display: grid) {\n  .grid { display: grid; }\n}").unwrap();
    assert_eq!(css, "@supports (display: grid) {\n.grid {\n  display: grid;\n}\n}\n");
}

#[test]
fn test_font_face_is_a_rule() {
    let css = compile("@font-face {\n  font-family: Titillium;\n  src: url(t.woff2);\n}").unwrap();
    assert_eq!(
        css,
        "@font-face {\n  font-family: Titillium;\n  src: url(t.woff2);\n}\n"
    );
}

#[test]
fn test_top_level_keyframes() {
    let css = compile("@keyframes fade {\n  from { opacity: 0; }\n  to { opacity: 1; }\n}").unwrap();
    assert_eq!(
        css,
        "@keyframes fade {\nfrom {\n  opacity: 0;\n}\nto {\n  opacity: 1;\n}\n}\n"
    );
}

#[test]
fn test_top_level_media_properties_are_indented() {
    let css = compile("@media print {\n  color: red\n}\n").unwrap();
    assert_eq!(css, "@media print {\n  color: red;\n}\n");
}
