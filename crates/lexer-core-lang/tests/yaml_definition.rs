use lexer_core::{Color, Compiler, LanguageCatalog, TokenCategory};
use lexer_core_lang::{LanguageDefinition, LanguageDefinitionError, load_language_from_str};
use pretty_assertions::assert_eq;

const MINI: &str = include_str!("fixtures/mini.yaml");

#[test]
fn test_mini_definition_compiles_and_lexes() {
    let language = load_language_from_str(MINI).expect("compile mini.yaml");
    assert_eq!(language.name(), "Mini");
    assert!(language.is_keyword("while"));
    assert_eq!(
        language.priority(),
        &[
            TokenCategory::Comment,
            TokenCategory::Identifier,
            TokenCategory::Operator,
            TokenCategory::Integer,
            TokenCategory::Space,
        ]
    );

    let compiler = Compiler::new(&language).expect("compiler");
    let tokens = compiler.analyze_line("while(n+=12) # loop");
    let pairs: Vec<_> = tokens.iter().map(|t| (t.category(), t.text())).collect();
    assert_eq!(
        pairs,
        vec![
            (TokenCategory::Keyword, "while"),
            (TokenCategory::Operator, "("),
            (TokenCategory::Identifier, "n"),
            (TokenCategory::Operator, "+="),
            (TokenCategory::Integer, "12"),
            (TokenCategory::Operator, ")"),
            (TokenCategory::Space, " "),
            (TokenCategory::Comment, "# loop\n"),
        ]
    );

    let keyword = tokens[0].style();
    assert!(keyword.bold);
    assert_eq!(keyword.foreground, Color::ORANGE);
    assert!(tokens[7].style().italic);
}

#[test]
fn test_unknown_style_comes_from_definition() {
    let language = load_language_from_str(MINI).unwrap();
    let unknown = language.unknown_style();
    assert!(unknown.underlined);
    assert_eq!(unknown.underline_color, Color::RED);
    assert_eq!(unknown.background, Color::rgba(0x4D, 0x4D, 0x4D, 0x99));

    let compiler = Compiler::new(&language).unwrap();
    let tokens = compiler.analyze_line("x $");
    assert_eq!(tokens[2].category(), TokenCategory::Unknown);
    assert_eq!(tokens[2].text(), "$");
}

#[test]
fn test_definition_round_trips_through_catalog() {
    let mut catalog = LanguageCatalog::new();
    catalog
        .register(load_language_from_str(MINI).unwrap())
        .unwrap();
    let err = catalog
        .register(load_language_from_str(MINI).unwrap())
        .unwrap_err();
    assert!(err.to_string().contains("Mini"));
}

#[test]
fn test_definition_fields_default() {
    let definition = LanguageDefinition::from_yaml("name: Empty\n").unwrap();
    assert!(definition.keywords.is_empty());
    assert!(definition.priority.is_none());
    assert!(!definition.keywords_from_identifiers);
    assert!(definition.tokens.is_empty());
}

#[test]
fn test_priority_naming_a_missing_category_fails_at_compiler() {
    let yaml = "name: Sparse\npriority: [integer]\n";
    let language = load_language_from_str(yaml).unwrap();
    assert!(Compiler::new(&language).is_err());
}

#[test]
fn test_malformed_yaml_is_reported() {
    let err = load_language_from_str("name: [unterminated").unwrap_err();
    assert!(matches!(err, LanguageDefinitionError::Yaml(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = lexer_core_lang::load_language_from_path("/nonexistent/lang.yaml").unwrap_err();
    assert!(matches!(err, LanguageDefinitionError::Io(_)));
}
