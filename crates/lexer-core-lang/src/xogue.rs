//! Xogue, the demo language the editor ships with.

use lexer_core::{
    BOUNDARY_EDGE_TEXT as BOUNDARY, Color, EdgeKind, FALLBACK_EDGE_TEXT as OTHERS, FontStyle,
    Language, LexerError, LiteralTable, State, StateMachine, TokenCategory,
};

/// Name under which Xogue is registered.
pub const XOGUE: &str = "Xogue";

/// Xogue operator symbols.
pub const XOGUE_OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "%", "&", "|", "^", "**", //
    "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "**=", "=", //
    "++", "--", //
    ",", ".", ";", "?", ":", "->", //
    "(", ")", "[", "]", "{", "}", //
    "!", ">", "<", "==", ">=", "<=", "!=",
];

/// Xogue keywords.
pub const XOGUE_KEYWORDS: &[&str] = &[
    "if", "else", "elif", "switch", "case", "default", "when", //
    "for", "while", "repeat", "break", "continue", "goto", //
    "var", "fun", "return", //
    "try", "throw", "catch", "finally", //
    "int8", "int16", "int32", "int64", "float", "double", "string", "char", //
    "za_warudo",
];

/// Build the Xogue language.
///
/// Keywords are found by reclassifying identifiers, so `iffy` stays one identifier.
pub fn xogue() -> Result<Language, LexerError> {
    Language::builder(XOGUE)
        .add_predefined_operators(XOGUE_OPERATORS.iter().copied())
        .add_predefined_keywords(XOGUE_KEYWORDS.iter().copied())
        .add_token_prototype(
            TokenCategory::Comment,
            comment()?,
            FontStyle::foreground(Color::DARK_GRAY),
        )
        .add_literal_prototype(
            TokenCategory::Keyword,
            LiteralTable::Keywords,
            FontStyle::foreground(Color::ORANGE),
        )
        .add_token_prototype(
            TokenCategory::Identifier,
            identifier()?,
            FontStyle::default(),
        )
        .add_token_prototype(
            TokenCategory::String,
            string()?,
            FontStyle::foreground(Color::LIGHT_GREEN),
        )
        .add_token_prototype(
            TokenCategory::Char,
            character()?,
            FontStyle::foreground(Color::GREEN_YELLOW),
        )
        .add_literal_prototype(
            TokenCategory::Operator,
            LiteralTable::Operators,
            FontStyle::foreground(Color::PEACH_PUFF),
        )
        .add_token_prototype(
            TokenCategory::Floating,
            floating()?,
            FontStyle::foreground(Color::SKY_BLUE),
        )
        .add_token_prototype(
            TokenCategory::Integer,
            integer()?,
            FontStyle::foreground(Color::SKY_BLUE),
        )
        .add_token_prototype(TokenCategory::Space, space()?, FontStyle::default())
        .add_token_prototype(
            TokenCategory::Unknown,
            StateMachine::default(),
            FontStyle::unknown_default(),
        )
        .keywords_from_identifiers(true)
        .build()
}

/// `// ...\n` and `/* ... */`.
fn comment() -> Result<StateMachine, LexerError> {
    StateMachine::builder()
        .add_state(State::new("/"))
        .add_state(State::new("//"))
        .add_state(State::new("/*"))
        .add_state(State::new("/*...*"))
        .add_state(State::accepting("//...END"))
        .add_state(State::accepting("/*...*/END"))
        .add_char_edge("START", "/", "/")
        .add_char_edge("/", "/", "//")
        .add_char_edge("//", "\n", "//...END")
        .add_edge("//", OTHERS, "//", EdgeKind::FallbackConsume)
        .add_char_edge("/", r"\*", "/*")
        .add_char_edge("/*", r"\*", "/*...*")
        .add_edge("/*", OTHERS, "/*", EdgeKind::FallbackConsume)
        .add_char_edge("/*...*", r"\*", "/*...*")
        .add_char_edge("/*...*", "/", "/*...*/END")
        .add_edge("/*...*", OTHERS, "/*", EdgeKind::FallbackConsume)
        .build()
}

fn identifier() -> Result<StateMachine, LexerError> {
    StateMachine::builder()
        .add_state(State::new("building"))
        .add_state(State::error("ERROR"))
        .add_state(State::accepting("identifierEND"))
        .add_char_edge("START", "[_A-Za-z]", "building")
        .add_char_edge("building", "[_A-Za-z0-9]", "building")
        .add_edge("building", BOUNDARY, "identifierEND", EdgeKind::AcceptOnBoundary)
        .add_edge("building", OTHERS, "ERROR", EdgeKind::FallbackNoConsume)
        .build()
}

/// Double-quoted, with backslash escapes.
fn string() -> Result<StateMachine, LexerError> {
    StateMachine::builder()
        .add_state(State::new("opened"))
        .add_state(State::new("ends_w_back_slash"))
        .add_state(State::accepting("strEND"))
        .add_char_edge("START", "\"", "opened")
        .add_char_edge("opened", r"\\", "ends_w_back_slash")
        .add_edge("ends_w_back_slash", OTHERS, "opened", EdgeKind::FallbackConsume)
        .add_edge("opened", OTHERS, "opened", EdgeKind::FallbackConsume)
        .add_char_edge("opened", "\"", "strEND")
        .build()
}

/// One character (or one escape) between single quotes.
fn character() -> Result<StateMachine, LexerError> {
    StateMachine::builder()
        .add_state(State::new("opened"))
        .add_state(State::new("back_slash"))
        .add_state(State::new("a_char"))
        .add_state(State::accepting("charEND"))
        .add_char_edge("START", "'", "opened")
        .add_char_edge("opened", r"\\", "back_slash")
        .add_edge("back_slash", OTHERS, "a_char", EdgeKind::FallbackConsume)
        .add_edge("opened", OTHERS, "a_char", EdgeKind::FallbackConsume)
        .add_char_edge("a_char", "'", "charEND")
        .build()
}

/// `1.5`, `1.`, `1e9`, `2.5E-3`, with an optional `f` suffix.
///
/// Plain digits never reach an accepting state here; they are left to the integer
/// automaton. A leading dot is accepted by this automaton, but Xogue tries operators
/// first, so `.5` lexes as `.` followed by `5`.
fn floating() -> Result<StateMachine, LexerError> {
    StateMachine::builder()
        .add_state(State::new("digits"))
        .add_state(State::new("a_dot"))
        .add_state(State::new("floating"))
        .add_state(State::new("floating_exp"))
        .add_state(State::new("floating_exp_sign"))
        .add_state(State::new("floating_exp_digits"))
        .add_state(State::error("ERROR"))
        .add_state(State::accepting("floatEND"))
        .add_state(State::accepting("doubleEND"))
        .add_char_edge("START", "[0-9]", "digits")
        .add_char_edge("START", r"\.", "a_dot")
        .add_char_edge("digits", r"\.", "floating")
        .add_char_edge("digits", "[0-9]", "digits")
        .add_char_edge("digits", "E|e", "floating_exp")
        .add_char_edge("digits", "F|f", "floatEND")
        .add_char_edge("a_dot", "[0-9]", "floating")
        .add_char_edge("floating", "[0-9]", "floating")
        .add_char_edge("floating", "E|e", "floating_exp")
        .add_char_edge("floating", "F|f", "floatEND")
        .add_edge("floating", BOUNDARY, "doubleEND", EdgeKind::AcceptOnBoundary)
        .add_edge("floating", OTHERS, "ERROR", EdgeKind::FallbackNoConsume)
        .add_char_edge("floating_exp", "[0-9]", "floating_exp_digits")
        .add_char_edge("floating_exp", r"\+|-", "floating_exp_sign")
        .add_char_edge("floating_exp_digits", "F|f", "floatEND")
        .add_char_edge("floating_exp_digits", "[0-9]", "floating_exp_digits")
        .add_edge(
            "floating_exp_digits",
            BOUNDARY,
            "doubleEND",
            EdgeKind::AcceptOnBoundary,
        )
        .add_edge(
            "floating_exp_digits",
            OTHERS,
            "ERROR",
            EdgeKind::FallbackNoConsume,
        )
        .add_char_edge("floating_exp_sign", "[0-9]", "floating_exp_digits")
        .build()
}

/// Decimal, `0b`, `0o` and `0x` integers with `_` separators between digits.
fn integer() -> Result<StateMachine, LexerError> {
    let mut builder = StateMachine::builder()
        .add_state(State::new("starts_w_zero"))
        .add_state(State::new("digits"))
        .add_state(State::new("digits_underline"))
        .add_state(State::error("ERROR"))
        .add_state(State::accepting("intEND"))
        .add_char_edge("START", "0", "starts_w_zero")
        .add_char_edge("START", "[1-9]", "digits")
        .add_char_edge("starts_w_zero", "_", "digits_underline")
        .add_char_edge("starts_w_zero", "[0-9]", "digits")
        .add_edge("starts_w_zero", BOUNDARY, "intEND", EdgeKind::AcceptOnBoundary)
        .add_edge("starts_w_zero", OTHERS, "ERROR", EdgeKind::FallbackNoConsume)
        .add_char_edge("digits", "[0-9]", "digits")
        .add_char_edge("digits", "_", "digits_underline")
        .add_edge("digits", BOUNDARY, "intEND", EdgeKind::AcceptOnBoundary)
        .add_edge("digits", OTHERS, "ERROR", EdgeKind::FallbackNoConsume)
        .add_char_edge("digits_underline", "[0-9]", "digits");

    // Prefixed radixes share one shape: prefix -> mode -> digits (with `_` separators).
    for (prefix, mode, run, digit) in [
        ("b", "binary_mode", "binaries", "[0-1]"),
        ("o", "octal_mode", "octals", "[0-7]"),
        ("x", "hex_mode", "hices", "[0-9A-Fa-f]"),
    ] {
        let underline = format!("{run}_underline");
        builder = builder
            .add_state(State::new(mode))
            .add_state(State::new(run))
            .add_state(State::new(underline.as_str()))
            .add_char_edge("starts_w_zero", prefix, mode)
            .add_char_edge(mode, digit, run)
            .add_char_edge(run, digit, run)
            .add_char_edge(run, "_", &underline)
            .add_edge(run, BOUNDARY, "intEND", EdgeKind::AcceptOnBoundary)
            .add_edge(run, OTHERS, "ERROR", EdgeKind::FallbackNoConsume)
            .add_char_edge(&underline, digit, run);
    }

    builder.build()
}

/// One whitespace character per token.
fn space() -> Result<StateMachine, LexerError> {
    StateMachine::builder()
        .add_state(State::accepting("spaceEND"))
        .add_char_edge("START", r"\s+", "spaceEND")
        .build()
}
