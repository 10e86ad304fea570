#![allow(dead_code)]

use lexer_core::{
    EdgeKind, FontStyle, Language, LanguageBuilder, LiteralTable, State, StateMachine,
    TokenCategory,
};

pub fn identifier_machine() -> StateMachine {
    StateMachine::builder()
        .add_state(State::new("building"))
        .add_state(State::error("ERROR"))
        .add_state(State::accepting("identifierEND"))
        .add_char_edge("START", "[_A-Za-z]", "building")
        .add_char_edge("building", "[_A-Za-z0-9]", "building")
        .add_edge(
            "building",
            "ACCEPTABLE_SYMBOLS",
            "identifierEND",
            EdgeKind::AcceptOnBoundary,
        )
        .add_edge("building", "OTHERS", "ERROR", EdgeKind::FallbackNoConsume)
        .build()
        .expect("identifier automaton")
}

pub fn integer_machine() -> StateMachine {
    StateMachine::builder()
        .add_state(State::new("digits"))
        .add_state(State::error("ERROR"))
        .add_state(State::accepting("intEND"))
        .add_char_edge("START", "[0-9]", "digits")
        .add_char_edge("digits", "[0-9]", "digits")
        .add_edge("digits", "ACCEPTABLE_SYMBOLS", "intEND", EdgeKind::AcceptOnBoundary)
        .add_edge("digits", "OTHERS", "ERROR", EdgeKind::FallbackNoConsume)
        .build()
        .expect("integer automaton")
}

pub fn space_machine() -> StateMachine {
    StateMachine::builder()
        .add_state(State::accepting("spaceEND"))
        .add_char_edge("START", r"\s+", "spaceEND")
        .build()
        .expect("space automaton")
}

/// Keywords `if`/`while`, operators `=`, `==`, `+`; keywords found via identifiers.
pub fn scenario_builder() -> LanguageBuilder {
    Language::builder("Scenario")
        .add_predefined_keywords(["if", "while"])
        .add_predefined_operators(["=", "==", "+"])
        .add_literal_prototype(
            TokenCategory::Keyword,
            LiteralTable::Keywords,
            FontStyle::default(),
        )
        .add_token_prototype(
            TokenCategory::Identifier,
            identifier_machine(),
            FontStyle::default(),
        )
        .add_literal_prototype(
            TokenCategory::Operator,
            LiteralTable::Operators,
            FontStyle::default(),
        )
        .add_token_prototype(TokenCategory::Space, space_machine(), FontStyle::default())
        .keywords_from_identifiers(true)
}

pub fn scenario_language() -> Language {
    scenario_builder()
        .priority([
            TokenCategory::Keyword,
            TokenCategory::Identifier,
            TokenCategory::Operator,
            TokenCategory::Space,
        ])
        .build()
        .expect("scenario language")
}

pub fn scenario_language_with_integers() -> Language {
    scenario_builder()
        .add_token_prototype(TokenCategory::Integer, integer_machine(), FontStyle::default())
        .priority([
            TokenCategory::Keyword,
            TokenCategory::Identifier,
            TokenCategory::Operator,
            TokenCategory::Integer,
            TokenCategory::Space,
        ])
        .build()
        .expect("scenario language with integers")
}
