#![warn(missing_docs)]
//! `lexer-core` - finite-automaton lexical analysis for editor syntax highlighting.
//!
//! # Overview
//!
//! Each token category of a language owns an explicit state machine. Composite tokens
//! (comments, strings, numeric literals) are laid out by hand; keywords and operators
//! are generated from flat literal lists as shared-prefix tries. The [`Compiler`]
//! walks a line of text and, at every position, simulates the category automata in
//! priority order until one accepts.
//!
//! ```text
//! ┌───────────────────────────────────────────┐
//! │  Compiler (priority, keywords, recovery)  │  ← text → tokens
//! ├───────────────────────────────────────────┤
//! │  Language / LanguageCatalog               │  ← configuration
//! ├───────────────────────────────────────────┤
//! │  TokenPrototype (automaton simulation)    │
//! ├───────────────────────────────────────────┤
//! │  StateMachine + builder (manual / trie)   │
//! ├───────────────────────────────────────────┤
//! │  State / Edge graph                       │
//! └───────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use lexer_core::{
//!     Compiler, EdgeKind, FontStyle, Language, LiteralTable, State, StateMachine, TokenCategory,
//! };
//!
//! let identifier = StateMachine::builder()
//!     .add_state(State::new("building"))
//!     .add_state(State::accepting("END"))
//!     .add_state(State::error("ERROR"))
//!     .add_char_edge("START", "[_A-Za-z]", "building")
//!     .add_char_edge("building", "[_A-Za-z0-9]", "building")
//!     .add_edge("building", "ACCEPTABLE_SYMBOLS", "END", EdgeKind::AcceptOnBoundary)
//!     .add_edge("building", "OTHERS", "ERROR", EdgeKind::FallbackNoConsume)
//!     .build()
//!     .unwrap();
//! let space = StateMachine::builder()
//!     .add_state(State::accepting("END"))
//!     .add_char_edge("START", r"\s+", "END")
//!     .build()
//!     .unwrap();
//!
//! let language = Language::builder("Demo")
//!     .add_predefined_keywords(["if"])
//!     .add_predefined_operators(["=", "=="])
//!     .add_literal_prototype(TokenCategory::Keyword, LiteralTable::Keywords, FontStyle::default())
//!     .add_token_prototype(TokenCategory::Identifier, identifier, FontStyle::default())
//!     .add_literal_prototype(TokenCategory::Operator, LiteralTable::Operators, FontStyle::default())
//!     .add_token_prototype(TokenCategory::Space, space, FontStyle::default())
//!     .priority([TokenCategory::Identifier, TokenCategory::Operator, TokenCategory::Space])
//!     .build()
//!     .unwrap();
//!
//! let compiler = Compiler::new(&language).unwrap();
//! let tokens = compiler.analyze_line("if a==b");
//! assert_eq!(tokens[0].category(), TokenCategory::Keyword);
//! assert_eq!(tokens[3].text(), "==");
//! ```
//!
//! # Concurrency
//!
//! Languages are immutable once built and are `Send + Sync`; any number of threads may
//! run compilers against the same language. Analysis performs no I/O and keeps no cache
//! between calls.

pub mod automaton;
mod catalog;
mod compiler;
mod error;
mod language;
mod prototype;
mod style;
mod token;

pub use automaton::{
    BOUNDARY_EDGE_TEXT, Edge, EdgeKind, FALLBACK_EDGE_TEXT, START_LABEL, State, StateId,
    StateMachine, StateMachineBuilder, StateRole,
};
pub use catalog::LanguageCatalog;
pub use compiler::{Compiler, LINE_TERMINATOR, compile};
pub use error::LexerError;
pub use language::{Language, LanguageBuilder, LiteralTable};
pub use prototype::{MatchOutcome, TokenPrototype};
pub use style::{Color, FontStyle, FontStyleBuilder};
pub use token::{Token, TokenCategory};
