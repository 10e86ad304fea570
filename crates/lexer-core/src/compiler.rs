use crate::error::LexerError;
use crate::language::Language;
use crate::prototype::TokenPrototype;
use crate::style::FontStyle;
use crate::token::{Token, TokenCategory};

/// Terminator appended by [`Compiler::analyze_line`].
///
/// Open-ended automata (identifiers, numbers, line comments) need an explicit boundary
/// character to finish a match at the end of a line.
pub const LINE_TERMINATOR: char = '\n';

/// Turns text into an ordered token sequence for one [`Language`].
///
/// All prototypes of the language's trial order are resolved up front, so a missing
/// category surfaces as [`LexerError::NoTokenType`] from [`Compiler::new`] and analysis
/// itself cannot fail.
#[derive(Debug, Clone)]
pub struct Compiler<'l> {
    language: &'l Language,
    trials: Vec<&'l TokenPrototype>,
    keyword_style: Option<FontStyle>,
    unknown_style: FontStyle,
}

impl<'l> Compiler<'l> {
    /// Prepare a compiler, failing if a category in the trial order has no prototype.
    pub fn new(language: &'l Language) -> Result<Self, LexerError> {
        let trials = language
            .trial_order()
            .map(|category| language.require_prototype(category))
            .collect::<Result<Vec<_>, _>>()?;

        let reclassifies = !language.keywords().is_empty()
            && trials
                .iter()
                .any(|p| p.category() == TokenCategory::Identifier);
        let keyword_style = if reclassifies {
            Some(*language.require_prototype(TokenCategory::Keyword)?.style())
        } else {
            None
        };

        Ok(Self {
            language,
            trials,
            keyword_style,
            unknown_style: language.unknown_style(),
        })
    }

    /// The language being lexed.
    pub fn language(&self) -> &'l Language {
        self.language
    }

    /// Lex `source` from its first character to its last.
    ///
    /// At every position the categories are tried in priority order and the first one
    /// whose automaton accepts a non-empty prefix wins. Identifiers spelled like a
    /// keyword are reported as [`TokenCategory::Keyword`]. If nothing accepts, the
    /// longest prefix any automaton consumed before rejecting (at least one character)
    /// becomes an [`TokenCategory::Unknown`] token and scanning resumes after it.
    ///
    /// The concatenated token texts always equal `source`.
    pub fn analyze(&self, source: &str) -> Vec<Token> {
        let operators = self.language.operators();
        let mut tokens = Vec::new();
        let mut pos = 0usize;

        while pos < source.len() {
            let rest = &source[pos..];
            let mut longest_rejected = "";
            let mut winner = None;

            for prototype in &self.trials {
                let outcome = prototype.matches(rest, operators);
                if outcome.is_accepted() && !outcome.consumed().is_empty() {
                    winner = Some((*prototype, outcome.consumed()));
                    break;
                }
                if outcome.consumed().len() > longest_rejected.len() {
                    longest_rejected = outcome.consumed();
                }
            }

            let token = match winner {
                Some((prototype, text)) => self.accepted_token(prototype, text),
                None => {
                    let text = if longest_rejected.is_empty() {
                        let end = rest.chars().next().map_or(rest.len(), char::len_utf8);
                        &rest[..end]
                    } else {
                        longest_rejected
                    };
                    tracing::debug!(
                        language = self.language.name(),
                        offset = pos,
                        text,
                        "no automaton accepted; emitting unknown token"
                    );
                    Token::new(TokenCategory::Unknown, text, self.unknown_style)
                }
            };

            pos += token.text().len();
            tokens.push(token);
        }

        tokens
    }

    /// Lex one editor line, appending [`LINE_TERMINATOR`] if the line lacks one.
    ///
    /// The terminator is part of the output (usually as a trailing space token).
    pub fn analyze_line(&self, line: &str) -> Vec<Token> {
        if line.ends_with(LINE_TERMINATOR) {
            return self.analyze(line);
        }
        let mut terminated = String::with_capacity(line.len() + 1);
        terminated.push_str(line);
        terminated.push(LINE_TERMINATOR);
        self.analyze(&terminated)
    }

    fn accepted_token(&self, prototype: &TokenPrototype, text: &str) -> Token {
        let (category, style) = match self.keyword_style {
            Some(style)
                if prototype.category() == TokenCategory::Identifier
                    && self.language.is_keyword(text) =>
            {
                (TokenCategory::Keyword, style)
            }
            _ => (prototype.category(), *prototype.style()),
        };
        tracing::trace!(category = %category, text, "accepted");
        Token::new(category, text, style)
    }
}

/// One-shot helper: build a [`Compiler`] for `language` and analyze `text`.
pub fn compile(language: &Language, text: &str) -> Result<Vec<Token>, LexerError> {
    Ok(Compiler::new(language)?.analyze(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::{EdgeKind, State, StateMachine};
    use crate::language::LiteralTable;
    use pretty_assertions::assert_eq;
    use std::io;
    use std::sync::{Arc, Mutex};

    fn identifier_machine() -> StateMachine {
        StateMachine::builder()
            .add_state(State::new("building"))
            .add_state(State::error("ERROR"))
            .add_state(State::accepting("END"))
            .add_char_edge("START", "[_A-Za-z]", "building")
            .add_char_edge("building", "[_A-Za-z0-9]", "building")
            .add_edge("building", "ACCEPTABLE_SYMBOLS", "END", EdgeKind::AcceptOnBoundary)
            .add_edge("building", "OTHERS", "ERROR", EdgeKind::FallbackNoConsume)
            .build()
            .unwrap()
    }

    fn space_machine() -> StateMachine {
        StateMachine::builder()
            .add_state(State::accepting("END"))
            .add_char_edge("START", r"\s+", "END")
            .build()
            .unwrap()
    }

    fn small_language(keywords_from_identifiers: bool) -> Language {
        Language::builder("Small")
            .add_predefined_keywords(["if", "while"])
            .add_predefined_operators(["=", "==", "+"])
            .add_literal_prototype(
                TokenCategory::Keyword,
                LiteralTable::Keywords,
                FontStyle::foreground(crate::Color::ORANGE),
            )
            .add_token_prototype(TokenCategory::Identifier, identifier_machine(), FontStyle::default())
            .add_literal_prototype(TokenCategory::Operator, LiteralTable::Operators, FontStyle::default())
            .add_token_prototype(TokenCategory::Space, space_machine(), FontStyle::default())
            .priority([
                TokenCategory::Keyword,
                TokenCategory::Identifier,
                TokenCategory::Operator,
                TokenCategory::Space,
            ])
            .keywords_from_identifiers(keywords_from_identifiers)
            .build()
            .unwrap()
    }

    fn categories(tokens: &[Token]) -> Vec<(TokenCategory, &str)> {
        tokens.iter().map(|t| (t.category(), t.text())).collect()
    }

    #[test]
    fn test_keyword_reclassification() {
        let language = small_language(true);
        let compiler = Compiler::new(&language).unwrap();
        let tokens = compiler.analyze_line("if iffy");
        assert_eq!(
            categories(&tokens),
            vec![
                (TokenCategory::Keyword, "if"),
                (TokenCategory::Space, " "),
                (TokenCategory::Identifier, "iffy"),
                (TokenCategory::Space, "\n"),
            ]
        );
        assert_eq!(tokens[0].style().foreground, crate::Color::ORANGE);
    }

    #[test]
    fn test_direct_keyword_trial_splits_identifiers() {
        let language = small_language(false);
        let tokens = compile(&language, "iffy ").unwrap();
        assert_eq!(
            categories(&tokens),
            vec![
                (TokenCategory::Keyword, "if"),
                (TokenCategory::Identifier, "fy"),
                (TokenCategory::Space, " "),
            ]
        );
    }

    #[test]
    fn test_unknown_character_does_not_abort() {
        let language = small_language(true);
        let tokens = compile(&language, "€ x ").unwrap();
        assert_eq!(
            categories(&tokens),
            vec![
                (TokenCategory::Unknown, "€"),
                (TokenCategory::Space, " "),
                (TokenCategory::Identifier, "x"),
                (TokenCategory::Space, " "),
            ]
        );
        assert_eq!(*tokens[0].style(), FontStyle::unknown_default());
    }

    #[test]
    fn test_unknown_uses_longest_rejected_prefix() {
        let language = small_language(true);
        // The identifier automaton consumes `ab` before `$` sends it to its error state.
        let tokens = compile(&language, "ab$ ").unwrap();
        assert_eq!(
            categories(&tokens),
            vec![
                (TokenCategory::Unknown, "ab"),
                (TokenCategory::Unknown, "$"),
                (TokenCategory::Space, " "),
            ]
        );
    }

    #[test]
    fn test_missing_category_is_a_configuration_error() {
        let language = Language::builder("Broken")
            .priority([TokenCategory::Space, TokenCategory::Integer])
            .add_token_prototype(TokenCategory::Space, space_machine(), FontStyle::default())
            .build()
            .unwrap();
        let err = Compiler::new(&language).unwrap_err();
        assert!(matches!(err, LexerError::NoTokenType(TokenCategory::Integer)));
    }

    #[test]
    fn test_keywords_without_keyword_prototype_is_a_configuration_error() {
        let language = Language::builder("NoKeyword")
            .add_predefined_keywords(["if"])
            .add_token_prototype(TokenCategory::Identifier, identifier_machine(), FontStyle::default())
            .priority([TokenCategory::Identifier])
            .build()
            .unwrap();
        assert!(matches!(
            compile(&language, "if "),
            Err(LexerError::NoTokenType(TokenCategory::Keyword))
        ));
    }

    #[test]
    fn test_analyze_line_keeps_existing_terminator() {
        let language = small_language(true);
        let compiler = Compiler::new(&language).unwrap();
        let tokens = compiler.analyze_line("x\n");
        assert_eq!(
            categories(&tokens),
            vec![(TokenCategory::Identifier, "x"), (TokenCategory::Space, "\n")]
        );
    }

    #[test]
    fn test_empty_input_yields_no_tokens() {
        let language = small_language(true);
        assert!(compile(&language, "").unwrap().is_empty());
    }

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_reclassified_keywords_are_traced() {
        let captured = CapturedLog::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let language = small_language(true);
        tracing::subscriber::with_default(subscriber, || {
            Compiler::new(&language).unwrap().analyze_line("if x");
        });

        let log = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        let accepted: Vec<_> = log.lines().filter(|l| l.contains("accepted")).collect();
        assert!(
            accepted
                .iter()
                .any(|l| l.contains("category=keyword") && l.contains("text=\"if\"")),
            "{log}"
        );
        assert!(
            accepted
                .iter()
                .any(|l| l.contains("category=identifier") && l.contains("text=\"x\"")),
            "{log}"
        );
    }
}
