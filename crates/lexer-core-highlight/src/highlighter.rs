use crate::error::HighlightError;
use lexer_core::{Compiler, FontStyle, LINE_TERMINATOR, Language, Token, TokenCategory};
use std::ops::Range;
use std::sync::Arc;

/// One styled token, positioned in document character offsets.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledSpan {
    /// First char offset (inclusive).
    pub start: usize,
    /// Last char offset (exclusive).
    pub end: usize,
    /// Token category.
    pub category: TokenCategory,
    /// Resolved style.
    pub style: FontStyle,
    /// The covered text.
    pub text: String,
}

impl StyledSpan {
    /// Length in chars.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers nothing.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// The spans of one source line. They cover the line exactly, terminator included.
#[derive(Debug, Clone, PartialEq)]
pub struct LineTokens {
    /// Zero-based line number.
    pub line: usize,
    /// Char offset of the first character of the line.
    pub start: usize,
    /// Spans in line order.
    pub spans: Vec<StyledSpan>,
}

/// Highlighting output for a document or a range of its lines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HighlightResult {
    /// Highlighted lines, in document order.
    pub lines: Vec<LineTokens>,
}

impl HighlightResult {
    /// All spans, in document order.
    pub fn spans(&self) -> impl Iterator<Item = &StyledSpan> {
        self.lines.iter().flat_map(|line| line.spans.iter())
    }

    /// The tokens of line `line`, if it was highlighted.
    pub fn line(&self, line: usize) -> Option<&LineTokens> {
        self.lines.iter().find(|l| l.line == line)
    }
}

/// Lexes text line by line with one language.
#[derive(Debug, Clone)]
pub struct TokenHighlighter {
    language: Arc<Language>,
}

impl TokenHighlighter {
    /// Highlight with `language`.
    pub fn new(language: Arc<Language>) -> Self {
        Self { language }
    }

    /// The language used for lexing.
    pub fn language(&self) -> &Arc<Language> {
        &self.language
    }

    /// Highlight every line of `text`.
    pub fn highlight(&self, text: &str) -> Result<HighlightResult, HighlightError> {
        self.highlight_lines(text, 0..usize::MAX)
    }

    /// Highlight only the lines in `range` (e.g. the visible viewport).
    ///
    /// Offsets are still relative to the start of the whole document.
    pub fn highlight_lines(
        &self,
        text: &str,
        range: Range<usize>,
    ) -> Result<HighlightResult, HighlightError> {
        let compiler = Compiler::new(&self.language)?;
        let mut result = HighlightResult::default();
        let mut line_start = 0usize;

        for (line, line_text) in text.split_inclusive(LINE_TERMINATOR).enumerate() {
            if line >= range.end {
                break;
            }
            let line_chars = line_text.chars().count();
            if line >= range.start {
                let tokens = compiler.analyze_line(line_text);
                let spans = spans_for_line(line_start, line_chars, &tokens);
                result.lines.push(LineTokens {
                    line,
                    start: line_start,
                    spans,
                });
            }
            line_start += line_chars;
        }

        Ok(result)
    }
}

/// Position `tokens` in the document, dropping whatever lies past the end of the line
/// (the terminator appended to a final line that had none).
fn spans_for_line(line_start: usize, line_chars: usize, tokens: &[Token]) -> Vec<StyledSpan> {
    let line_end = line_start + line_chars;
    let mut spans = Vec::with_capacity(tokens.len());
    let mut offset = line_start;

    for token in tokens {
        if offset >= line_end {
            break;
        }
        let end = (offset + token.char_len()).min(line_end);
        let text: String = token.text().chars().take(end - offset).collect();
        spans.push(StyledSpan {
            start: offset,
            end,
            category: token.category(),
            style: *token.style(),
            text,
        });
        offset = end;
    }

    spans
}
