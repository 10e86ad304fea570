use crate::error::LanguageDefinitionError;
use lexer_core::{
    BOUNDARY_EDGE_TEXT, Color, EdgeKind, FALLBACK_EDGE_TEXT, FontStyle, Language, LiteralTable,
    State, StateMachine, StateRole, TokenCategory,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
/// Raw YAML language definition.
///
/// ```yaml
/// name: Mini
/// keywords: [if, while]
/// operators: ["=", "==", "+"]
/// priority: [identifier, operator, space]
/// keywords_from_identifiers: true
/// tokens:
///   keyword: { literals: keywords, style: { foreground: "#FFA500" } }
///   operator: { literals: operators }
///   space:
///     states: [{ label: END, role: accepting }]
///     edges: [{ from: START, text: '\s+', to: END }]
/// ```
pub struct LanguageDefinition {
    /// Language name (catalog key).
    pub name: String,

    #[serde(default)]
    /// Predefined keywords.
    pub keywords: Vec<String>,

    #[serde(default)]
    /// Predefined operator symbols.
    pub operators: Vec<String>,

    #[serde(default)]
    /// Explicit match priority, by category name.
    pub priority: Option<Vec<String>>,

    #[serde(default)]
    /// Find keywords by reclassifying identifiers only.
    pub keywords_from_identifiers: bool,

    #[serde(default)]
    /// Token automata keyed by category name.
    pub tokens: BTreeMap<String, TokenDefinition>,
}

#[derive(Debug, Clone, Default, Deserialize)]
/// One token category: a style plus either a literal trie or a manual automaton.
pub struct TokenDefinition {
    #[serde(default)]
    /// Presentation style.
    pub style: StyleDefinition,

    #[serde(default)]
    /// Build the automaton as a trie over these literals.
    pub literals: Option<LiteralSource>,

    #[serde(default)]
    /// Manually declared states (the `START` state is implicit).
    pub states: Vec<StateDefinition>,

    #[serde(default)]
    /// Manually declared edges.
    pub edges: Vec<EdgeDefinition>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
/// `literals:` field of a token definition.
pub enum LiteralSource {
    /// `keywords` or `operators`.
    Table(String),
    /// An explicit list of literals.
    List(Vec<String>),
}

#[derive(Debug, Clone, Deserialize)]
/// A manually declared state.
pub struct StateDefinition {
    /// State label, referenced by edges.
    pub label: String,

    #[serde(default)]
    /// State role (defaults to `intermediate`).
    pub role: RoleDefinition,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Role of a declared state.
pub enum RoleDefinition {
    /// An ordinary state.
    #[default]
    Intermediate,
    /// A valid stopping point.
    Accepting,
    /// A rejection point.
    Error,
}

#[derive(Debug, Clone, Deserialize)]
/// A manually declared edge.
pub struct EdgeDefinition {
    /// Source state label.
    pub from: String,

    /// Destination state label.
    pub to: String,

    #[serde(default)]
    /// Character-class pattern; sentinel kinds default to their sentinel text.
    pub text: Option<String>,

    #[serde(default)]
    /// Edge kind (defaults to `char_class`).
    pub kind: EdgeKindDefinition,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Kind of a declared edge.
pub enum EdgeKindDefinition {
    /// See [`EdgeKind::CharClass`].
    #[default]
    CharClass,
    /// See [`EdgeKind::AcceptOnBoundary`].
    AcceptOnBoundary,
    /// See [`EdgeKind::FallbackConsume`].
    FallbackConsume,
    /// See [`EdgeKind::FallbackNoConsume`].
    FallbackNoConsume,
}

#[derive(Debug, Clone, Default, Deserialize)]
/// Style of a token category. Colors are `#RRGGBB` or `#RRGGBBAA`.
pub struct StyleDefinition {
    #[serde(default)]
    /// Glyph color.
    pub foreground: Option<String>,

    #[serde(default)]
    /// Background color.
    pub background: Option<String>,

    #[serde(default)]
    /// Underline color; underlines the span when set.
    pub underline: Option<String>,

    #[serde(default)]
    /// Bold weight.
    pub bold: bool,

    #[serde(default)]
    /// Italic slant.
    pub italic: bool,

    #[serde(default)]
    /// Font size relative to the editor's base size.
    pub size_ratio: Option<f32>,
}

impl LanguageDefinition {
    /// Parse a definition from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, LanguageDefinitionError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Compile the definition into a [`Language`].
    pub fn compile(&self) -> Result<Language, LanguageDefinitionError> {
        let mut builder = Language::builder(self.name.as_str())
            .add_predefined_keywords(self.keywords.iter().cloned())
            .add_predefined_operators(self.operators.iter().cloned())
            .keywords_from_identifiers(self.keywords_from_identifiers);

        if let Some(priority) = &self.priority {
            let order = priority
                .iter()
                .map(|name| name.parse::<TokenCategory>())
                .collect::<Result<Vec<_>, _>>()?;
            builder = builder.priority(order);
        }

        for (name, token) in &self.tokens {
            let category: TokenCategory = name.parse()?;
            let style = token.style.to_font_style()?;

            builder = match &token.literals {
                Some(_) if !token.states.is_empty() || !token.edges.is_empty() => {
                    return Err(LanguageDefinitionError::ConflictingAutomaton(name.clone()));
                }
                Some(LiteralSource::Table(table)) => {
                    let table = match table.as_str() {
                        "keywords" => LiteralTable::Keywords,
                        "operators" => LiteralTable::Operators,
                        other => {
                            return Err(LanguageDefinitionError::UnknownLiteralTable(
                                other.to_string(),
                            ));
                        }
                    };
                    builder.add_literal_prototype(category, table, style)
                }
                Some(LiteralSource::List(literals)) => {
                    let machine = StateMachine::builder().from_literals(literals).build()?;
                    builder.add_token_prototype(category, machine, style)
                }
                None => builder.add_token_prototype(category, token.build_machine(name)?, style),
            };
        }

        Ok(builder.build()?)
    }
}

impl TokenDefinition {
    fn build_machine(&self, token: &str) -> Result<StateMachine, LanguageDefinitionError> {
        let mut builder = StateMachine::builder();
        for state in &self.states {
            let role = match state.role {
                RoleDefinition::Intermediate => StateRole::Intermediate,
                RoleDefinition::Accepting => StateRole::Accepting,
                RoleDefinition::Error => StateRole::Error,
            };
            builder = builder.add_state(State::with_role(state.label.as_str(), role));
        }

        for edge in &self.edges {
            let (kind, default_text) = match edge.kind {
                EdgeKindDefinition::CharClass => (EdgeKind::CharClass, None),
                EdgeKindDefinition::AcceptOnBoundary => {
                    (EdgeKind::AcceptOnBoundary, Some(BOUNDARY_EDGE_TEXT))
                }
                EdgeKindDefinition::FallbackConsume => {
                    (EdgeKind::FallbackConsume, Some(FALLBACK_EDGE_TEXT))
                }
                EdgeKindDefinition::FallbackNoConsume => {
                    (EdgeKind::FallbackNoConsume, Some(FALLBACK_EDGE_TEXT))
                }
            };
            let Some(text) = edge.text.as_deref().or(default_text) else {
                return Err(LanguageDefinitionError::MissingEdgeText {
                    token: token.to_string(),
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                });
            };
            builder = builder.add_edge(&edge.from, text, &edge.to, kind);
        }

        Ok(builder.build()?)
    }
}

impl StyleDefinition {
    fn to_font_style(&self) -> Result<FontStyle, LanguageDefinitionError> {
        let mut builder = FontStyle::builder();
        if let Some(color) = &self.foreground {
            builder = builder.foreground(color.parse::<Color>()?);
        }
        if let Some(color) = &self.background {
            builder = builder.background(color.parse::<Color>()?);
        }
        if let Some(color) = &self.underline {
            builder = builder.underline(color.parse::<Color>()?);
        }
        if self.bold {
            builder = builder.bold();
        }
        if self.italic {
            builder = builder.italic();
        }
        if let Some(ratio) = self.size_ratio {
            builder = builder.size_ratio(ratio);
        }
        Ok(builder.build())
    }
}

/// Parse and compile a YAML language definition.
pub fn load_language_from_str(yaml: &str) -> Result<Language, LanguageDefinitionError> {
    let definition = LanguageDefinition::from_yaml(yaml)?;
    let language = definition.compile()?;
    tracing::debug!(language = language.name(), "compiled language definition");
    Ok(language)
}

/// Read, parse and compile a YAML language definition file.
pub fn load_language_from_path(
    path: impl AsRef<Path>,
) -> Result<Language, LanguageDefinitionError> {
    let yaml = std::fs::read_to_string(path.as_ref())?;
    load_language_from_str(&yaml)
}
