//! State/edge graphs and their builder.
//!
//! Every token category owns one [`StateMachine`]. Machines are either laid out by
//! hand (comments, strings, numbers) or generated from a flat list of literal symbols
//! (keywords, operators) as a shared-prefix trie.

mod builder;
mod edge;
mod graph;
mod machine;
mod state;

pub use builder::StateMachineBuilder;
pub use edge::{BOUNDARY_EDGE_TEXT, CharClass, Edge, EdgeId, EdgeKind, FALLBACK_EDGE_TEXT};
pub use machine::StateMachine;
pub use state::{START_LABEL, State, StateId, StateRole};
