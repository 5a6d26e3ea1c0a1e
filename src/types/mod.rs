//! Shared data types

pub mod conversation;

pub use conversation::{ConversationKind, ConversationSummary, StoriesState};
