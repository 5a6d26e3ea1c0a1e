//! Shared UI components
//!
//! Reusable widgets consumed by the hero and the rest of the shell.

pub mod avatar;
pub mod modals;
pub mod safety_tips;
