//! Root Dioxus application component
//!
//! Holds the context-shared application state and the default avatar-blur
//! policy handed to the hero.

use dioxus::prelude::*;

use crate::hero::engine::AvatarBlurCheck;
use crate::types::{ConversationKind, ConversationSummary};
use crate::ui::Layout;

/// Global application state shared across components
#[derive(Clone)]
pub struct AppState {
    pub summaries: Signal<Vec<ConversationSummary>>,
    pub selected_id: Signal<Option<String>>,
    /// Conversation id the about-contact sheet is open for
    pub about_contact_for: Signal<Option<String>>,
    /// Kind the profile-name warning is open for
    pub profile_name_warning: Signal<Option<ConversationKind>>,
}

impl AppState {
    pub fn new() -> Self {
        tracing::info!("AppState initialized");
        Self {
            summaries: Signal::new(Vec::new()),
            selected_id: Signal::new(None),
            about_contact_for: Signal::new(None),
            profile_name_warning: Signal::new(None),
        }
    }

    /// Currently selected conversation, if it still exists
    pub fn selected_summary(&self) -> Option<ConversationSummary> {
        let selected = self.selected_id.read().clone()?;
        self.summaries
            .read()
            .iter()
            .find(|summary| summary.id == selected)
            .cloned()
    }
}

/// Default blur policy: hide avatars from unknown senders with nothing in
/// common until the user reveals them.
pub fn default_should_blur(check: &AvatarBlurCheck) -> bool {
    !check.is_me
        && !check.accepted_message_request
        && check.avatar_url.is_some()
        && check.shared_group_names.is_empty()
        && check.unblurred_avatar_url.is_none()
}

#[component]
pub fn App() -> Element {
    let app_state = AppState::new();
    use_context_provider(|| app_state);

    rsx! {
        Layout {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check() -> AvatarBlurCheck {
        AvatarBlurCheck {
            accepted_message_request: false,
            avatar_url: Some("assets/avatars/lena.png".to_string()),
            is_me: false,
            shared_group_names: Vec::new(),
            unblurred_avatar_url: None,
        }
    }

    #[test]
    fn test_blurs_unknown_sender_with_avatar() {
        assert!(default_should_blur(&check()));
    }

    #[test]
    fn test_never_blurs_self_or_revealed() {
        let mut me = check();
        me.is_me = true;
        assert!(!default_should_blur(&me));

        let mut revealed = check();
        revealed.unblurred_avatar_url = revealed.avatar_url.clone();
        assert!(!default_should_blur(&revealed));
    }

    #[test]
    fn test_shared_group_skips_blur() {
        let mut known = check();
        known.shared_group_names = vec!["Book Club".to_string()];
        assert!(!default_should_blur(&known));
    }
}
