//! Conversation summary types
//!
//! Defines the per-conversation attributes the hero header renders from.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category of a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConversationKind {
    /// One-to-one chat with another contact
    Direct,
    /// Multi-member group chat
    Group,
    /// The user's own self-chat
    NoteToSelf,
    /// The fixed system/broadcast chat from the Perch team
    Official,
}

/// Whether the contact has stories, and whether any are unread
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoriesState {
    Unread,
    Read,
}

/// Descriptive attributes of a single conversation.
///
/// Supplied fresh on every render by the owning state; the hero derives its
/// layout decisions from this and never mutates it. Optional fields that are
/// absent simply suppress the dependent piece of UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationSummary {
    /// Opaque conversation identity
    pub id: String,
    pub kind: ConversationKind,

    /// The user accepted this contact's message request
    pub accepted_message_request: bool,
    /// Contact is verified, or was added by a verified contact
    pub from_or_added_by_trusted_contact: bool,
    /// Direct conversation for which the user set a local nickname
    pub has_nickname: bool,

    pub title: Option<String>,
    pub profile_name: Option<String>,
    pub about: Option<String>,
    pub group_description: Option<String>,
    pub phone_number: Option<String>,

    /// Groups shared with the contact; meaningful only for direct chats.
    /// Refreshed asynchronously, so it may lag behind reality by a render.
    #[serde(default)]
    pub shared_group_names: Vec<String>,
    /// Member count; meaningful only for groups
    pub members_count: Option<u32>,

    pub stories: Option<StoriesState>,
    pub avatar_url: Option<String>,
    /// Set once the user chose to reveal a blurred avatar
    pub unblurred_avatar_url: Option<String>,
}

impl ConversationSummary {
    /// Create a minimal summary with a fresh id and everything else absent
    pub fn new(kind: ConversationKind, title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            accepted_message_request: true,
            from_or_added_by_trusted_contact: true,
            has_nickname: false,
            title: Some(title.into()),
            profile_name: None,
            about: None,
            group_description: None,
            phone_number: None,
            shared_group_names: Vec::new(),
            members_count: None,
            stories: None,
            avatar_url: None,
            unblurred_avatar_url: None,
        }
    }

    /// Best available display name: title, then profile name
    pub fn display_name(&self) -> Option<&str> {
        self.title.as_deref().or(self.profile_name.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_creation() {
        let convo = ConversationSummary::new(ConversationKind::Direct, "Ada");
        assert!(!convo.id.is_empty());
        assert_eq!(convo.kind, ConversationKind::Direct);
        assert_eq!(convo.display_name(), Some("Ada"));
        assert!(convo.shared_group_names.is_empty());
    }

    #[test]
    fn test_display_name_falls_back_to_profile_name() {
        let mut convo = ConversationSummary::new(ConversationKind::Direct, "Ada");
        convo.title = None;
        convo.profile_name = Some("ada.l".to_string());
        assert_eq!(convo.display_name(), Some("ada.l"));

        convo.profile_name = None;
        assert_eq!(convo.display_name(), None);
    }
}
