//! Hero visibility engine
//!
//! Pure decision table behind the conversation hero: maps a
//! `ConversationSummary` to a `HeroDecision` describing which optional blocks
//! appear and how the avatar behaves. Kept free of Dioxus so the whole table
//! can be unit-tested without a rendering environment.

use crate::types::{ConversationKind, ConversationSummary, StoriesState};

/// How the conversation title is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleMode {
    /// Fixed "Note to Self" label
    NoteToSelf,
    /// Non-interactive contact/group name
    PlainName,
    /// Name that opens the about-contact sheet on click
    ClickableName,
}

/// What clicking the avatar does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarInteraction {
    None,
    /// Reveal a blurred avatar
    UnblurOnClick,
    /// Open the contact's stories
    OpenStoriesOnClick,
}

/// Icon/text variant for the name-not-verified warning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameWarningVariant {
    Direct,
    Group,
}

/// One row of the membership block, in render order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipLabel {
    ReviewCarefully,
    NameNotVerified(NameWarningVariant),
    SharedGroups,
    MembersCount(u32),
    SafetyTipsButton,
}

/// The informational area under the title
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeroNotices {
    /// Render nothing at all
    Hidden,
    /// Single fixed note-to-self notice
    NoteToSelf,
    /// The two fixed official-chat notices
    Official,
    /// Membership labels, already in their fixed render order
    Labels(Vec<MembershipLabel>),
}

/// Inputs handed to the avatar-blur predicate.
///
/// The predicate itself is an opaque collaborator; the engine only forwards
/// what it needs and acts on the boolean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarBlurCheck {
    pub accepted_message_request: bool,
    pub avatar_url: Option<String>,
    pub is_me: bool,
    pub shared_group_names: Vec<String>,
    pub unblurred_avatar_url: Option<String>,
}

/// Everything the hero needs to know to render, derived once per render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroDecision {
    /// `None` means no title row at all
    pub title_mode: Option<TitleMode>,
    pub show_about: bool,
    pub show_group_description: bool,
    pub notices: HeroNotices,
    pub avatar_interaction: AvatarInteraction,
    pub avatar_blurred: bool,
    /// Story ring around the avatar; never set for note-to-self
    pub story_ring: Option<StoriesState>,
}

/// Evaluate the decision table for one conversation.
///
/// Pure apart from calling `should_blur_avatar`, which must itself be a pure
/// predicate. Calling this twice with the same summary yields the same
/// decision.
pub fn evaluate<F>(convo: &ConversationSummary, should_blur_avatar: F) -> HeroDecision
where
    F: Fn(AvatarBlurCheck) -> bool,
{
    let is_me = convo.kind == ConversationKind::NoteToSelf;

    // Title: first match wins.
    let title_mode = if is_me {
        Some(TitleMode::NoteToSelf)
    } else if convo.kind != ConversationKind::Direct {
        Some(TitleMode::PlainName)
    } else if convo.title.is_some() {
        Some(TitleMode::ClickableName)
    } else {
        None
    };

    // Avatar: blur wins over stories.
    let blurred = should_blur_avatar(AvatarBlurCheck {
        accepted_message_request: convo.accepted_message_request,
        avatar_url: convo.avatar_url.clone(),
        is_me,
        shared_group_names: convo.shared_group_names.clone(),
        unblurred_avatar_url: convo.unblurred_avatar_url.clone(),
    });
    let (avatar_interaction, avatar_blurred) = if blurred {
        (AvatarInteraction::UnblurOnClick, true)
    } else if convo.stories.is_some() {
        (AvatarInteraction::OpenStoriesOnClick, false)
    } else {
        (AvatarInteraction::None, false)
    };
    // The self-chat never shows a story ring, set or not.
    let story_ring = if is_me { None } else { convo.stories };

    let show_about = convo.about.is_some() && !is_me;
    let show_group_description = convo.group_description.is_some() && !is_me;

    let notices = match convo.kind {
        ConversationKind::NoteToSelf => HeroNotices::NoteToSelf,
        ConversationKind::Official => HeroNotices::Official,
        ConversationKind::Direct | ConversationKind::Group => membership_labels(convo),
    };

    HeroDecision {
        title_mode,
        show_about,
        show_group_description,
        notices,
        avatar_interaction,
        avatar_blurred,
        story_ring,
    }
}

/// Membership-block rules for direct and group chats.
///
/// The suppression rule overrides every individual label, and an empty label
/// set collapses to `Hidden` rather than an empty container.
fn membership_labels(convo: &ConversationSummary) -> HeroNotices {
    let is_direct = convo.kind == ConversationKind::Direct;
    let is_group = convo.kind == ConversationKind::Group;

    // Known contact with a phone number and nothing in common: show nothing.
    if is_direct
        && convo.shared_group_names.is_empty()
        && convo.accepted_message_request
        && convo.phone_number.is_some()
    {
        return HeroNotices::Hidden;
    }

    let mut labels = Vec::new();

    if !convo.accepted_message_request && (is_group || convo.shared_group_names.len() <= 1) {
        labels.push(MembershipLabel::ReviewCarefully);
    }

    if !convo.from_or_added_by_trusted_contact && !convo.has_nickname {
        let variant = if is_group {
            NameWarningVariant::Group
        } else {
            NameWarningVariant::Direct
        };
        labels.push(MembershipLabel::NameNotVerified(variant));
    }

    if is_direct {
        // Rendered even when the shared-groups list is empty.
        labels.push(MembershipLabel::SharedGroups);
    }

    if is_group {
        if let Some(count) = convo.members_count {
            labels.push(MembershipLabel::MembersCount(count));
        }
    }

    if !convo.accepted_message_request {
        labels.push(MembershipLabel::SafetyTipsButton);
    }

    if labels.is_empty() {
        HeroNotices::Hidden
    } else {
        HeroNotices::Labels(labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(kind: ConversationKind) -> ConversationSummary {
        ConversationSummary {
            id: "convo-1".to_string(),
            kind,
            accepted_message_request: true,
            from_or_added_by_trusted_contact: true,
            has_nickname: false,
            title: Some("Ada".to_string()),
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

    fn never_blur(_: AvatarBlurCheck) -> bool {
        false
    }

    #[test]
    fn test_note_to_self_is_fixed_regardless_of_flags() {
        let mut convo = summary(ConversationKind::NoteToSelf);
        convo.accepted_message_request = false;
        convo.from_or_added_by_trusted_contact = false;
        convo.about = Some("busy".to_string());
        convo.group_description = Some("desc".to_string());
        convo.phone_number = Some("+15555550100".to_string());

        let decision = evaluate(&convo, never_blur);
        assert_eq!(decision.title_mode, Some(TitleMode::NoteToSelf));
        assert_eq!(decision.notices, HeroNotices::NoteToSelf);
        assert!(!decision.show_about);
        assert!(!decision.show_group_description);
    }

    #[test]
    fn test_known_contact_with_phone_suppresses_membership_block() {
        for trusted in [true, false] {
            let mut convo = summary(ConversationKind::Direct);
            convo.accepted_message_request = true;
            convo.shared_group_names = Vec::new();
            convo.phone_number = Some("+15555550123".to_string());
            convo.from_or_added_by_trusted_contact = trusted;

            let decision = evaluate(&convo, never_blur);
            assert_eq!(decision.notices, HeroNotices::Hidden);
        }
    }

    #[test]
    fn test_pending_group_request_label_order() {
        let mut convo = summary(ConversationKind::Group);
        convo.accepted_message_request = false;
        convo.members_count = Some(5);

        let decision = evaluate(&convo, never_blur);
        assert_eq!(
            decision.notices,
            HeroNotices::Labels(vec![
                MembershipLabel::ReviewCarefully,
                MembershipLabel::MembersCount(5),
                MembershipLabel::SafetyTipsButton,
            ])
        );
    }

    #[test]
    fn test_unverified_direct_contact_gets_direct_warning_variant() {
        for shared in [vec![], vec!["Book club".to_string(), "Hiking".to_string()]] {
            let mut convo = summary(ConversationKind::Direct);
            convo.from_or_added_by_trusted_contact = false;
            convo.has_nickname = false;
            convo.shared_group_names = shared;

            let decision = evaluate(&convo, never_blur);
            let HeroNotices::Labels(labels) = decision.notices else {
                panic!("expected labels");
            };
            assert!(labels
                .contains(&MembershipLabel::NameNotVerified(NameWarningVariant::Direct)));
        }
    }

    #[test]
    fn test_nickname_suppresses_name_warning() {
        let mut convo = summary(ConversationKind::Direct);
        convo.from_or_added_by_trusted_contact = false;
        convo.has_nickname = true;

        let decision = evaluate(&convo, never_blur);
        let HeroNotices::Labels(labels) = decision.notices else {
            panic!("expected labels");
        };
        assert_eq!(labels, vec![MembershipLabel::SharedGroups]);
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let mut convo = summary(ConversationKind::Direct);
        convo.accepted_message_request = false;
        convo.stories = Some(StoriesState::Unread);
        convo.avatar_url = Some("file:///avatars/ada.png".to_string());

        let first = evaluate(&convo, |check| check.avatar_url.is_some());
        let second = evaluate(&convo, |check| check.avatar_url.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn test_blur_takes_precedence_over_stories() {
        let mut convo = summary(ConversationKind::Direct);
        convo.stories = Some(StoriesState::Unread);

        let decision = evaluate(&convo, |_| true);
        assert_eq!(decision.avatar_interaction, AvatarInteraction::UnblurOnClick);
        assert!(decision.avatar_blurred);
    }

    #[test]
    fn test_stories_open_viewer_when_not_blurred() {
        let mut convo = summary(ConversationKind::Direct);
        convo.stories = Some(StoriesState::Read);

        let decision = evaluate(&convo, never_blur);
        assert_eq!(
            decision.avatar_interaction,
            AvatarInteraction::OpenStoriesOnClick
        );
        assert!(!decision.avatar_blurred);
        assert_eq!(decision.story_ring, Some(StoriesState::Read));
    }

    #[test]
    fn test_note_to_self_never_shows_story_ring() {
        let mut convo = summary(ConversationKind::NoteToSelf);
        convo.stories = Some(StoriesState::Unread);

        let decision = evaluate(&convo, never_blur);
        assert_eq!(decision.story_ring, None);
    }

    #[test]
    fn test_official_chat_ignores_membership_fields() {
        let mut convo = summary(ConversationKind::Official);
        convo.accepted_message_request = false;
        convo.from_or_added_by_trusted_contact = false;
        convo.members_count = Some(9);

        let decision = evaluate(&convo, never_blur);
        assert_eq!(decision.notices, HeroNotices::Official);
        assert_eq!(decision.title_mode, Some(TitleMode::PlainName));
    }

    #[test]
    fn test_full_direct_label_order() {
        let mut convo = summary(ConversationKind::Direct);
        convo.accepted_message_request = false;
        convo.from_or_added_by_trusted_contact = false;

        let decision = evaluate(&convo, never_blur);
        assert_eq!(
            decision.notices,
            HeroNotices::Labels(vec![
                MembershipLabel::ReviewCarefully,
                MembershipLabel::NameNotVerified(NameWarningVariant::Direct),
                MembershipLabel::SharedGroups,
                MembershipLabel::SafetyTipsButton,
            ])
        );
    }

    #[test]
    fn test_review_carefully_needs_few_shared_groups() {
        let mut convo = summary(ConversationKind::Direct);
        convo.accepted_message_request = false;
        convo.shared_group_names = vec![
            "Book club".to_string(),
            "Hiking".to_string(),
            "Chess".to_string(),
        ];

        let decision = evaluate(&convo, never_blur);
        let HeroNotices::Labels(labels) = decision.notices else {
            panic!("expected labels");
        };
        assert!(!labels.contains(&MembershipLabel::ReviewCarefully));
        assert!(labels.contains(&MembershipLabel::SafetyTipsButton));
    }

    #[test]
    fn test_quiet_group_renders_no_empty_container() {
        // Accepted, trusted, no member count: nothing left to show.
        let convo = summary(ConversationKind::Group);
        let decision = evaluate(&convo, never_blur);
        assert_eq!(decision.notices, HeroNotices::Hidden);
    }

    #[test]
    fn test_title_modes() {
        let direct = summary(ConversationKind::Direct);
        assert_eq!(
            evaluate(&direct, never_blur).title_mode,
            Some(TitleMode::ClickableName)
        );

        let mut untitled = summary(ConversationKind::Direct);
        untitled.title = None;
        assert_eq!(evaluate(&untitled, never_blur).title_mode, None);

        let group = summary(ConversationKind::Group);
        assert_eq!(
            evaluate(&group, never_blur).title_mode,
            Some(TitleMode::PlainName)
        );
    }

    #[test]
    fn test_about_and_description_hidden_for_self_chat() {
        let mut direct = summary(ConversationKind::Direct);
        direct.about = Some("Out hiking".to_string());
        assert!(evaluate(&direct, never_blur).show_about);

        let mut group = summary(ConversationKind::Group);
        group.group_description = Some("Weekly rides".to_string());
        assert!(evaluate(&group, never_blur).show_group_description);
    }
}
