//! Conversation hero header
//!
//! The introductory block shown above a conversation: avatar, name,
//! description and membership/trust indicators. All visibility decisions come
//! from the pure [`engine`]; this module only renders them and forwards
//! clicks to the app-supplied callbacks.

pub mod engine;

use dioxus::prelude::*;
use rust_i18n::t;

use crate::types::{ConversationKind, ConversationSummary};
use crate::ui::components::avatar::Avatar;
use crate::ui::components::safety_tips::SafetyTipsModal;
use engine::{
    AvatarBlurCheck, AvatarInteraction, HeroNotices, MembershipLabel, NameWarningVariant,
    TitleMode,
};

/// Fixed view-mode tag passed along when opening the story viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryViewMode {
    User,
}

/// Payload for the story-viewer callback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewStoriesRequest {
    pub conversation_id: String,
    pub view_mode: StoryViewMode,
}

#[component]
pub fn ConversationHero(
    conversation: ConversationSummary,
    should_blur_avatar: Callback<AvatarBlurCheck, bool>,
    on_unblur_avatar: EventHandler<String>,
    on_view_user_stories: EventHandler<ViewStoriesRequest>,
    on_update_shared_groups: EventHandler<String>,
    on_open_conversation_details: Option<EventHandler<()>>,
    on_toggle_about_contact: EventHandler<String>,
    on_toggle_profile_name_warning: EventHandler<ConversationKind>,
) -> Element {
    // Owned by this instance only; resets on remount.
    let mut show_safety_tips = use_signal(|| false);

    // Fire-and-forget shared-groups refresh, once per distinct conversation.
    // The result arrives later as an updated summary, if at all.
    let conversation_id = conversation.id.clone();
    use_effect(use_reactive!(|(conversation_id,)| {
        tracing::debug!("Refreshing shared groups for {conversation_id}");
        on_update_shared_groups.call(conversation_id.clone());
    }));

    let decision = engine::evaluate(&conversation, |check| should_blur_avatar.call(check));

    let display_name = conversation
        .display_name()
        .map(str::to_string)
        .unwrap_or_else(|| t!("hero.unknown_contact").into_owned());

    let note_to_self_label = t!("hero.note_to_self").into_owned();
    let avatar_name = if conversation.kind == ConversationKind::NoteToSelf {
        note_to_self_label.clone()
    } else {
        display_name.clone()
    };

    let avatar_click = {
        let interaction = decision.avatar_interaction;
        let id = conversation.id.clone();
        move |_| match interaction {
            AvatarInteraction::UnblurOnClick => on_unblur_avatar.call(id.clone()),
            AvatarInteraction::OpenStoriesOnClick => on_view_user_stories.call(ViewStoriesRequest {
                conversation_id: id.clone(),
                view_mode: StoryViewMode::User,
            }),
            AvatarInteraction::None => {}
        }
    };

    let about_click = {
        let id = conversation.id.clone();
        move |_| on_toggle_about_contact.call(id.clone())
    };

    let kind = conversation.kind;

    let about = conversation
        .about
        .clone()
        .filter(|_| decision.show_about);
    let group_description = conversation
        .group_description
        .clone()
        .filter(|_| decision.show_group_description);

    let title = match decision.title_mode {
        Some(TitleMode::NoteToSelf) => rsx! {
            div { class: "mt-4 flex items-center gap-2 text-xl font-semibold text-[var(--text-primary)]",
                svg { width: "18", height: "18", view_box: "0 0 24 24", fill: "currentColor",
                    path { d: "M19 21l-7-5-7 5V5a2 2 0 0 1 2-2h10a2 2 0 0 1 2 2z" }
                }
                span { "{note_to_self_label}" }
            }
        },
        Some(TitleMode::PlainName) => rsx! {
            div { class: "mt-4 text-xl font-semibold text-[var(--text-primary)]",
                "{display_name}"
            }
        },
        Some(TitleMode::ClickableName) => rsx! {
            button {
                class: "mt-4 text-xl font-semibold text-[var(--text-primary)] hover:underline",
                onclick: about_click,
                "{display_name}"
            }
        },
        None => rsx! {},
    };

    let notices = match &decision.notices {
        HeroNotices::Hidden => rsx! {},
        HeroNotices::NoteToSelf => {
            let notice = t!("hero.note_to_self_notice");
            rsx! {
                div { class: "mt-3 text-sm text-[var(--text-tertiary)] max-w-md",
                    "{notice}"
                }
            }
        }
        HeroNotices::Official => {
            let official = t!("hero.official_chat_notice");
            let release_notes = t!("hero.release_notes_notice");
            rsx! {
                div { class: "mt-3 flex flex-col gap-1 text-sm text-[var(--text-tertiary)] max-w-md",
                    div { "{official}" }
                    div { "{release_notes}" }
                }
            }
        }
        HeroNotices::Labels(labels) => {
            let labels = labels.clone();
            rsx! {
                div { class: "mt-3 flex flex-col items-center gap-1.5 text-sm text-[var(--text-secondary)]",
                    for (idx, label) in labels.into_iter().enumerate() {
                        MembershipRow {
                            key: "{idx}",
                            label,
                            kind,
                            shared_group_names: conversation.shared_group_names.clone(),
                            on_open_conversation_details,
                            on_toggle_profile_name_warning,
                            on_open_safety_tips: move |_| show_safety_tips.set(true),
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "flex flex-col items-center text-center px-6 pt-8 pb-6 border-b border-[var(--border-subtle)] animate-fade-in",

            Avatar {
                name: avatar_name,
                image_url: conversation.avatar_url.clone(),
                blurred: decision.avatar_blurred,
                story_ring: decision.story_ring,
                size: 96,
                onclick: avatar_click,
            }

            {title}

            {about.map(|text| rsx! {
                div { class: "mt-1 text-sm text-[var(--text-secondary)]", "{text}" }
            })}

            {group_description.map(|text| rsx! {
                div { class: "mt-1 text-sm text-[var(--text-secondary)] max-w-md", "{text}" }
            })}

            {notices}
        }

        if show_safety_tips() {
            SafetyTipsModal {
                on_close: move |_| show_safety_tips.set(false),
            }
        }
    }
}

/// A single membership-block row
#[component]
fn MembershipRow(
    label: MembershipLabel,
    kind: ConversationKind,
    shared_group_names: Vec<String>,
    on_open_conversation_details: Option<EventHandler<()>>,
    on_toggle_profile_name_warning: EventHandler<ConversationKind>,
    on_open_safety_tips: EventHandler<()>,
) -> Element {
    match label {
        MembershipLabel::ReviewCarefully => {
            let text = t!("hero.review_carefully");
            rsx! {
                div { class: "flex items-center gap-2",
                    WarningIcon {}
                    span { "{text}" }
                }
            }
        }
        MembershipLabel::NameNotVerified(variant) => {
            let text = match variant {
                NameWarningVariant::Direct => t!("hero.name_not_verified_direct"),
                NameWarningVariant::Group => t!("hero.name_not_verified_group"),
            };
            let icon = match variant {
                NameWarningVariant::Direct => rsx! { PersonIcon {} },
                NameWarningVariant::Group => rsx! { GroupIcon {} },
            };
            rsx! {
                button {
                    class: "flex items-center gap-2 hover:text-[var(--text-primary)] transition-colors",
                    onclick: move |_| on_toggle_profile_name_warning.call(kind),
                    {icon}
                    span { "{text}" }
                }
            }
        }
        MembershipLabel::SharedGroups => {
            let text = if shared_group_names.is_empty() {
                t!("hero.no_shared_groups").into_owned()
            } else {
                t!("hero.shared_groups", names = shared_group_names.join(", ")).into_owned()
            };
            rsx! {
                div { class: "flex items-center gap-2",
                    GroupIcon {}
                    span { "{text}" }
                }
            }
        }
        MembershipLabel::MembersCount(count) => {
            let text = t!("hero.member_count", count = count);
            rsx! {
                button {
                    class: "flex items-center gap-2 hover:text-[var(--text-primary)] transition-colors",
                    onclick: move |_| {
                        // No-op when the details pane is not wired up.
                        if let Some(handler) = on_open_conversation_details.as_ref() {
                            handler.call(());
                        }
                    },
                    GroupIcon {}
                    span { "{text}" }
                }
            }
        }
        MembershipLabel::SafetyTipsButton => {
            let text = t!("hero.safety_tips");
            rsx! {
                button {
                    class: "mt-1 px-4 py-1.5 rounded-full border border-[var(--border-subtle)] text-[var(--text-primary)] hover:bg-[var(--bg-hover)] transition-colors",
                    onclick: move |_| on_open_safety_tips.call(()),
                    "{text}"
                }
            }
        }
    }
}

#[component]
fn WarningIcon() -> Element {
    rsx! {
        svg { width: "14", height: "14", view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "2", stroke_linecap: "round", stroke_linejoin: "round",
            path { d: "M10.29 3.86L1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z" }
            path { d: "M12 9v4" }
            path { d: "M12 17h.01" }
        }
    }
}

#[component]
fn PersonIcon() -> Element {
    rsx! {
        svg { width: "14", height: "14", view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "2", stroke_linecap: "round", stroke_linejoin: "round",
            path { d: "M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2" }
            circle { cx: "12", cy: "7", r: "4" }
        }
    }
}

#[component]
fn GroupIcon() -> Element {
    rsx! {
        svg { width: "14", height: "14", view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "2", stroke_linecap: "round", stroke_linejoin: "round",
            path { d: "M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2" }
            circle { cx: "9", cy: "7", r: "4" }
            path { d: "M23 21v-2a4 4 0 0 0-3-3.87" }
            path { d: "M16 3.13a4 4 0 0 1 0 7.75" }
        }
    }
}
