//! Conversation pane
//!
//! Mounts the hero for the selected conversation and supplies the app-side
//! implementations of its collaborator callbacks.

use dioxus::prelude::*;
use rust_i18n::t;

use crate::app::{self, AppState};
use crate::hero::engine::AvatarBlurCheck;
use crate::hero::{ConversationHero, ViewStoriesRequest};
use crate::storage::summaries;
use crate::types::ConversationKind;

#[component]
pub fn ConversationPane() -> Element {
    let app_state = use_context::<AppState>();

    let Some(conversation) = app_state.selected_summary() else {
        return rsx! { EmptyState {} };
    };

    let should_blur_avatar =
        Callback::new(|check: AvatarBlurCheck| app::default_should_blur(&check));

    let on_unblur_avatar = {
        let mut summaries_signal = app_state.summaries.clone();
        move |id: String| {
            let mut list = summaries_signal.write();
            if let Some(summary) = list.iter_mut().find(|summary| summary.id == id) {
                summary.unblurred_avatar_url = summary.avatar_url.clone();
                if let Err(e) = summaries::save_summary(summary) {
                    tracing::error!("Failed to save conversation: {}", e);
                }
            }
        }
    };

    // Fire-and-forget: re-read the summary off-thread and fold the result
    // back in whenever it lands. A stale or missing file is only a warning.
    let on_update_shared_groups = {
        let summaries_signal = app_state.summaries.clone();
        move |id: String| {
            let mut summaries_signal = summaries_signal.clone();
            spawn(async move {
                let loaded = {
                    let id = id.clone();
                    tokio::task::spawn_blocking(move || summaries::load_summary(&id)).await
                };
                match loaded {
                    Ok(Ok(fresh)) => {
                        let mut list = summaries_signal.write();
                        if let Some(slot) = list.iter_mut().find(|summary| summary.id == fresh.id)
                        {
                            *slot = fresh;
                        }
                    }
                    Ok(Err(e)) => tracing::warn!("Shared-groups refresh for {} failed: {}", id, e),
                    Err(e) => tracing::error!("Shared-groups refresh task failed: {}", e),
                }
            });
        }
    };

    let on_view_user_stories = move |req: ViewStoriesRequest| {
        // Story viewer is not part of this shell yet.
        tracing::info!(
            "Story viewer requested for {} ({:?})",
            req.conversation_id,
            req.view_mode
        );
    };

    let on_open_conversation_details = Callback::new(move |_: ()| {
        tracing::info!("Conversation details requested");
    });

    let on_toggle_about_contact = {
        let mut about_signal = app_state.about_contact_for.clone();
        move |id: String| {
            let current = about_signal.read().clone();
            if current.as_deref() == Some(id.as_str()) {
                about_signal.set(None);
            } else {
                about_signal.set(Some(id));
            }
        }
    };

    let on_toggle_profile_name_warning = {
        let mut warning_signal = app_state.profile_name_warning.clone();
        move |kind: ConversationKind| {
            let current = *warning_signal.read();
            if current == Some(kind) {
                warning_signal.set(None);
            } else {
                warning_signal.set(Some(kind));
            }
        }
    };

    rsx! {
        div { class: "flex-1 flex flex-col overflow-y-auto",
            ConversationHero {
                conversation,
                should_blur_avatar,
                on_unblur_avatar,
                on_view_user_stories,
                on_update_shared_groups,
                on_open_conversation_details: Some(on_open_conversation_details),
                on_toggle_about_contact,
                on_toggle_profile_name_warning,
            }

            // Message list would mount here.
            div { class: "flex-1" }
        }
    }
}

#[component]
fn EmptyState() -> Element {
    let name = t!("app.name");
    let tagline = t!("app.tagline");

    rsx! {
        div {
            class: "flex-1 flex flex-col items-center justify-center p-8 text-center animate-fade-in",

            div {
                class: "w-24 h-24 bg-gradient-to-br from-[var(--accent-primary)] to-[var(--accent-hover)] rounded-3xl mx-auto shadow-xl flex items-center justify-center text-white mb-6",
                svg { width: "48", height: "48", view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "1.5", path { d: "M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z" } }
            }

            h1 { class: "text-4xl font-bold mb-3 tracking-tight text-[var(--text-primary)]", "{name}" }
            p { class: "text-lg text-[var(--text-secondary)] max-w-md mx-auto leading-relaxed", "{tagline}" }
        }
    }
}
