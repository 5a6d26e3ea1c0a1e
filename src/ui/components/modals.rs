//! App-level modals toggled from the hero
//!
//! Profile-name warning and the about-contact sheet. Both are simple
//! informational overlays; their open/closed state lives in `AppState`.

use dioxus::prelude::*;
use rust_i18n::t;

use crate::app::AppState;
use crate::types::ConversationKind;

#[component]
pub fn ProfileNameWarningModal(kind: ConversationKind, on_close: EventHandler<()>) -> Element {
    let (title, body) = match kind {
        ConversationKind::Group => (
            t!("warning.profile_name_group.title"),
            t!("warning.profile_name_group.body"),
        ),
        _ => (
            t!("warning.profile_name_direct.title"),
            t!("warning.profile_name_direct.body"),
        ),
    };
    let close = t!("warning.close");

    rsx! {
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center bg-black/50 animate-fade-in",
            onclick: move |_| on_close.call(()),

            div {
                class: "bg-[var(--bg-main)] border border-[var(--border-subtle)] rounded-xl shadow-xl max-w-sm w-full mx-4 p-6",
                onclick: move |evt| evt.stop_propagation(),

                h2 { class: "text-lg font-semibold text-[var(--text-primary)] mb-3", "{title}" }
                p { class: "text-sm text-[var(--text-secondary)] leading-relaxed mb-5", "{body}" }
                button {
                    class: "w-full py-2 rounded-md bg-[var(--bg-hover)] text-[var(--text-primary)] hover:bg-[var(--bg-active)] transition-colors",
                    onclick: move |_| on_close.call(()),
                    "{close}"
                }
            }
        }
    }
}

#[component]
pub fn AboutContactModal(conversation_id: String, on_close: EventHandler<()>) -> Element {
    let app_state = use_context::<AppState>();

    let summaries = app_state.summaries.read();
    let summary = summaries
        .iter()
        .find(|summary| summary.id == conversation_id);

    let title = t!("about_contact.title");
    let name = summary
        .and_then(|s| s.display_name())
        .unwrap_or_default()
        .to_string();
    let about = summary
        .and_then(|s| s.about.clone())
        .unwrap_or_else(|| t!("about_contact.no_details").into_owned());
    let phone = summary.and_then(|s| s.phone_number.clone());
    let close = t!("warning.close");

    rsx! {
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center bg-black/50 animate-fade-in",
            onclick: move |_| on_close.call(()),

            div {
                class: "bg-[var(--bg-main)] border border-[var(--border-subtle)] rounded-xl shadow-xl max-w-sm w-full mx-4 p-6",
                onclick: move |evt| evt.stop_propagation(),

                h2 { class: "text-lg font-semibold text-[var(--text-primary)] mb-1", "{title}" }
                div { class: "text-base text-[var(--text-primary)] mb-2", "{name}" }
                p { class: "text-sm text-[var(--text-secondary)] leading-relaxed mb-2", "{about}" }
                {phone.map(|number| rsx! {
                    div { class: "text-sm text-[var(--text-tertiary)] mb-3", "{number}" }
                })}
                button {
                    class: "w-full py-2 rounded-md bg-[var(--bg-hover)] text-[var(--text-primary)] hover:bg-[var(--bg-active)] transition-colors",
                    onclick: move |_| on_close.call(()),
                    "{close}"
                }
            }
        }
    }
}
