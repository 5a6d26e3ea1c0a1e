//! Sidebar
//!
//! App title bar and the conversation list.

pub mod conversation_list;

use dioxus::prelude::*;
use rust_i18n::t;

use conversation_list::ConversationList;

#[component]
pub fn Sidebar() -> Element {
    let heading = t!("sidebar.heading");

    rsx! {
        aside {
            class: "w-64 h-full flex flex-col border-r border-[var(--border-subtle)] bg-[var(--bg-sidebar)]",

            div {
                class: "h-14 flex items-center px-4 border-b border-[var(--border-subtle)]",
                span { class: "font-semibold text-[var(--text-primary)]", "{heading}" }
            }

            ConversationList {}
        }
    }
}
