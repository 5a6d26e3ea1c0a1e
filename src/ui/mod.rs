//! UI components for Perch
//!
//! This module contains all user interface components built with Dioxus.

pub mod components;
pub mod conversation;
pub mod sidebar;

use dioxus::prelude::*;

use crate::app::AppState;
use crate::ui::components::modals::{AboutContactModal, ProfileNameWarningModal};
use crate::ui::conversation::ConversationPane;
use crate::ui::sidebar::Sidebar;

#[derive(Clone, Copy, PartialEq)]
enum Theme {
    Light,
    Dark,
}

impl Theme {
    fn toggle(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Main Application Layout
#[component]
pub fn Layout() -> Element {
    let app_state = use_context::<AppState>();
    let mut theme = use_signal(|| Theme::Dark);

    let about_contact_for = app_state.about_contact_for.read().clone();
    let profile_name_warning = *app_state.profile_name_warning.read();

    rsx! {
        div {
            "data-theme": "{theme().as_str()}",
            class: "flex h-screen w-screen bg-[var(--bg-main)] text-[var(--text-primary)] transition-colors duration-300 overflow-hidden font-sans",

            link { rel: "stylesheet", href: "assets/styles.css" }

            Sidebar {}

            main {
                class: "flex-1 flex flex-col h-full relative min-w-0 bg-[var(--bg-main)]",

                div {
                    class: "absolute top-4 right-4 z-40",
                    button {
                        onclick: move |_| theme.set(theme().toggle()),
                        class: "p-2 rounded-full hover:bg-[var(--bg-hover)] text-[var(--text-tertiary)] hover:text-[var(--text-primary)] transition-all active:scale-95",
                        title: "Toggle Theme",

                        if theme() == Theme::Dark {
                            // Sun icon
                            svg { width: "20", height: "20", view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "2", stroke_linecap: "round", stroke_linejoin: "round", circle { cx: "12", cy: "12", r: "5" }, path { d: "M12 1v2M12 21v2M4.22 4.22l1.42 1.42M18.36 18.36l1.42 1.42M1 12h2M21 12h2M4.22 19.78l1.42-1.42M18.36 5.64l1.42-1.42" } }
                        } else {
                            // Moon icon
                            svg { width: "20", height: "20", view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "2", stroke_linecap: "round", stroke_linejoin: "round", path { d: "M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z" } }
                        }
                    }
                }

                ConversationPane {}
            }

            {profile_name_warning.map(|kind| {
                let mut signal = app_state.profile_name_warning.clone();
                rsx! {
                    ProfileNameWarningModal {
                        kind,
                        on_close: move |_| signal.set(None),
                    }
                }
            })}

            {about_contact_for.map(|conversation_id| {
                let mut signal = app_state.about_contact_for.clone();
                rsx! {
                    AboutContactModal {
                        conversation_id,
                        on_close: move |_| signal.set(None),
                    }
                }
            })}
        }
    }
}
