use dioxus::prelude::*;
use rust_i18n::t;

use crate::app::AppState;
use crate::storage::summaries::list_summaries;
use crate::types::{ConversationKind, ConversationSummary};

#[component]
pub fn ConversationList() -> Element {
    let app_state = use_context::<AppState>();
    let mut summaries_signal = app_state.summaries.clone();

    use_effect(move || match list_summaries() {
        Ok(summaries) => summaries_signal.set(summaries),
        Err(e) => tracing::error!("Failed to load conversations: {}", e),
    });

    let summaries = app_state.summaries.read().clone();
    let selected_id = app_state.selected_id.read().clone();
    let empty_label = t!("sidebar.empty");

    rsx! {
        div {
            class: "flex-1 overflow-y-auto px-2 py-2 space-y-1",
            style: "scrollbar-width: thin;",

            if summaries.is_empty() {
                div {
                    class: "px-3 py-4 text-xs text-[var(--text-tertiary)]",
                    "{empty_label}"
                }
            } else {
                {summaries.into_iter().map(|summary| {
                    let is_selected = selected_id
                        .as_ref()
                        .map(|id| id == &summary.id)
                        .unwrap_or(false);
                    let row_class = if is_selected {
                        "group flex items-center gap-3 px-3 py-3 text-sm rounded-md cursor-pointer transition-colors duration-200 bg-[var(--bg-hover)] text-[var(--text-primary)]"
                    } else {
                        "group flex items-center gap-3 px-3 py-3 text-sm rounded-md cursor-pointer transition-colors duration-200 hover:bg-[var(--bg-hover)] text-[var(--text-secondary)] hover:text-[var(--text-primary)]"
                    };
                    let summary_id = summary.id.clone();
                    let name = row_name(&summary);
                    let kind = summary.kind;
                    let mut selected_signal = app_state.selected_id.clone();

                    rsx! {
                        div {
                            key: "{summary.id}",
                            class: row_class,
                            onclick: move |_| {
                                selected_signal.set(Some(summary_id.clone()));
                            },

                            div {
                                class: "shrink-0",
                                KindIcon { kind }
                            }

                            div {
                                class: "truncate flex-1",
                                "{name}"
                            }
                        }
                    }
                })}
            }
        }
    }
}

fn row_name(summary: &ConversationSummary) -> String {
    match summary.kind {
        ConversationKind::NoteToSelf => t!("hero.note_to_self").into_owned(),
        _ => summary
            .display_name()
            .map(str::to_string)
            .unwrap_or_else(|| t!("hero.unknown_contact").into_owned()),
    }
}

#[component]
fn KindIcon(kind: ConversationKind) -> Element {
    match kind {
        ConversationKind::Direct => rsx! {
            svg { width: "16", height: "16", view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "2", stroke_linecap: "round", stroke_linejoin: "round",
                path { d: "M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2" }
                circle { cx: "12", cy: "7", r: "4" }
            }
        },
        ConversationKind::Group => rsx! {
            svg { width: "16", height: "16", view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "2", stroke_linecap: "round", stroke_linejoin: "round",
                path { d: "M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2" }
                circle { cx: "9", cy: "7", r: "4" }
                path { d: "M23 21v-2a4 4 0 0 0-3-3.87" }
                path { d: "M16 3.13a4 4 0 0 1 0 7.75" }
            }
        },
        ConversationKind::NoteToSelf => rsx! {
            svg { width: "16", height: "16", view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "2", stroke_linecap: "round", stroke_linejoin: "round",
                path { d: "M19 21l-7-5-7 5V5a2 2 0 0 1 2-2h10a2 2 0 0 1 2 2z" }
            }
        },
        ConversationKind::Official => rsx! {
            svg { width: "16", height: "16", view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "2", stroke_linecap: "round", stroke_linejoin: "round",
                path { d: "M3 11l18-7-7 18-2.5-7.5z" }
            }
        },
    }
}
