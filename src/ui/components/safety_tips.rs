//! Safety tips modal
//!
//! Shell only: a short static reminder with a close button. Opened from the
//! hero's safety-tips row; the open/closed flag lives in the hero.

use dioxus::prelude::*;
use rust_i18n::t;

#[component]
pub fn SafetyTipsModal(on_close: EventHandler<()>) -> Element {
    let title = t!("safety_tips.title");
    let body = t!("safety_tips.body");
    let close = t!("safety_tips.close");

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
                    class: "w-full py-2 rounded-md bg-[var(--accent-primary)] text-white hover:bg-[var(--accent-hover)] transition-colors",
                    onclick: move |_| on_close.call(()),
                    "{close}"
                }
            }
        }
    }
}
