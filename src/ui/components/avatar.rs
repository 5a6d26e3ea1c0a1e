//! Avatar widget
//!
//! Circle with either the conversation image or derived initials. Supports a
//! CSS blur for unrevealed avatars and a story ring tinted by read state.

use dioxus::prelude::*;

use crate::types::StoriesState;

const PALETTE: [&str; 6] = [
    "#7c9ce0", "#c27ba0", "#76a5af", "#b4a7d6", "#93c47d", "#e0a96d",
];

#[derive(Props, Clone, PartialEq)]
pub struct AvatarProps {
    pub name: String,
    #[props(optional)]
    pub image_url: Option<String>,
    #[props(default = false)]
    pub blurred: bool,
    #[props(optional)]
    pub story_ring: Option<StoriesState>,
    #[props(default = 48)]
    pub size: i32,
    pub onclick: EventHandler<MouseEvent>,
}

#[component]
pub fn Avatar(props: AvatarProps) -> Element {
    let size = props.size;
    let font_size = size / 3;
    let initials = initials(&props.name);
    let background = color_for(&props.name);
    let name = props.name.clone();

    let ring_style = match props.story_ring {
        Some(StoriesState::Unread) => "box-shadow: 0 0 0 3px var(--accent-primary);",
        Some(StoriesState::Read) => "box-shadow: 0 0 0 3px var(--border-subtle);",
        None => "",
    };
    let blur_style = if props.blurred {
        "filter: blur(8px);"
    } else {
        ""
    };
    let cursor = if props.blurred || props.story_ring.is_some() {
        "cursor: pointer;"
    } else {
        ""
    };

    let body = match props.image_url.clone() {
        Some(url) => rsx! {
            img {
                src: "{url}",
                alt: "{name}",
                style: "width: 100%; height: 100%; object-fit: cover; {blur_style}",
            }
        },
        None => rsx! {
            span {
                class: "font-semibold text-white",
                style: "font-size: {font_size}px; {blur_style}",
                "{initials}"
            }
        },
    };

    rsx! {
        div {
            class: "rounded-full overflow-hidden flex items-center justify-center shrink-0 select-none",
            style: "width: {size}px; height: {size}px; background-color: {background}; {ring_style} {cursor}",
            onclick: move |evt| props.onclick.call(evt),
            {body}
        }
    }
}

/// Up to two initials from the first words of the name
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

/// Stable palette pick so a conversation keeps its color across renders
fn color_for(name: &str) -> &'static str {
    let sum: usize = name.bytes().map(|b| b as usize).sum();
    PALETTE[sum % PALETTE.len()]
}
