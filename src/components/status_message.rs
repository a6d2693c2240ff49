use dioxus::prelude::*;

use crate::context::StatusLine;

/// The `#statusMessage` line: empty states, load errors and the local-file hint.
#[component]
pub fn StatusMessage(status: StatusLine) -> Element {
    rsx! {
        p {
            id: "statusMessage",
            class: "status-message",
            style: display_style(status.visible),
            "{status.text}"
            if let Some(note) = &status.note {
                br {}
                span { class: "status-note", "{note}" }
            }
        }
    }
}

fn display_style(visible: bool) -> &'static str {
    if visible {
        "display: block;"
    } else {
        "display: none;"
    }
}
