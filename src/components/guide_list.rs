//! Guide list component.
//!
//! ## Components
//!
//! - [`GuideList`] - The `#guideList` container, redrawn from the surface entries
//! - [`GuideItem`] - One guide row with the staggered entrance and magnetic hover

use std::time::Duration;

use dioxus::prelude::*;
use guidedir_core::effects::LIST_ITEM_ANIMATE_CLASS;
use guidedir_core::{guide_magnetic, GuideEntry};

use super::magnetic::use_magnetic;

/// A single guide link.
///
/// Clicking does not follow the link directly; `on_select` receives the
/// href so the page can play its exit transition first.
#[component]
pub fn GuideItem(entry: GuideEntry, on_select: EventHandler<String>) -> Element {
    let magnetic = use_magnetic(guide_magnetic());
    let href = entry.href.clone();

    let class = row_class(magnetic.class());
    let style = row_style(entry.stagger, &magnetic.style());

    rsx! {
        li {
            class: "{class}",
            style: "{style}",
            onmounted: move |evt| magnetic.on_mounted(evt),
            onmousemove: move |evt| magnetic.on_move(evt),
            onmouseleave: move |_| magnetic.on_leave(),
            a {
                href: "{entry.href}",
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    on_select.call(href.clone());
                },
                span { class: "guide-name", "{entry.label}" }
            }
        }
    }
}

/// The guide list container.
#[component]
pub fn GuideList(entries: Vec<GuideEntry>, on_select: EventHandler<String>) -> Element {
    rsx! {
        ul { id: "guideList",
            for (index, entry) in entries.into_iter().enumerate() {
                GuideItem {
                    key: "{index}-{entry.href}",
                    entry,
                    on_select,
                }
            }
        }
    }
}

fn row_class(hover: &str) -> String {
    if hover.is_empty() {
        LIST_ITEM_ANIMATE_CLASS.to_string()
    } else {
        format!("{LIST_ITEM_ANIMATE_CLASS} {hover}")
    }
}

fn row_style(stagger: Duration, magnetic: &str) -> String {
    format!("animation-delay: {}ms; {magnetic}", stagger.as_millis())
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_class() {
        assert_eq!(row_class(""), "list-item-animate");
        assert_eq!(row_class("is-magnetic-hover"), "list-item-animate is-magnetic-hover");
    }

    #[test]
    fn test_row_style_at_rest() {
        assert_eq!(
            row_style(Duration::from_millis(60), ""),
            "animation-delay: 60ms;"
        );
    }

    #[test]
    fn test_row_style_with_offset() {
        let style = row_style(Duration::ZERO, "--mag-x: 1.5px; --mag-y: -3px;");
        assert_eq!(style, "animation-delay: 0ms; --mag-x: 1.5px; --mag-y: -3px;");
    }
}
