//! The Guide Directory page.
//!
//! Loads the guide list once on mount, then redraws the list on every
//! keystroke in the search box.

use std::rc::Rc;

use dioxus::prelude::*;
use gloo::events::EventListener;
use guidedir_core::{Loader, DEFAULT_GUIDES_FILE};

use crate::components::{GuideList, SearchInput, StatusMessage};
use crate::context::{use_directory, use_list_surface};
use crate::platform::{handle_page_show, navigate_with_exit, HttpSource};

#[component]
pub fn Directory() -> Element {
    let mut directory = use_directory();
    let mut surface = use_list_surface();
    let mut query = use_signal(String::new);

    use_future(move || async move {
        let loader = Loader::new(HttpSource::new(DEFAULT_GUIDES_FILE));
        let result = loader.load().await;
        directory.write().finish_load(result, &mut surface);
    });

    // Back/forward restores replay the entering transition
    use_hook(|| {
        Rc::new(EventListener::new(
            &gloo::utils::window(),
            "pageshow",
            |_| handle_page_show(),
        ))
    });

    let on_search = move |value: String| {
        directory.read().search(&value, &mut surface);
        query.set(value);
    };

    rsx! {
        main { id: "main-content", class: "directory-page",
            header { class: "directory-header",
                h1 { class: "directory-title", "Guides" }
            }
            SearchInput { value: query(), oninput: on_search }
            StatusMessage { status: surface.status.cloned() }
            GuideList {
                entries: surface.entries.cloned(),
                on_select: move |href: String| navigate_with_exit(href),
            }
        }
    }
}
