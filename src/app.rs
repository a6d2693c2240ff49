use dioxus::prelude::*;
use guidedir_core::GuideDirectory;

use crate::context::{ListSignals, StatusLine};
use crate::pages::Directory;
use crate::platform::page_origin;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the directory controller and the list surface it
/// renders into.
#[component]
pub fn App() -> Element {
    let directory: Signal<GuideDirectory> = use_signal(|| GuideDirectory::new(page_origin()));
    let entries = use_signal(Vec::new);
    let status = use_signal(StatusLine::default);

    use_context_provider(|| directory);
    use_context_provider(|| ListSignals { entries, status });

    rsx! {
        style { {GLOBAL_STYLES} }
        Directory {}
    }
}
