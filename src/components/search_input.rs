use dioxus::prelude::*;

/// Search input with icon.
///
/// Every keystroke is reported through `oninput`; there is no debounce.
#[derive(Props, Clone, PartialEq)]
pub struct SearchInputProps {
    /// Current search value
    pub value: String,
    /// Handler called when search changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default = "Search guides...".to_string())]
    pub placeholder: String,
}

#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    rsx! {
        div { class: "search-input-wrapper",
            span { class: "search-icon", "\u{1F50D}" }
            input {
                id: "searchInput",
                class: "input-field search-input",
                r#type: "search",
                autocomplete: "off",
                placeholder: "{props.placeholder}",
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}
