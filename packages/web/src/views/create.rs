use dioxus::prelude::*;

/// Landing spot for the "Create Now" call-to-action.
#[component]
pub fn Create() -> Element {
    rsx! {
        div {
            class: "create-placeholder",
            h2 { "Create" }
            p { "Generation is not available here yet." }
        }
    }
}
