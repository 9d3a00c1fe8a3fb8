use dioxus::prelude::*;

/// Pulsing placeholder bar shown while a section loads.
#[component]
pub fn Skeleton(class: String) -> Element {
    rsx! {
        div { class: "skeleton {class}" }
    }
}
