use api::Creation;
use dioxus::prelude::*;

/// Square thumbnail of a creation.
///
/// When `on_unpick` is set, hovering reveals an "Un-pick" button.
#[component]
pub fn CreationTile(creation: Creation, on_unpick: Option<EventHandler<String>>) -> Element {
    let id = creation.id.clone();

    rsx! {
        div {
            class: "creation-tile",
            img {
                src: "{creation.media_url}",
                alt: "{creation.prompt}",
                class: "creation-tile-image",
            }
            if let Some(on_unpick) = on_unpick {
                div {
                    class: "creation-tile-overlay",
                    button {
                        class: "unpick-button",
                        onclick: move |_| on_unpick.call(id.clone()),
                        "Un-pick"
                    }
                }
            }
        }
    }
}
