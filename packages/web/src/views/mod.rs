mod admin;
pub use admin::Admin;

mod create;
pub use create::Create;

mod home;
pub use home::Home;

mod profile;
pub use profile::Profile;

use dioxus::prelude::*;
use ui::ViewState;

use crate::Route;

/// Map a view's navigation request onto the router.
pub(crate) fn use_view_navigator() -> Callback<ViewState> {
    let nav = use_navigator();
    use_callback(move |target: ViewState| {
        nav.push(Route::from(target));
    })
}

/// Shown while the session user is still loading, or when nobody is signed in.
#[component]
pub(crate) fn SessionGate(loading: bool) -> Element {
    rsx! {
        div {
            class: "session-gate",
            if loading {
                "Loading..."
            } else {
                "Sign in to continue."
            }
        }
    }
}
