use dioxus::prelude::*;
use ui::use_auth;
use ui::views::ProfileView;

use super::{use_view_navigator, SessionGate};

#[component]
pub fn Profile() -> Element {
    let auth = use_auth();
    let on_navigate = use_view_navigator();
    let state = auth();

    match state.user {
        Some(user) => rsx! {
            ProfileView { user, on_navigate }
        },
        None => rsx! {
            SessionGate { loading: state.loading }
        },
    }
}
