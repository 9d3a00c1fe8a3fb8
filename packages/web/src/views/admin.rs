use dioxus::prelude::*;
use ui::use_auth;
use ui::views::AdminDashboardView;

use super::{use_view_navigator, SessionGate};

#[component]
pub fn Admin() -> Element {
    let auth = use_auth();
    let on_navigate = use_view_navigator();
    let state = auth();

    match state.user {
        Some(user) => rsx! {
            AdminDashboardView { user, on_navigate }
        },
        None => rsx! {
            SessionGate { loading: state.loading }
        },
    }
}
