use dioxus::prelude::*;
use ui::use_auth;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let is_admin = auth().user.as_ref().is_some_and(|u| u.is_admin());

    rsx! {
        div {
            class: "home",
            h1 { "Atelier" }
            nav {
                class: "home-links",
                Link { to: Route::Create {}, "Create" }
                Link { to: Route::Profile {}, "My Page" }
                if is_admin {
                    Link { to: Route::Admin {}, "Admin" }
                }
            }
        }
    }
}
