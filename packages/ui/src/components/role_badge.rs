use api::Role;
use dioxus::prelude::*;

#[component]
pub fn RoleBadge(role: Role) -> Element {
    let class = match role {
        Role::Admin => "role-badge role-badge--admin",
        Role::User => "role-badge",
    };

    rsx! {
        span { class: "{class}", "{role}" }
    }
}
