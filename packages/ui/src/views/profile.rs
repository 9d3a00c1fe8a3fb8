use api::{Creation, UserInfo};
use dioxus::prelude::*;

use crate::components::{use_toast, CreationTile, ToastOptions};
use crate::config::FETCH_TIMEOUT;
use crate::icons::{FaBolt, FaGear};
use crate::navigation::ViewState;
use crate::remote::{refresh, use_lifetime, RemoteCollection, RenderState};
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

const LOAD_FAILED_MESSAGE: &str = "Failed to load your creations. Please try again later.";

/// Which list the profile grid shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProfileTab {
    #[default]
    Generated,
    Liked,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 2] = [ProfileTab::Generated, ProfileTab::Liked];

    pub fn label(self) -> &'static str {
        match self {
            ProfileTab::Generated => "My Generations",
            ProfileTab::Liked => "Liked Fashion",
        }
    }

    /// Where the empty state's call-to-action leads, if it has one.
    pub fn empty_action(self) -> Option<ViewState> {
        match self {
            ProfileTab::Generated => Some(ViewState::Create),
            ProfileTab::Liked => None,
        }
    }

    pub fn empty_hint(self) -> &'static str {
        match self {
            ProfileTab::Generated => "Create Now",
            ProfileTab::Liked => "Go explore the feed!",
        }
    }

    /// The collection backing this tab.
    pub fn pick<'a, T>(
        self,
        generated: &'a RemoteCollection<T>,
        liked: &'a RemoteCollection<T>,
    ) -> &'a RemoteCollection<T> {
        match self {
            ProfileTab::Generated => generated,
            ProfileTab::Liked => liked,
        }
    }

    /// What this tab's grid shows.
    ///
    /// Only `generated` is fetched, so both tabs show its loading and error
    /// states. A settled fetch lets each tab show its own items.
    pub fn render_state<'a, T>(
        self,
        generated: &'a RemoteCollection<T>,
        liked: &'a RemoteCollection<T>,
    ) -> RenderState<'a, T> {
        match generated.render_state() {
            state @ (RenderState::Loading | RenderState::Error(_)) => state,
            _ => self.pick(generated, liked).render_state(),
        }
    }
}

/// Personal page: header with usage, a tab bar, and the active tab's grid.
///
/// Only the `Generated` tab is fetched. `Liked` stays an empty, settled list.
#[component]
pub fn ProfileView(
    /// The signed-in user.
    user: UserInfo,
    /// Asks the shell to switch views.
    on_navigate: EventHandler<ViewState>,
) -> Element {
    let toast_api = use_toast();
    let lifetime = use_lifetime();
    let mut tab = use_signal(ProfileTab::default);
    let generated = use_signal(RemoteCollection::<Creation>::default);
    let liked = use_signal(|| RemoteCollection::<Creation>::settled(Vec::new()));

    // Track the user id in a signal so the loader re-runs on an account switch
    let mut owner = use_signal(|| user.id.clone());
    if *owner.peek() != user.id {
        owner.set(user.id.clone());
    }

    let loader_lifetime = lifetime.clone();
    let _loader = use_resource(move || {
        let owner = owner();
        let lifetime = loader_lifetime.clone();
        async move {
            tracing::debug!(user_id = %owner, "loading profile creations");
            let settlement =
                refresh(generated, &lifetime, FETCH_TIMEOUT, api::get_creations_for_user()).await;
            if settlement.is_failed() && lifetime.is_alive() {
                toast_api.error(LOAD_FAILED_MESSAGE.to_string(), ToastOptions::new());
            }
        }
    });

    let active = tab();
    let generated_state = generated.read();
    let liked_state = liked.read();
    let tabs: Vec<(ProfileTab, usize)> = ProfileTab::ALL
        .into_iter()
        .map(|candidate| {
            let count = candidate.pick(&*generated_state, &*liked_state).count();
            (candidate, count)
        })
        .collect();

    let grid = match active.render_state(&*generated_state, &*liked_state) {
        RenderState::Loading => rsx! {
            div { class: "grid-message", "Loading..." }
        },
        RenderState::Error(_) => rsx! {
            div { class: "grid-message section-error", "{LOAD_FAILED_MESSAGE}" }
        },
        RenderState::Empty => rsx! {
            div {
                class: "grid-message",
                "No items yet."
                br {}
                if let Some(target) = active.empty_action() {
                    button {
                        class: "cta-button",
                        onclick: move |_| on_navigate.call(target),
                        "{active.empty_hint()}"
                    }
                } else {
                    "{active.empty_hint()}"
                }
            }
        },
        RenderState::Populated(items) => rsx! {
            for item in items.iter() {
                CreationTile { key: "{item.id}", creation: item.clone() }
            }
        },
    };

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "profile",

            div {
                class: "profile-header",
                div {
                    class: "profile-identity",
                    img { src: user.avatar().to_string(), alt: "Avatar", class: "profile-avatar" }
                    div {
                        h1 { class: "profile-name", "{user.name}" }
                        div { class: "profile-id", "ID: {user.id}" }
                    }
                    button {
                        class: "icon-button",
                        title: "Settings",
                        Icon { icon: FaGear, width: 20, height: 20 }
                    }
                }

                div {
                    class: "usage-card",
                    div {
                        div { class: "usage-caption", "Today's Generations" }
                        div {
                            class: "usage-value",
                            Icon { icon: FaBolt, width: 16, height: 16, class: "usage-icon" }
                            "{user.usage_label()}"
                        }
                    }
                    button { class: "upgrade-button", "Upgrade Plan" }
                }
            }

            div {
                class: "tab-bar",
                for (candidate, count) in tabs {
                    button {
                        key: "{candidate.label()}",
                        class: if candidate == active { "tab tab--active" } else { "tab" },
                        onclick: move |_| tab.set(candidate),
                        "{candidate.label()} ({count})"
                    }
                }
            }

            div { class: "creation-grid", {grid} }
        }
    }
}
