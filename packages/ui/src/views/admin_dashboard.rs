use std::future::Future;
use std::time::Duration;

use api::{Creation, UserInfo};
use dioxus::prelude::*;

use crate::access::{admin_gate, GateDecision, ACCESS_DENIED_MESSAGE};
use crate::components::{use_toast, CreationTile, RoleBadge, StatCard, StatValue, ToastOptions};
use crate::config::{FETCH_FAILED_MESSAGE, FETCH_TIMEOUT, UNPICK_TIMEOUT};
use crate::navigation::ViewState;
use crate::remote::{
    refresh, use_lifetime, CollectionSlot, FetchError, Lifetime, RemoteCollection, RenderState,
    Settlement,
};
use crate::unpick::unpick;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

pub const ADMIN_LOAD_FAILED_MESSAGE: &str = "Failed to load admin data.";

/// How a dashboard load ended.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardLoad {
    /// Not an admin: sent home, nothing fetched.
    Denied,
    Loaded { users: Settlement, picks: Settlement },
}

/// Gate `account`, then fetch both sections concurrently.
///
/// `navigate` runs once for a denied account and the fetches are never
/// polled. Otherwise each section settles on its own and `report` gets a
/// single message if either one failed.
pub async fn load_dashboard<U, P, FU, FP, EU, EP>(
    account: &UserInfo,
    (users, picks): (U, P),
    lifetime: &Lifetime,
    timeout: Duration,
    (fetch_users, fetch_picks): (FU, FP),
    mut navigate: impl FnMut(ViewState),
    mut report: impl FnMut(&str),
) -> DashboardLoad
where
    U: CollectionSlot<UserInfo>,
    P: CollectionSlot<Creation>,
    FU: Future<Output = Result<Vec<UserInfo>, EU>>,
    FP: Future<Output = Result<Vec<Creation>, EP>>,
    EU: Into<FetchError>,
    EP: Into<FetchError>,
{
    if let GateDecision::Deny { redirect } = admin_gate(account) {
        tracing::warn!(user_id = %account.id, "admin dashboard denied");
        report(ACCESS_DENIED_MESSAGE);
        navigate(redirect);
        return DashboardLoad::Denied;
    }

    let (users, picks) = futures::join!(
        refresh(users, lifetime, timeout, fetch_users),
        refresh(picks, lifetime, timeout, fetch_picks),
    );

    if (users.is_failed() || picks.is_failed()) && lifetime.is_alive() {
        report(ADMIN_LOAD_FAILED_MESSAGE);
    }
    DashboardLoad::Loaded { users, picks }
}

/// Admin dashboard: site statistics, editor's picks moderation and the user table.
///
/// Non-admins are sent to [`ViewState::Home`] and see nothing. Both sections
/// load concurrently and settle on their own.
#[component]
pub fn AdminDashboardView(
    /// The signed-in user.
    user: UserInfo,
    /// Asks the shell to switch views.
    on_navigate: EventHandler<ViewState>,
) -> Element {
    let toast_api = use_toast();
    let lifetime = use_lifetime();
    let users = use_signal(RemoteCollection::<UserInfo>::default);
    let picks = use_signal(RemoteCollection::<Creation>::default);

    // Re-run the gate and the loaders only when the account or its role changes
    let mut account = use_signal(|| user.clone());
    {
        let current = account.peek();
        let changed = current.id != user.id || current.role != user.role;
        drop(current);
        if changed {
            account.set(user.clone());
        }
    }

    let loader_lifetime = lifetime.clone();
    let _loader = use_resource(move || {
        let account = account();
        let lifetime = loader_lifetime.clone();
        async move {
            load_dashboard(
                &account,
                (users, picks),
                &lifetime,
                FETCH_TIMEOUT,
                (api::get_all_users(), api::get_admin_picked_creations()),
                |target| on_navigate.call(target),
                |message| {
                    toast_api.error(message.to_string(), ToastOptions::new());
                },
            )
            .await;
        }
    });

    let unpick_lifetime = lifetime.clone();
    let on_unpick = use_callback(move |id: String| {
        let lifetime = unpick_lifetime.clone();
        spawn(async move {
            let request = api::unpick_creation(id.clone());
            let Some(outcome) = unpick(picks, &lifetime, UNPICK_TIMEOUT, &id, request).await else {
                return;
            };
            if !lifetime.is_alive() {
                return;
            }
            if outcome.is_confirmed() {
                toast_api.success(outcome.message(&id), ToastOptions::new());
            } else {
                toast_api.error(outcome.message(&id), ToastOptions::new());
            }
        });
    });

    if !user.is_admin() {
        return rsx! {};
    }

    let users_state = users.read();
    let picks_state = picks.read();

    let picks_section = match picks_state.render_state() {
        RenderState::Loading => rsx! {
            p { class: "section-hint", "Loading picked images..." }
        },
        RenderState::Error(_) => rsx! {
            p { class: "section-error", "{FETCH_FAILED_MESSAGE}" }
        },
        RenderState::Empty => rsx! {
            p { class: "section-hint", "No images have been picked yet." }
        },
        RenderState::Populated(items) => rsx! {
            div {
                class: "creation-grid creation-grid--gapped",
                for creation in items.iter() {
                    CreationTile {
                        key: "{creation.id}",
                        creation: creation.clone(),
                        on_unpick: on_unpick,
                    }
                }
            }
        },
    };

    let user_rows = match users_state.render_state() {
        RenderState::Loading => rsx! {
            tr { td { colspan: "3", class: "table-hint", "Loading users..." } }
        },
        RenderState::Error(_) => rsx! {
            tr { td { colspan: "3", class: "table-hint section-error", "{FETCH_FAILED_MESSAGE}" } }
        },
        RenderState::Empty => rsx! {
            tr { td { colspan: "3", class: "table-hint", "No users yet." } }
        },
        RenderState::Populated(rows) => rsx! {
            for row in rows.iter() {
                tr {
                    key: "{row.id}",
                    class: "user-row",
                    td {
                        class: "user-cell",
                        img { src: row.avatar().to_string(), class: "user-avatar", alt: "" }
                        "{row.name}"
                    }
                    td { class: "user-email", "{row.email}" }
                    td { RoleBadge { role: row.role } }
                }
            }
        },
    };

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "admin-dashboard",
            h1 { class: "view-title", "Admin Dashboard" }

            section {
                class: "view-section",
                h2 { class: "section-title", "Site Statistics" }
                div {
                    class: "stat-grid",
                    StatCard { title: "Total Users", value: stat_value(&users_state) }
                    StatCard { title: "Picked Items", value: stat_value(&picks_state) }
                }
            }

            section {
                class: "view-section",
                h2 { class: "section-title", "Feed Management (Editor's Picks)" }
                {picks_section}
            }

            section {
                class: "view-section",
                h2 { class: "section-title", "User Management" }
                div {
                    class: "table-card",
                    table {
                        class: "user-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Email" }
                                th { "Role" }
                            }
                        }
                        tbody { {user_rows} }
                    }
                }
            }
        }
    }
}

fn stat_value<T>(section: &RemoteCollection<T>) -> StatValue {
    StatValue::new(section.count(), section.is_loading(), section.error().is_some())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use api::Role;

    use super::*;

    const TIMEOUT: Duration = Duration::from_millis(200);

    type Slot<T> = Arc<Mutex<RemoteCollection<T>>>;

    fn account(role: Role) -> UserInfo {
        UserInfo {
            id: "u1".into(),
            name: "Ada".into(),
            email: "ada@example.com".into(),
            avatar_url: None,
            role,
            daily_generations_used: 0,
            max_daily_generations: 10,
        }
    }

    fn creation(id: &str) -> Creation {
        Creation {
            id: id.to_string(),
            media_url: format!("m/{id}.png"),
            prompt: String::new(),
            owner_id: "u1".to_string(),
            picked: true,
        }
    }

    fn slots() -> (Slot<UserInfo>, Slot<Creation>) {
        (
            Arc::new(Mutex::new(RemoteCollection::default())),
            Arc::new(Mutex::new(RemoteCollection::default())),
        )
    }

    #[tokio::test]
    async fn test_non_admin_sent_home_without_fetching() {
        let (users, picks) = slots();
        let lifetime = Lifetime::new();
        let polled = Arc::new(Mutex::new(0));
        let mut navigations = Vec::new();
        let mut messages = Vec::new();

        let (users_polled, picks_polled) = (polled.clone(), polled.clone());
        let load = load_dashboard(
            &account(Role::User),
            (users.clone(), picks.clone()),
            &lifetime,
            TIMEOUT,
            (
                async move {
                    *users_polled.lock().unwrap() += 1;
                    Ok::<_, FetchError>(vec![account(Role::Admin)])
                },
                async move {
                    *picks_polled.lock().unwrap() += 1;
                    Ok::<_, FetchError>(vec![creation("c1")])
                },
            ),
            |target| navigations.push(target),
            |message| messages.push(message.to_string()),
        )
        .await;

        assert_eq!(load, DashboardLoad::Denied);
        assert_eq!(navigations, [ViewState::Home]);
        assert_eq!(messages, [ACCESS_DENIED_MESSAGE]);
        assert_eq!(*polled.lock().unwrap(), 0);
        assert!(users.lock().unwrap().is_loading());
        assert!(picks.lock().unwrap().is_loading());
    }

    #[tokio::test]
    async fn test_admin_loads_both_sections() {
        let (users, picks) = slots();
        let lifetime = Lifetime::new();
        let mut navigations = Vec::new();
        let mut messages: Vec<String> = Vec::new();

        let load = load_dashboard(
            &account(Role::Admin),
            (users.clone(), picks.clone()),
            &lifetime,
            TIMEOUT,
            (
                async { Ok::<_, FetchError>(vec![account(Role::Admin), account(Role::User)]) },
                async { Ok::<_, FetchError>(vec![creation("c1"), creation("c2"), creation("c3")]) },
            ),
            |target| navigations.push(target),
            |message| messages.push(message.to_string()),
        )
        .await;

        assert_eq!(
            load,
            DashboardLoad::Loaded {
                users: Settlement::Loaded(2),
                picks: Settlement::Loaded(3),
            }
        );
        assert!(navigations.is_empty());
        assert!(messages.is_empty());
        assert_eq!(stat_value(&users.lock().unwrap()), StatValue::Count(2));
        assert_eq!(stat_value(&picks.lock().unwrap()), StatValue::Count(3));
    }

    #[tokio::test]
    async fn test_one_failed_section_reports_once() {
        let (users, picks) = slots();
        let lifetime = Lifetime::new();
        let mut navigations = Vec::new();
        let mut messages = Vec::new();

        let load = load_dashboard(
            &account(Role::Admin),
            (users.clone(), picks.clone()),
            &lifetime,
            TIMEOUT,
            (
                async { Err::<Vec<UserInfo>, _>(FetchError::new("503")) },
                async { Ok::<_, FetchError>(vec![creation("c1"), creation("c2")]) },
            ),
            |target| navigations.push(target),
            |message| messages.push(message.to_string()),
        )
        .await;

        match load {
            DashboardLoad::Loaded { users, picks } => {
                assert!(users.is_failed());
                assert_eq!(picks, Settlement::Loaded(2));
            }
            other => panic!("expected a load, got {other:?}"),
        }
        assert!(navigations.is_empty());
        assert_eq!(messages, [ADMIN_LOAD_FAILED_MESSAGE]);

        // The failed counter shows an error marker, not a zero
        assert_eq!(stat_value(&users.lock().unwrap()), StatValue::Failed);
        assert_eq!(stat_value(&picks.lock().unwrap()), StatValue::Count(2));
        assert_eq!(picks.lock().unwrap().items().len(), 2);
    }

    #[tokio::test]
    async fn test_failure_keeps_prior_users_but_marks_counter() {
        let users: Slot<UserInfo> =
            Arc::new(Mutex::new(RemoteCollection::settled(vec![account(Role::User)])));
        let picks: Slot<Creation> = Arc::new(Mutex::new(RemoteCollection::default()));
        let lifetime = Lifetime::new();

        load_dashboard(
            &account(Role::Admin),
            (users.clone(), picks.clone()),
            &lifetime,
            TIMEOUT,
            (
                async { Err::<Vec<UserInfo>, _>(FetchError::new("503")) },
                async { Ok::<_, FetchError>(Vec::new()) },
            ),
            |_| {},
            |_| {},
        )
        .await;

        let users = users.lock().unwrap();
        assert_eq!(users.count(), 1);
        assert_eq!(stat_value(&users), StatValue::Failed);
    }
}
