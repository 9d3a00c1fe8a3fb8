//! # API crate: shared fullstack server functions for Atelier
//!
//! This crate defines every Dioxus server function the views call, along with
//! the models they exchange and the server-only modules behind them.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | none | Session user lookup and server-side role checks |
//! | [`catalog`] | `server` | In-memory users and creations seeded from JSON (lazy `OnceCell` singleton) |
//! | [`error`] | `server` | `CatalogError`, converted into `ServerFnError` at the boundary |
//! | [`models`] | none | `UserInfo`, `Role`, `Creation` |
//! | [`settings`] | `server` | Layered server configuration |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, annotated with
//! `#[get(...)]` or `#[post(...)]` and compiled twice: once with full server logic
//! (behind `#[cfg(feature = "server")]`) and once as a thin client stub that simply
//! forwards the call over HTTP.
//!
//! - **Session**: `get_current_user`
//! - **Admin** (role checked on the server): `get_all_users`, `get_admin_picked_creations`, `unpick_creation`
//! - **Profile**: `get_creations_for_user`

use dioxus::prelude::*;

pub mod auth;
#[cfg(feature = "server")]
pub mod catalog;
#[cfg(feature = "server")]
pub mod error;
pub mod models;
#[cfg(feature = "server")]
pub mod settings;

pub use models::{Creation, Role, UserInfo};

/// Resolve the session user and insist on the admin role.
#[cfg(feature = "server")]
async fn admin_session(session: &tower_sessions::Session) -> Result<UserInfo, ServerFnError> {
    let user = auth::current_user(session)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    auth::require_admin(user).map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(feature = "server")]
async fn catalog_or_err() -> Result<&'static catalog::Catalog, ServerFnError> {
    catalog::get_catalog()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Get the current user from the session.
#[cfg(feature = "server")]
#[get("/api/session/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    auth::current_user(&session)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/session/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// List every account. Admin only.
#[cfg(feature = "server")]
#[get("/api/admin/users", session: tower_sessions::Session)]
pub async fn get_all_users() -> Result<Vec<UserInfo>, ServerFnError> {
    admin_session(&session).await?;
    let catalog = catalog_or_err().await?;
    Ok(catalog.all_users().await)
}

#[cfg(not(feature = "server"))]
#[get("/api/admin/users")]
pub async fn get_all_users() -> Result<Vec<UserInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List creations carrying the editorial `picked` flag. Admin only.
#[cfg(feature = "server")]
#[get("/api/admin/picks", session: tower_sessions::Session)]
pub async fn get_admin_picked_creations() -> Result<Vec<Creation>, ServerFnError> {
    admin_session(&session).await?;
    let catalog = catalog_or_err().await?;
    Ok(catalog.picked_creations().await)
}

#[cfg(not(feature = "server"))]
#[get("/api/admin/picks")]
pub async fn get_admin_picked_creations() -> Result<Vec<Creation>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Clear the `picked` flag on a creation. Admin only.
#[cfg(feature = "server")]
#[post("/api/admin/picks/unpick", session: tower_sessions::Session)]
pub async fn unpick_creation(id: String) -> Result<Creation, ServerFnError> {
    let admin = admin_session(&session).await?;
    let catalog = catalog_or_err().await?;
    let creation = catalog
        .unpick(&id)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    tracing::info!(creation_id = %id, admin_id = %admin.id, "creation un-picked");
    Ok(creation)
}

#[cfg(not(feature = "server"))]
#[post("/api/admin/picks/unpick")]
pub async fn unpick_creation(id: String) -> Result<Creation, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List the signed-in user's own creations.
#[cfg(feature = "server")]
#[get("/api/me/creations", session: tower_sessions::Session)]
pub async fn get_creations_for_user() -> Result<Vec<Creation>, ServerFnError> {
    let user = auth::current_user(&session)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?
        .ok_or_else(|| ServerFnError::new(error::CatalogError::NotSignedIn.to_string()))?;
    let catalog = catalog_or_err().await?;
    Ok(catalog.creations_for(&user.id).await)
}

#[cfg(not(feature = "server"))]
#[get("/api/me/creations")]
pub async fn get_creations_for_user() -> Result<Vec<Creation>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
