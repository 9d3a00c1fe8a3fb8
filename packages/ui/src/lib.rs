//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod access;
pub mod components;
pub mod config;
pub mod remote;
pub mod unpick;
pub mod views;

mod timer;

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState};

mod navigation;
pub use navigation::ViewState;
