//! Small presentational pieces shared by the views.

mod creation_tile;
mod role_badge;
mod skeleton;
mod stat_card;

pub use creation_tile::CreationTile;
pub use role_badge::RoleBadge;
pub use skeleton::Skeleton;
pub use stat_card::{StatCard, StatValue};

pub use dioxus_primitives::toast::{use_toast, ToastOptions, ToastProvider};
