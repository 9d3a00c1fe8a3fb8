//! Data models shared by the server functions and the views.

mod creation;
mod user;

pub use creation::{Creation, CreationRecord};
pub use user::{Role, UserInfo};
