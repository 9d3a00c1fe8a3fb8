//! Session identity and role checks.
//!
//! Sign-in itself happens elsewhere; this module only reads the user id the
//! session already carries and enforces roles on the server side.

#[cfg(feature = "server")]
mod session;

#[cfg(feature = "server")]
pub use session::{current_user, require_admin, resolve_user_id, SESSION_USER_ID_KEY};
