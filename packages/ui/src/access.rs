//! Client-side role gate for admin views.
//!
//! This only decides what to render. Every admin server function checks the
//! role again on its own.

use api::UserInfo;

use crate::navigation::ViewState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    /// Render nothing and send the user to the given view.
    Deny { redirect: ViewState },
}

pub const ACCESS_DENIED_MESSAGE: &str = "Access denied.";

pub fn admin_gate(user: &UserInfo) -> GateDecision {
    if user.is_admin() {
        GateDecision::Allow
    } else {
        GateDecision::Deny {
            redirect: ViewState::Home,
        }
    }
}
