use tower_sessions::Session;

use crate::catalog::get_catalog;
use crate::error::CatalogError;
use crate::models::UserInfo;
use crate::settings::get_settings;

/// Key for storing user ID in session.
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// Pick the effective user id: the session's, else the configured default.
pub fn resolve_user_id(
    session_user_id: Option<String>,
    default_user_id: Option<&str>,
) -> Option<String> {
    session_user_id.or_else(|| default_user_id.map(str::to_string))
}

/// Load the signed-in user for this session.
pub async fn current_user(session: &Session) -> Result<Option<UserInfo>, CatalogError> {
    let session_user_id: Option<String> = session
        .get(SESSION_USER_ID_KEY)
        .await
        .map_err(|e| {
            tracing::warn!("Failed to read session: {}", e);
            CatalogError::NotSignedIn
        })?;

    let settings = get_settings().await?;
    let Some(user_id) =
        resolve_user_id(session_user_id, settings.session.default_user_id.as_deref())
    else {
        return Ok(None);
    };

    Ok(get_catalog().await?.user(&user_id).await)
}

/// Role check for admin-scoped routes. Never trust the client-side gate.
pub fn require_admin(user: Option<UserInfo>) -> Result<UserInfo, CatalogError> {
    let user = user.ok_or(CatalogError::NotSignedIn)?;
    if !user.is_admin() {
        tracing::warn!(user_id = %user.id, "admin route refused");
        return Err(CatalogError::Forbidden);
    }
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn user(role: Role) -> UserInfo {
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

    #[test]
    fn test_require_admin() {
        assert!(require_admin(Some(user(Role::Admin))).is_ok());
        assert!(matches!(
            require_admin(Some(user(Role::User))),
            Err(CatalogError::Forbidden)
        ));
        assert!(matches!(require_admin(None), Err(CatalogError::NotSignedIn)));
    }

    #[test]
    fn test_resolve_user_id() {
        assert_eq!(
            resolve_user_id(Some("u2".into()), Some("u1")).as_deref(),
            Some("u2")
        );
        assert_eq!(resolve_user_id(None, Some("u1")).as_deref(), Some("u1"));
        assert_eq!(resolve_user_id(None, None), None);
    }
}
