use dioxus::prelude::*;
use shared_types::Session;

/// Marker key — presence means "signed in"; the value is never interpreted.
pub const AUTH_FLAG_KEY: &str = "authenticated";
/// Email shown in the header, stored alongside the marker.
pub const USER_EMAIL_KEY: &str = "user_email";

/// The collaborator that owns the browser `localStorage` session keys.
///
/// Reads round-trip through `document::eval`; writes and removals are
/// fire-and-forget. Storage is assumed readable — a failed eval is treated
/// the same as an absent key (not authenticated), with no retry.
pub struct SessionStore;

impl SessionStore {
    /// Read the persisted session, if any.
    ///
    /// The gate opens on the marker's presence alone; a missing email falls
    /// back to an empty string rather than failing the gate.
    pub async fn load() -> Option<Session> {
        read_key(AUTH_FLAG_KEY).await?;
        let email = read_key(USER_EMAIL_KEY).await.unwrap_or_default();
        tracing::info!(%email, "restored session from storage");
        Some(Session::new(email))
    }

    /// Persist a session. Called by the login flow only.
    pub fn save(session: &Session) {
        write_key(AUTH_FLAG_KEY, "true");
        write_key(USER_EMAIL_KEY, &session.email);
    }

    /// Remove both session keys. Called by logout only.
    pub fn clear() {
        remove_key(AUTH_FLAG_KEY);
        remove_key(USER_EMAIL_KEY);
        tracing::info!("cleared persisted session");
    }
}

async fn read_key(key: &str) -> Option<String> {
    let value = document::eval(&format!(
        r#"return window.localStorage.getItem("{key}");"#
    ))
    .await
    .ok()?;
    value.as_str().map(str::to_owned)
}

fn write_key(key: &str, value: &str) {
    document::eval(&format!(
        r#"window.localStorage.setItem("{key}", "{value}");"#
    ));
}

fn remove_key(key: &str) {
    document::eval(&format!(r#"window.localStorage.removeItem("{key}");"#));
}
