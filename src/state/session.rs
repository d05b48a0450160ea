//! Session Service
//!
//! Single owner of the authenticated session. The session lives in
//! browser local storage and is mirrored into a reactive signal, so
//! every write goes through one place and subscribed views update
//! automatically.

use leptos::*;

use crate::config::storage_keys;

/// Authenticated identity and bearer credential held by the client
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub token_type: String,
    pub user_email: Option<String>,
    pub user_name: Option<String>,
}

impl Session {
    /// Value for the `Authorization` request header
    pub fn authorization_value(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }
}

// ============================================
// Storage-level access
// ============================================

fn read_key(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(key).ok()?
}

fn write_key(key: &str, value: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

fn remove_key(key: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Load the current session from local storage.
///
/// Returns `None` when no access token is stored; identity fields are
/// optional (a login-only session has no stored name).
pub fn load_session() -> Option<Session> {
    let access_token = read_key(storage_keys::ACCESS_TOKEN)?;
    let token_type = read_key(storage_keys::TOKEN_TYPE).unwrap_or_else(|| "bearer".to_string());
    Some(Session {
        access_token,
        token_type,
        user_email: read_key(storage_keys::USER_EMAIL),
        user_name: read_key(storage_keys::USER_NAME),
    })
}

/// `Authorization` header value for the stored session, if any
pub fn auth_header() -> Option<String> {
    load_session().map(|s| s.authorization_value())
}

/// Email of the signed-in user, if stored
pub fn stored_email() -> Option<String> {
    read_key(storage_keys::USER_EMAIL)
}

/// Display name of the signed-in user, if stored
pub fn stored_name() -> Option<String> {
    read_key(storage_keys::USER_NAME)
}

/// Persist the bearer credential issued by a login or register call
pub fn store_credentials(access_token: &str, token_type: &str) {
    write_key(storage_keys::ACCESS_TOKEN, access_token);
    let token_type = if token_type.is_empty() { "bearer" } else { token_type };
    write_key(storage_keys::TOKEN_TYPE, token_type);
}

/// Persist the signed-in user's email
pub fn store_email(email: &str) {
    write_key(storage_keys::USER_EMAIL, email);
}

/// Persist the signed-in user's display name
pub fn store_name(name: &str) {
    write_key(storage_keys::USER_NAME, name);
}

/// Remove the bearer credential.
///
/// Identity fields are left in place so the login form and sidebar can
/// keep showing who was signed in.
pub fn clear_credentials() {
    remove_key(storage_keys::ACCESS_TOKEN);
    remove_key(storage_keys::TOKEN_TYPE);
}

// ============================================
// Reactive wrapper
// ============================================

/// Session service provided to the component tree
#[derive(Clone, Copy)]
pub struct SessionState {
    session: RwSignal<Option<Session>>,
}

impl SessionState {
    /// Current session (reactive)
    pub fn get(&self) -> Option<Session> {
        self.session.get()
    }

    /// Whether a bearer token is held (reactive)
    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_some())
    }

    /// Re-read local storage into the signal.
    ///
    /// Called after any operation that changed stored credentials so
    /// subscribers see the new state.
    pub fn refresh(&self) {
        self.session.set(load_session());
    }

    /// Store the user's email and notify subscribers
    pub fn set_email(&self, email: &str) {
        store_email(email);
        self.refresh();
    }

    /// Store the user's display name and notify subscribers
    pub fn set_name(&self, name: &str) {
        store_name(name);
        self.refresh();
    }
}

/// Provide the session service to the component tree
pub fn provide_session_state() {
    let state = SessionState {
        session: create_rw_signal(load_session()),
    };
    provide_context(state);
}

/// Fetch the session service from context
pub fn use_session() -> SessionState {
    use_context::<SessionState>().expect("SessionState not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_value() {
        let session = Session {
            access_token: "abc123".to_string(),
            token_type: "bearer".to_string(),
            user_email: Some("you@example.com".to_string()),
            user_name: None,
        };
        assert_eq!(session.authorization_value(), "bearer abc123");
    }

    #[test]
    fn test_authorization_value_keeps_backend_token_type() {
        let session = Session {
            access_token: "t".to_string(),
            token_type: "Bearer".to_string(),
            user_email: None,
            user_name: None,
        };
        assert_eq!(session.authorization_value(), "Bearer t");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn credentials_round_trip() {
        store_credentials("tok", "bearer");
        store_email("you@example.com");
        let session = load_session().expect("session stored");
        assert_eq!(session.access_token, "tok");
        assert_eq!(session.user_email.as_deref(), Some("you@example.com"));

        clear_credentials();
        assert!(load_session().is_none());
        // Identity survives logout
        assert_eq!(stored_email().as_deref(), Some("you@example.com"));
    }

    #[wasm_bindgen_test]
    fn empty_token_type_defaults_to_bearer() {
        store_credentials("tok", "");
        let session = load_session().expect("session stored");
        assert_eq!(session.token_type, "bearer");
        clear_credentials();
    }
}
