//! Admin session persisted in local storage.
//!
//! The token is only a client-side convenience: the backend validates it on
//! every admin request. An expired entry reads as logged out.

use serde::{Deserialize, Serialize};

const SESSION_KEY: &str = "tof_admin_session";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSession {
    pub token: String,
    pub email: String,
    /// Unix milliseconds.
    pub expires_at: i64,
}

impl AdminSession {
    pub fn is_live(&self, now_ms: i64) -> bool {
        !self.token.is_empty() && self.expires_at > now_ms
    }
}

/// Stored session, if one exists and has not expired.
pub fn load_session() -> Option<AdminSession> {
    let raw = local_storage()?.get_item(SESSION_KEY).ok().flatten();
    let session = decode_session(raw.as_deref(), now_ms());
    if session.is_none() && raw.is_some() {
        clear_session();
    }
    session
}

pub fn save_session(session: &AdminSession) {
    let Some(storage) = local_storage() else {
        return;
    };
    match serde_json::to_string(session) {
        Ok(raw) => {
            if storage.set_item(SESSION_KEY, &raw).is_err() {
                web_sys::console::warn_1(&"failed to persist admin session".into());
            }
        },
        Err(err) => web_sys::console::warn_1(&format!("admin session encode error: {err}").into()),
    }
}

pub fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}

fn decode_session(raw: Option<&str>, now_ms: i64) -> Option<AdminSession> {
    raw.and_then(|raw| serde_json::from_str::<AdminSession>(raw).ok())
        .filter(|session| session.is_live(now_ms))
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

#[cfg(test)]
mod tests {
    use super::{decode_session, AdminSession};

    #[test]
    fn expired_or_garbled_sessions_read_as_logged_out() {
        let session = AdminSession {
            token: "t".to_string(),
            email: "admin@timesoffashion.com".to_string(),
            expires_at: 2_000,
        };
        let raw = serde_json::to_string(&session).expect("serializes");

        assert_eq!(decode_session(Some(&raw), 1_999), Some(session));
        assert_eq!(decode_session(Some(&raw), 2_000), None);
        assert_eq!(decode_session(Some("true"), 0), None);
        assert_eq!(decode_session(None, 0), None);
    }
}
