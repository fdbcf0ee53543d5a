use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::{config::AdminAuthConfig, handlers::error_response, state::AppState};

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Email of the authenticated admin, attached to admin requests.
#[derive(Debug, Clone)]
pub struct AdminIdentity(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminSession {
    pub token: String,
    pub email: String,
    pub expires_at: i64,
}

/// Verifies the admin credentials and issues signed, expiring session tokens.
///
/// Token layout: `hex(email).expires_at_ms.hex(hmac_sha256(secret, ...))`.
#[derive(Debug, Clone)]
pub struct AdminAuth {
    config: AdminAuthConfig,
}

impl AdminAuth {
    pub fn new(config: AdminAuthConfig) -> Self {
        Self {
            config,
        }
    }

    pub fn login(&self, email: &str, password: &str, now_ms: i64) -> Option<AdminSession> {
        let expected = self.config.password_sha256.as_deref()?;
        if !email.trim().eq_ignore_ascii_case(&self.config.email) {
            return None;
        }
        let digest = password_digest(&self.config.password_salt, password);
        if !bool::from(digest.as_bytes().ct_eq(expected.as_bytes())) {
            return None;
        }

        let ttl_ms = i64::try_from(self.config.session_ttl.as_millis()).unwrap_or(i64::MAX);
        let expires_at = now_ms.saturating_add(ttl_ms);
        let payload = format!("{}.{}", hex::encode(self.config.email.as_bytes()), expires_at);
        let signature = hex::encode(self.mac(&payload)?.finalize().into_bytes());
        Some(AdminSession {
            token: format!("{payload}.{signature}"),
            email: self.config.email.clone(),
            expires_at,
        })
    }

    /// Returns the admin email when `token` is authentic and unexpired.
    pub fn verify(&self, token: &str, now_ms: i64) -> Option<String> {
        let (payload, signature) = token.trim().rsplit_once('.')?;
        let (email_hex, expires_at) = payload.split_once('.')?;

        let signature = hex::decode(signature).ok()?;
        self.mac(payload)?.verify_slice(&signature).ok()?;
        let expires_at: i64 = expires_at.parse().ok()?;
        if expires_at <= now_ms {
            return None;
        }
        let email = String::from_utf8(hex::decode(email_hex).ok()?).ok()?;
        email.eq_ignore_ascii_case(&self.config.email).then_some(email)
    }

    fn mac(&self, payload: &str) -> Option<HmacSha256> {
        let mut mac = HmacSha256::new_from_slice(self.config.session_secret.as_bytes()).ok()?;
        mac.update(payload.as_bytes());
        Some(mac)
    }
}

/// Rejects requests without a valid `Authorization: Bearer` admin token.
pub async fn require_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));
    let now_ms = chrono::Utc::now().timestamp_millis();

    match token.and_then(|token| state.auth().verify(token, now_ms)) {
        Some(email) => {
            tracing::debug!(%email, path = %request.uri().path(), "admin request authorized");
            request.extensions_mut().insert(AdminIdentity(email));
            next.run(request).await
        },
        None => {
            tracing::warn!(path = %request.uri().path(), "rejected admin request");
            error_response(StatusCode::UNAUTHORIZED, "Admin session missing or expired").into_response()
        },
    }
}

pub fn password_digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use hmac::Mac;

    use super::{password_digest, AdminAuth, HmacSha256};
    use crate::config::AdminAuthConfig;

    const NOW: i64 = 1_725_000_000_000;

    fn auth() -> AdminAuth {
        AdminAuth::new(AdminAuthConfig {
            email: "admin@timesoffashion.com".to_string(),
            password_salt: "pepper".to_string(),
            password_sha256: Some(password_digest("pepper", "Admin@123")),
            session_secret: "secret".to_string(),
            session_ttl: Duration::from_secs(60),
        })
    }

    #[test]
    fn hmac_matches_rfc4231_case_2() {
        let mut mac = HmacSha256::new_from_slice(b"Jefe").expect("any key length");
        mac.update(b"what do ya want for nothing?");
        assert_eq!(
            hex::encode(mac.finalize().into_bytes()),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn login_requires_matching_email_and_password() {
        let auth = auth();
        assert!(auth.login("admin@timesoffashion.com", "wrong", NOW).is_none());
        assert!(auth.login("someone@else.com", "Admin@123", NOW).is_none());
        let session = auth.login(" ADMIN@timesoffashion.com ", "Admin@123", NOW).expect("valid login");
        assert_eq!(session.expires_at, NOW + 60_000);
        assert_eq!(auth.verify(&session.token, NOW + 1).as_deref(), Some("admin@timesoffashion.com"));
    }

    #[test]
    fn tokens_expire_and_reject_tampering() {
        let auth = auth();
        let session = auth.login("admin@timesoffashion.com", "Admin@123", NOW).expect("valid login");
        assert!(auth.verify(&session.token, session.expires_at).is_none());

        let forged = session.token.replace(&session.expires_at.to_string(), &(NOW + 999_999).to_string());
        assert!(auth.verify(&forged, NOW).is_none());
        assert!(auth.verify("garbage", NOW).is_none());
        assert!(auth.verify("", NOW).is_none());
    }

    #[test]
    fn login_is_disabled_without_a_configured_digest() {
        let mut config = auth().config;
        config.password_sha256 = None;
        let auth = AdminAuth::new(config);
        assert!(auth.login("admin@timesoffashion.com", "Admin@123", NOW).is_none());
    }

    #[test]
    fn tokens_signed_with_another_secret_are_rejected() {
        let session = auth().login("admin@timesoffashion.com", "Admin@123", NOW).expect("valid login");

        let mut config = auth().config;
        config.session_secret = "rotated".to_string();
        assert!(AdminAuth::new(config).verify(&session.token, NOW).is_none());

        let (payload, signature) = session.token.rsplit_once('.').expect("signed token");
        let truncated = format!("{payload}.{}", &signature[..32]);
        assert!(auth().verify(&truncated, NOW).is_none());
    }
}
