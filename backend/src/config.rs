use std::{env, time::Duration};

use anyhow::{Context, Result};
use times_of_fashion_shared::newsletter::NewsletterProvider;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
const DEFAULT_EMAILJS_API_BASE: &str = "https://api.emailjs.com";
const DEFAULT_NOTIFY_EMAIL: &str = "newsletter@timesoffashion.com";
const DEFAULT_ADMIN_EMAIL: &str = "admin@timesoffashion.com";
const DEFAULT_SESSION_TTL_SECS: u64 = 8 * 60 * 60;

/// Process configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub port: u16,
    pub newsletter: NewsletterConfig,
    pub admin: AdminAuthConfig,
}

/// Provider selection and credentials. Individual keys are only checked when
/// a signup is attempted.
#[derive(Debug, Clone, Default)]
pub struct NewsletterConfig {
    pub provider: NewsletterProvider,
    pub formspree_endpoint: Option<String>,
    pub emailjs_service_id: Option<String>,
    pub emailjs_template_id: Option<String>,
    pub emailjs_public_key: Option<String>,
    pub emailjs_api_base: String,
    pub notify_email: String,
    pub netlify_site_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AdminAuthConfig {
    pub email: String,
    pub password_salt: String,
    /// Hex SHA-256 of `salt + password`. Logins are refused when unset.
    pub password_sha256: Option<String>,
    pub session_secret: String,
    pub session_ttl: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| normalize_optional_string(lookup(key));

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().with_context(|| format!("invalid PORT `{raw}`"))?,
            None => DEFAULT_PORT,
        };
        let bind_addr = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let provider = match get("NEWSLETTER_PROVIDER") {
            Some(raw) => raw.parse::<NewsletterProvider>().unwrap_or_else(|err| {
                tracing::warn!("{err}; falling back to {}", NewsletterProvider::default());
                NewsletterProvider::default()
            }),
            None => NewsletterProvider::default(),
        };
        let newsletter = NewsletterConfig {
            provider,
            formspree_endpoint: get("FORMSPREE_ENDPOINT"),
            emailjs_service_id: get("EMAILJS_SERVICE_ID"),
            emailjs_template_id: get("EMAILJS_TEMPLATE_ID"),
            emailjs_public_key: get("EMAILJS_PUBLIC_KEY"),
            emailjs_api_base: get("EMAILJS_API_BASE")
                .unwrap_or_else(|| DEFAULT_EMAILJS_API_BASE.to_string()),
            notify_email: get("NEWSLETTER_NOTIFY_EMAIL")
                .unwrap_or_else(|| DEFAULT_NOTIFY_EMAIL.to_string()),
            netlify_site_url: get("NETLIFY_SITE_URL"),
        };

        let session_ttl = match get("ADMIN_SESSION_TTL_SECS") {
            Some(raw) => Duration::from_secs(
                raw.parse::<u64>()
                    .with_context(|| format!("invalid ADMIN_SESSION_TTL_SECS `{raw}`"))?,
            ),
            None => Duration::from_secs(DEFAULT_SESSION_TTL_SECS),
        };
        let session_secret = get("ADMIN_SESSION_SECRET").unwrap_or_else(|| {
            tracing::warn!("ADMIN_SESSION_SECRET not set; admin sessions end on restart");
            ephemeral_secret()
        });
        let password_sha256 = get("ADMIN_PASSWORD_SHA256").map(|value| value.to_ascii_lowercase());
        if password_sha256.is_none() {
            tracing::warn!("ADMIN_PASSWORD_SHA256 not set; admin login disabled");
        }
        let admin = AdminAuthConfig {
            email: get("ADMIN_EMAIL").unwrap_or_else(|| DEFAULT_ADMIN_EMAIL.to_string()),
            password_salt: get("ADMIN_PASSWORD_SALT").unwrap_or_default(),
            password_sha256,
            session_secret,
            session_ttl,
        };

        Ok(Self {
            bind_addr,
            port,
            newsletter,
            admin,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn ephemeral_secret() -> String {
    hex::encode(rand::random::<[u8; 32]>())
}

fn normalize_optional_string(value: Option<String>) -> Option<String> {
    value
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, time::Duration};

    use times_of_fashion_shared::newsletter::NewsletterProvider;

    use super::AppConfig;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
        let vars: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]).expect("defaults are valid");
        assert_eq!(config.listen_addr(), "0.0.0.0:3000");
        assert_eq!(config.newsletter.provider, NewsletterProvider::Formspree);
        assert!(config.newsletter.formspree_endpoint.is_none());
        assert!(config.admin.password_sha256.is_none());
        assert_eq!(config.admin.session_ttl, Duration::from_secs(8 * 60 * 60));
        assert!(!config.admin.session_secret.is_empty());
    }

    #[test]
    fn generated_session_secrets_are_random_256_bit_keys() {
        let first = config_from(&[]).expect("defaults are valid").admin.session_secret;
        let second = config_from(&[]).expect("defaults are valid").admin.session_secret;
        assert_eq!(first.len(), 64);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(first, second);
    }

    #[test]
    fn configured_session_secret_is_used_verbatim() {
        let config = config_from(&[("ADMIN_SESSION_SECRET", " s3cret ")]).expect("valid config");
        assert_eq!(config.admin.session_secret, "s3cret");
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = config_from(&[("FORMSPREE_ENDPOINT", "   "), ("PORT", " 8080 ")])
            .expect("valid config");
        assert!(config.newsletter.formspree_endpoint.is_none());
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn unknown_provider_falls_back_to_default() {
        let config = config_from(&[("NEWSLETTER_PROVIDER", "mailchimp")]).expect("valid config");
        assert_eq!(config.newsletter.provider, NewsletterProvider::Formspree);

        let config = config_from(&[("NEWSLETTER_PROVIDER", "Netlify")]).expect("valid config");
        assert_eq!(config.newsletter.provider, NewsletterProvider::Netlify);
    }

    #[test]
    fn invalid_numbers_are_rejected() {
        assert!(config_from(&[("PORT", "http")]).is_err());
        assert!(config_from(&[("ADMIN_SESSION_TTL_SECS", "-1")]).is_err());
    }
}
