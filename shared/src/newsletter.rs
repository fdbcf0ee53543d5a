//! Newsletter signup wire types and the client-side subscription log.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Local storage key of the client-side subscription log.
pub const LOCAL_SUBSCRIPTIONS_KEY: &str = "newsletter_subscriptions";
/// Source recorded when the signup form does not name one.
pub const DEFAULT_SOURCE: &str = "website";
/// Source used by the site's newsletter forms.
pub const NEWSLETTER_FORM_SOURCE: &str = "website-newsletter";

/// Payload of a newsletter signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterSignup {
    /// Subscriber address.
    pub email: String,
    /// Optional given name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Where the signup happened.
    #[serde(default)]
    pub source: Option<String>,
}

impl NewsletterSignup {
    /// Given name, or an empty string.
    pub fn name_or_empty(&self) -> &str {
        self.first_name.as_deref().map(str::trim).unwrap_or_default()
    }

    /// Source, or [`DEFAULT_SOURCE`].
    pub fn source_or_default(&self) -> &str {
        self.source
            .as_deref()
            .map(str::trim)
            .filter(|source| !source.is_empty())
            .unwrap_or(DEFAULT_SOURCE)
    }
}

/// Result of a signup attempt. Failures are values, never errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeOutcome {
    /// Whether the provider accepted the signup.
    pub success: bool,
    /// User-facing message.
    pub message: String,
}

impl SubscribeOutcome {
    /// A successful outcome.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// A failed outcome.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Third-party service that records signups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsletterProvider {
    /// Transactional email API.
    EmailJs,
    /// Form relay.
    #[default]
    Formspree,
    /// Static host form capture.
    Netlify,
}

impl NewsletterProvider {
    /// Configuration name of the provider.
    pub fn as_str(self) -> &'static str {
        match self {
            NewsletterProvider::EmailJs => "emailjs",
            NewsletterProvider::Formspree => "formspree",
            NewsletterProvider::Netlify => "netlify",
        }
    }
}

impl fmt::Display for NewsletterProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NewsletterProvider {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "emailjs" => Ok(NewsletterProvider::EmailJs),
            "formspree" => Ok(NewsletterProvider::Formspree),
            "netlify" => Ok(NewsletterProvider::Netlify),
            other => anyhow::bail!("unsupported newsletter provider `{other}`"),
        }
    }
}

/// Entry of the client-side subscription log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSubscription {
    /// Subscriber address.
    pub email: String,
    /// Given name, if provided.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Signup origin, if provided.
    #[serde(default)]
    pub source: Option<String>,
    /// ISO-8601 time of the attempt.
    pub timestamp: String,
    /// Millisecond timestamp rendered as a string.
    pub id: String,
}

impl StoredSubscription {
    /// Log entry for `signup`, stamped with the given times.
    pub fn new(signup: &NewsletterSignup, timestamp: String, now_ms: u64) -> Self {
        Self {
            email: signup.email.clone(),
            first_name: signup.first_name.clone(),
            source: signup.source.clone(),
            timestamp,
            id: now_ms.to_string(),
        }
    }
}

/// Decodes the stored log. Missing or unreadable data reads as empty.
pub fn decode_subscription_log(raw: Option<&str>) -> Vec<serde_json::Value> {
    raw.and_then(|raw| serde_json::from_str::<Vec<serde_json::Value>>(raw).ok())
        .unwrap_or_default()
}

/// Appends `entry` to the stored log and returns the new serialized log.
///
/// The log is schemaless: existing entries are kept as-is, duplicates
/// included.
pub fn append_subscription_log(
    raw: Option<&str>,
    entry: &StoredSubscription,
) -> anyhow::Result<String> {
    let mut entries = decode_subscription_log(raw);
    entries.push(serde_json::to_value(entry)?);
    Ok(serde_json::to_string(&entries)?)
}

#[cfg(test)]
mod tests {
    use super::{
        append_subscription_log, decode_subscription_log, NewsletterProvider, NewsletterSignup,
        StoredSubscription, DEFAULT_SOURCE,
    };

    fn signup(first_name: Option<&str>, source: Option<&str>) -> NewsletterSignup {
        NewsletterSignup {
            email: "reader@example.com".to_string(),
            first_name: first_name.map(str::to_string),
            source: source.map(str::to_string),
        }
    }

    #[test]
    fn provider_parses_case_insensitively() {
        assert_eq!("EmailJS".parse::<NewsletterProvider>().ok(), Some(NewsletterProvider::EmailJs));
        assert_eq!(" netlify ".parse::<NewsletterProvider>().ok(), Some(NewsletterProvider::Netlify));
        assert!("mailchimp".parse::<NewsletterProvider>().is_err());
        assert_eq!(NewsletterProvider::default(), NewsletterProvider::Formspree);
    }

    #[test]
    fn signup_defaults() {
        let bare = signup(None, Some("  "));
        assert_eq!(bare.name_or_empty(), "");
        assert_eq!(bare.source_or_default(), DEFAULT_SOURCE);

        let named = signup(Some("Asha"), Some("footer"));
        assert_eq!(named.name_or_empty(), "Asha");
        assert_eq!(named.source_or_default(), "footer");
    }

    #[test]
    fn append_keeps_existing_entries_and_duplicates() {
        let entry = StoredSubscription::new(
            &signup(Some("Asha"), None),
            "2024-08-30T10:00:00.000Z".to_string(),
            1_725_012_000_000,
        );
        let once = append_subscription_log(None, &entry).expect("serializes");
        let twice = append_subscription_log(Some(&once), &entry).expect("serializes");
        let entries = decode_subscription_log(Some(&twice));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], entries[1]);
        assert_eq!(entries[1]["id"], "1725012000000");
        assert_eq!(entries[1]["email"], "reader@example.com");
    }

    #[test]
    fn append_replaces_unreadable_log() {
        let entry = StoredSubscription::new(&signup(None, None), "t".to_string(), 1);
        let raw = append_subscription_log(Some("{not json"), &entry).expect("serializes");
        assert_eq!(decode_subscription_log(Some(&raw)).len(), 1);

        let foreign = r#"[{"anything":"goes"}]"#;
        let raw = append_subscription_log(Some(foreign), &entry).expect("serializes");
        assert_eq!(decode_subscription_log(Some(&raw)).len(), 2);
    }
}
