use anyhow::{Context, Result};
use serde_json::json;
use times_of_fashion_shared::newsletter::{NewsletterProvider, NewsletterSignup, SubscribeOutcome};
use url::Url;

use crate::config::NewsletterConfig;

const NOT_CONFIGURED: &str = "Newsletter service is not configured.";
const NETWORK_ERROR: &str = "Network error. Please try again later.";
const REJECTED: &str = "Subscription failed. Please try again.";
const EMAILJS_FAILED: &str = "Subscription failed. Please try again later.";
const EMAILJS_SEND_PATH: &str = "/api/v1.0/email/send";
const ANONYMOUS: &str = "Anonymous";

/// Forwards a signup to the configured provider with a single HTTP call.
///
/// No retries and no deduplication: a double submit reaches the provider
/// twice.
#[derive(Clone)]
pub struct NewsletterDispatch {
    client: reqwest::Client,
    config: NewsletterConfig,
}

impl NewsletterDispatch {
    pub fn new(config: NewsletterConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("times-of-fashion/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build newsletter http client")?;
        Ok(Self {
            client,
            config,
        })
    }

    pub fn provider(&self) -> NewsletterProvider {
        self.config.provider
    }

    /// Never fails: configuration, transport and provider errors all come
    /// back as unsuccessful outcomes.
    pub async fn subscribe(&self, signup: &NewsletterSignup) -> SubscribeOutcome {
        let provider = self.config.provider;
        let attempt = match provider {
            NewsletterProvider::EmailJs => self.subscribe_emailjs(signup).await,
            NewsletterProvider::Formspree => self.subscribe_formspree(signup).await,
            NewsletterProvider::Netlify => self.subscribe_netlify(signup).await,
        };
        match attempt {
            Ok(outcome) => {
                tracing::info!(%provider, success = outcome.success, "newsletter signup dispatched");
                outcome
            },
            Err(err) => {
                tracing::error!(%provider, "newsletter provider misconfigured: {err:#}");
                SubscribeOutcome::failure(NOT_CONFIGURED)
            },
        }
    }

    async fn subscribe_emailjs(&self, signup: &NewsletterSignup) -> Result<SubscribeOutcome> {
        let service_id = required(&self.config.emailjs_service_id, "EMAILJS_SERVICE_ID")?;
        let template_id = required(&self.config.emailjs_template_id, "EMAILJS_TEMPLATE_ID")?;
        let public_key = required(&self.config.emailjs_public_key, "EMAILJS_PUBLIC_KEY")?;
        let endpoint = Url::parse(&self.config.emailjs_api_base)
            .and_then(|base| base.join(EMAILJS_SEND_PATH))
            .with_context(|| format!("invalid EMAILJS_API_BASE `{}`", self.config.emailjs_api_base))?;

        let from_name = match signup.name_or_empty() {
            "" => "Newsletter Subscriber",
            name => name,
        };
        let body = json!({
            "service_id": service_id,
            "template_id": template_id,
            "user_id": public_key,
            "template_params": {
                "to_email": self.config.notify_email,
                "from_email": signup.email,
                "from_name": from_name,
                "message": format!(
                    "New newsletter subscription from {} ({})",
                    display_name(signup),
                    signup.email
                ),
                "reply_to": signup.email,
            },
        });

        let outcome = match self.client.post(endpoint).json(&body).send().await {
            Ok(response) if response.status().is_success() => SubscribeOutcome::success(
                "Successfully subscribed! You'll receive our weekly fashion newsletter.",
            ),
            Ok(response) => {
                tracing::warn!(status = response.status().as_u16(), "emailjs rejected signup");
                SubscribeOutcome::failure(EMAILJS_FAILED)
            },
            Err(err) => {
                tracing::warn!("emailjs request failed: {err}");
                SubscribeOutcome::failure(EMAILJS_FAILED)
            },
        };
        Ok(outcome)
    }

    async fn subscribe_formspree(&self, signup: &NewsletterSignup) -> Result<SubscribeOutcome> {
        let endpoint = required(&self.config.formspree_endpoint, "FORMSPREE_ENDPOINT")?;
        let endpoint =
            Url::parse(endpoint).with_context(|| format!("invalid FORMSPREE_ENDPOINT `{endpoint}`"))?;

        let body = json!({
            "email": signup.email,
            "name": signup.name_or_empty(),
            "type": "newsletter_subscription",
            "source": signup.source_or_default(),
            "message": format!("Newsletter subscription request from {}", display_name(signup)),
        });

        let outcome = match self.client.post(endpoint).json(&body).send().await {
            Ok(response) if response.status().is_success() => {
                SubscribeOutcome::success("Successfully subscribed! Check your email for confirmation.")
            },
            Ok(response) => {
                tracing::warn!(status = response.status().as_u16(), "formspree rejected signup");
                SubscribeOutcome::failure(REJECTED)
            },
            Err(err) => {
                tracing::warn!("formspree request failed: {err}");
                SubscribeOutcome::failure(NETWORK_ERROR)
            },
        };
        Ok(outcome)
    }

    async fn subscribe_netlify(&self, signup: &NewsletterSignup) -> Result<SubscribeOutcome> {
        let site = required(&self.config.netlify_site_url, "NETLIFY_SITE_URL")?;
        let endpoint = Url::parse(site)
            .and_then(|base| base.join("/"))
            .with_context(|| format!("invalid NETLIFY_SITE_URL `{site}`"))?;

        let form = [
            ("form-name", "newsletter"),
            ("email", signup.email.as_str()),
            ("name", signup.name_or_empty()),
            ("source", signup.source_or_default()),
        ];

        let outcome = match self.client.post(endpoint).form(&form).send().await {
            Ok(response) if response.status().is_success() => {
                SubscribeOutcome::success("Successfully subscribed to our newsletter!")
            },
            Ok(response) => {
                tracing::warn!(status = response.status().as_u16(), "netlify rejected signup");
                SubscribeOutcome::failure(REJECTED)
            },
            Err(err) => {
                tracing::warn!("netlify request failed: {err}");
                SubscribeOutcome::failure(NETWORK_ERROR)
            },
        };
        Ok(outcome)
    }
}

fn required<'a>(value: &'a Option<String>, key: &str) -> Result<&'a str> {
    value
        .as_deref()
        .with_context(|| format!("{key} is required for this newsletter provider"))
}

fn display_name(signup: &NewsletterSignup) -> &str {
    match signup.name_or_empty() {
        "" => ANONYMOUS,
        name => name,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use times_of_fashion_shared::newsletter::{NewsletterProvider, NewsletterSignup};
    use wiremock::{
        matchers::{body_json, body_string_contains, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use super::{NewsletterDispatch, NETWORK_ERROR, NOT_CONFIGURED, REJECTED};
    use crate::config::NewsletterConfig;

    // Nothing listens on the discard port in the test environment.
    const UNREACHABLE: &str = "http://127.0.0.1:9";

    fn signup() -> NewsletterSignup {
        NewsletterSignup {
            email: "reader@example.com".to_string(),
            first_name: Some("Asha".to_string()),
            source: Some("website-newsletter".to_string()),
        }
    }

    fn dispatch(config: NewsletterConfig) -> NewsletterDispatch {
        NewsletterDispatch::new(config).expect("client builds")
    }

    fn formspree(endpoint: String) -> NewsletterConfig {
        NewsletterConfig {
            provider: NewsletterProvider::Formspree,
            formspree_endpoint: Some(endpoint),
            ..NewsletterConfig::default()
        }
    }

    #[tokio::test]
    async fn formspree_success_posts_json_once() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/f/newsletter"))
            .and(body_json(json!({
                "email": "reader@example.com",
                "name": "Asha",
                "type": "newsletter_subscription",
                "source": "website-newsletter",
                "message": "Newsletter subscription request from Asha",
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let outcome = dispatch(formspree(format!("{}/f/newsletter", server.uri())))
            .subscribe(&signup())
            .await;
        assert!(outcome.success);
        assert!(outcome.message.contains("Check your email"));
    }

    #[tokio::test]
    async fn formspree_non_2xx_is_a_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(422))
            .expect(1)
            .mount(&server)
            .await;

        let outcome = dispatch(formspree(server.uri())).subscribe(&signup()).await;
        assert!(!outcome.success);
        assert_eq!(outcome.message, REJECTED);
    }

    #[tokio::test]
    async fn unreachable_provider_is_a_failure_not_an_error() {
        let outcome = dispatch(formspree(UNREACHABLE.to_string())).subscribe(&signup()).await;
        assert!(!outcome.success);
        assert_eq!(outcome.message, NETWORK_ERROR);
    }

    #[tokio::test]
    async fn missing_keys_fail_at_subscribe_time() {
        let config = NewsletterConfig {
            provider: NewsletterProvider::EmailJs,
            emailjs_service_id: Some("service".to_string()),
            emailjs_api_base: UNREACHABLE.to_string(),
            ..NewsletterConfig::default()
        };
        let outcome = dispatch(config).subscribe(&signup()).await;
        assert!(!outcome.success);
        assert_eq!(outcome.message, NOT_CONFIGURED);

        let outcome = dispatch(NewsletterConfig::default()).subscribe(&signup()).await;
        assert_eq!(outcome.message, NOT_CONFIGURED);
    }

    #[tokio::test]
    async fn emailjs_sends_template_params() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1.0/email/send"))
            .and(body_json(json!({
                "service_id": "svc",
                "template_id": "tpl",
                "user_id": "pub",
                "template_params": {
                    "to_email": "desk@example.com",
                    "from_email": "reader@example.com",
                    "from_name": "Newsletter Subscriber",
                    "message": "New newsletter subscription from Anonymous (reader@example.com)",
                    "reply_to": "reader@example.com",
                },
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
            .expect(1)
            .mount(&server)
            .await;

        let config = NewsletterConfig {
            provider: NewsletterProvider::EmailJs,
            emailjs_service_id: Some("svc".to_string()),
            emailjs_template_id: Some("tpl".to_string()),
            emailjs_public_key: Some("pub".to_string()),
            emailjs_api_base: server.uri(),
            notify_email: "desk@example.com".to_string(),
            ..NewsletterConfig::default()
        };
        let anonymous = NewsletterSignup {
            first_name: None,
            ..signup()
        };
        let outcome = dispatch(config).subscribe(&anonymous).await;
        assert!(outcome.success);
    }

    #[tokio::test]
    async fn netlify_posts_form_to_site_root() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string_contains("form-name=newsletter"))
            .and(body_string_contains("email=reader%40example.com"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let config = NewsletterConfig {
            provider: NewsletterProvider::Netlify,
            netlify_site_url: Some(format!("{}/newsletter", server.uri())),
            ..NewsletterConfig::default()
        };
        let outcome = dispatch(config).subscribe(&signup()).await;
        assert!(outcome.success);
        assert_eq!(outcome.message, "Successfully subscribed to our newsletter!");
    }
}
