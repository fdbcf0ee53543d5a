use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use times_of_fashion_shared::{
    models::{
        AdminSettings, BlogPost, BlogPostPatch, NewBlogPost, NewsletterSubscription, SiteAnalytics,
        SubscriptionStatus,
    },
    newsletter::{NewsletterSignup, SubscribeOutcome},
};

use crate::{config::API_BASE, session::AdminSession};

const NETWORK_FAILURE: &str = "Network error. Please try again later.";

/// Failure of an admin API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminApiError {
    /// Missing, invalid or expired session; the caller should log out.
    Unauthorized,
    Other(String),
}

impl std::fmt::Display for AdminApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdminApiError::Unauthorized => f.write_str("Admin session expired"),
            AdminApiError::Other(message) => f.write_str(message),
        }
    }
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct CreatedResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct PostListResponse {
    posts: Vec<BlogPost>,
}

#[derive(Debug, Deserialize)]
struct SubscriptionListResponse {
    subscriptions: Vec<NewsletterSubscription>,
}

#[derive(Debug, Deserialize)]
struct SettingsResponse {
    settings: Option<AdminSettings>,
}

/// Relays a signup through the backend. Never fails: transport problems come
/// back as an unsuccessful outcome.
pub async fn subscribe_newsletter(signup: &NewsletterSignup) -> SubscribeOutcome {
    let url = format!("{}/newsletter/subscribe", API_BASE);
    let response = match Request::post(&url).json(signup) {
        Ok(request) => request.send().await,
        Err(e) => {
            web_sys::console::error_1(&format!("Serialize error: {:?}", e).into());
            return SubscribeOutcome::failure(NETWORK_FAILURE);
        },
    };

    match response {
        Ok(response) if response.ok() => response
            .json::<SubscribeOutcome>()
            .await
            .unwrap_or_else(|e| {
                web_sys::console::error_1(&format!("Parse error: {:?}", e).into());
                SubscribeOutcome::failure(NETWORK_FAILURE)
            }),
        Ok(response) => {
            web_sys::console::error_1(&format!("HTTP error: {}", response.status()).into());
            SubscribeOutcome::failure(NETWORK_FAILURE)
        },
        Err(e) => {
            web_sys::console::error_1(&format!("Network error: {:?}", e).into());
            SubscribeOutcome::failure(NETWORK_FAILURE)
        },
    }
}

pub async fn admin_login(email: &str, password: &str) -> Result<AdminSession, AdminApiError> {
    let url = format!("{}/admin/login", API_BASE);
    let response = Request::post(&url)
        .json(&LoginRequest {
            email,
            password,
        })
        .map_err(|e| AdminApiError::Other(format!("Serialize error: {:?}", e)))?
        .send()
        .await
        .map_err(|e| AdminApiError::Other(format!("Network error: {:?}", e)))?;
    parse_json(response).await
}

pub async fn fetch_admin_posts(session: &AdminSession) -> Result<Vec<BlogPost>, AdminApiError> {
    let url = format!("{}/admin/posts?limit=50&order_by=created_at", API_BASE);
    let response = send(authorized(Request::get(&url), session)).await?;
    parse_json::<PostListResponse>(response).await.map(|body| body.posts)
}

pub async fn create_admin_post(
    session: &AdminSession,
    post: &NewBlogPost,
) -> Result<String, AdminApiError> {
    let url = format!("{}/admin/posts", API_BASE);
    let response = send_json(authorized(Request::post(&url), session), post).await?;
    parse_json::<CreatedResponse>(response).await.map(|body| body.id)
}

pub async fn update_admin_post(
    session: &AdminSession,
    id: &str,
    patch: &BlogPostPatch,
) -> Result<(), AdminApiError> {
    let url = format!("{}/admin/posts/{}", API_BASE, id);
    let response = send_json(authorized(Request::put(&url), session), patch).await?;
    expect_success(&response)
}

pub async fn delete_admin_post(session: &AdminSession, id: &str) -> Result<(), AdminApiError> {
    let url = format!("{}/admin/posts/{}", API_BASE, id);
    let response = send(authorized(Request::delete(&url), session)).await?;
    expect_success(&response)
}

pub async fn fetch_admin_subscriptions(
    session: &AdminSession,
    status: Option<SubscriptionStatus>,
) -> Result<Vec<NewsletterSubscription>, AdminApiError> {
    let mut url = format!("{}/admin/subscriptions", API_BASE);
    if let Some(status) = status {
        url.push_str(&format!("?status={}", status.as_str()));
    }
    let response = send(authorized(Request::get(&url), session)).await?;
    parse_json::<SubscriptionListResponse>(response)
        .await
        .map(|body| body.subscriptions)
}

pub async fn fetch_admin_analytics(session: &AdminSession) -> Result<SiteAnalytics, AdminApiError> {
    let url = format!("{}/admin/analytics", API_BASE);
    let response = send(authorized(Request::get(&url), session)).await?;
    parse_json(response).await
}

pub async fn fetch_admin_settings(
    session: &AdminSession,
) -> Result<Option<AdminSettings>, AdminApiError> {
    let url = format!("{}/admin/settings", API_BASE);
    let response = send(authorized(Request::get(&url), session)).await?;
    parse_json::<SettingsResponse>(response).await.map(|body| body.settings)
}

pub async fn update_admin_settings(
    session: &AdminSession,
    settings: &AdminSettings,
) -> Result<(), AdminApiError> {
    let url = format!("{}/admin/settings", API_BASE);
    let response = send_json(authorized(Request::put(&url), session), settings).await?;
    expect_success(&response)
}

fn authorized(builder: RequestBuilder, session: &AdminSession) -> RequestBuilder {
    builder.header("Authorization", &format!("Bearer {}", session.token))
}

async fn send(builder: RequestBuilder) -> Result<Response, AdminApiError> {
    builder
        .send()
        .await
        .map_err(|e| AdminApiError::Other(format!("Network error: {:?}", e)))
}

async fn send_json<T: Serialize>(
    builder: RequestBuilder,
    body: &T,
) -> Result<Response, AdminApiError> {
    builder
        .json(body)
        .map_err(|e| AdminApiError::Other(format!("Serialize error: {:?}", e)))?
        .send()
        .await
        .map_err(|e| AdminApiError::Other(format!("Network error: {:?}", e)))
}

fn expect_success(response: &Response) -> Result<(), AdminApiError> {
    match response.status() {
        401 => Err(AdminApiError::Unauthorized),
        _ if response.ok() => Ok(()),
        status => Err(AdminApiError::Other(format!("HTTP error: {}", status))),
    }
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, AdminApiError> {
    expect_success(&response)?;
    response
        .json()
        .await
        .map_err(|e| AdminApiError::Other(format!("Parse error: {:?}", e)))
}
