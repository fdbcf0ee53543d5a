use axum::{
    body::Bytes,
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use times_of_fashion_shared::{
    filter::related_articles,
    models::{
        AdminSettings, BlogPost, BlogPostPatch, BlogPostQuery, ContentPreferences, NewBlogPost,
        NewSubscription, NewsletterSubscription, SiteAnalytics, SubscriptionStatus,
    },
    newsletter::{NewsletterSignup, SubscribeOutcome, NEWSLETTER_FORM_SOURCE},
    Article, ArticleListItem, Category,
};

use crate::{
    auth::{AdminIdentity, AdminSession, LoginRequest},
    state::AppState,
};

const RELATED_LIMIT: usize = 3;

type ApiResult<T> = Result<T, (StatusCode, Json<ErrorResponse>)>;

#[derive(Debug, Deserialize)]
pub struct ArticleQuery {
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ArticleListResponse {
    pub articles: Vec<ArticleListItem>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct ArticleDetailResponse {
    #[serde(flatten)]
    pub article: Article,
    pub category: Category,
    pub related: Vec<ArticleListItem>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

#[derive(Debug, Serialize)]
pub struct CategoryInfo {
    pub name: String,
    pub label: String,
    pub title: String,
    pub count: usize,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<CategoryInfo>,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct PostListResponse {
    pub posts: Vec<BlogPost>,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
pub struct SubscriptionQuery {
    #[serde(default)]
    pub status: Option<SubscriptionStatus>,
}

#[derive(Debug, Serialize)]
pub struct SubscriptionListResponse {
    pub subscriptions: Vec<NewsletterSubscription>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub settings: Option<AdminSettings>,
}

#[derive(Debug, Deserialize)]
pub struct UploadQuery {
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}

pub async fn list_articles(
    State(state): State<AppState>,
    Query(query): Query<ArticleQuery>,
) -> Json<ArticleListResponse> {
    let store = state.store();
    let items = match query.category.as_deref().and_then(Category::parse) {
        Some(category) => list_items(category, store.group(category)),
        None => store
            .iter()
            .map(|(category, article)| ArticleListItem::from_article(article, category))
            .collect(),
    };
    Json(list_response(items))
}

pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ArticleDetailResponse>> {
    let Some((category, article)) = state.store().find_article(&id) else {
        return Err(error_response(StatusCode::NOT_FOUND, "Article not found"));
    };

    let related = related_articles(state.store(), &id, RELATED_LIMIT)
        .into_iter()
        .map(|item| ArticleListItem::from_article(item, category))
        .collect();
    Ok(Json(ArticleDetailResponse {
        article: article.clone(),
        category,
        related,
    }))
}

pub async fn list_categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    let categories = state
        .store()
        .category_counts()
        .into_iter()
        .map(|(category, count)| CategoryInfo {
            name: category.slug().to_string(),
            label: category.label().to_string(),
            title: category.page_title().to_string(),
            count,
            description: category.description().to_string(),
        })
        .collect();
    Json(CategoriesResponse {
        categories,
    })
}

/// Unknown categories yield an empty list rather than a 404.
pub async fn list_category_articles(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Json<ArticleListResponse> {
    let items = match Category::parse(&category) {
        Some(category) => list_items(category, state.store().group(category)),
        None => Vec::new(),
    };
    Json(list_response(items))
}

/// Always answers 200: provider problems come back as `success: false`.
pub async fn subscribe_newsletter(
    State(state): State<AppState>,
    Json(signup): Json<NewsletterSignup>,
) -> Json<SubscribeOutcome> {
    if signup.email.trim().is_empty() {
        return Json(SubscribeOutcome::failure("Please enter your email address."));
    }

    let record = NewSubscription {
        email: signup.email.trim().to_string(),
        first_name: signup.first_name.clone(),
        last_name: None,
        source: NEWSLETTER_FORM_SOURCE.to_string(),
        status: SubscriptionStatus::Active,
        preferences: ContentPreferences::default(),
    };
    if let Err(err) = state.backend().add_newsletter_subscription(record).await {
        tracing::warn!("failed to record newsletter subscription: {err:#}");
    }

    Json(state.newsletter().subscribe(&signup).await)
}

pub async fn admin_login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<AdminSession>> {
    let now_ms = chrono::Utc::now().timestamp_millis();
    match state.auth().login(&request.email, &request.password, now_ms) {
        Some(session) => {
            tracing::info!(email = %session.email, "admin logged in");
            Ok(Json(session))
        },
        None => {
            tracing::warn!("admin login rejected");
            Err(error_response(StatusCode::UNAUTHORIZED, "Invalid email or password"))
        },
    }
}

pub async fn admin_list_posts(
    State(state): State<AppState>,
    Query(query): Query<BlogPostQuery>,
) -> ApiResult<Json<PostListResponse>> {
    let posts = state
        .backend()
        .get_blog_posts(query)
        .await
        .map_err(|e| internal_error("Failed to fetch posts", e))?;
    let total = posts.len();
    Ok(Json(PostListResponse {
        posts,
        total,
    }))
}

pub async fn admin_create_post(
    State(state): State<AppState>,
    Json(post): Json<NewBlogPost>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    if post.title.trim().is_empty() || post.content.trim().is_empty() {
        return Err(error_response(StatusCode::BAD_REQUEST, "Title and content are required"));
    }
    let id = state
        .backend()
        .create_blog_post(post)
        .await
        .map_err(|e| internal_error("Failed to create post", e))?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
        }),
    ))
}

pub async fn admin_get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<BlogPost>> {
    state
        .backend()
        .get_blog_post(&id)
        .await
        .map_err(|e| internal_error("Failed to fetch post", e))?
        .map(Json)
        .ok_or_else(|| error_response(StatusCode::NOT_FOUND, "Post not found"))
}

pub async fn admin_update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<BlogPostPatch>,
) -> ApiResult<StatusCode> {
    state
        .backend()
        .update_blog_post(&id, patch)
        .await
        .map_err(|e| internal_error("Failed to update post", e))?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn admin_delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state
        .backend()
        .delete_blog_post(&id)
        .await
        .map_err(|e| internal_error("Failed to delete post", e))?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn admin_list_subscriptions(
    State(state): State<AppState>,
    Query(query): Query<SubscriptionQuery>,
) -> ApiResult<Json<SubscriptionListResponse>> {
    let subscriptions = state
        .backend()
        .get_newsletter_subscriptions(query.status)
        .await
        .map_err(|e| internal_error("Failed to fetch subscriptions", e))?;
    let total = subscriptions.len();
    Ok(Json(SubscriptionListResponse {
        subscriptions,
        total,
    }))
}

pub async fn admin_analytics(State(state): State<AppState>) -> ApiResult<Json<SiteAnalytics>> {
    state
        .backend()
        .get_analytics()
        .await
        .map(Json)
        .map_err(|e| internal_error("Failed to fetch analytics", e))
}

pub async fn admin_get_settings(
    State(state): State<AppState>,
) -> ApiResult<Json<SettingsResponse>> {
    let settings = state
        .backend()
        .get_admin_settings()
        .await
        .map_err(|e| internal_error("Failed to fetch settings", e))?;
    Ok(Json(SettingsResponse {
        settings,
    }))
}

pub async fn admin_update_settings(
    State(state): State<AppState>,
    Extension(AdminIdentity(email)): Extension<AdminIdentity>,
    Json(mut settings): Json<AdminSettings>,
) -> ApiResult<StatusCode> {
    settings.updated_at = chrono::Utc::now().timestamp_millis();
    settings.updated_by = email;
    state
        .backend()
        .update_admin_settings(settings)
        .await
        .map_err(|e| internal_error("Failed to update settings", e))?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn admin_upload_image(
    State(state): State<AppState>,
    Query(query): Query<UploadQuery>,
    body: Bytes,
) -> ApiResult<Json<UploadResponse>> {
    let path = query.path.trim();
    if path.is_empty() || body.is_empty() {
        return Err(error_response(StatusCode::BAD_REQUEST, "Image path and body are required"));
    }
    let url = state
        .backend()
        .upload_image(body.to_vec(), path)
        .await
        .map_err(|e| internal_error("Failed to upload image", e))?;
    Ok(Json(UploadResponse {
        url,
    }))
}

fn list_items(category: Category, articles: &[Article]) -> Vec<ArticleListItem> {
    articles
        .iter()
        .map(|article| ArticleListItem::from_article(article, category))
        .collect()
}

fn list_response(articles: Vec<ArticleListItem>) -> ArticleListResponse {
    let total = articles.len();
    ArticleListResponse {
        articles,
        total,
    }
}

pub fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
            code: status.as_u16(),
        }),
    )
}

fn internal_error(message: &str, err: impl std::fmt::Display) -> (StatusCode, Json<ErrorResponse>) {
    tracing::error!("{}: {}", message, err);
    error_response(StatusCode::INTERNAL_SERVER_ERROR, message)
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use times_of_fashion_shared::{
        facade::{MockContentBackend, MOCK_POST_ID},
        newsletter::NewsletterProvider,
        Article, ArticleStore, Category,
    };
    use tower::ServiceExt;
    use wiremock::{matchers::method, Mock, MockServer, ResponseTemplate};

    use crate::{
        auth::{password_digest, AdminAuth},
        config::{AdminAuthConfig, NewsletterConfig},
        newsletter::NewsletterDispatch,
        routes::create_router,
        state::AppState,
    };

    const ADMIN_EMAIL: &str = "admin@timesoffashion.com";
    const ADMIN_PASSWORD: &str = "Admin@123";

    fn app_with(store: &'static ArticleStore, newsletter: NewsletterConfig) -> Router {
        let auth = AdminAuth::new(AdminAuthConfig {
            email: ADMIN_EMAIL.to_string(),
            password_salt: "salt".to_string(),
            password_sha256: Some(password_digest("salt", ADMIN_PASSWORD)),
            session_secret: "test-secret".to_string(),
            session_ttl: Duration::from_secs(600),
        });
        let state = AppState::with_parts(
            store,
            Arc::new(MockContentBackend::new()),
            NewsletterDispatch::new(newsletter).expect("client builds"),
            auth,
        );
        create_router(state)
    }

    fn app_with_newsletter(newsletter: NewsletterConfig) -> Router {
        app_with(ArticleStore::global(), newsletter)
    }

    fn app() -> Router {
        app_with_newsletter(NewsletterConfig::default())
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.expect("router is infallible");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).expect("valid request")
    }

    fn json_request(method: Method, uri: &str, body: Value, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        builder.body(Body::from(body.to_string())).expect("valid request")
    }

    async fn login(app: Router) -> String {
        let (status, body) = send(
            app,
            json_request(
                Method::POST,
                "/api/admin/login",
                json!({"email": ADMIN_EMAIL, "password": ADMIN_PASSWORD}),
                None,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        body["token"].as_str().expect("token issued").to_string()
    }

    #[tokio::test]
    async fn listing_falls_back_to_all_articles() {
        let (status, body) = send(app(), get("/api/articles?category=unknown")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 18);

        let (_, body) = send(app(), get("/api/articles?category=Beauty")).await;
        let ids: Vec<&str> = body["articles"]
            .as_array()
            .expect("array")
            .iter()
            .filter_map(|item| item["id"].as_str())
            .collect();
        assert_eq!(ids, ["beauty-1", "beauty-2", "beauty-3"]);
        assert_eq!(body["articles"][0]["category"], "beauty");
    }

    #[tokio::test]
    async fn category_page_is_empty_for_unknown_keys() {
        let (status, body) = send(app(), get("/api/categories/streetwear/articles")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 0);

        let (_, body) = send(app(), get("/api/categories/wellness/articles")).await;
        assert_eq!(body["total"], 3);
    }

    #[tokio::test]
    async fn listings_use_group_membership_not_id_prefixes() {
        let article = ArticleStore::global().group(Category::Beauty)[0].clone();
        let store = ArticleStore::from_groups(vec![(
            Category::Fashion,
            vec![Article {
                id: "look-1".to_string(),
                ..article
            }],
        )]);
        let store: &'static ArticleStore = Box::leak(Box::new(store));
        let app = || app_with(store, NewsletterConfig::default());

        let (_, body) = send(app(), get("/api/categories/fashion/articles")).await;
        assert_eq!(body["total"], 1);
        assert_eq!(body["articles"][0]["id"], "look-1");
        assert_eq!(body["articles"][0]["category"], "fashion");

        let (_, body) = send(app(), get("/api/articles")).await;
        assert_eq!(body["total"], 1);
        assert_eq!(body["articles"][0]["category"], "fashion");

        let (_, body) = send(app(), get("/api/articles?category=fashion")).await;
        assert_eq!(body["total"], 1);
    }

    #[tokio::test]
    async fn article_detail_includes_related_and_404s() {
        let (status, body) = send(app(), get("/api/articles/fashion-2")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], "fashion-2");
        assert_eq!(body["category"], "fashion");
        let related = body["related"].as_array().expect("array");
        assert_eq!(related.len(), 2);
        assert!(related.iter().all(|item| item["id"] != "fashion-2"));

        let (status, body) = send(app(), get("/api/articles/fashion-99")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], 404);
    }

    #[tokio::test]
    async fn categories_report_counts() {
        let (_, body) = send(app(), get("/api/categories")).await;
        let categories = body["categories"].as_array().expect("array");
        assert_eq!(categories.len(), 6);
        assert_eq!(categories[0]["name"], "fashion");
        assert!(categories.iter().all(|category| category["count"] == 3));
    }

    #[tokio::test]
    async fn subscribe_reports_provider_failure_as_200() {
        let (status, body) = send(
            app(),
            json_request(
                Method::POST,
                "/api/newsletter/subscribe",
                json!({"email": "reader@example.com"}),
                None,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Newsletter service is not configured.");
    }

    #[tokio::test]
    async fn subscribe_relays_to_the_provider() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        let app = app_with_newsletter(NewsletterConfig {
            provider: NewsletterProvider::Formspree,
            formspree_endpoint: Some(server.uri()),
            ..NewsletterConfig::default()
        });

        let (status, body) = send(
            app,
            json_request(
                Method::POST,
                "/api/newsletter/subscribe",
                json!({"email": "reader@example.com", "first_name": "Asha", "source": "website-newsletter"}),
                None,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
    }

    #[tokio::test]
    async fn admin_routes_require_a_session() {
        let (status, body) = send(app(), get("/api/admin/analytics")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["code"], 401);

        let (status, _) = send(
            app(),
            json_request(
                Method::POST,
                "/api/admin/login",
                json!({"email": ADMIN_EMAIL, "password": "nope"}),
                None,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let request = Request::get("/api/admin/analytics")
            .header(header::AUTHORIZATION, "Bearer forged.token.value")
            .body(Body::empty())
            .expect("valid request");
        let (status, _) = send(app(), request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn admin_routes_reach_the_facade() {
        let app = app();
        let token = login(app.clone()).await;

        let request = Request::get("/api/admin/analytics")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .expect("valid request");
        let (status, body) = send(app.clone(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_blogs"], 0);

        let (status, body) = send(
            app.clone(),
            json_request(
                Method::POST,
                "/api/admin/posts",
                json!({"title": "Hello", "content": "Body", "author": "Times of Fashion Admin"}),
                Some(&token),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], MOCK_POST_ID);

        let (status, _) = send(
            app.clone(),
            json_request(Method::POST, "/api/admin/posts", json!({"title": "", "content": "", "author": "x"}), Some(&token)),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let request = Request::get("/api/admin/posts/mock-id")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .expect("valid request");
        let (status, _) = send(app.clone(), request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let request = Request::delete("/api/admin/posts/mock-id")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .expect("valid request");
        let (status, _) = send(app, request).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }
}
