use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{auth, handlers, state::AppState};

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let admin = Router::new()
        .route("/posts", get(handlers::admin_list_posts).post(handlers::admin_create_post))
        .route(
            "/posts/:id",
            get(handlers::admin_get_post)
                .put(handlers::admin_update_post)
                .delete(handlers::admin_delete_post),
        )
        .route("/subscriptions", get(handlers::admin_list_subscriptions))
        .route("/analytics", get(handlers::admin_analytics))
        .route(
            "/settings",
            get(handlers::admin_get_settings).put(handlers::admin_update_settings),
        )
        .route("/images", post(handlers::admin_upload_image))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_admin))
        .route("/login", post(handlers::admin_login));

    Router::new()
        .route("/api/articles", get(handlers::list_articles))
        .route("/api/articles/:id", get(handlers::get_article))
        .route("/api/categories", get(handlers::list_categories))
        .route("/api/categories/:category/articles", get(handlers::list_category_articles))
        .route("/api/newsletter/subscribe", post(handlers::subscribe_newsletter))
        .nest("/api/admin", admin)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
