mod handlers;
mod middleware;

use std::sync::Arc;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::store::SessionRegistry;

pub use middleware::SessionId;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionRegistry,
    pub config: Arc<AppConfig>,
}

pub fn create_router(sessions: SessionRegistry, config: AppConfig) -> Router {
    let state = AppState {
        sessions,
        config: Arc::new(config),
    };

    let lists = Router::new()
        .route("/", get(handlers::root))
        // Lists
        .route("/lists", get(handlers::view_all_lists))
        .route("/lists", post(handlers::create_list))
        .route("/lists/new", get(handlers::view_new_list_form))
        .route("/lists/{list_id}", get(handlers::view_list))
        .route("/lists/{list_id}", post(handlers::rename_list))
        .route("/lists/{list_id}/edit", get(handlers::view_edit_list_form))
        .route("/lists/{list_id}/destroy", post(handlers::delete_list))
        // Todos
        .route("/lists/{list_id}/todos", post(handlers::add_todo))
        .route(
            "/lists/{list_id}/todos/complete_all",
            post(handlers::complete_all_todos),
        )
        .route(
            "/lists/{list_id}/todos/{todo_id}/destroy",
            post(handlers::delete_todo),
        )
        .route(
            "/lists/{list_id}/todos/{todo_id}/edit",
            post(handlers::set_todo_completed),
        )
        .route_layer(from_fn_with_state(
            state.clone(),
            middleware::session_middleware,
        ));

    Router::new()
        .merge(lists)
        // Health
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn health_does_not_create_sessions() {
        let sessions = SessionRegistry::new();
        let app = create_router(sessions.clone(), AppConfig::local());

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        assert!(sessions.is_empty());
    }

    #[tokio::test]
    async fn root_redirects_to_lists() {
        let app = create_router(SessionRegistry::new(), AppConfig::local());

        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/lists");
    }
}
