use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_task::create_task;
use super::handlers::create_user::create_user;
use super::handlers::delete_task::delete_task;
use super::handlers::find_user_by_email::find_user_by_email;
use super::handlers::get_task::get_task;
use super::handlers::get_user::get_user;
use super::handlers::list_tasks::list_tasks;
use super::handlers::list_user_tasks::list_user_tasks;
use super::handlers::list_users::list_users;
use super::handlers::login::login;
use super::handlers::profile::profile;
use super::handlers::register::register;
use super::handlers::update_task::update_task;
use super::middleware::authenticate as auth_middleware;
use crate::domain::task::service::TaskService;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::task::PostgresTaskRepository;
use crate::outbound::repositories::user::PostgresUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<PostgresUserRepository>>,
    pub task_service: Arc<TaskService<PostgresTaskRepository>>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    user_service: Arc<UserService<PostgresUserRepository>>,
    task_service: Arc<TaskService<PostgresTaskRepository>>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        user_service,
        task_service,
        authenticator,
    };

    let public_routes = Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/user", post(create_user))
        .route("/api/user/email", post(find_user_by_email));

    let protected_routes = Router::new()
        .route("/api/auth/profile", get(profile))
        .route("/api/user", get(list_users))
        .route("/api/user/:user_id", get(get_user))
        .route("/api/task", get(list_tasks))
        .route("/api/task", post(create_task))
        .route("/api/task/user", get(list_user_tasks))
        .route("/api/task/:task_id", get(get_task))
        .route("/api/task/:task_id", put(update_task))
        .route("/api/task/:task_id", delete(delete_task))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
