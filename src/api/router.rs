use axum::{
    routing::{get, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::health;
use super::state::AppState;
use super::users;

/// Create the full router with application state.
///
/// Method+path table:
/// - GET    /users            list users
/// - POST   /users            create user
/// - GET    /user/{user_id}   get user by ID
/// - PUT    /users/{user_id}  update user
/// - DELETE /users/{user_id}  delete user
/// - GET    /health           liveness
///
/// CORS is unrestricted.
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/user/{user_id}", get(users::get_user))
        .route(
            "/users/{user_id}",
            put(users::update_user).delete(users::delete_user),
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
