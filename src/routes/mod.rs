use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use crate::auth::auth_middleware;
use crate::server::AppState;

mod auth;
mod health;
mod posts;
mod profiles;
mod users;

pub fn router(app_state: AppState) -> Router {
    let private = Router::new()
        .route("/api/auth", get(auth::me))
        .route("/api/posts", post(posts::create).get(posts::list))
        .route("/api/posts/{id}", get(posts::get).delete(posts::delete))
        .route("/api/posts/like/{id}", put(posts::like))
        .route("/api/posts/unlike/{id}", put(posts::unlike))
        .route("/api/posts/comment/{id}", post(posts::comment))
        .route(
            "/api/posts/{id}/comment/{comment_id}",
            delete(posts::delete_comment),
        )
        .route("/api/profiles/me", get(profiles::me))
        .route(
            "/api/profiles",
            post(profiles::upsert).delete(profiles::delete_account),
        )
        .route("/api/profiles/experience", put(profiles::add_experience))
        .route(
            "/api/profiles/experiences/{exp_id}",
            delete(profiles::delete_experience),
        )
        .route("/api/profiles/educations", put(profiles::add_education))
        .route(
            "/api/profiles/educations/{edu_id}",
            delete(profiles::delete_education),
        )
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    Router::new()
        // Health check endpoints (no auth required)
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route("/api/users", post(users::register))
        .route("/api/auth", post(auth::login))
        .route("/api/profiles", get(profiles::list))
        .route("/api/profiles/user/{user_id}", get(profiles::by_user))
        .merge(private)
        .with_state(app_state)
}
