//! Route definitions
//!
//! All API routes organized by domain.

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers::{activities, auth, health, members, news, testimonials, users};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(testimonial_routes())
        .merge(member_routes())
        .merge(news_routes())
        .merge(activity_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/me", get(auth::get_current_user))
        .route("/auth/users", get(users::get_all_users))
}

/// User administration routes
fn user_routes() -> Router<AppState> {
    Router::new().route("/users/:id", get(users::get_user).delete(users::delete_user))
}

/// Testimonial routes
fn testimonial_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/testimonials",
            get(testimonials::get_testimonials).post(testimonials::create_testimonial),
        )
        .route(
            "/testimonials/:id",
            put(testimonials::update_testimonial)
                .delete(testimonials::delete_testimonial),
        )
}

/// Member routes
fn member_routes() -> Router<AppState> {
    Router::new()
        .route("/members", get(members::get_members).post(members::create_member))
        .route(
            "/members/:id",
            put(members::update_member).delete(members::delete_member),
        )
}

/// News routes
fn news_routes() -> Router<AppState> {
    Router::new()
        .route("/news", post(news::create_news))
        .route("/news/:id", get(news::get_news))
}

/// Activity routes
fn activity_routes() -> Router<AppState> {
    Router::new()
        .route("/activities", post(activities::create_activity))
        .route("/activities/:id", put(activities::update_activity))
}
