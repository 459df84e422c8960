use crate::handler::badge::{BadgeState, badge_routes};
use crate::handler::health::{HEALTH_PATH, health_handler};
use axum::Router;
use axum::routing::get;

/// Build the HTTP router (health + badges).
pub fn main_router(state: BadgeState) -> Router {
    let v1_health_router = Router::new().route(HEALTH_PATH, get(health_handler));

    Router::new()
        .merge(v1_health_router)
        .merge(badge_routes(state))
}
