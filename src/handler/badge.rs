use std::sync::Arc;

use axum::Router;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tracing::{error, info};

use crate::domain::Profile;
use crate::domain::profile::truncate_handle;
use crate::port::ProfileSource;
use crate::render::{BadgeVariant, BadgeView, Renderer};

pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

/// Shared, read-only state for the badge routes.
#[derive(Clone)]
pub struct BadgeState {
    pub source: Arc<dyn ProfileSource>,
    pub renderer: Arc<Renderer>,
    pub default_handle: Arc<str>,
}

/// Raw query pairs, so a repeated `boj` never rejects the request.
pub type BadgeQuery = Vec<(String, String)>;

/// Last `boj` value in the query, if any.
fn requested_handle(query: BadgeQuery) -> Option<String> {
    query
        .into_iter()
        .rev()
        .find_map(|(key, value)| (key == "boj").then_some(value))
}

/// Create Axum router for the badge endpoints
pub fn badge_routes(state: BadgeState) -> Router {
    Router::new()
        .route(BadgeVariant::Default.route(), get(default_badge))
        .route(BadgeVariant::Alternate.route(), get(alternate_badge))
        .route(BadgeVariant::Mini.route(), get(mini_badge))
        .route(BadgeVariant::Pastel.route(), get(pastel_badge))
        .with_state(state)
}

/// Handler for GET /generate_badge
pub async fn default_badge(
    State(state): State<BadgeState>,
    Query(query): Query<BadgeQuery>,
) -> Response {
    serve_badge(BadgeVariant::Default, &state, requested_handle(query)).await
}

/// Handler for GET /generate_badge/v2
pub async fn alternate_badge(
    State(state): State<BadgeState>,
    Query(query): Query<BadgeQuery>,
) -> Response {
    serve_badge(BadgeVariant::Alternate, &state, requested_handle(query)).await
}

/// Handler for GET /generate_badge/mini
pub async fn mini_badge(
    State(state): State<BadgeState>,
    Query(query): Query<BadgeQuery>,
) -> Response {
    serve_badge(BadgeVariant::Mini, &state, requested_handle(query)).await
}

/// Handler for GET /generate_badge/pastel
pub async fn pastel_badge(
    State(state): State<BadgeState>,
    Query(query): Query<BadgeQuery>,
) -> Response {
    serve_badge(BadgeVariant::Pastel, &state, requested_handle(query)).await
}

async fn serve_badge(
    variant: BadgeVariant,
    state: &BadgeState,
    handle: Option<String>,
) -> Response {
    let handle = handle.unwrap_or_else(|| state.default_handle.to_string());

    let profile = resolve_profile(state.source.as_ref(), &handle).await;
    let view = BadgeView::new(variant, &profile);
    let svg = state.renderer.render_view(variant, &view);

    info!(
        route = variant.route(),
        user = %truncate_handle(&handle, variant.max_handle_len()),
        tier = view.tier_title,
        "Rendered badge"
    );

    (
        [
            (header::CONTENT_TYPE, SVG_CONTENT_TYPE),
            (header::CACHE_CONTROL, variant.cache_control()),
        ],
        svg,
    )
        .into_response()
}

/// Fetches `handle` and builds its profile, degrading to
/// [`Profile::Unresolved`] on any fetch failure.
pub async fn resolve_profile(source: &dyn ProfileSource, handle: &str) -> Profile {
    match source.fetch(handle).await {
        Ok(stats) => Profile::resolved(handle, stats),
        Err(e) => {
            error!(user = %handle, error = %e, "Failed to fetch profile");
            Profile::Unresolved
        }
    }
}
