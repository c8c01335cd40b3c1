/**
 * API Route Configuration
 *
 * # Routes
 *
 * - `GET /api/test/generate-token` - Development bearer token (404 outside
 *   development mode)
 */

use axum::{routing::get, Router};

use crate::backend::auth::generate_token;
use crate::backend::server::state::AppState;

/// Add the auxiliary API routes to `router`
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router.route("/api/test/generate-token", get(generate_token))
}
