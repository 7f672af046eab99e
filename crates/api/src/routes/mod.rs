pub mod categories;
pub mod health;
pub mod notes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                                      list categories
///
/// /notes                                           list, create
/// /notes/{slug}                                    get, update, patch, delete
/// ```
///
/// Every path is also reachable with a trailing slash.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(categories::router())
        .merge(notes::router())
}
