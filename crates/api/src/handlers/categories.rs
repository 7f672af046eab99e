//! Handler for the read-only category listing.

use axum::response::IntoResponse;
use axum::Json;

use crate::projection::category_choices;
use crate::response::DataResponse;

/// GET /api/v1/categories
///
/// List every category as `{value, label, color}` in declaration order.
pub async fn list_categories() -> impl IntoResponse {
    Json(DataResponse {
        data: category_choices(),
    })
}
