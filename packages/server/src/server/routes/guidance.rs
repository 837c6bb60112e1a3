use axum::Json;

use crate::domains::guidance::{self, DisposalGuidance, DisposalQuery};

/// `POST /api/disposal-guidance` - static disposal advice for an item
///
/// Pure lookup; needs no application state and cannot fail.
pub async fn disposal_guidance_handler(Json(query): Json<DisposalQuery>) -> Json<DisposalGuidance> {
    Json(guidance::lookup(&query.item_name, &query.category))
}
