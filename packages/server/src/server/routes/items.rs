//! Listing endpoints: browse, create, point lookup, status update.

use axum::{
    extract::{Extension, Path, Query},
    Json,
};
use serde::Serialize;

use crate::domains::listings::{
    ListingData, ListingFilters, ListingStatus, StatusUpdate, SubmitListingInput,
};
use crate::server::app::AppState;
use crate::server::error::ApiError;

#[derive(Serialize)]
pub struct StatusUpdated {
    message: String,
}

/// `GET /api/items` - available listings with optional filtering
pub async fn list_items(
    Extension(state): Extension<AppState>,
    Query(filters): Query<ListingFilters>,
) -> Result<Json<Vec<ListingData>>, ApiError> {
    let listings = state.listings.list(filters).await?;
    Ok(Json(listings.into_iter().map(ListingData::from).collect()))
}

/// `POST /api/items` - create a new listing
pub async fn create_item(
    Extension(state): Extension<AppState>,
    Json(input): Json<SubmitListingInput>,
) -> Result<Json<ListingData>, ApiError> {
    let listing = state.listings.create(input).await?;
    Ok(Json(listing.into()))
}

/// `GET /api/items/{id}` - point lookup, regardless of status
pub async fn get_item(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ListingData>, ApiError> {
    let listing = state.listings.get(&id).await?;
    Ok(Json(listing.into()))
}

/// `PUT /api/items/{id}/status?status=...` - change listing status
///
/// The status string is validated here so an unrecognized value is a 400,
/// not a deserialization failure.
pub async fn update_item_status(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
    Query(update): Query<StatusUpdate>,
) -> Result<Json<StatusUpdated>, ApiError> {
    let status: ListingStatus = update
        .status
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid status"))?;

    state.listings.update_status(&id, status).await?;

    Ok(Json(StatusUpdated {
        message: "Status updated successfully".to_string(),
    }))
}
