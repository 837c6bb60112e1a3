//! Request and response types for the listings API.
//!
//! These are the only shapes that cross the HTTP boundary; handlers convert
//! between them and the domain models so the persisted representation never
//! leaks into responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domains::listings::models::listing::{ItemType, Listing, ListingStatus};
use crate::domains::listings::service::ListingStats;

/// Body of `POST /api/items`.
///
/// Required fields are enforced structurally at deserialization; the service
/// layer additionally rejects empty strings.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitListingInput {
    pub title: String,
    pub description: String,
    pub category: String,
    pub condition: String,
    pub contact_info: String,
    pub contact_method: String,
    pub image_url: Option<String>,
    pub item_type: ItemType,
    pub barter_wants: Option<String>,
}

/// Optional query parameters of `GET /api/items`, combined with logical AND.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingFilters {
    pub category: Option<String>,
    pub item_type: Option<String>,
    pub search: Option<String>,
}

/// Query parameter of `PUT /api/items/{id}/status`.
///
/// Carried as a plain string so an unrecognized value can be reported as a
/// 400 at the boundary instead of a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

/// A listing as returned to clients; `created_at` serializes as RFC 3339.
#[derive(Debug, Clone, Serialize)]
pub struct ListingData {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub condition: String,
    pub contact_info: String,
    pub contact_method: String,
    pub image_url: Option<String>,
    pub item_type: ItemType,
    pub barter_wants: Option<String>,
    pub created_at: DateTime<Utc>,
    pub status: ListingStatus,
}

impl From<Listing> for ListingData {
    fn from(listing: Listing) -> Self {
        Self {
            id: listing.id,
            title: listing.title,
            description: listing.description,
            category: listing.category,
            condition: listing.condition,
            contact_info: listing.contact_info,
            contact_method: listing.contact_method,
            image_url: listing.image_url,
            item_type: listing.item_type,
            barter_wants: listing.barter_wants,
            created_at: listing.created_at,
            status: listing.status,
        }
    }
}

/// Body of `GET /api/stats`.
#[derive(Debug, Clone, Serialize)]
pub struct StatsData {
    pub total_listings: u64,
    pub available_items: u64,
    pub items_rehomed: u64,
    pub waste_diverted_kg: f64,
}

impl From<ListingStats> for StatsData {
    fn from(stats: ListingStats) -> Self {
        Self {
            total_listings: stats.total,
            available_items: stats.available,
            items_rehomed: stats.rehomed,
            waste_diverted_kg: stats.waste_diverted_kg,
        }
    }
}
