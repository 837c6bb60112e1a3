//! Listing operations: create, list, point lookup, status update, stats.

use bson::doc;
use chrono::Utc;
use uuid::Uuid;

use crate::common::ServiceError;

use super::data::types::{ListingFilters, SubmitListingInput};
use super::models::listing::{Listing, ListingStatus};
use super::store::ListingStore;

/// Fixed per-item weight estimate used for the waste-diverted figure.
/// An approximation, not a measurement.
const WASTE_KG_PER_ITEM: f64 = 2.5;

/// Aggregate platform counts.
#[derive(Debug, Clone)]
pub struct ListingStats {
    pub total: u64,
    pub available: u64,
    pub rehomed: u64,
    pub waste_diverted_kg: f64,
}

/// Service layer for listings.
///
/// Validates input, assigns identifiers and timestamps, and delegates
/// persistence to the injected store.
#[derive(Debug, Clone)]
pub struct ListingService {
    store: ListingStore,
}

impl ListingService {
    pub fn new(store: ListingStore) -> Self {
        Self { store }
    }

    /// Create a new listing.
    ///
    /// Mints a fresh identifier on every call, so a retried create produces
    /// a duplicate listing rather than an idempotent one. Duplicate titles
    /// and descriptions are permitted.
    pub async fn create(&self, input: SubmitListingInput) -> Result<Listing, ServiceError> {
        validate_submission(&input)?;

        let listing = Listing {
            id: Uuid::new_v4().to_string(),
            title: input.title,
            description: input.description,
            category: input.category,
            condition: input.condition,
            contact_info: input.contact_info,
            contact_method: input.contact_method,
            image_url: input.image_url,
            item_type: input.item_type,
            barter_wants: input.barter_wants,
            created_at: Utc::now(),
            status: ListingStatus::Available,
        };

        self.store.insert(&listing).await?;
        Ok(listing)
    }

    /// All available listings matching the filters, newest first.
    ///
    /// An empty result set is not an error.
    pub async fn list(&self, filters: ListingFilters) -> Result<Vec<Listing>, ServiceError> {
        Ok(self.store.find_available(&filters).await?)
    }

    /// Point lookup by identifier, regardless of status.
    pub async fn get(&self, id: &str) -> Result<Listing, ServiceError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound("Item"))
    }

    /// Change the status of a listing. The only mutation path in the system;
    /// no ordering restriction between the three states.
    pub async fn update_status(
        &self,
        id: &str,
        status: ListingStatus,
    ) -> Result<(), ServiceError> {
        let matched = self.store.update_status(id, status).await?;
        if !matched {
            return Err(ServiceError::NotFound("Item"));
        }
        Ok(())
    }

    /// Aggregate counts over the whole collection.
    pub async fn stats(&self) -> Result<ListingStats, ServiceError> {
        let total = self.store.count(doc! {}).await?;
        let available = self
            .store
            .count(doc! { "status": ListingStatus::Available.to_string() })
            .await?;
        let rehomed = self
            .store
            .count(doc! { "status": ListingStatus::Completed.to_string() })
            .await?;

        Ok(ListingStats {
            total,
            available,
            rehomed,
            waste_diverted_kg: rehomed as f64 * WASTE_KG_PER_ITEM,
        })
    }
}

/// Reject submissions whose required free-text fields are empty or
/// whitespace-only. Contact details are deliberately not format-checked.
fn validate_submission(input: &SubmitListingInput) -> Result<(), ServiceError> {
    let required = [
        ("title", &input.title),
        ("description", &input.description),
        ("category", &input.category),
        ("condition", &input.condition),
        ("contact_info", &input.contact_info),
        ("contact_method", &input.contact_method),
    ];

    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(ServiceError::Validation(format!(
                "{field} must not be empty"
            )));
        }
    }

    Ok(())
}
