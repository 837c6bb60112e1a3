//! Persistence layer for listings.
//!
//! A thin, stateless wrapper over one MongoDB collection. The store treats
//! listings as opaque documents and performs no business validation; all
//! side effects are confined to the database.

use bson::{doc, Document};
use futures::TryStreamExt;
use mongodb::{options::IndexOptions, Collection, IndexModel};

use crate::db::MongoDb;

use super::data::types::ListingFilters;
use super::models::listing::{Listing, ListingStatus};

/// Name of the collection holding all listings.
pub const COLLECTION_NAME: &str = "items";

/// Store for the listings collection.
///
/// Explicitly constructed at startup and injected into the service layer;
/// holds nothing but the collection handle and is cheap to clone.
#[derive(Debug, Clone)]
pub struct ListingStore {
    collection: Collection<Listing>,
}

impl ListingStore {
    pub fn new(db: &MongoDb) -> Self {
        Self {
            collection: db.collection(COLLECTION_NAME),
        }
    }

    /// Create the unique index on `id`. Called once at startup.
    pub async fn ensure_indexes(&self) -> Result<(), mongodb::error::Error> {
        let index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection.create_index(index).await?;
        Ok(())
    }

    /// Insert a fully populated listing.
    pub async fn insert(&self, listing: &Listing) -> Result<(), mongodb::error::Error> {
        self.collection.insert_one(listing).await?;
        Ok(())
    }

    /// Point lookup by identifier, regardless of status.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Listing>, mongodb::error::Error> {
        self.collection.find_one(doc! { "id": id }).await
    }

    /// Available listings matching the given filters, newest first.
    pub async fn find_available(
        &self,
        filters: &ListingFilters,
    ) -> Result<Vec<Listing>, mongodb::error::Error> {
        let cursor = self
            .collection
            .find(Self::available_filter(filters))
            .sort(doc! { "created_at": -1 })
            .await?;

        cursor.try_collect().await
    }

    /// Set the status of one listing; returns whether a document matched.
    ///
    /// `$set` touches only the status field, so concurrent updates race as
    /// last-write-wins with no error to the loser.
    pub async fn update_status(
        &self,
        id: &str,
        status: ListingStatus,
    ) -> Result<bool, mongodb::error::Error> {
        let result = self
            .collection
            .update_one(
                doc! { "id": id },
                doc! { "$set": { "status": status.to_string() } },
            )
            .await?;

        Ok(result.matched_count > 0)
    }

    /// Count documents matching the given filter.
    pub async fn count(&self, filter: Document) -> Result<u64, mongodb::error::Error> {
        self.collection.count_documents(filter).await
    }

    /// Build the query document for a listing scan.
    ///
    /// Always restricted to available listings; `search` becomes an escaped
    /// case-insensitive regex so the API matches literal substrings in the
    /// title or description.
    fn available_filter(filters: &ListingFilters) -> Document {
        let mut filter = doc! { "status": ListingStatus::Available.to_string() };

        if let Some(category) = &filters.category {
            filter.insert("category", category.as_str());
        }
        if let Some(item_type) = &filters.item_type {
            filter.insert("item_type", item_type.as_str());
        }
        if let Some(term) = &filters.search {
            let pattern = regex::escape(term);
            filter.insert(
                "$or",
                vec![
                    doc! { "title": { "$regex": pattern.as_str(), "$options": "i" } },
                    doc! { "description": { "$regex": pattern.as_str(), "$options": "i" } },
                ],
            );
        }

        filter
    }
}
