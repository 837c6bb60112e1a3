use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Listing - a household item offered for giveaway or barter
///
/// The sole persisted entity. Stored in a single MongoDB collection with a
/// unique index on `id`; `created_at` is kept as a BSON datetime so the
/// store can sort on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,

    // Content
    pub title: String,
    pub description: String,
    pub category: String,
    pub condition: String,

    // How to reach the owner; free text, deliberately unvalidated
    pub contact_info: String,
    pub contact_method: String,

    // Opaque URL, never fetched
    pub image_url: Option<String>,

    pub item_type: ItemType,
    // Conventionally populated only for barter listings
    pub barter_wants: Option<String>,

    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,

    // The only field that is mutable after creation
    pub status: ListingStatus,
}

// =============================================================================
// Enums
// =============================================================================

/// Listing type enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    GiveAway,
    Barter,
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemType::GiveAway => write!(f, "give_away"),
            ItemType::Barter => write!(f, "barter"),
        }
    }
}

impl std::str::FromStr for ItemType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "give_away" => Ok(ItemType::GiveAway),
            "barter" => Ok(ItemType::Barter),
            _ => Err(anyhow::anyhow!("Invalid item type: {}", s)),
        }
    }
}

/// Status enum
///
/// Every listing starts as `Available`. Any status may be set to any other
/// at any time; there is no terminal state and no delete transition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    Available,
    Claimed,
    Completed,
}

impl std::fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingStatus::Available => write!(f, "available"),
            ListingStatus::Claimed => write!(f, "claimed"),
            ListingStatus::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for ListingStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(ListingStatus::Available),
            "claimed" => Ok(ListingStatus::Claimed),
            "completed" => Ok(ListingStatus::Completed),
            _ => Err(anyhow::anyhow!("Invalid listing status: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_type_round_trips_through_strings() {
        for (variant, text) in [(ItemType::GiveAway, "give_away"), (ItemType::Barter, "barter")] {
            assert_eq!(variant.to_string(), text);
            assert_eq!(text.parse::<ItemType>().unwrap(), variant);
        }
        assert!("freebie".parse::<ItemType>().is_err());
    }

    #[test]
    fn status_round_trips_through_strings() {
        for (variant, text) in [
            (ListingStatus::Available, "available"),
            (ListingStatus::Claimed, "claimed"),
            (ListingStatus::Completed, "completed"),
        ] {
            assert_eq!(variant.to_string(), text);
            assert_eq!(text.parse::<ListingStatus>().unwrap(), variant);
        }
        assert!("archived".parse::<ListingStatus>().is_err());
    }

    #[test]
    fn serde_names_match_display_names() {
        let json = serde_json::to_value(ItemType::GiveAway).unwrap();
        assert_eq!(json, serde_json::json!("give_away"));
        let json = serde_json::to_value(ListingStatus::Claimed).unwrap();
        assert_eq!(json, serde_json::json!("claimed"));
    }
}
