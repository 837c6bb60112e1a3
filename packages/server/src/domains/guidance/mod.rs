//! Static disposal guidance for items that are past reuse.
//!
//! The table is plain configuration data embedded in the binary; lookup is
//! a pure function and cannot fail.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/disposal-guidance`.
#[derive(Debug, Clone, Deserialize)]
pub struct DisposalQuery {
    pub item_name: String,
    pub category: String,
}

/// Guidance returned to the caller; echoes the item and original-case
/// category alongside the table entry.
#[derive(Debug, Clone, Serialize)]
pub struct DisposalGuidance {
    pub item: String,
    pub category: String,
    pub disposal_methods: Vec<String>,
    pub tips: String,
    pub warnings: String,
}

struct GuidanceEntry {
    methods: &'static [&'static str],
    tip: &'static str,
    warning: &'static str,
}

const ELECTRONICS: GuidanceEntry = GuidanceEntry {
    methods: &[
        "E-waste recycling centers",
        "Manufacturer take-back programs",
        "Best Buy recycling",
    ],
    tip: "Remove personal data before disposal. Many electronics contain valuable materials that can be recycled.",
    warning: "Never throw electronics in regular trash - they contain toxic materials.",
};

const FURNITURE: GuidanceEntry = GuidanceEntry {
    methods: &[
        "Donation centers",
        "Habitat for Humanity ReStore",
        "Bulk trash pickup",
    ],
    tip: "Check with local charities first. Many furniture pieces can be refurbished.",
    warning: "Large furniture may require special pickup arrangements.",
};

const CLOTHING: GuidanceEntry = GuidanceEntry {
    methods: &[
        "Textile recycling bins",
        "Goodwill",
        "H&M recycling program",
    ],
    tip: "Even damaged clothing can often be recycled into new textiles.",
    warning: "Don't throw textiles in regular trash - they can be recycled even if not wearable.",
};

const APPLIANCES: GuidanceEntry = GuidanceEntry {
    methods: &[
        "Appliance stores (when buying new)",
        "Scrap metal recycling",
        "Municipal pickup",
    ],
    tip: "Many retailers will haul away old appliances when delivering new ones.",
    warning: "Refrigerators and air conditioners need special handling for refrigerants.",
};

const BOOKS: GuidanceEntry = GuidanceEntry {
    methods: &[
        "Libraries",
        "Schools",
        "Little Free Libraries",
        "Paper recycling",
    ],
    tip: "Consider donating to schools or libraries first. Even damaged books can be recycled.",
    warning: "Remove any personal information before donating.",
};

const DEFAULT: GuidanceEntry = GuidanceEntry {
    methods: &[
        "Check local recycling guidelines",
        "Contact waste management",
        "Search Earth911.com",
    ],
    tip: "When in doubt, contact your local waste management authority for guidance.",
    warning: "Research proper disposal methods to avoid environmental harm.",
};

/// Category lookup is case-insensitive; unrecognized categories fall back
/// to the default entry.
fn entry_for(category: &str) -> &'static GuidanceEntry {
    match category.to_lowercase().as_str() {
        "electronics" => &ELECTRONICS,
        "furniture" => &FURNITURE,
        "clothing" => &CLOTHING,
        "appliances" => &APPLIANCES,
        "books" => &BOOKS,
        _ => &DEFAULT,
    }
}

/// Look up disposal guidance for an item.
pub fn lookup(item_name: &str, category: &str) -> DisposalGuidance {
    let entry = entry_for(category);

    DisposalGuidance {
        item: item_name.to_string(),
        category: category.to_string(),
        disposal_methods: entry.methods.iter().map(|s| s.to_string()).collect(),
        tips: entry.tip.to_string(),
        warnings: entry.warning.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_match_is_case_insensitive() {
        let upper = lookup("Old laptop", "Electronics");
        let lower = lookup("Old laptop", "electronics");
        assert_eq!(upper.disposal_methods, lower.disposal_methods);
        assert_eq!(upper.tips, lower.tips);
        assert_eq!(upper.warnings, lower.warnings);
    }

    #[test]
    fn unrecognized_category_falls_back_to_default() {
        let guidance = lookup("Warp drive", "Spaceship");
        assert_eq!(
            guidance.disposal_methods,
            vec![
                "Check local recycling guidelines",
                "Contact waste management",
                "Search Earth911.com",
            ]
        );
    }

    #[test]
    fn echoes_item_and_original_case_category() {
        let guidance = lookup("Winter coat", "Clothing");
        assert_eq!(guidance.item, "Winter coat");
        assert_eq!(guidance.category, "Clothing");
    }

    #[test]
    fn every_known_category_has_methods() {
        for category in ["electronics", "furniture", "clothing", "appliances", "books"] {
            let guidance = lookup("thing", category);
            assert!(!guidance.disposal_methods.is_empty());
            assert!(!guidance.tips.is_empty());
            assert!(!guidance.warnings.is_empty());
        }
    }
}
