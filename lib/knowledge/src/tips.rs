//! Categorized marriage counseling tips.
//!
//! Tips are grouped into five fixed categories. Looking up an unknown
//! category yields a synthesized "general" set instead of failing, so the
//! lookup is total.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

const COMMUNICATION_TIPS: [&str; 5] = [
    "🗣️ Listen to each other without judgment",
    "💭 Express your feelings calmly",
    "📵 Talk face-to-face without distractions",
    "🤝 Use 'I' statements instead of blame",
    "⏰ Dedicate 15-20 minutes daily for open conversation",
];

const TRUST_TIPS: [&str; 5] = [
    "🤲 Pray for your relationship",
    "💎 Maintain complete transparency",
    "🔒 Forgive past mistakes",
    "📱 Be open about online interactions",
    "🤝 Build trust with small consistent actions",
];

const FINANCIAL_TIPS: [&str; 5] = [
    "💰 Create a monthly budget together",
    "📊 Set financial goals as a couple",
    "🛍️ Discuss big purchases beforehand",
    "💳 Build an emergency fund jointly",
    "📈 Involve your spouse in financial decisions",
];

const FAMILY_TIPS: [&str; 5] = [
    "👥 Set clear boundaries with in-laws",
    "🏠 Maintain personal space as a couple",
    "🤱 Align on parenting approach",
    "👨‍👩‍👧‍👦 Respect extended family with healthy limits",
    "🎯 Keep your partner the priority",
];

const RELIGIOUS_TIPS: [&str; 5] = [
    "🕌 Pray together regularly",
    "📖 Read and discuss Quran together",
    "🤲 Pray for one another",
    "📚 Study Islamic marriage guidance",
    "💫 Support each other in earning spiritual rewards",
];

/// How many trust tips are folded into the general fallback.
const GENERAL_TRUST_TAKE: usize = 3;

/// The fixed counseling tip categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipCategory {
    /// Communication and active listening.
    Communication,
    /// Trust building and transparency.
    Trust,
    /// Household finances.
    Financial,
    /// Extended family and in-laws.
    Family,
    /// Religious practice as a couple.
    Religious,
}

impl TipCategory {
    /// All categories, in presentation order.
    pub const ALL: [Self; 5] = [
        Self::Communication,
        Self::Trust,
        Self::Financial,
        Self::Family,
        Self::Religious,
    ];

    /// Returns the category key as used in tool inputs and outputs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Communication => "communication",
            Self::Trust => "trust",
            Self::Financial => "financial",
            Self::Family => "family",
            Self::Religious => "religious",
        }
    }

    /// Parses a category key, returning `None` for unknown keys.
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "communication" => Some(Self::Communication),
            "trust" => Some(Self::Trust),
            "financial" => Some(Self::Financial),
            "family" => Some(Self::Family),
            "religious" => Some(Self::Religious),
            _ => None,
        }
    }

    /// Returns the fixed tips for this category.
    #[must_use]
    pub const fn tips(&self) -> &'static [&'static str] {
        match self {
            Self::Communication => &COMMUNICATION_TIPS,
            Self::Trust => &TRUST_TIPS,
            Self::Financial => &FINANCIAL_TIPS,
            Self::Family => &FAMILY_TIPS,
            Self::Religious => &RELIGIOUS_TIPS,
        }
    }
}

impl std::fmt::Display for TipCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The result of a tips lookup.
///
/// A recognized category keeps its identity; anything else collapses into
/// the synthesized general set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TipsLookup {
    /// The requested category was one of the five known ones.
    Category {
        /// The matched category.
        category: TipCategory,
        /// Its fixed tips.
        tips: Vec<&'static str>,
    },
    /// The requested category was unknown; a general set was synthesized.
    General {
        /// Communication tips followed by the first trust tips.
        tips: Vec<&'static str>,
    },
}

impl TipsLookup {
    /// Returns the key this lookup is reported under.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::Category { category, .. } => category.as_str(),
            Self::General { .. } => "general",
        }
    }

    /// Returns the tips, regardless of shape.
    #[must_use]
    pub fn tips(&self) -> &[&'static str] {
        match self {
            Self::Category { tips, .. } | Self::General { tips } => tips,
        }
    }

    /// Returns true if this is the synthesized general fallback.
    #[must_use]
    pub fn is_general_fallback(&self) -> bool {
        matches!(self, Self::General { .. })
    }

    /// Renders the lookup as a single-key JSON map, the shape tools report.
    #[must_use]
    pub fn to_json(&self) -> JsonValue {
        let mut map = serde_json::Map::new();
        map.insert(self.key().to_string(), serde_json::json!(self.tips()));
        JsonValue::Object(map)
    }
}

/// Looks up counseling tips for an issue type.
///
/// A recognized category returns its own tips. Any other key returns the
/// general set: all communication tips followed by the first three trust
/// tips.
#[must_use]
pub fn counseling_tips(issue_type: &str) -> TipsLookup {
    match TipCategory::parse(issue_type) {
        Some(category) => TipsLookup::Category {
            category,
            tips: category.tips().to_vec(),
        },
        None => {
            let mut tips = COMMUNICATION_TIPS.to_vec();
            tips.extend_from_slice(&TRUST_TIPS[..GENERAL_TRUST_TAKE]);
            TipsLookup::General { tips }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_five_tips() {
        for category in TipCategory::ALL {
            assert_eq!(category.tips().len(), 5, "category {category}");
        }
    }

    #[test]
    fn known_category_returns_its_own_tips() {
        let lookup = counseling_tips("financial");
        assert_eq!(lookup.key(), "financial");
        assert!(!lookup.is_general_fallback());
        assert_eq!(lookup.tips(), TipCategory::Financial.tips());
    }

    #[test]
    fn unknown_category_falls_back_to_general() {
        let lookup = counseling_tips("intimacy");
        assert_eq!(lookup.key(), "general");
        assert!(lookup.is_general_fallback());
        assert_eq!(lookup.tips().len(), 8);
        assert_eq!(&lookup.tips()[..5], TipCategory::Communication.tips());
        assert_eq!(&lookup.tips()[5..], &TipCategory::Trust.tips()[..3]);
    }

    #[test]
    fn empty_key_falls_back_to_general() {
        let lookup = counseling_tips("");
        assert_eq!(lookup.key(), "general");
        assert_eq!(lookup.tips().len(), 8);
    }

    #[test]
    fn lookup_to_json_is_single_key_map() {
        let json = counseling_tips("trust").to_json();
        let map = json.as_object().expect("object");
        assert_eq!(map.len(), 1);
        assert_eq!(map["trust"].as_array().expect("array").len(), 5);
    }

    #[test]
    fn category_parse_roundtrip() {
        for category in TipCategory::ALL {
            assert_eq!(TipCategory::parse(category.as_str()), Some(category));
        }
        assert_eq!(TipCategory::parse("General"), None);
    }
}
