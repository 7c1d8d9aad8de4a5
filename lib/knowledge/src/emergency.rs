//! Emergency and crisis support contacts.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// The kinds of emergency contact on record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmergencyContactKind {
    /// General crisis counseling line.
    CrisisHelpline,
    /// National helpline for women.
    WomenHelpline,
    /// Mental health support.
    MentalHealth,
    /// Free legal aid.
    LegalAid,
    /// Domestic violence crisis center.
    DomesticViolence,
}

impl EmergencyContactKind {
    /// All contact kinds, in presentation order.
    pub const ALL: [Self; 5] = [
        Self::CrisisHelpline,
        Self::WomenHelpline,
        Self::MentalHealth,
        Self::LegalAid,
        Self::DomesticViolence,
    ];

    /// Returns the key this contact is reported under.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::CrisisHelpline => "crisis_helpline",
            Self::WomenHelpline => "women_helpline",
            Self::MentalHealth => "mental_health",
            Self::LegalAid => "legal_aid",
            Self::DomesticViolence => "domestic_violence",
        }
    }

    /// Returns the display line for this contact.
    #[must_use]
    pub const fn contact(&self) -> &'static str {
        match self {
            Self::CrisisHelpline => "Rozan Helpline: 0800-22444 (24/7 free)",
            Self::WomenHelpline => "Madadgaar National Helpline: 1099",
            Self::MentalHealth => "Mental Health Association: +92-21-111-647-725",
            Self::LegalAid => "Legal Aid Society: 0800-55555",
            Self::DomesticViolence => "Women Crisis Center: 111-911-911",
        }
    }
}

/// Returns all emergency contacts keyed by kind.
#[must_use]
pub fn emergency_support() -> BTreeMap<&'static str, &'static str> {
    EmergencyContactKind::ALL
        .iter()
        .map(|kind| (kind.key(), kind.contact()))
        .collect()
}

/// Renders the contacts as a JSON map, the shape tools report.
#[must_use]
pub fn emergency_support_json() -> JsonValue {
    serde_json::to_value(emergency_support()).expect("static data serializes")
}
