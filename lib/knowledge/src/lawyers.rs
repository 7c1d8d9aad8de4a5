//! Fixed family-lawyer directory and the user-facing list formatter.
//!
//! The directory is deliberately small and static; records have no identity
//! beyond their field values.

use serde::{Deserialize, Serialize};

/// Message returned when no directory record matches.
pub const NO_LAWYERS_MESSAGE: &str = "❌ No lawyers found matching your criteria.";

const LIST_PREAMBLE: &str = "⚖️ *FAMILY LAWYERS LIST* ⚖️\n\n\
    🚨 *Note: These are suggested only after extensive counseling. Please prioritize reconciliation first.*\n\n";

const LIST_POSTAMBLE: &str = "💡 *Shared by RishtaSaver Agent*\n\
    🤲 May Allah guide you with wisdom\n\
    📞 Reach out if you need further support.";

/// Width of the rule line separating lawyer blocks.
const RULE_WIDTH: usize = 35;

/// A family-law practitioner record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LawyerProfile {
    /// Practitioner name.
    pub name: String,
    /// Area of practice.
    pub specialization: String,
    /// Years of experience, as display text.
    pub experience: String,
    /// City the practice is located in.
    pub location: String,
    /// Phone contact.
    pub contact: String,
    /// Client rating, as display text.
    pub rating: String,
    /// Consultation fee, as display text.
    pub consultation_fee: String,
}

fn profile(
    name: &str,
    specialization: &str,
    experience: &str,
    location: &str,
    contact: &str,
    rating: &str,
    consultation_fee: &str,
) -> LawyerProfile {
    LawyerProfile {
        name: name.to_string(),
        specialization: specialization.to_string(),
        experience: experience.to_string(),
        location: location.to_string(),
        contact: contact.to_string(),
        rating: rating.to_string(),
        consultation_fee: consultation_fee.to_string(),
    }
}

/// The full fixed directory, in presentation order.
#[must_use]
pub fn directory() -> Vec<LawyerProfile> {
    vec![
        profile(
            "Advocate Sana Ahmad",
            "Family Law & Divorce Cases",
            "12 years",
            "Lahore",
            "+92300-1122334",
            "4.8/5",
            "Rs. 5,000",
        ),
        profile(
            "Barrister Muhammad Tariq",
            "Islamic Family Law",
            "15 years",
            "Karachi",
            "+92301-2233445",
            "4.9/5",
            "Rs. 7,000",
        ),
        profile(
            "Advocate Farah Khan",
            "Women Rights & Family Disputes",
            "10 years",
            "Islamabad",
            "+92302-3344556",
            "4.7/5",
            "Rs. 4,500",
        ),
        profile(
            "Advocate Ali Hassan",
            "Divorce & Child Custody",
            "8 years",
            "Faisalabad",
            "+92303-4455667",
            "4.6/5",
            "Rs. 4,000",
        ),
        profile(
            "Advocate Ayesha Malik",
            "Family Mediation & Divorce",
            "11 years",
            "Multan",
            "+92304-5566778",
            "4.8/5",
            "Rs. 4,500",
        ),
    ]
}

/// Returns directory records matching a city.
///
/// A record matches when `city` is `"all"` or a case-insensitive substring
/// of the record's location. The `specialization` argument is accepted for
/// call compatibility but does not narrow the directory.
#[must_use]
pub fn lawyers_matching(_specialization: &str, city: &str) -> Vec<LawyerProfile> {
    let city = city.to_lowercase();
    directory()
        .into_iter()
        .filter(|lawyer| city == "all" || lawyer.location.to_lowercase().contains(&city))
        .collect()
}

/// Renders a lawyer list as the user-facing WhatsApp-style message.
///
/// An empty list renders the fixed no-results message.
#[must_use]
pub fn format_lawyer_message(lawyers: &[LawyerProfile]) -> String {
    if lawyers.is_empty() {
        return NO_LAWYERS_MESSAGE.to_string();
    }

    let rule = "─".repeat(RULE_WIDTH);
    let mut msg = String::from(LIST_PREAMBLE);
    for (i, lawyer) in lawyers.iter().enumerate() {
        msg.push_str(&format!(
            "*{number}. {name}*\n\
             📋 Specialization: {specialization}\n\
             ⏳ Experience: {experience}\n\
             📍 Location: {location}\n\
             📞 Contact: {contact}\n\
             ⭐ Rating: {rating}\n\
             💰 Fee: {fee}\n\
             {rule}\n\n",
            number = i + 1,
            name = lawyer.name,
            specialization = lawyer.specialization,
            experience = lawyer.experience,
            location = lawyer.location,
            contact = lawyer.contact,
            rating = lawyer.rating,
            fee = lawyer.consultation_fee,
        ));
    }
    msg.push_str(LIST_POSTAMBLE);
    msg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_has_five_records() {
        assert_eq!(directory().len(), 5);
    }

    #[test]
    fn all_city_returns_everything() {
        assert_eq!(lawyers_matching("family", "all").len(), 5);
        assert_eq!(lawyers_matching("family", "ALL").len(), 5);
    }

    #[test]
    fn city_filter_matches_single_record() {
        let matches = lawyers_matching("family", "Lahore");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Advocate Sana Ahmad");
    }

    #[test]
    fn city_filter_is_case_insensitive() {
        assert_eq!(
            lawyers_matching("family", "lahore"),
            lawyers_matching("family", "Lahore")
        );
    }

    #[test]
    fn specialization_does_not_narrow_results() {
        assert_eq!(
            lawyers_matching("criminal", "Karachi"),
            lawyers_matching("family", "Karachi")
        );
    }

    #[test]
    fn unknown_city_matches_nothing() {
        assert!(lawyers_matching("family", "Peshawar").is_empty());
    }

    #[test]
    fn empty_list_formats_no_results_message() {
        assert_eq!(format_lawyer_message(&[]), NO_LAWYERS_MESSAGE);
    }

    #[test]
    fn formatted_message_includes_record_fields() {
        let lawyers = lawyers_matching("family", "Lahore");
        let msg = format_lawyer_message(&lawyers);

        assert!(msg.contains("Advocate Sana Ahmad"));
        assert!(msg.contains("Lahore"));
        assert!(msg.contains("Rs. 5,000"));
        assert!(msg.starts_with("⚖️ *FAMILY LAWYERS LIST* ⚖️"));
        assert!(msg.ends_with("📞 Reach out if you need further support."));
    }

    #[test]
    fn formatted_message_numbers_records() {
        let msg = format_lawyer_message(&directory());
        assert!(msg.contains("*1. Advocate Sana Ahmad*"));
        assert!(msg.contains("*5. Advocate Ayesha Malik*"));
    }

    #[test]
    fn lawyer_profile_serde_roundtrip() {
        let lawyer = directory().remove(0);
        let json = serde_json::to_string(&lawyer).expect("serialize");
        let parsed: LawyerProfile = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(lawyer, parsed);
    }
}
