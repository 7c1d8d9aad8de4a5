//! Fixed texts describing the consequences of divorce.

use serde::Serialize;
use serde_json::Value as JsonValue;

/// The three fixed sections of divorce guidance.
///
/// Serializes to the map shape tools report: one key per section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DivorceConsequences {
    /// The Islamic view on divorce.
    pub islamic_perspective: Vec<&'static str>,
    /// Practical and emotional fallout.
    pub practical_consequences: Vec<&'static str>,
    /// Paths to try before a final decision.
    pub alternatives: Vec<&'static str>,
}

impl DivorceConsequences {
    /// Renders the sections as a JSON map.
    #[must_use]
    pub fn to_json(&self) -> JsonValue {
        serde_json::to_value(self).expect("static data serializes")
    }
}

/// Returns the fixed divorce-consequence guidance.
#[must_use]
pub fn divorce_consequences() -> DivorceConsequences {
    DivorceConsequences {
        islamic_perspective: vec![
            "📜 Divorce is the most disliked permissible act in the eyes of Allah",
            "⚖️ It should be a last resort after all reconciliation attempts fail",
            "🤲 Iddah period is mandatory for reflection and possible reconciliation",
            "👥 Try family mediation before final decision",
            "💫 Patience and prayer bring peace",
        ],
        practical_consequences: vec![
            "👶 Children may face emotional and psychological impact",
            "💰 Financial stress and legal expenses",
            "🏠 Complications in property division",
            "👨‍👩‍👧‍👦 Tensions in family dynamics",
            "😔 Risk of emotional trauma and depression",
            "🔄 Trust issues in future relationships",
        ],
        alternatives: vec![
            "🏥 Seek professional marriage counseling",
            "👨‍🏫 Consult a religious scholar",
            "⏸️ Consider temporary separation",
            "📚 Learn from marriage improvement books/courses",
            "🤝 Involve elders for mediation",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_exactly_three_sections() {
        let json = divorce_consequences().to_json();
        let map = json.as_object().expect("object");
        assert_eq!(map.len(), 3);
        assert!(map.contains_key("islamic_perspective"));
        assert!(map.contains_key("practical_consequences"));
        assert!(map.contains_key("alternatives"));
    }

    #[test]
    fn practical_section_lists_six_points() {
        let consequences = divorce_consequences();
        assert_eq!(consequences.islamic_perspective.len(), 5);
        assert_eq!(consequences.practical_consequences.len(), 6);
        assert_eq!(consequences.alternatives.len(), 5);
    }
}
