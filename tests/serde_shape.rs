//! JSON shape of nodes and compiled parameters handed to downstream consumers.
//!
//! Run with: `cargo test --features serde`

#[cfg(feature = "serde")]
mod tests {
    use emotion_thesaurus::catalog::EmotionCatalog;
    use emotion_thesaurus::rule_break::{rule_breaks, MusicalParams};

    fn catalog() -> &'static EmotionCatalog {
        EmotionCatalog::global()
    }

    #[test]
    fn test_node_json_uses_lowercase_tokens() {
        let grief = catalog().find_emotion_by_name("grief").unwrap();
        let json = serde_json::to_value(grief).expect("node serialises");

        assert_eq!(json["id"], 27);
        assert_eq!(json["name"], "grief");
        assert_eq!(json["category"], "sadness");
        assert_eq!(json["level"], "high");
        assert_eq!(json["musical_attributes"]["mode"], "minor");
        assert_eq!(json["musical_attributes"]["dynamics"], 1.0);
        assert!(json["related_emotions"].is_array());
    }

    #[test]
    fn test_rule_break_json_is_tagged_by_rule() {
        let rage = catalog().find_emotion_by_name("rage").unwrap();
        let breaks = rule_breaks(rage);
        let json = serde_json::to_value(&breaks[0]).unwrap();
        assert_eq!(json["kind"], "dynamics");
        assert_eq!(json["impact"]["rule"], "dynamics");
        assert_eq!(json["impact"]["velocity_max"], 127);
        assert_eq!(json["description"], "Extreme dynamic contrasts");
        assert_eq!(json["severity"], 1.0);
    }

    #[test]
    fn test_params_json_has_nulls_for_unbroken_rules() {
        let calm = catalog().find_emotion_by_name("serenity_low").unwrap();
        let json = serde_json::to_value(MusicalParams::for_node(calm)).unwrap();
        assert_eq!(json["mode"], "major");
        assert!(json["velocity_min"].is_null());
        assert!(json["syncopation_level"].is_null());
    }
}
