//! Integration tests for building catalogs from caller-supplied tables and configs.
//!
//! A malformed table or threshold must produce a `CatalogError` and no catalog.

use emotion_thesaurus::catalog::{CatalogConfig, EmotionCatalog, NODE_COUNT};
use emotion_thesaurus::emotion::EmotionCategory;
use emotion_thesaurus::error::CatalogError;
use emotion_thesaurus::table::{CategoryVariants, Variant, BASE_TABLE};

// ─── helpers ─────────────────────────────────────────────────────────────────

fn rotated_table() -> Vec<CategoryVariants> {
    // Same rows, Anticipation first.
    let mut rows = BASE_TABLE.to_vec();
    rows.rotate_right(1);
    rows
}

// ─── accepted tables ─────────────────────────────────────────────────────────

#[test]
fn test_builtin_table_via_from_table_matches_new() {
    let custom = EmotionCatalog::from_table(&BASE_TABLE, CatalogConfig::default())
        .expect("built-in table is valid");
    let builtin = EmotionCatalog::new();
    assert_eq!(
        custom.iter().collect::<Vec<_>>(),
        builtin.iter().collect::<Vec<_>>()
    );
}

#[test]
fn test_row_order_determines_ids() {
    let c = EmotionCatalog::from_table(&rotated_table(), CatalogConfig::default())
        .expect("rotated table is still valid");
    assert_eq!(c.len(), NODE_COUNT);
    let first = c.get_emotion(0).unwrap();
    assert_eq!(first.name, "eagerness");
    assert_eq!(first.category, EmotionCategory::Anticipation);
    assert_eq!(c.find_emotion_by_name("euphoria").unwrap().id, 27);
}

#[test]
fn test_adjacency_is_independent_of_row_order() {
    let rotated = EmotionCatalog::from_table(&rotated_table(), CatalogConfig::default()).unwrap();
    let builtin = EmotionCatalog::global();
    for node in builtin.iter() {
        let other = rotated.find_emotion_by_name(&node.name).unwrap();
        let mut a: Vec<&str> = builtin.related(node.id).map(|n| n.name.as_str()).collect();
        let mut b: Vec<&str> = rotated.related(other.id).map(|n| n.name.as_str()).collect();
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b, "{}", node.name);
    }
}

#[test]
fn test_edited_variant_flows_through_generation() {
    let mut table = BASE_TABLE;
    table[4].variants[5] = Variant::new("jolt", 0.05, 0.85);
    let c = EmotionCatalog::from_table(&table, CatalogConfig::default()).unwrap();
    assert!(c.find_emotion_by_name("startle").is_none());
    let jolt_mid = c.find_emotion_by_name("JOLT_MID").unwrap();
    assert!((jolt_mid.valence - 0.03).abs() < 1e-9);
    assert_eq!(jolt_mid.musical_attributes.mode.as_str(), "major");
}

// ─── rejected tables ─────────────────────────────────────────────────────────

#[test]
fn test_missing_row_is_fatal() {
    let err = EmotionCatalog::from_table(&BASE_TABLE[1..], CatalogConfig::default()).unwrap_err();
    assert_eq!(err, CatalogError::CategoryCount { expected: 8, found: 7 });
}

#[test]
fn test_extra_row_is_fatal() {
    let mut rows = BASE_TABLE.to_vec();
    rows.push(BASE_TABLE[0]);
    let err = EmotionCatalog::from_table(&rows, CatalogConfig::default()).unwrap_err();
    assert_eq!(err, CatalogError::CategoryCount { expected: 8, found: 9 });
}

#[test]
fn test_repeated_category_is_fatal() {
    let mut table = BASE_TABLE;
    table[3].category = EmotionCategory::Sadness;
    let err = EmotionCatalog::from_table(&table, CatalogConfig::default()).unwrap_err();
    assert_eq!(err, CatalogError::DuplicateCategory(EmotionCategory::Sadness));
}

#[test]
fn test_suffix_collision_is_fatal() {
    // A base name that equals another variant's generated mid name.
    let mut table = BASE_TABLE;
    table[1].variants[8] = Variant::new("grief_mid", -0.2, 0.15);
    let err = EmotionCatalog::from_table(&table, CatalogConfig::default()).unwrap_err();
    assert_eq!(err, CatalogError::DuplicateName("grief_mid".to_string()));
}

#[test]
fn test_arousal_below_zero_is_fatal() {
    let mut table = BASE_TABLE;
    table[0].variants[6] = Variant::new("serenity", 0.6, -0.2);
    let err = EmotionCatalog::from_table(&table, CatalogConfig::default()).unwrap_err();
    assert!(err.to_string().contains("serenity"), "{}", err);
}

#[test]
fn test_invalid_config_is_fatal() {
    let cfg = CatalogConfig { adjacency_threshold: -0.35, nearby_threshold: 0.3 };
    let err = EmotionCatalog::from_table(&BASE_TABLE, cfg).unwrap_err();
    assert_eq!(
        err,
        CatalogError::InvalidThreshold { name: "adjacency_threshold", value: -0.35 }
    );
}

// ─── config ──────────────────────────────────────────────────────────────────

#[test]
fn test_custom_nearby_threshold_drives_default_query() {
    let cfg = CatalogConfig { adjacency_threshold: 0.35, nearby_threshold: 0.1 };
    let c = EmotionCatalog::with_config(cfg).unwrap();
    assert_eq!(c.config().nearby_threshold, 0.1);
    let narrow = c.nearby_emotions(90);
    let explicit = c.get_nearby_emotions(90, 0.1);
    assert_eq!(narrow, explicit);
    assert!(narrow.len() <= c.get_emotion(90).unwrap().related_emotions.len());
}
