//! Compiled-in base table: eight categories × nine named variants.
//!
//! Each variant carries its full-intensity valence and arousal. The generator
//! crosses this table with the three [`Intensity`](crate::emotion::Intensity)
//! levels to produce 216 nodes.
//!
//! # Invariants
//! - **Shape** — `[CategoryVariants; 8]` of `[Variant; 9]`; any other shape does not type-check.
//! - **Coverage** — every [`EmotionCategory`] appears exactly once (checked at compile time).
//! - **Ranges** — base valence ∈ [-1, 1], base arousal ∈ [0, 1].
//!
//! The row order here is the canonical iteration order, and so fixes every node id.
//! Reordering or editing rows renumbers the catalog.

use hashbrown::HashSet;

use crate::emotion::{EmotionCategory, Intensity, CATEGORY_COUNT};
use crate::error::CatalogError;

/// Named variants per category.
pub const VARIANTS_PER_CATEGORY: usize = 9;

/// A named emotion within a category, before intensity scaling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Variant {
    /// Canonical lowercase name, e.g. `"euphoria"`.
    pub name: &'static str,
    /// Valence at full intensity, [-1.0, 1.0].
    pub valence: f64,
    /// Arousal at full intensity, [0.0, 1.0].
    pub arousal: f64,
}

impl Variant {
    /// Construct a variant row.
    pub const fn new(name: &'static str, valence: f64, arousal: f64) -> Self {
        Self { name, valence, arousal }
    }
}

/// One category row of the base table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CategoryVariants {
    /// The category these variants belong to.
    pub category: EmotionCategory,
    /// Exactly nine variants in declared order.
    pub variants: [Variant; VARIANTS_PER_CATEGORY],
}

const fn v(name: &'static str, valence: f64, arousal: f64) -> Variant {
    Variant::new(name, valence, arousal)
}

const TABLE: [CategoryVariants; CATEGORY_COUNT] = [
    CategoryVariants {
        category: EmotionCategory::Joy,
        variants: [
            v("euphoria", 1.0, 1.0),
            v("ecstasy", 0.95, 0.95),
            v("elation", 0.85, 0.9),
            v("delight", 0.8, 0.7),
            v("happiness", 0.7, 0.6),
            v("contentment", 0.7, 0.3),
            v("serenity", 0.6, 0.2),
            v("satisfaction", 0.5, 0.4),
            v("cheerfulness", 0.6, 0.5),
        ],
    },
    CategoryVariants {
        category: EmotionCategory::Sadness,
        variants: [
            v("grief", -0.9, 0.7),
            v("despair", -0.95, 0.6),
            v("sorrow", -0.8, 0.5),
            v("melancholy", -0.6, 0.3),
            v("gloom", -0.5, 0.4),
            v("disappointment", -0.4, 0.3),
            v("loneliness", -0.6, 0.2),
            v("nostalgia", -0.3, 0.2),
            v("wistfulness", -0.2, 0.15),
        ],
    },
    CategoryVariants {
        category: EmotionCategory::Anger,
        variants: [
            v("rage", -0.8, 1.0),
            v("fury", -0.85, 0.95),
            v("wrath", -0.75, 0.9),
            v("hostility", -0.6, 0.7),
            v("resentment", -0.5, 0.5),
            v("annoyance", -0.4, 0.5),
            v("irritation", -0.35, 0.45),
            v("frustration", -0.45, 0.55),
            v("bitterness", -0.5, 0.4),
        ],
    },
    CategoryVariants {
        category: EmotionCategory::Fear,
        variants: [
            v("terror", -0.9, 1.0),
            v("panic", -0.85, 0.95),
            v("horror", -0.8, 0.9),
            v("dread", -0.7, 0.7),
            v("anxiety", -0.5, 0.8),
            v("worry", -0.4, 0.6),
            v("unease", -0.3, 0.5),
            v("apprehension", -0.35, 0.55),
            v("nervousness", -0.3, 0.65),
        ],
    },
    CategoryVariants {
        category: EmotionCategory::Surprise,
        variants: [
            v("amazement", 0.6, 0.95),
            v("astonishment", 0.5, 0.9),
            v("awe", 0.4, 0.7),
            v("wonder", 0.5, 0.6),
            v("shock", -0.1, 0.9),
            v("startle", 0.0, 0.85),
            v("bewilderment", -0.1, 0.6),
            v("confusion", -0.2, 0.5),
            v("curiosity", 0.3, 0.5),
        ],
    },
    CategoryVariants {
        category: EmotionCategory::Disgust,
        variants: [
            v("revulsion", -0.9, 0.8),
            v("loathing", -0.85, 0.7),
            v("abhorrence", -0.8, 0.75),
            v("contempt", -0.6, 0.5),
            v("aversion", -0.5, 0.45),
            v("distaste", -0.4, 0.35),
            v("dislike", -0.3, 0.3),
            v("disapproval", -0.35, 0.4),
            v("repugnance", -0.7, 0.6),
        ],
    },
    CategoryVariants {
        category: EmotionCategory::Trust,
        variants: [
            v("admiration", 0.8, 0.5),
            v("adoration", 0.85, 0.6),
            v("devotion", 0.75, 0.55),
            v("faith", 0.7, 0.4),
            v("confidence", 0.6, 0.5),
            v("reliance", 0.5, 0.35),
            v("acceptance", 0.4, 0.3),
            v("respect", 0.55, 0.4),
            v("appreciation", 0.5, 0.45),
        ],
    },
    CategoryVariants {
        category: EmotionCategory::Anticipation,
        variants: [
            v("eagerness", 0.7, 0.85),
            v("excitement", 0.75, 0.9),
            v("hope", 0.6, 0.6),
            v("expectation", 0.4, 0.55),
            v("vigilance", 0.1, 0.7),
            v("interest", 0.35, 0.5),
            v("optimism", 0.65, 0.55),
            v("yearning", 0.2, 0.6),
            v("impatience", -0.1, 0.7),
        ],
    },
];

/// The built-in base table in canonical order.
pub static BASE_TABLE: [CategoryVariants; CATEGORY_COUNT] = TABLE;

const fn covers_every_category_once(table: &[CategoryVariants; CATEGORY_COUNT]) -> bool {
    let mut seen = [false; CATEGORY_COUNT];
    let mut i = 0;
    while i < CATEGORY_COUNT {
        let idx = table[i].category as usize;
        if seen[idx] {
            return false;
        }
        seen[idx] = true;
        i += 1;
    }
    true
}

const _: () = assert!(
    covers_every_category_once(&TABLE),
    "base table must list every emotion category exactly once"
);

/// Check a caller-supplied table before generation.
///
/// Rejects anything other than eight rows with no repeated category (eight
/// rows without a repeat cover all eight), empty names, generated names that
/// collide after case folding, and base values that are non-finite or out of range.
pub fn validate_table(table: &[CategoryVariants]) -> Result<(), CatalogError> {
    if table.len() != CATEGORY_COUNT {
        return Err(CatalogError::CategoryCount {
            expected: CATEGORY_COUNT,
            found: table.len(),
        });
    }

    let mut seen = [false; CATEGORY_COUNT];
    for row in table {
        let idx = row.category.index();
        if seen[idx] {
            return Err(CatalogError::DuplicateCategory(row.category));
        }
        seen[idx] = true;
    }

    let mut names: HashSet<String> = HashSet::new();
    for row in table {
        for (index, variant) in row.variants.iter().enumerate() {
            if variant.name.trim().is_empty() {
                return Err(CatalogError::EmptyName { category: row.category, index });
            }
            check_range(variant.name, "valence", variant.valence, -1.0, 1.0)?;
            check_range(variant.name, "arousal", variant.arousal, 0.0, 1.0)?;

            for level in Intensity::ALL {
                let name = level.apply_suffix(variant.name).to_lowercase();
                if !names.insert(name.clone()) {
                    return Err(CatalogError::DuplicateName(name));
                }
            }
        }
    }

    Ok(())
}

fn check_range(
    name: &str,
    axis: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), CatalogError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(CatalogError::ValueOutOfRange {
            name: name.to_string(),
            axis,
            value,
            min,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_is_valid() {
        assert_eq!(validate_table(&BASE_TABLE), Ok(()));
    }

    #[test]
    fn test_builtin_table_starts_with_euphoria() {
        let first = BASE_TABLE[0].variants[0];
        assert_eq!(BASE_TABLE[0].category, EmotionCategory::Joy);
        assert_eq!(first, Variant::new("euphoria", 1.0, 1.0));
    }

    #[test]
    fn test_builtin_table_follows_category_declaration_order() {
        for (row, category) in BASE_TABLE.iter().zip(EmotionCategory::ALL) {
            assert_eq!(row.category, category);
        }
    }

    #[test]
    fn test_short_table_rejected() {
        let err = validate_table(&BASE_TABLE[..7]).unwrap_err();
        assert_eq!(err, CatalogError::CategoryCount { expected: 8, found: 7 });
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let mut table = BASE_TABLE;
        table[7].category = EmotionCategory::Joy;
        assert_eq!(
            validate_table(&table),
            Err(CatalogError::DuplicateCategory(EmotionCategory::Joy))
        );
    }

    #[test]
    fn test_out_of_range_valence_rejected() {
        let mut table = BASE_TABLE;
        table[2].variants[4] = Variant::new("resentment", -1.5, 0.5);
        match validate_table(&table) {
            Err(CatalogError::ValueOutOfRange { name, axis, .. }) => {
                assert_eq!(name, "resentment");
                assert_eq!(axis, "valence");
            }
            other => panic!("expected ValueOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_nan_arousal_rejected() {
        let mut table = BASE_TABLE;
        table[0].variants[0] = Variant::new("euphoria", 1.0, f64::NAN);
        assert!(matches!(
            validate_table(&table),
            Err(CatalogError::ValueOutOfRange { axis: "arousal", .. })
        ));
    }

    #[test]
    fn test_case_folded_duplicate_name_rejected() {
        let mut table = BASE_TABLE;
        table[6].variants[8] = Variant::new("EUPHORIA", 0.5, 0.45);
        assert_eq!(
            validate_table(&table),
            Err(CatalogError::DuplicateName("euphoria".to_string()))
        );
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut table = BASE_TABLE;
        table[3].variants[2] = Variant::new("  ", -0.8, 0.9);
        assert_eq!(
            validate_table(&table),
            Err(CatalogError::EmptyName { category: EmotionCategory::Fear, index: 2 })
        );
    }
}
