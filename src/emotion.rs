//! Emotion node types — categories, intensity levels, and the musical record each node carries.
//!
//! # Invariants
//! - **Eight categories**, declared in canonical order (Joy first, Anticipation last).
//! - **Three intensity levels**, canonical order High (1.0) → Mid (0.6) → Low (0.3).
//! - `Mode::from_valence(0.0)` is [`Mode::Minor`]: only strictly positive valence is major.

use core::fmt;
use core::str::FromStr;

use crate::error::CatalogError;

/// Integer identifier of a node within one generated catalog.
///
/// Ids are assigned sequentially during generation and are only meaningful
/// against the catalog instance that produced them.
pub type EmotionId = usize;

// ─── EmotionCategory ────────────────────────────────────────────────────────

/// Primary emotion categories (Plutchik's eight).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EmotionCategory {
    /// Euphoria through contentment.
    Joy,
    /// Grief through wistfulness.
    Sadness,
    /// Rage through bitterness.
    Anger,
    /// Terror through nervousness.
    Fear,
    /// Amazement through curiosity.
    Surprise,
    /// Revulsion through disapproval.
    Disgust,
    /// Admiration through appreciation.
    Trust,
    /// Eagerness through impatience.
    Anticipation,
}

/// Number of primary categories.
pub const CATEGORY_COUNT: usize = 8;

impl EmotionCategory {
    /// All categories in canonical declaration order.
    pub const ALL: [EmotionCategory; CATEGORY_COUNT] = [
        EmotionCategory::Joy,
        EmotionCategory::Sadness,
        EmotionCategory::Anger,
        EmotionCategory::Fear,
        EmotionCategory::Surprise,
        EmotionCategory::Disgust,
        EmotionCategory::Trust,
        EmotionCategory::Anticipation,
    ];

    /// Lowercase name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionCategory::Joy => "joy",
            EmotionCategory::Sadness => "sadness",
            EmotionCategory::Anger => "anger",
            EmotionCategory::Fear => "fear",
            EmotionCategory::Surprise => "surprise",
            EmotionCategory::Disgust => "disgust",
            EmotionCategory::Trust => "trust",
            EmotionCategory::Anticipation => "anticipation",
        }
    }

    /// Position of this category in [`EmotionCategory::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for EmotionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmotionCategory {
    type Err = CatalogError;

    /// Case-insensitive parse of the lowercase category name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        EmotionCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

// ─── Intensity ──────────────────────────────────────────────────────────────

/// Discrete intensity level applied to a variant's base valence and arousal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Intensity {
    /// Full strength (1.0). Nodes keep the bare variant name.
    High,
    /// Medium strength (0.6). Nodes are suffixed `_mid`.
    Mid,
    /// Low strength (0.3). Nodes are suffixed `_low`.
    Low,
}

/// Number of intensity levels per variant.
pub const INTENSITY_LEVELS: usize = 3;

impl Intensity {
    /// Levels in generation order. This order feeds id assignment.
    pub const ALL: [Intensity; INTENSITY_LEVELS] = [Intensity::High, Intensity::Mid, Intensity::Low];

    /// Scaling factor for this level.
    pub fn value(self) -> f64 {
        match self {
            Intensity::High => 1.0,
            Intensity::Mid => 0.6,
            Intensity::Low => 0.3,
        }
    }

    /// Name suffix for this level (`""`, `"_mid"` or `"_low"`).
    pub fn suffix(self) -> &'static str {
        match self {
            Intensity::High => "",
            Intensity::Mid => "_mid",
            Intensity::Low => "_low",
        }
    }

    /// Node name for a variant at this level.
    pub fn apply_suffix(self, base: &str) -> String {
        let mut name = String::with_capacity(base.len() + 4);
        name.push_str(base);
        name.push_str(self.suffix());
        name
    }
}

// ─── Musical attributes ─────────────────────────────────────────────────────

/// Tonal mode selected by the sign of valence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Mode {
    /// Positive valence.
    Major,
    /// Zero or negative valence.
    Minor,
}

impl Mode {
    /// `Major` iff `valence > 0.0`; exactly zero resolves to `Minor`.
    pub fn from_valence(valence: f64) -> Self {
        if valence > 0.0 {
            Mode::Major
        } else {
            Mode::Minor
        }
    }

    /// `"major"` or `"minor"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Major => "major",
            Mode::Minor => "minor",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Musical parameters derived from a node at generation time.
///
/// Downstream music generation reads only this record.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MusicalAttributes {
    /// Multiplier on the base tempo, centred on 1.0.
    ///
    /// ```text
    /// tempo_modifier = 1.0 + (scaled_arousal − 0.5) × 0.5
    /// ```
    pub tempo_modifier: f64,
    /// Major for positive valence, minor otherwise.
    pub mode: Mode,
    /// Equal to the node's intensity.
    pub dynamics: f64,
}

impl MusicalAttributes {
    /// Derive the record from scaled valence/arousal and the intensity factor.
    pub fn derive(scaled_valence: f64, scaled_arousal: f64, intensity: f64) -> Self {
        Self {
            tempo_modifier: 1.0 + (scaled_arousal - 0.5) * 0.5,
            mode: Mode::from_valence(scaled_valence),
            dynamics: intensity,
        }
    }
}

// ─── EmotionNode ────────────────────────────────────────────────────────────

/// A point in (valence, arousal, intensity) space.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmotionPoint {
    /// Signed positivity, [-1.0, 1.0].
    pub valence: f64,
    /// Activation, [0.0, 1.0].
    pub arousal: f64,
    /// Intensity factor, [0.0, 1.0].
    pub intensity: f64,
}

impl EmotionPoint {
    /// Construct a point from its three coordinates.
    pub fn new(valence: f64, arousal: f64, intensity: f64) -> Self {
        Self { valence, arousal, intensity }
    }

    /// Euclidean distance over unnormalised axes.
    ///
    /// Valence spans twice the range of the other two axes, so valence
    /// differences weigh roughly double. The axes are deliberately not rescaled.
    pub fn distance(&self, other: &Self) -> f64 {
        let dv = self.valence - other.valence;
        let da = self.arousal - other.arousal;
        let di = self.intensity - other.intensity;
        (dv * dv + da * da + di * di).sqrt()
    }
}

/// One entry of the emotion thesaurus.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmotionNode {
    /// Sequential id, unique within the owning catalog.
    pub id: EmotionId,
    /// Variant name, suffixed `_mid` / `_low` below full intensity.
    pub name: String,
    /// Primary category.
    pub category: EmotionCategory,
    /// Discrete level the node was generated at.
    pub level: Intensity,
    /// Intensity factor: 1.0, 0.6 or 0.3.
    pub intensity: f64,
    /// Base valence × intensity.
    pub valence: f64,
    /// Base arousal × intensity.
    pub arousal: f64,
    /// Ids within the generation-time adjacency threshold, canonical order, never self.
    pub related_emotions: Vec<EmotionId>,
    /// Tempo, mode and dynamics derived at generation time.
    pub musical_attributes: MusicalAttributes,
}

impl EmotionNode {
    /// This node's coordinates in emotional space.
    pub fn point(&self) -> EmotionPoint {
        EmotionPoint::new(self.valence, self.arousal, self.intensity)
    }

    /// Distance to another node in (valence, arousal, intensity) space.
    pub fn distance(&self, other: &EmotionNode) -> f64 {
        self.point().distance(&other.point())
    }

    /// Name without the intensity suffix.
    pub fn base_name(&self) -> &str {
        self.name
            .strip_suffix(self.level.suffix())
            .unwrap_or(&self.name)
    }
}
