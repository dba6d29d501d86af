//! Rule-break advisor — which musical conventions an emotion should break.
//!
//! Strong emotions are expressed by departing from convention: extreme
//! dynamics for high intensity, dissonance for strongly negative valence,
//! irregular rhythm for high arousal. Each departure is a [`RuleBreak`] with a
//! severity and a typed [`MusicalImpact`].
//!
//! [`MusicalParams::compile`] flattens a node's [`MusicalAttributes`] and its
//! rule breaks into one record for the downstream sequencer.
//!
//! | Rule | Fires when | Severity | Impact |
//! |------|-----------|----------|--------|
//! | Dynamics | `intensity > 0.8` | intensity | velocity 10–127, sudden changes |
//! | Harmony | `valence < -0.5` | \|valence\| | dissonance, cluster probability = \|valence\| |
//! | Rhythm | `arousal > 0.7` | arousal | syncopation = arousal, irregular meters |
//!
//! [`MusicalAttributes`]: crate::emotion::MusicalAttributes

use heapless::Vec as HVec;

use crate::emotion::{EmotionNode, Mode};

/// Intensity above which dynamics rules break.
pub const DYNAMICS_INTENSITY_THRESHOLD: f64 = 0.8;

/// Valence below which harmony rules break.
pub const HARMONY_VALENCE_THRESHOLD: f64 = -0.5;

/// Arousal above which rhythm rules break.
pub const RHYTHM_AROUSAL_THRESHOLD: f64 = 0.7;

/// Most rule breaks any single node can produce (one per [`RuleKind`]).
pub const MAX_RULE_BREAKS: usize = 3;

/// Minimum MIDI velocity when dynamics break.
pub const VELOCITY_MIN: u8 = 10;

/// Maximum MIDI velocity when dynamics break.
pub const VELOCITY_MAX: u8 = 127;

/// The musical convention being broken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RuleKind {
    /// Loudness conventions.
    Dynamics,
    /// Consonance conventions.
    Harmony,
    /// Metric regularity.
    Rhythm,
}

impl RuleKind {
    /// `"dynamics"`, `"harmony"` or `"rhythm"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Dynamics => "dynamics",
            RuleKind::Harmony => "harmony",
            RuleKind::Rhythm => "rhythm",
        }
    }
}

/// Concrete parameter changes carried by a rule break.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "rule", rename_all = "snake_case"))]
pub enum MusicalImpact {
    /// Extreme dynamic contrasts.
    Dynamics {
        /// Quietest allowed velocity.
        velocity_min: u8,
        /// Loudest allowed velocity.
        velocity_max: u8,
        /// Permit abrupt jumps between the two.
        sudden_changes: bool,
    },
    /// Dissonant intervals and clusters.
    Harmony {
        /// Permit dissonant intervals.
        allow_dissonance: bool,
        /// Probability of voicing a tone cluster, [0.0, 1.0].
        cluster_probability: f64,
    },
    /// Irregular rhythms and syncopation.
    Rhythm {
        /// Degree of syncopation, [0.0, 1.0].
        syncopation_level: f64,
        /// Permit irregular meters.
        irregular_meters: bool,
    },
}

/// One broken convention for an emotion.
///
/// Output only: with the `serde` feature it serialises, but it is never read
/// back. Recompute it from the node with [`rule_breaks`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RuleBreak {
    /// Which convention breaks.
    pub kind: RuleKind,
    /// How strongly, [0.0, 1.0].
    pub severity: f64,
    /// Human-readable summary.
    pub description: &'static str,
    /// Parameter changes.
    pub impact: MusicalImpact,
}

/// Rule breaks for a node, in dynamics → harmony → rhythm order.
///
/// Returns an empty list for calm, mild, non-negative emotions.
pub fn rule_breaks(node: &EmotionNode) -> HVec<RuleBreak, MAX_RULE_BREAKS> {
    let candidates = [
        (node.intensity > DYNAMICS_INTENSITY_THRESHOLD).then(|| RuleBreak {
            kind: RuleKind::Dynamics,
            severity: node.intensity,
            description: "Extreme dynamic contrasts",
            impact: MusicalImpact::Dynamics {
                velocity_min: VELOCITY_MIN,
                velocity_max: VELOCITY_MAX,
                sudden_changes: true,
            },
        }),
        (node.valence < HARMONY_VALENCE_THRESHOLD).then(|| RuleBreak {
            kind: RuleKind::Harmony,
            severity: node.valence.abs(),
            description: "Dissonant intervals and clusters",
            impact: MusicalImpact::Harmony {
                allow_dissonance: true,
                cluster_probability: node.valence.abs(),
            },
        }),
        (node.arousal > RHYTHM_AROUSAL_THRESHOLD).then(|| RuleBreak {
            kind: RuleKind::Rhythm,
            severity: node.arousal,
            description: "Irregular rhythms and syncopation",
            impact: MusicalImpact::Rhythm {
                syncopation_level: node.arousal,
                irregular_meters: true,
            },
        }),
    ];

    // At most one candidate per kind, so capacity is never exceeded.
    candidates.into_iter().flatten().collect()
}

/// Flat parameter record handed to the sequencer.
///
/// The first three fields always come from the node; the rest are `None`
/// unless a rule break supplied them.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MusicalParams {
    /// From [`MusicalAttributes::tempo_modifier`](crate::emotion::MusicalAttributes::tempo_modifier).
    pub tempo_modifier: f64,
    /// From [`MusicalAttributes::mode`](crate::emotion::MusicalAttributes::mode).
    pub mode: Mode,
    /// From [`MusicalAttributes::dynamics`](crate::emotion::MusicalAttributes::dynamics).
    pub dynamics: f64,
    /// Quietest velocity (dynamics break).
    pub velocity_min: Option<u8>,
    /// Loudest velocity (dynamics break).
    pub velocity_max: Option<u8>,
    /// Abrupt dynamic changes (dynamics break).
    pub sudden_changes: Option<bool>,
    /// Dissonance allowed (harmony break).
    pub allow_dissonance: Option<bool>,
    /// Tone-cluster probability (harmony break).
    pub cluster_probability: Option<f64>,
    /// Syncopation level (rhythm break).
    pub syncopation_level: Option<f64>,
    /// Irregular meters allowed (rhythm break).
    pub irregular_meters: Option<bool>,
}

impl MusicalParams {
    /// Merge a node's musical attributes with its rule-break impacts.
    ///
    /// Later breaks overwrite earlier ones field by field.
    pub fn compile(node: &EmotionNode, breaks: &[RuleBreak]) -> Self {
        let attrs = &node.musical_attributes;
        let mut params = Self {
            tempo_modifier: attrs.tempo_modifier,
            mode: attrs.mode,
            dynamics: attrs.dynamics,
            velocity_min: None,
            velocity_max: None,
            sudden_changes: None,
            allow_dissonance: None,
            cluster_probability: None,
            syncopation_level: None,
            irregular_meters: None,
        };

        for rb in breaks {
            match rb.impact {
                MusicalImpact::Dynamics { velocity_min, velocity_max, sudden_changes } => {
                    params.velocity_min = Some(velocity_min);
                    params.velocity_max = Some(velocity_max);
                    params.sudden_changes = Some(sudden_changes);
                }
                MusicalImpact::Harmony { allow_dissonance, cluster_probability } => {
                    params.allow_dissonance = Some(allow_dissonance);
                    params.cluster_probability = Some(cluster_probability);
                }
                MusicalImpact::Rhythm { syncopation_level, irregular_meters } => {
                    params.syncopation_level = Some(syncopation_level);
                    params.irregular_meters = Some(irregular_meters);
                }
            }
        }

        params
    }

    /// Shorthand for `compile(node, &rule_breaks(node))`.
    pub fn for_node(node: &EmotionNode) -> Self {
        Self::compile(node, &rule_breaks(node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EmotionCatalog;

    fn node(name: &str) -> EmotionNode {
        EmotionCatalog::global()
            .find_emotion_by_name(name)
            .cloned()
            .unwrap_or_else(|| panic!("no node named {name}"))
    }

    #[test]
    fn test_terror_breaks_every_rule() {
        let breaks = rule_breaks(&node("terror"));
        let kinds: Vec<RuleKind> = breaks.iter().map(|b| b.kind).collect();
        assert_eq!(kinds, vec![RuleKind::Dynamics, RuleKind::Harmony, RuleKind::Rhythm]);
        assert!((breaks[1].severity - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_low_intensity_breaks_nothing() {
        // terror_low: valence -0.27, arousal 0.3, intensity 0.3
        assert!(rule_breaks(&node("terror_low")).is_empty());
    }

    #[test]
    fn test_euphoria_breaks_dynamics_and_rhythm_only() {
        let breaks = rule_breaks(&node("euphoria"));
        let kinds: Vec<RuleKind> = breaks.iter().map(|b| b.kind).collect();
        assert_eq!(kinds, vec![RuleKind::Dynamics, RuleKind::Rhythm]);
    }

    #[test]
    fn test_thresholds_are_strict() {
        // hostility: valence -0.6 × 1.0, arousal 0.7 × 1.0 — rhythm does not fire at exactly 0.7
        let breaks = rule_breaks(&node("hostility"));
        assert!(breaks.iter().all(|b| b.kind != RuleKind::Rhythm));
        // gloom: valence exactly -0.5 — harmony does not fire
        let breaks = rule_breaks(&node("gloom"));
        assert!(breaks.iter().all(|b| b.kind != RuleKind::Harmony));
    }

    #[test]
    fn test_compile_carries_attributes_and_impacts() {
        let n = node("rage");
        let p = MusicalParams::for_node(&n);
        assert_eq!(p.tempo_modifier, n.musical_attributes.tempo_modifier);
        assert_eq!(p.mode, Mode::Minor);
        assert_eq!(p.dynamics, 1.0);
        assert_eq!(p.velocity_min, Some(VELOCITY_MIN));
        assert_eq!(p.velocity_max, Some(VELOCITY_MAX));
        assert_eq!(p.allow_dissonance, Some(true));
        assert_eq!(p.cluster_probability, Some(0.8));
        assert_eq!(p.syncopation_level, Some(1.0));
        assert_eq!(p.irregular_meters, Some(true));
    }

    #[test]
    fn test_compile_without_breaks_leaves_optional_fields_empty() {
        let n = node("serenity_low");
        let p = MusicalParams::compile(&n, &[]);
        assert_eq!(p.mode, Mode::Major);
        assert!(p.velocity_min.is_none());
        assert!(p.cluster_probability.is_none());
        assert!(p.syncopation_level.is_none());
    }
}
