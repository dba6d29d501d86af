//! The emotion catalog — generation, storage, and similarity queries.
//!
//! # Two thresholds
//!
//! | Constant | Value | Used by |
//! |----------|-------|---------|
//! | [`ADJACENCY_THRESHOLD`] | 0.35 | the one-off adjacency pass that fills `related_emotions` |
//! | [`NEARBY_THRESHOLD`] | 0.30 | the default radius of [`EmotionCatalog::nearby_emotions`] |
//!
//! `related_emotions` is therefore **not** what the default nearby query
//! returns; it is the wider 0.35 neighbourhood.
//!
//! # Invariants
//! - **Cardinality** — exactly [`NODE_COUNT`] nodes, ids contiguous `0..NODE_COUNT`.
//! - **Ordering** — ids follow category → variant → intensity iteration order.
//! - **Strict radius** — a node is nearby iff `distance < threshold`; never the source itself.
//! - **Immutability** — no `&mut self` method exists; the catalog is `Send + Sync`.

use std::sync::OnceLock;

use hashbrown::HashMap;

use crate::emotion::{
    EmotionCategory, EmotionId, EmotionNode, EmotionPoint, Intensity, MusicalAttributes,
    CATEGORY_COUNT, INTENSITY_LEVELS,
};
use crate::error::CatalogError;
use crate::table::{validate_table, CategoryVariants, BASE_TABLE, VARIANTS_PER_CATEGORY};

/// Total number of nodes: 8 categories × 9 variants × 3 intensity levels.
pub const NODE_COUNT: usize = CATEGORY_COUNT * VARIANTS_PER_CATEGORY * INTENSITY_LEVELS;

/// Radius used once at generation time to link `related_emotions`.
pub const ADJACENCY_THRESHOLD: f64 = 0.35;

/// Default radius for runtime nearby queries.
pub const NEARBY_THRESHOLD: f64 = 0.3;

// ─── CatalogConfig ──────────────────────────────────────────────────────────

/// Similarity radii used by a catalog.
///
/// Default thresholds:
/// - adjacency (generation-time): 0.35
/// - nearby (runtime default): 0.30
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogConfig {
    /// Radius for the adjacency pass that fills `related_emotions`.
    pub adjacency_threshold: f64,
    /// Radius used by [`EmotionCatalog::nearby_emotions`].
    pub nearby_threshold: f64,
}

impl CatalogConfig {
    /// Construct the standard config with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Both thresholds must be finite and strictly positive.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (name, value) in [
            ("adjacency_threshold", self.adjacency_threshold),
            ("nearby_threshold", self.nearby_threshold),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(CatalogError::InvalidThreshold { name, value });
            }
        }
        Ok(())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            adjacency_threshold: ADJACENCY_THRESHOLD,
            nearby_threshold: NEARBY_THRESHOLD,
        }
    }
}

// ─── EmotionCatalog ─────────────────────────────────────────────────────────

/// The 216-node emotion thesaurus.
///
/// Built in full by the constructor and read-only afterwards. Queries hand out
/// borrows of nodes the catalog owns; related nodes are referenced by id.
///
/// ```rust
/// use emotion_thesaurus::catalog::EmotionCatalog;
/// use emotion_thesaurus::emotion::Mode;
///
/// let catalog = EmotionCatalog::new();
/// let node = catalog.find_emotion_by_name("Euphoria").unwrap();
/// assert_eq!(node.id, 0);
/// assert_eq!(node.musical_attributes.mode, Mode::Major);
/// assert!(catalog.get_emotion(9999).is_none());
/// ```
#[derive(Clone, Debug)]
pub struct EmotionCatalog {
    /// Nodes indexed by id.
    nodes: Vec<EmotionNode>,
    /// Lowercased name → first id carrying that name.
    name_index: HashMap<String, EmotionId>,
    /// Thresholds the catalog was built with.
    config: CatalogConfig,
}

impl EmotionCatalog {
    /// Build the catalog from the compiled-in table with default thresholds.
    pub fn new() -> Self {
        Self::generate(&BASE_TABLE, CatalogConfig::default())
    }

    /// Build the compiled-in table with custom thresholds.
    pub fn with_config(config: CatalogConfig) -> Result<Self, CatalogError> {
        config.validate()?;
        Ok(Self::generate(&BASE_TABLE, config))
    }

    /// Build from a caller-supplied table.
    ///
    /// The table is validated first; a malformed table yields an error and no
    /// catalog at all.
    pub fn from_table(
        table: &[CategoryVariants],
        config: CatalogConfig,
    ) -> Result<Self, CatalogError> {
        config.validate()?;
        if let Err(e) = validate_table(table) {
            tracing::warn!(error = %e, "rejected emotion base table");
            return Err(e);
        }
        Ok(Self::generate(table, config))
    }

    /// Process-wide catalog built from the compiled-in table on first use.
    pub fn global() -> &'static EmotionCatalog {
        static CATALOG: OnceLock<EmotionCatalog> = OnceLock::new();
        CATALOG.get_or_init(EmotionCatalog::new)
    }

    /// Expand `table` into nodes, then link each node to its neighbours.
    ///
    /// Callers guarantee `table` passed [`validate_table`] (or is [`BASE_TABLE`]).
    fn generate(table: &[CategoryVariants], config: CatalogConfig) -> Self {
        let mut nodes: Vec<EmotionNode> = Vec::with_capacity(NODE_COUNT);
        let mut name_index: HashMap<String, EmotionId> = HashMap::with_capacity(NODE_COUNT);

        for row in table {
            for variant in row.variants.iter() {
                for level in Intensity::ALL {
                    let id = nodes.len();
                    let intensity = level.value();
                    let valence = variant.valence * intensity;
                    let arousal = variant.arousal * intensity;
                    let name = level.apply_suffix(variant.name);

                    name_index.entry(name.to_lowercase()).or_insert(id);
                    nodes.push(EmotionNode {
                        id,
                        name,
                        category: row.category,
                        level,
                        intensity,
                        valence,
                        arousal,
                        related_emotions: Vec::new(),
                        musical_attributes: MusicalAttributes::derive(valence, arousal, intensity),
                    });
                }
            }
        }

        let mut catalog = Self { nodes, name_index, config };

        // Adjacency pass: all-pairs, read first and write after.
        let related: Vec<Vec<EmotionId>> = catalog
            .nodes
            .iter()
            .map(|source| {
                catalog
                    .within(source, config.adjacency_threshold)
                    .map(|n| n.id)
                    .collect()
            })
            .collect();
        let mut edge_count = 0usize;
        for (node, ids) in catalog.nodes.iter_mut().zip(related) {
            edge_count += ids.len();
            node.related_emotions = ids;
        }

        tracing::debug!(
            nodes = catalog.nodes.len(),
            edges = edge_count / 2,
            adjacency_threshold = config.adjacency_threshold,
            nearby_threshold = config.nearby_threshold,
            "emotion catalog generated"
        );

        catalog
    }

    /// Nodes strictly within `threshold` of `source`, excluding `source`, in id order.
    fn within<'a>(
        &'a self,
        source: &'a EmotionNode,
        threshold: f64,
    ) -> impl Iterator<Item = &'a EmotionNode> + 'a {
        self.nodes
            .iter()
            .filter(move |n| n.id != source.id && source.distance(n) < threshold)
    }

    // ── Core queries ───────────────────────────────────────────────────────

    /// Look up a node by id. `None` for any id outside the catalog.
    pub fn get_emotion(&self, id: EmotionId) -> Option<&EmotionNode> {
        self.nodes.get(id)
    }

    /// Case-insensitive exact name match.
    ///
    /// If two nodes fold to the same name, the one with the lower id wins.
    pub fn find_emotion_by_name(&self, name: &str) -> Option<&EmotionNode> {
        self.name_index
            .get(name.to_lowercase().as_str())
            .and_then(|&id| self.nodes.get(id))
    }

    /// Every other node with `distance < threshold` from `id`, in id order.
    ///
    /// Returns an empty list when `id` is unknown.
    pub fn get_nearby_emotions(&self, id: EmotionId, threshold: f64) -> Vec<&EmotionNode> {
        match self.get_emotion(id) {
            Some(source) => self.within(source, threshold).collect(),
            None => {
                tracing::trace!(id, "nearby query for unknown emotion id");
                Vec::new()
            }
        }
    }

    /// [`get_nearby_emotions`](Self::get_nearby_emotions) at the configured
    /// default radius (0.3 unless overridden).
    ///
    /// This is narrower than the adjacency radius, so the result is usually a
    /// subset of the node's `related_emotions`.
    pub fn nearby_emotions(&self, id: EmotionId) -> Vec<&EmotionNode> {
        self.get_nearby_emotions(id, self.config.nearby_threshold)
    }

    // ── Collection helpers ─────────────────────────────────────────────────

    /// Thresholds this catalog was built with.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Number of nodes (always [`NODE_COUNT`]).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false` for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in id order.
    pub fn iter(&self) -> impl Iterator<Item = &EmotionNode> {
        self.nodes.iter()
    }

    /// The 27 nodes of one category in id order.
    pub fn by_category(&self, category: EmotionCategory) -> impl Iterator<Item = &EmotionNode> {
        self.nodes.iter().filter(move |n| n.category == category)
    }

    /// A base variant at a specific intensity level, e.g. `("grief", Intensity::Low)`.
    pub fn variant(&self, base_name: &str, level: Intensity) -> Option<&EmotionNode> {
        self.find_emotion_by_name(&level.apply_suffix(base_name))
            .filter(|n| n.level == level)
    }

    /// Resolve a node's `related_emotions` against this catalog.
    ///
    /// Empty when `id` is unknown.
    pub fn related(&self, id: EmotionId) -> impl Iterator<Item = &EmotionNode> {
        self.get_emotion(id)
            .map(|n| n.related_emotions.as_slice())
            .unwrap_or(&[])
            .iter()
            .filter_map(move |&rid| self.get_emotion(rid))
    }

    /// Distance between two nodes, `None` if either id is unknown.
    pub fn distance(&self, a: EmotionId, b: EmotionId) -> Option<f64> {
        Some(self.get_emotion(a)?.distance(self.get_emotion(b)?))
    }

    /// The node closest to an arbitrary point; the lowest id wins ties.
    pub fn closest_to(&self, point: &EmotionPoint) -> Option<&EmotionNode> {
        self.nodes
            .iter()
            .min_by(|a, b| point.distance(&a.point()).total_cmp(&point.distance(&b.point())))
    }
}

impl Default for EmotionCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a EmotionCatalog {
    type Item = &'a EmotionNode;
    type IntoIter = core::slice::Iter<'a, EmotionNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
