//! # emotion-thesaurus
//!
//! A 216-node emotion thesaurus that maps emotional states onto musical
//! parameters: tempo, mode, and dynamics.
//!
//! ---
//!
//! ## A fixed map of feeling
//!
//! Every node sits in a three-dimensional emotional space:
//!
//! - **Valence** — how positive or negative, [-1.0, 1.0].
//! - **Arousal** — how activated, [0.0, 1.0].
//! - **Intensity** — one of three discrete levels: 1.0, 0.6, 0.3.
//!
//! The catalog is generated, not authored node by node. Eight primary
//! categories each hold nine named variants ("euphoria", "grief", "dread", ...),
//! and each variant is scaled to three intensities. Scaling shrinks valence and
//! arousal together, so `grief_low` sits much closer to calm than `grief`.
//!
//! Nearness in that space is plain Euclidean distance. Valence is not rescaled,
//! so a step across the positive/negative divide counts for more than the same
//! step in arousal.
//!
//! ---
//!
//! ## The pipeline
//!
//! ```text
//! BASE_TABLE (8 × 9 variants) ──► generate ──► EmotionCatalog (216 nodes)
//!                                   │               │
//!                     × 3 intensity levels     get_emotion / find_emotion_by_name
//!                     adjacency pass (0.35)    get_nearby_emotions (default 0.3)
//!                                                   │
//!                                             rule_breaks ──► MusicalParams
//! ```
//!
//! ## Module overview
//!
//! | Module | Key types | What it does |
//! |--------|-----------|--------------|
//! | [`emotion`] | [`EmotionNode`], [`EmotionCategory`], [`Intensity`], [`MusicalAttributes`] | Node types and the valence/arousal/intensity metric |
//! | [`table`] | [`table::BASE_TABLE`], [`table::CategoryVariants`] | Compiled-in variant table and its validation |
//! | [`catalog`] | [`EmotionCatalog`], [`CatalogConfig`] | Generation, adjacency pass, lookup and nearby queries |
//! | [`rule_break`] | [`RuleBreak`], [`MusicalParams`] | Which musical conventions an emotion breaks |
//! | [`error`] | [`CatalogError`] | Catalog configuration and category parse errors |
//!
//! ## Quick start
//!
//! ```rust
//! use emotion_thesaurus::{EmotionCatalog, MusicalParams};
//!
//! let catalog = EmotionCatalog::new();
//! let dread = catalog.find_emotion_by_name("dread").unwrap();
//!
//! for near in catalog.get_nearby_emotions(dread.id, 0.2) {
//!     assert!(dread.distance(near) < 0.2);
//! }
//!
//! let params = MusicalParams::for_node(dread);
//! assert_eq!(params.mode.as_str(), "minor");
//! ```
//!
//! ## Features
//!
//! - `serde` — `Serialize`/`Deserialize` on node and parameter types.
//! - `python-ffi` — PyO3 bindings in the `ffi` module.
//!
//! ## License
//!
//! Business Source License 1.1.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod emotion;
pub mod error;
pub mod table;
pub mod catalog;
pub mod rule_break;

#[cfg(feature = "python-ffi")]
pub mod ffi;

pub use catalog::{CatalogConfig, EmotionCatalog, ADJACENCY_THRESHOLD, NEARBY_THRESHOLD, NODE_COUNT};
pub use emotion::{
    EmotionCategory, EmotionId, EmotionNode, EmotionPoint, Intensity, Mode, MusicalAttributes,
};
pub use error::CatalogError;
pub use rule_break::{rule_breaks, MusicalParams, RuleBreak, RuleKind};
