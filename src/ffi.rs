//! Python FFI bindings via PyO3.
//!
//! Exposes the shared process-wide catalog to Python. Nodes cross the boundary
//! as owned copies; ids stay valid against the same catalog.
//!
//! Ids arrive as Python ints. Negative or out-of-range ids resolve to `None`
//! (or an empty list), never to an exception.
//!
//! # Building the Python extension
//!
//! ```bash
//! pip install maturin
//! maturin develop --features extension-module
//! ```
//!
//! # Usage
//!
//! ```python
//! from emotion_thesaurus import EmotionCatalog
//!
//! catalog = EmotionCatalog()
//! grief = catalog.find_emotion_by_name("GRIEF")
//! print(grief.id, grief.mode, grief.tempo_modifier)   # 27 minor 1.1
//! for n in catalog.get_nearby_emotions(grief.id, threshold=0.2):
//!     print(n.name)
//! print(catalog.rule_breaks(grief.id))   # [("dynamics", 1.0, ...), ("harmony", 0.9, ...)]
//! ```

#![allow(non_snake_case)]

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::catalog::{EmotionCatalog as RustEmotionCatalog, NEARBY_THRESHOLD, NODE_COUNT};
use crate::emotion::{EmotionCategory, EmotionId, EmotionNode as RustEmotionNode};
use crate::rule_break::rule_breaks;

// ── EmotionNode ───────────────────────────────────────────────────────────────

/// One node of the emotion thesaurus (read-only copy).
#[pyclass(name = "EmotionNode", frozen)]
#[derive(Clone)]
pub struct PyEmotionNode {
    inner: RustEmotionNode,
}

impl From<&RustEmotionNode> for PyEmotionNode {
    fn from(node: &RustEmotionNode) -> Self {
        Self { inner: node.clone() }
    }
}

#[pymethods]
impl PyEmotionNode {
    /// Sequential id in [0, 215].
    #[getter]
    pub fn id(&self) -> EmotionId {
        self.inner.id
    }
    /// Variant name with `_mid` / `_low` suffix below full intensity.
    #[getter]
    pub fn name(&self) -> &str {
        &self.inner.name
    }
    /// Lowercase category name, e.g. "joy".
    #[getter]
    pub fn category(&self) -> &'static str {
        self.inner.category.as_str()
    }
    /// Intensity factor: 1.0, 0.6 or 0.3.
    #[getter]
    pub fn intensity(&self) -> f64 {
        self.inner.intensity
    }
    /// Scaled valence in [-1.0, 1.0].
    #[getter]
    pub fn valence(&self) -> f64 {
        self.inner.valence
    }
    /// Scaled arousal in [0.0, 1.0].
    #[getter]
    pub fn arousal(&self) -> f64 {
        self.inner.arousal
    }
    /// Ids linked at generation time (0.35 radius).
    #[getter]
    pub fn related_emotions(&self) -> Vec<EmotionId> {
        self.inner.related_emotions.clone()
    }
    /// Tempo multiplier centred on 1.0.
    #[getter]
    pub fn tempo_modifier(&self) -> f64 {
        self.inner.musical_attributes.tempo_modifier
    }
    /// "major" or "minor".
    #[getter]
    pub fn mode(&self) -> &'static str {
        self.inner.musical_attributes.mode.as_str()
    }
    /// Dynamics level, equal to intensity.
    #[getter]
    pub fn dynamics(&self) -> f64 {
        self.inner.musical_attributes.dynamics
    }

    /// Python repr string.
    pub fn __repr__(&self) -> String {
        format!(
            "EmotionNode(id={}, name='{}', category='{}', valence={:.3}, arousal={:.3}, intensity={:.1})",
            self.inner.id,
            self.inner.name,
            self.inner.category,
            self.inner.valence,
            self.inner.arousal,
            self.inner.intensity,
        )
    }

    /// Python equality comparison (by id).
    pub fn __eq__(&self, other: &PyEmotionNode) -> bool {
        self.inner.id == other.inner.id
    }
}

// ── EmotionCatalog ────────────────────────────────────────────────────────────

/// Handle to the process-wide 216-node catalog.
///
/// Every handle shares one catalog, built on first use.
#[pyclass(name = "EmotionCatalog", frozen)]
pub struct PyEmotionCatalog {
    inner: &'static RustEmotionCatalog,
}

#[pymethods]
impl PyEmotionCatalog {
    /// Open the shared catalog.
    #[new]
    pub fn new() -> Self {
        Self {
            inner: RustEmotionCatalog::global(),
        }
    }

    /// Node by id, or None.
    pub fn get_emotion(&self, id: i64) -> Option<PyEmotionNode> {
        self.resolve(id).map(PyEmotionNode::from)
    }

    /// Case-insensitive name lookup, or None.
    pub fn find_emotion_by_name(&self, name: &str) -> Option<PyEmotionNode> {
        self.inner.find_emotion_by_name(name).map(PyEmotionNode::from)
    }

    /// Nodes strictly closer than `threshold` to `id`, in id order.
    ///
    /// Args:
    ///     id:        source node id
    ///     threshold: radius in (valence, arousal, intensity) space (default 0.3)
    #[pyo3(signature = (id, threshold=NEARBY_THRESHOLD))]
    pub fn get_nearby_emotions(&self, id: i64, threshold: f64) -> Vec<PyEmotionNode> {
        match self.resolve(id) {
            Some(node) => self
                .inner
                .get_nearby_emotions(node.id, threshold)
                .into_iter()
                .map(PyEmotionNode::from)
                .collect(),
            None => Vec::new(),
        }
    }

    /// All 27 nodes of a category, e.g. "fear".
    ///
    /// Raises:
    ///     ValueError: unknown category name
    pub fn by_category(&self, category: &str) -> PyResult<Vec<PyEmotionNode>> {
        let category: EmotionCategory = category
            .parse()
            .map_err(|e: crate::error::CatalogError| PyValueError::new_err(e.to_string()))?;
        Ok(self.inner.by_category(category).map(PyEmotionNode::from).collect())
    }

    /// Rule breaks for a node as (kind, severity, description) tuples.
    ///
    /// Returns an empty list for unknown ids.
    pub fn rule_breaks(&self, id: i64) -> Vec<(&'static str, f64, &'static str)> {
        self.resolve(id)
            .map(|node| {
                rule_breaks(node)
                    .iter()
                    .map(|rb| (rb.kind.as_str(), rb.severity, rb.description))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of nodes (216).
    pub fn __len__(&self) -> usize {
        self.inner.len()
    }

    /// Python repr string.
    pub fn __repr__(&self) -> String {
        format!("EmotionCatalog(nodes={})", self.inner.len())
    }
}

impl PyEmotionCatalog {
    fn resolve(&self, id: i64) -> Option<&'static RustEmotionNode> {
        usize::try_from(id).ok().and_then(|id| self.inner.get_emotion(id))
    }
}

// ── Module entry point ────────────────────────────────────────────────────────

/// Emotion thesaurus Python bindings.
#[pymodule]
pub fn emotion_thesaurus(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyEmotionNode>()?;
    m.add_class::<PyEmotionCatalog>()?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("NODE_COUNT", NODE_COUNT)?;
    Ok(())
}
