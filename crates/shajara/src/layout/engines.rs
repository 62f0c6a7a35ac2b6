//! Layout engines.
//!
//! Each engine implements one arrangement of a family. Engines are stateless
//! apart from their spacing parameters, which are set once through the
//! `set_*` methods before the engine is registered with the
//! [`EngineRegistry`](super::selector::EngineRegistry).

pub mod grid;
pub mod network;
pub mod radial;
pub mod timeline;
pub mod tree;

use crate::{index::RelationshipIndex, layout::LayoutResult};

/// Interface shared by every layout engine.
pub trait LayoutEngine {
    /// Positions every canonical member of `index` and derives the edges.
    ///
    /// Engines never fail: dangling references, cycles and duplicate ids are
    /// already absorbed by the index, and every canonical member receives
    /// exactly one position.
    fn calculate(&self, index: &RelationshipIndex<'_>) -> LayoutResult;
}
