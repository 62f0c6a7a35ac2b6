//! JSON export of layout results.
//!
//! The exported document is what renderers consume:
//!
//! ```json
//! {
//!   "view": "radial",
//!   "bounds": { "min_x": -220.0, "min_y": -220.0, "max_x": 220.0, "max_y": 220.0 },
//!   "positions": [{ "id": "1", "x": 0.0, "y": 0.0, "level": 0 }],
//!   "edges": [{ "from": "2", "to": "1", "kind": "parent" }]
//! }
//! ```

use serde::Serialize;

use shajara_core::{geometry::Bounds, identifier::MemberId};

use crate::{
    error::ShajaraError,
    layout::{Edge, LayoutResult},
    view::ViewMode,
};

#[derive(Debug, Serialize)]
struct PositionEntry {
    id: MemberId,
    x: f32,
    y: f32,
    level: usize,
}

#[derive(Debug, Serialize)]
struct LayoutDocument<'a> {
    view: ViewMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    bounds: Option<Bounds>,
    positions: Vec<PositionEntry>,
    edges: &'a [Edge],
}

impl<'a> LayoutDocument<'a> {
    fn new(view: ViewMode, result: &'a LayoutResult) -> Self {
        let positions = result
            .placements()
            .map(|(id, placement)| PositionEntry {
                id,
                x: placement.position().x(),
                y: placement.position().y(),
                level: placement.level(),
            })
            .collect();

        Self {
            view,
            bounds: result.bounds(),
            positions,
            edges: result.edges(),
        }
    }
}

/// Serializes `result` as a pretty-printed JSON document.
///
/// # Errors
///
/// Returns [`ShajaraError::Export`] if serialization fails.
pub fn to_json(view: ViewMode, result: &LayoutResult) -> Result<String, ShajaraError> {
    serde_json::to_string_pretty(&LayoutDocument::new(view, result)).map_err(ShajaraError::Export)
}
