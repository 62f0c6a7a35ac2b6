//! Grid engine for the grid and gallery views.
//!
//! Members fill a fixed number of columns row by row. The gallery variant
//! moves members carrying an image to the front, keeping list order within
//! each group.

use log::debug;

use shajara_core::{geometry::Point, member::Member};

use crate::{
    index::RelationshipIndex,
    layout::{LayoutResult, engines::LayoutEngine, relationship_edges},
};

pub struct Engine {
    columns: usize,
    cell_width: f32,
    cell_height: f32,
    images_first: bool,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            columns: 4,
            cell_width: 180.0,
            cell_height: 200.0,
            images_first: false,
        }
    }

    /// A grid ordering members with an image first.
    pub fn gallery() -> Self {
        Self {
            images_first: true,
            ..Self::new()
        }
    }

    /// Sets the column count. Zero is treated as one column.
    pub fn set_columns(&mut self, columns: usize) -> &mut Self {
        self.columns = columns.max(1);
        self
    }

    pub fn set_cell_size(&mut self, width: f32, height: f32) -> &mut Self {
        self.cell_width = width;
        self.cell_height = height;
        self
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutEngine for Engine {
    fn calculate(&self, index: &RelationshipIndex<'_>) -> LayoutResult {
        let mut members = index.members().to_vec();
        if self.images_first {
            members.sort_by_key(|member: &&Member| member.image().is_none());
        }

        let mut result = LayoutResult::new();
        for (i, member) in members.iter().enumerate() {
            let column = i % self.columns;
            let row = i / self.columns;
            let position = Point::new(
                column as f32 * self.cell_width,
                row as f32 * self.cell_height,
            );
            result.place(member.id(), position, 0);
        }
        result.set_edges(relationship_edges(index));

        debug!(members = result.len(), gallery = self.images_first; "Grid layout calculated");
        result
    }
}
