//! Network engine: every member on a single ring.
//!
//! Hierarchy is ignored. Members are spaced evenly around a circle centered at
//! the origin, in list order, starting on the +X axis. The ring grows with the
//! member count up to a cap, so large families do not sprawl.

use std::f32::consts::TAU;

use log::debug;

use shajara_core::geometry::Point;

use crate::{
    index::RelationshipIndex,
    layout::{LayoutResult, engines::LayoutEngine, relationship_edges},
};

pub struct Engine {
    base_radius: f32,
    radius_per_member: f32,
    max_radius: f32,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            base_radius: 200.0,
            radius_per_member: 5.0,
            max_radius: 300.0,
        }
    }

    pub fn set_base_radius(&mut self, radius: f32) -> &mut Self {
        self.base_radius = radius;
        self
    }

    pub fn set_radius_per_member(&mut self, growth: f32) -> &mut Self {
        self.radius_per_member = growth;
        self
    }

    pub fn set_max_radius(&mut self, radius: f32) -> &mut Self {
        self.max_radius = radius;
        self
    }

    /// Ring radius for `count` members.
    pub fn radius(&self, count: usize) -> f32 {
        (self.base_radius + count as f32 * self.radius_per_member).min(self.max_radius)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutEngine for Engine {
    fn calculate(&self, index: &RelationshipIndex<'_>) -> LayoutResult {
        let members = index.members();
        let radius = self.radius(members.len());
        let step = TAU / members.len().max(1) as f32;

        let mut result = LayoutResult::new();
        for (i, member) in members.iter().enumerate() {
            result.place(member.id(), Point::from_polar(radius, i as f32 * step), 0);
        }
        result.set_edges(relationship_edges(index));

        debug!(members = result.len(), radius; "Network layout calculated");
        result
    }
}
