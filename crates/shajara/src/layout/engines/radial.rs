//! Radial engine: generations on concentric rings.
//!
//! When the family has exactly one root, that root sits at the origin.
//! Otherwise the trees grown from roots share the innermost ring, each
//! centered in an equal share of the full circle. A spouse drawn as a
//! companion takes no share. Every node then splits its angular sector evenly
//! between its children, which are placed one ring further out at the center
//! of their sub-sector. Sectors of siblings never overlap, so descendants of
//! different branches stay apart.
//!
//! Trees seeded from members no root reaches (cyclic or dangling ancestry)
//! share the first ring outside the deepest rooted ring, and grow outward from
//! there.

use std::{f32::consts::TAU, ops::Range};

use log::debug;

use shajara_core::geometry::Point;

use crate::{
    index::RelationshipIndex,
    layout::{LayoutResult, engines::LayoutEngine, forest::Forest, relationship_edges},
};

/// Angular range assigned to a forest node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Sector {
    start: f32,
    span: f32,
    ring: usize,
}

impl Sector {
    pub(crate) fn start(&self) -> f32 {
        self.start
    }

    #[cfg(test)]
    pub(crate) fn end(&self) -> f32 {
        self.start + self.span
    }

    /// The angle the node is drawn at.
    pub(crate) fn center(&self) -> f32 {
        self.start() + self.span / 2.0
    }

    pub(crate) fn ring(&self) -> usize {
        self.ring
    }
}

pub struct Engine {
    /// Radius of the first ring
    base_radius: f32,

    /// Distance between consecutive rings
    ring_increment: f32,

    /// Horizontal offset of a spouse drawn beside its partner
    spouse_offset: f32,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            base_radius: 120.0,
            ring_increment: 100.0,
            spouse_offset: 140.0,
        }
    }

    pub fn set_base_radius(&mut self, radius: f32) -> &mut Self {
        self.base_radius = radius;
        self
    }

    pub fn set_ring_increment(&mut self, increment: f32) -> &mut Self {
        self.ring_increment = increment;
        self
    }

    pub fn set_spouse_offset(&mut self, offset: f32) -> &mut Self {
        self.spouse_offset = offset;
        self
    }

    fn ring_radius(&self, ring: usize) -> f32 {
        self.base_radius + ring as f32 * self.ring_increment
    }

    /// Assigns a sector to every node of `forest`, indexed like its arena.
    ///
    /// With `centered`, the single rooted tree keeps the full circle instead
    /// of being spread over the innermost ring.
    pub(crate) fn sectors(forest: &Forest<'_>, centered: bool) -> Vec<Sector> {
        let mut sectors = vec![
            Sector {
                start: 0.0,
                span: TAU,
                ring: 0,
            };
            forest.len()
        ];

        // Rooted trees are grown first, so every detached tree follows them
        // in the arena.
        let (rooted, detached): (Vec<usize>, Vec<usize>) = forest
            .trees()
            .iter()
            .copied()
            .partition(|&tree| forest.nodes()[tree].member().is_root());
        let boundary = detached.first().copied().unwrap_or(forest.len());

        if !centered {
            Self::spread(&mut sectors, &rooted, 0);
        }
        Self::subdivide(forest, &mut sectors, 0..boundary);

        let outer_ring = sectors[..boundary]
            .iter()
            .map(|sector| sector.ring + 1)
            .max()
            .unwrap_or(0);
        Self::spread(&mut sectors, &detached, outer_ring);
        Self::subdivide(forest, &mut sectors, boundary..forest.len());

        sectors
    }

    /// Shares the full circle between `trees`, on `ring`.
    fn spread(sectors: &mut [Sector], trees: &[usize], ring: usize) {
        if trees.is_empty() {
            return;
        }
        let step = TAU / trees.len() as f32;
        for (i, &root) in trees.iter().enumerate() {
            sectors[root] = Sector {
                start: i as f32 * step - step / 2.0,
                span: step,
                ring,
            };
        }
    }

    /// Splits each node's sector between its children, for the nodes in `range`.
    fn subdivide(forest: &Forest<'_>, sectors: &mut [Sector], range: Range<usize>) {
        // Arena order guarantees a parent's sector is final before its children.
        for i in range {
            let children = forest.nodes()[i].children();
            if children.is_empty() {
                continue;
            }
            let parent = sectors[i];
            let share = parent.span / children.len() as f32;
            for (j, &child) in children.iter().enumerate() {
                sectors[child] = Sector {
                    start: parent.start + j as f32 * share,
                    span: share,
                    ring: parent.ring + 1,
                };
            }
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutEngine for Engine {
    fn calculate(&self, index: &RelationshipIndex<'_>) -> LayoutResult {
        let forest = Forest::plan(index);
        let centered = index.roots().len() == 1;
        let sectors = Self::sectors(&forest, centered);

        let mut result = LayoutResult::new();
        for (node, sector) in forest.nodes().iter().zip(&sectors) {
            let position = if centered && sector.ring() == 0 {
                Point::default()
            } else {
                Point::from_polar(self.ring_radius(sector.ring()), sector.center())
            };
            result.place(node.member().id(), position, node.level());

            if let Some(companion) = node.companion() {
                let beside = position.add_point(Point::new(self.spouse_offset, 0.0));
                result.place(companion.id(), beside, node.level());
            }
        }
        result.set_edges(relationship_edges(index));

        debug!(members = result.len(), trees = forest.trees().len(); "Radial layout calculated");
        result
    }
}
