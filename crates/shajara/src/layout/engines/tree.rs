//! Tidy tree engine for the vertical, horizontal and org-chart views.
//!
//! Positions are computed in (breadth, depth) space: depth grows by one level
//! gap per generation and breadth spreads siblings. A vertical tree uses the
//! coordinates as (x, y); a horizontal tree transposes them so generations
//! flow to the right.
//!
//! Every node reserves a slot wide enough for itself and, when it has one,
//! its companion spouse. A subtree's extent is the larger of that slot and
//! the combined extents of its children. The slot is centered over the
//! subtree, and the children are centered under the slot, so parents always
//! sit midway over their offspring. Trees are laid out side by side.

use log::debug;

use shajara_core::geometry::Point;

use crate::{
    index::RelationshipIndex,
    layout::{LayoutResult, engines::LayoutEngine, forest::Forest, relationship_edges},
};

/// Direction generations flow in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    /// Parents above children
    Vertical,
    /// Parents left of children
    #[default]
    Horizontal,
}

pub struct Engine {
    orientation: Orientation,

    /// Width of a member box
    node_width: f32,

    /// Height of a member box
    node_height: f32,

    /// Gap between neighbouring sibling subtrees
    sibling_gap: f32,

    /// Distance between consecutive generations
    level_gap: f32,

    /// Gap between a member and its companion spouse
    spouse_gap: f32,

    /// Gap between independent trees
    tree_gap: f32,
}

impl Engine {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            node_width: 160.0,
            node_height: 80.0,
            sibling_gap: 40.0,
            level_gap: 120.0,
            spouse_gap: 20.0,
            tree_gap: 80.0,
        }
    }

    pub fn set_node_size(&mut self, width: f32, height: f32) -> &mut Self {
        self.node_width = width;
        self.node_height = height;
        self
    }

    pub fn set_sibling_gap(&mut self, gap: f32) -> &mut Self {
        self.sibling_gap = gap;
        self
    }

    pub fn set_level_gap(&mut self, gap: f32) -> &mut Self {
        self.level_gap = gap;
        self
    }

    pub fn set_spouse_gap(&mut self, gap: f32) -> &mut Self {
        self.spouse_gap = gap;
        self
    }

    pub fn set_tree_gap(&mut self, gap: f32) -> &mut Self {
        self.tree_gap = gap;
        self
    }

    /// Size of a member box along the breadth axis.
    fn node_breadth(&self) -> f32 {
        match self.orientation {
            Orientation::Vertical => self.node_width,
            Orientation::Horizontal => self.node_height,
        }
    }

    /// Distance between the centers of a member and its companion.
    fn pair_distance(&self) -> f32 {
        self.node_breadth() + self.spouse_gap
    }

    /// Breadth required by every subtree, indexed like the forest arena.
    fn extents(&self, forest: &Forest<'_>) -> Vec<f32> {
        let mut extents = vec![0.0; forest.len()];

        for (i, node) in forest.nodes().iter().enumerate().rev() {
            let slot = if node.companion().is_some() {
                self.node_breadth() + self.pair_distance()
            } else {
                self.node_breadth()
            };
            extents[i] = slot.max(self.children_extent(node.children(), &extents));
        }

        extents
    }

    fn children_extent(&self, children: &[usize], extents: &[f32]) -> f32 {
        if children.is_empty() {
            return 0.0;
        }
        let gaps = (children.len() - 1) as f32 * self.sibling_gap;
        children.iter().map(|&child| extents[child]).sum::<f32>() + gaps
    }

    fn to_plane(&self, breadth: f32, depth: f32) -> Point {
        let point = Point::new(breadth, depth);
        match self.orientation {
            Orientation::Vertical => point,
            Orientation::Horizontal => point.transpose(),
        }
    }
}

impl LayoutEngine for Engine {
    fn calculate(&self, index: &RelationshipIndex<'_>) -> LayoutResult {
        let forest = Forest::plan(index);
        let extents = self.extents(&forest);

        // Leading edge of each subtree's block along the breadth axis.
        let mut starts = vec![0.0; forest.len()];
        let mut cursor = 0.0;
        for &root in forest.trees() {
            starts[root] = cursor;
            cursor += extents[root] + self.tree_gap;
        }

        let mut result = LayoutResult::new();
        for (i, node) in forest.nodes().iter().enumerate() {
            let center = starts[i] + extents[i] / 2.0;
            let depth = node.level() as f32 * self.level_gap;

            match node.companion() {
                Some(companion) => {
                    let half = self.pair_distance() / 2.0;
                    result.place(
                        node.member().id(),
                        self.to_plane(center - half, depth),
                        node.level(),
                    );
                    result.place(
                        companion.id(),
                        self.to_plane(center + half, depth),
                        node.level(),
                    );
                }
                None => {
                    result.place(node.member().id(), self.to_plane(center, depth), node.level());
                }
            }

            let children = node.children();
            let mut child_start =
                starts[i] + (extents[i] - self.children_extent(children, &extents)) / 2.0;
            for &child in children {
                starts[child] = child_start;
                child_start += extents[child] + self.sibling_gap;
            }
        }
        result.set_edges(relationship_edges(index));

        debug!(
            members = result.len(),
            trees = forest.trees().len(),
            orientation:? = self.orientation;
            "Tree layout calculated"
        );
        result
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use shajara_core::member::{Gender, Member};

    use super::*;

    proptest! {
        #[test]
        fn prop_chain_depth_matches_level(len in 1_usize..20) {
            let members: Vec<Member> = (0..len as u64)
                .map(|i| {
                    let member = Member::new(i, format!("G{i}"), Gender::Male);
                    if i == 0 { member } else { member.with_father(i - 1) }
                })
                .collect();
            let index = RelationshipIndex::new(&members);
            let result = Engine::new(Orientation::Vertical).calculate(&index);

            prop_assert_eq!(result.len(), len);
            for (i, member) in members.iter().enumerate() {
                let placement = result.placement(member.id()).unwrap();
                prop_assert_eq!(placement.level(), i);
                prop_assert_eq!(placement.position().y(), i as f32 * 120.0);
                prop_assert_eq!(placement.position().x(), 80.0);
            }
        }
    }
}
