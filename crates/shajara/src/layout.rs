//! Layout results and the strategies that produce them.
//!
//! Every strategy maps the members of a [`RelationshipIndex`] to positions in
//! the logical plane and reports the relationship edges a renderer should
//! draw between them. The output of all strategies shares one shape,
//! [`LayoutResult`], so rendering code never needs to know which strategy ran.

mod engines;
mod forest;
pub mod selector;

pub use engines::{
    LayoutEngine, grid::Engine as GridEngine, network::Engine as NetworkEngine,
    radial::Engine as RadialEngine, timeline::Engine as TimelineEngine,
    tree::{Engine as TreeEngine, Orientation},
};

use indexmap::IndexMap;
use log::trace;
use serde::Serialize;

use shajara_core::{
    geometry::{Bounds, Point},
    identifier::MemberId,
};

use crate::index::RelationshipIndex;

/// The relationship an [`Edge`] stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Parent,
    Spouse,
}

/// A directed relationship between two placed members.
///
/// Parent edges run from the child to the parent it names; spouse edges run
/// from the member to the spouse it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub from: MemberId,
    pub to: MemberId,
    pub kind: EdgeKind,
}

/// Where a member ended up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    position: Point,
    level: usize,
}

impl Placement {
    pub fn new(position: Point, level: usize) -> Self {
        Self { position, level }
    }

    /// Position of the member's center.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Generation depth below the tree the member was placed in.
    ///
    /// Strategies that ignore hierarchy report level 0 for everyone.
    pub fn level(&self) -> usize {
        self.level
    }
}

/// Positions for every member plus the edges to draw between them.
///
/// Placements keep the order in which the strategy placed members, so
/// iterating a result is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutResult {
    placements: IndexMap<MemberId, Placement>,
    edges: Vec<Edge>,
}

impl LayoutResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a placement for `id`.
    ///
    /// The first placement of an id wins; later attempts are ignored and
    /// reported by returning `false`.
    pub fn place(&mut self, id: MemberId, position: Point, level: usize) -> bool {
        if self.placements.contains_key(&id) {
            trace!(id:%; "Member already placed, ignoring");
            return false;
        }
        trace!(id:%, x = position.x(), y = position.y(), level; "Placed member");
        self.placements.insert(id, Placement::new(position, level));
        true
    }

    /// Replaces the edge list.
    pub fn set_edges(&mut self, edges: Vec<Edge>) {
        self.edges = edges;
    }

    /// Returns the position of `id`, if it was placed.
    pub fn position(&self, id: MemberId) -> Option<Point> {
        self.placements.get(&id).map(Placement::position)
    }

    pub fn placement(&self, id: MemberId) -> Option<&Placement> {
        self.placements.get(&id)
    }

    /// Iterates placements in placement order.
    pub fn placements(&self) -> impl Iterator<Item = (MemberId, &Placement)> {
        self.placements
            .iter()
            .map(|(id, placement)| (*id, placement))
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of placed members.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Smallest box containing every member position, `None` when empty.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::enclosing(self.placements.values().map(Placement::position))
    }
}

/// Derives the edge list shared by every strategy.
///
/// Members are visited in list order and contribute, in this order, one
/// parent edge for their father, one for their mother and one spouse edge.
/// References that do not resolve contribute nothing. Edges are not
/// deduplicated: two spouses naming each other yield two spouse edges.
pub fn relationship_edges(index: &RelationshipIndex<'_>) -> Vec<Edge> {
    let mut edges = Vec::new();

    for member in index.members() {
        let claims = [
            (member.father_id(), EdgeKind::Parent),
            (member.mother_id(), EdgeKind::Parent),
            (member.spouse_id(), EdgeKind::Spouse),
        ];
        for (target, kind) in claims {
            if let Some(target) = target.filter(|target| index.contains(*target)) {
                edges.push(Edge {
                    from: member.id(),
                    to: target,
                    kind,
                });
            }
        }
    }

    edges
}
