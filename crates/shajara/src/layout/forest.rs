//! Spanning forest over the parent/child relation.
//!
//! Hierarchical strategies do not walk the relationship index directly: the
//! data may contain cycles, diamonds (a child reachable through both parents)
//! and members no root can reach. [`Forest::plan`] settles all of that once,
//! producing trees in which every canonical member appears exactly once,
//! either as a node or as the companion (spouse) of a node.
//!
//! Nodes live in an arena in depth-first pre-order, so a parent always has a
//! smaller index than its children. Strategies exploit that ordering to
//! compute extents bottom-up (reverse iteration) and positions top-down
//! (forward iteration) without recursion.

use std::collections::HashSet;

use log::{debug, trace};

use shajara_core::{identifier::MemberId, member::Member};

use crate::index::RelationshipIndex;

/// A member placed in the forest, together with the spouse drawn next to it.
#[derive(Debug)]
pub struct ForestNode<'a> {
    member: &'a Member,
    companion: Option<&'a Member>,
    children: Vec<usize>,
    level: usize,
}

impl<'a> ForestNode<'a> {
    pub fn member(&self) -> &'a Member {
        self.member
    }

    /// Spouse placed alongside the member, if any.
    pub fn companion(&self) -> Option<&'a Member> {
        self.companion
    }

    /// Arena indices of the node's children, in visiting order.
    pub fn children(&self) -> &[usize] {
        &self.children
    }

    /// Depth below the tree root.
    pub fn level(&self) -> usize {
        self.level
    }
}

#[derive(Debug, Default)]
pub struct Forest<'a> {
    nodes: Vec<ForestNode<'a>>,
    trees: Vec<usize>,
}

impl<'a> Forest<'a> {
    /// Plans the forest for `index`.
    ///
    /// Trees are grown from the roots in list order. Members left over once
    /// every root has been grown (cycle members, or members whose only parents
    /// are dangling references) seed additional trees, again in list order.
    ///
    /// While growing, a member's spouse becomes its companion when the spouse
    /// is a root that has not been placed yet. A node's children are the
    /// unplaced children of the member followed by those of its companion.
    pub fn plan(index: &RelationshipIndex<'a>) -> Self {
        let mut forest = Self::default();
        let mut placed: HashSet<MemberId> = HashSet::with_capacity(index.len());

        for seed in index.roots().iter().chain(index.members()) {
            if placed.contains(&seed.id()) {
                continue;
            }
            if !seed.is_root() {
                debug!(id:% = seed.id(); "Member unreachable from any root, growing a separate tree");
            }
            let root = forest.grow(index, seed, &mut placed);
            forest.trees.push(root);
        }

        debug!(
            nodes = forest.nodes.len(),
            members = forest.member_count(),
            trees = forest.trees.len();
            "Planned forest"
        );
        forest
    }

    /// Grows one tree from `seed` depth-first and returns its arena index.
    fn grow(
        &mut self,
        index: &RelationshipIndex<'a>,
        seed: &'a Member,
        placed: &mut HashSet<MemberId>,
    ) -> usize {
        let root = self.nodes.len();
        let mut stack: Vec<(&'a Member, Option<usize>, usize)> = vec![(seed, None, 0)];

        while let Some((member, parent, level)) = stack.pop() {
            if !placed.insert(member.id()) {
                trace!(id:% = member.id(); "Already placed, skipping");
                continue;
            }

            let companion = index.spouse_of(member.id()).filter(|spouse| {
                spouse.id() != member.id() && spouse.is_root() && !placed.contains(&spouse.id())
            });
            if let Some(companion) = companion {
                placed.insert(companion.id());
            }

            let node = self.nodes.len();
            self.nodes.push(ForestNode {
                member,
                companion,
                children: Vec::new(),
                level,
            });
            if let Some(parent) = parent {
                self.nodes[parent].children.push(node);
            }

            let mut seen = HashSet::new();
            let children: Vec<&'a Member> = index
                .children_of(member.id())
                .iter()
                .chain(companion.map_or(&[][..], |c| index.children_of(c.id())))
                .copied()
                .filter(|child| !placed.contains(&child.id()) && seen.insert(child.id()))
                .collect();

            // Reversed so the first child is popped, and therefore visited, first.
            for child in children.into_iter().rev() {
                stack.push((child, Some(node), level + 1));
            }
        }

        root
    }

    pub fn nodes(&self) -> &[ForestNode<'a>] {
        &self.nodes
    }

    /// Arena indices of the tree roots, in growing order.
    pub fn trees(&self) -> &[usize] {
        &self.trees
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Number of members the forest places, companions included.
    pub fn member_count(&self) -> usize {
        self.nodes
            .iter()
            .map(|node| 1 + usize::from(node.companion.is_some()))
            .sum()
    }
}
