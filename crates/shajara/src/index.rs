//! Relationship index over a flat member list.
//!
//! The member store hands out an ordered `Vec` of records whose relationships
//! are plain id references. [`RelationshipIndex`] turns that list into the
//! lookup structures every layout strategy needs, in a single O(n) pass:
//!
//! - `by_id`: id → member
//! - `children_of`: id → members naming that id as father or mother, in list order
//! - `roots`: members with neither a father nor a mother recorded
//! - `spouse_of`: id → the member named by that member's own `spouseId`
//!
//! The index never fails. Data integrity problems are absorbed here so that
//! strategies can treat the index as well formed:
//!
//! - A reference to an id that is not in the list resolves to `None` and the
//!   member is not listed under that id's children.
//! - When two records share an id, the first one in list order is canonical;
//!   later duplicates are ignored entirely.
//! - A member naming the same id as both father and mother appears once in
//!   that id's child list.

use std::collections::{HashMap, hash_map::Entry};

use log::{debug, warn};

use shajara_core::{
    identifier::MemberId,
    member::{Gender, Member},
};

/// The relationship a reference was recorded under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Father,
    Mother,
    Spouse,
}

/// A relationship reference naming a member that is not in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DanglingReference {
    pub member: MemberId,
    pub kind: ReferenceKind,
    pub target: MemberId,
}

/// A member's resolved parents. Either side is `None` when unrecorded or dangling.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Parents<'a> {
    pub father: Option<&'a Member>,
    pub mother: Option<&'a Member>,
}

/// Derived lookup structures over a member list.
///
/// The index borrows the list; rebuild it whenever the list changes.
#[derive(Debug)]
pub struct RelationshipIndex<'a> {
    members: Vec<&'a Member>,
    by_id: HashMap<MemberId, &'a Member>,
    children: HashMap<MemberId, Vec<&'a Member>>,
    roots: Vec<&'a Member>,
}

impl<'a> RelationshipIndex<'a> {
    /// Builds the index for `members`.
    pub fn new(members: &'a [Member]) -> Self {
        let mut canonical = Vec::with_capacity(members.len());
        let mut by_id = HashMap::with_capacity(members.len());

        for member in members {
            match by_id.entry(member.id()) {
                Entry::Vacant(entry) => {
                    entry.insert(member);
                    canonical.push(member);
                }
                Entry::Occupied(_) => {
                    warn!(id:% = member.id(); "Duplicate member id, keeping first occurrence");
                }
            }
        }

        let mut children: HashMap<MemberId, Vec<&'a Member>> = HashMap::new();
        let mut roots = Vec::new();

        for &member in &canonical {
            if member.is_root() {
                roots.push(member);
            }

            let father = member.father_id().filter(|id| by_id.contains_key(id));
            let mother = member
                .mother_id()
                .filter(|id| by_id.contains_key(id) && Some(*id) != father);

            for parent in [father, mother].into_iter().flatten() {
                children.entry(parent).or_default().push(member);
            }
        }

        debug!(
            members = canonical.len(),
            roots = roots.len(),
            parents = children.len();
            "Relationship index built"
        );

        Self {
            members: canonical,
            by_id,
            children,
            roots,
        }
    }

    /// Canonical members (first occurrence of each id) in list order.
    pub fn members(&self) -> &[&'a Member] {
        &self.members
    }

    /// Number of distinct members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Looks up a member by id.
    pub fn by_id(&self, id: MemberId) -> Option<&'a Member> {
        self.by_id.get(&id).copied()
    }

    pub fn contains(&self, id: MemberId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Members naming `id` as father or mother, in list order.
    ///
    /// Returns an empty slice for unknown ids and for members without children.
    pub fn children_of(&self, id: MemberId) -> &[&'a Member] {
        self.children
            .get(&id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Members with neither a father nor a mother recorded, in list order.
    pub fn roots(&self) -> &[&'a Member] {
        &self.roots
    }

    /// Resolves `id`'s own spouse claim.
    ///
    /// Symmetry is not assumed: the spouse named by `id` need not name `id`
    /// back. See [`Self::has_mutual_spouse`] for the strict check.
    pub fn spouse_of(&self, id: MemberId) -> Option<&'a Member> {
        self.by_id(id)?
            .spouse_id()
            .and_then(|spouse_id| self.by_id(spouse_id))
    }

    /// Returns `true` if `id` and its spouse name each other.
    pub fn has_mutual_spouse(&self, id: MemberId) -> bool {
        self.spouse_of(id)
            .is_some_and(|spouse| spouse.spouse_id() == Some(id))
    }

    /// Resolves `id`'s father and mother.
    pub fn parents_of(&self, id: MemberId) -> Parents<'a> {
        let Some(member) = self.by_id(id) else {
            return Parents::default();
        };
        Parents {
            father: member.father_id().and_then(|father| self.by_id(father)),
            mother: member.mother_id().and_then(|mother| self.by_id(mother)),
        }
    }

    /// Members that may be offered as `id`'s father: every male member except `id`.
    pub fn father_candidates(&self, id: MemberId) -> impl Iterator<Item = &'a Member> + '_ {
        self.candidates(id)
            .filter(|member| member.gender() == Gender::Male)
    }

    /// Members that may be offered as `id`'s mother: every female member except `id`.
    pub fn mother_candidates(&self, id: MemberId) -> impl Iterator<Item = &'a Member> + '_ {
        self.candidates(id)
            .filter(|member| member.gender() == Gender::Female)
    }

    /// Members that may be offered as `id`'s spouse: everyone except `id`.
    pub fn spouse_candidates(&self, id: MemberId) -> impl Iterator<Item = &'a Member> + '_ {
        self.candidates(id)
    }

    fn candidates(&self, id: MemberId) -> impl Iterator<Item = &'a Member> + '_ {
        self.members
            .iter()
            .copied()
            .filter(move |member| member.id() != id)
    }

    /// Every recorded reference that names a member not in the list.
    pub fn dangling_references(&self) -> impl Iterator<Item = DanglingReference> + '_ {
        self.members.iter().flat_map(move |member| {
            [
                (ReferenceKind::Father, member.father_id()),
                (ReferenceKind::Mother, member.mother_id()),
                (ReferenceKind::Spouse, member.spouse_id()),
            ]
            .into_iter()
            .filter_map(move |(kind, target)| {
                let target = target?;
                (!self.contains(target)).then_some(DanglingReference {
                    member: member.id(),
                    kind,
                    target,
                })
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(members: &[&Member]) -> Vec<String> {
        members.iter().map(|member| member.id().to_string()).collect()
    }

    fn family() -> Vec<Member> {
        vec![
            Member::new("1", "Grandfather", Gender::Male).with_spouse("2"),
            Member::new("2", "Grandmother", Gender::Female).with_spouse("1"),
            Member::new("3", "Son", Gender::Male)
                .with_father("1")
                .with_mother("2")
                .with_spouse("4"),
            Member::new("4", "Daughter-in-law", Gender::Female),
            Member::new("5", "Grandchild", Gender::Female)
                .with_father("3")
                .with_mother("4"),
            Member::new("6", "Daughter", Gender::Female).with_father("1"),
        ]
    }

    #[test]
    fn test_by_id() {
        let members = family();
        let index = RelationshipIndex::new(&members);

        assert_eq!(index.len(), 6);
        assert_eq!(index.by_id(MemberId::new("3")).unwrap().name(), "Son");
        assert!(index.by_id(MemberId::new("99")).is_none());
    }

    #[test]
    fn test_children_preserve_list_order() {
        let members = family();
        let index = RelationshipIndex::new(&members);

        assert_eq!(ids(index.children_of(MemberId::new("1"))), ["3", "6"]);
        assert_eq!(ids(index.children_of(MemberId::new("2"))), ["3"]);
        assert_eq!(ids(index.children_of(MemberId::new("4"))), ["5"]);
        assert!(index.children_of(MemberId::new("5")).is_empty());
    }

    #[test]
    fn test_roots() {
        let members = family();
        let index = RelationshipIndex::new(&members);

        assert_eq!(ids(index.roots()), ["1", "2", "4"]);
    }

    #[test]
    fn test_adding_a_parent_removes_root() {
        let mut members = family();
        members[3] = members[3].clone().with_mother("2");
        let index = RelationshipIndex::new(&members);

        assert_eq!(ids(index.roots()), ["1", "2"]);
    }

    #[test]
    fn test_same_parent_twice_lists_child_once() {
        let members = vec![
            Member::new("p", "Parent", Gender::Male),
            Member::new("c", "Child", Gender::Female)
                .with_father("p")
                .with_mother("p"),
        ];
        let index = RelationshipIndex::new(&members);

        assert_eq!(ids(index.children_of(MemberId::new("p"))), ["c"]);
    }

    #[test]
    fn test_dangling_parent_is_not_indexed() {
        let members = vec![Member::new("a", "Orphan", Gender::Male).with_father("ghost")];
        let index = RelationshipIndex::new(&members);

        assert!(index.children_of(MemberId::new("ghost")).is_empty());
        assert!(index.roots().is_empty());
        assert_eq!(
            index.by_id(MemberId::new("a")).unwrap().father_id(),
            Some(MemberId::new("ghost"))
        );
        assert_eq!(
            index.dangling_references().collect::<Vec<_>>(),
            [DanglingReference {
                member: MemberId::new("a"),
                kind: ReferenceKind::Father,
                target: MemberId::new("ghost"),
            }]
        );
    }

    #[test]
    fn test_duplicate_ids_keep_first_occurrence() {
        let members = vec![
            Member::new("1", "First", Gender::Male),
            Member::new("1", "Second", Gender::Female),
            Member::new("2", "Child", Gender::Male).with_father("1"),
        ];
        let index = RelationshipIndex::new(&members);

        assert_eq!(index.len(), 2);
        assert_eq!(index.by_id(MemberId::new("1")).unwrap().name(), "First");
        assert_eq!(ids(index.roots()), ["1"]);
        assert_eq!(ids(index.children_of(MemberId::new("1"))), ["2"]);
    }

    #[test]
    fn test_spouse_is_directed() {
        let members = vec![
            Member::new("h", "Husband", Gender::Male).with_spouse("w"),
            Member::new("w", "Wife", Gender::Female),
        ];
        let index = RelationshipIndex::new(&members);

        assert_eq!(index.spouse_of(MemberId::new("h")).unwrap().id(), "w");
        assert!(index.spouse_of(MemberId::new("w")).is_none());
        assert!(!index.has_mutual_spouse(MemberId::new("h")));
    }

    #[test]
    fn test_mutual_spouse() {
        let members = family();
        let index = RelationshipIndex::new(&members);

        assert!(index.has_mutual_spouse(MemberId::new("1")));
        assert!(!index.has_mutual_spouse(MemberId::new("3")));
        assert!(!index.has_mutual_spouse(MemberId::new("missing")));
    }

    #[test]
    fn test_parents_of() {
        let members = family();
        let index = RelationshipIndex::new(&members);

        let parents = index.parents_of(MemberId::new("5"));
        assert_eq!(parents.father.unwrap().id(), "3");
        assert_eq!(parents.mother.unwrap().id(), "4");

        let parents = index.parents_of(MemberId::new("6"));
        assert_eq!(parents.father.unwrap().id(), "1");
        assert!(parents.mother.is_none());
    }

    #[test]
    fn test_candidates_exclude_self_and_filter_gender() {
        let members = family();
        let index = RelationshipIndex::new(&members);
        let son = MemberId::new("3");

        let fathers: Vec<_> = index.father_candidates(son).map(Member::id).collect();
        let mothers: Vec<_> = index.mother_candidates(son).map(Member::id).collect();
        let spouses = index.spouse_candidates(son).count();

        assert_eq!(fathers, [MemberId::new("1")]);
        assert_eq!(
            mothers,
            [MemberId::new("2"), MemberId::new("4"), MemberId::new("5"), MemberId::new("6")]
        );
        assert_eq!(spouses, 5);
    }

    #[test]
    fn test_empty_input() {
        let index = RelationshipIndex::new(&[]);

        assert!(index.is_empty());
        assert!(index.roots().is_empty());
        assert_eq!(index.dangling_references().count(), 0);
    }
}
