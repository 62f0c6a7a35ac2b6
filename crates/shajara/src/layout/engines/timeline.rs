//! Timeline engine: members ordered by birth year along one axis.
//!
//! Members without a birth date sort after everyone else. The sort is stable,
//! so members sharing a year, and all undated members, keep list order.

use log::debug;

use shajara_core::geometry::Point;

use crate::{
    index::RelationshipIndex,
    layout::{LayoutResult, engines::LayoutEngine, relationship_edges},
};

/// Sort key for members without a birth date.
const UNDATED_YEAR: i32 = 9999;

pub struct Engine {
    row_spacing: f32,
}

impl Engine {
    pub fn new() -> Self {
        Self { row_spacing: 120.0 }
    }

    pub fn set_row_spacing(&mut self, spacing: f32) -> &mut Self {
        self.row_spacing = spacing;
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
        members.sort_by_key(|member| member.birth_year().unwrap_or(UNDATED_YEAR));

        let mut result = LayoutResult::new();
        for (row, member) in members.iter().enumerate() {
            result.place(member.id(), Point::new(0.0, row as f32 * self.row_spacing), 0);
        }
        result.set_edges(relationship_edges(index));

        debug!(members = result.len(); "Timeline layout calculated");
        result
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use shajara_core::member::{Gender, Member};

    use super::*;

    #[test]
    fn test_sorted_by_birth_year_undated_last() {
        let members = vec![
            Member::new("undated", "Undated", Gender::Male),
            Member::new("young", "Young", Gender::Female).with_birth_date(date!(1990 - 01 - 01)),
            Member::new("old", "Old", Gender::Male).with_birth_date(date!(1930 - 05 - 20)),
            Member::new("twin", "Twin", Gender::Female).with_birth_date(date!(1990 - 12 - 31)),
        ];
        let index = RelationshipIndex::new(&members);
        let result = Engine::new().calculate(&index);

        let order: Vec<String> = result.placements().map(|(id, _)| id.to_string()).collect();
        assert_eq!(order, ["old", "young", "twin", "undated"]);
        assert_eq!(result.position("undated".into()), Some(Point::new(0.0, 360.0)));
    }
}
