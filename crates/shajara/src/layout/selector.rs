//! Engine registry and view-tag dispatch.
//!
//! [`EngineRegistry::from_config`] is the one place view modes are bound to
//! engines. [`LayoutSelector`] resolves the tags callers hand in, falling back
//! to the configured default view for anything it does not recognize, so a
//! layout request always produces a result.

use std::collections::HashMap;

use log::{info, warn};

use shajara_core::member::Member;

use crate::{
    config::LayoutConfig,
    index::RelationshipIndex,
    layout::{
        LayoutResult,
        engines::{LayoutEngine, grid, network, radial, timeline, tree},
        relationship_edges,
    },
    view::ViewMode,
};

/// View modes mapped to the engines that lay them out.
#[derive(Default)]
pub struct EngineRegistry {
    engines: HashMap<ViewMode, Box<dyn LayoutEngine>>,
}

impl EngineRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding an engine for every [`ViewMode`],
    /// configured from `config`.
    pub fn from_config(config: &LayoutConfig) -> Self {
        let mut registry = Self::new();

        let radial_config = config.radial();
        let mut radial = radial::Engine::new();
        radial
            .set_base_radius(radial_config.base_radius())
            .set_ring_increment(radial_config.ring_increment())
            .set_spouse_offset(radial_config.spouse_offset());
        registry.register(ViewMode::Radial, Box::new(radial));

        let tree_config = config.tree();
        let tree_engine = |orientation, sibling_gap| {
            let mut engine = tree::Engine::new(orientation);
            engine
                .set_node_size(tree_config.node_width(), tree_config.node_height())
                .set_sibling_gap(sibling_gap)
                .set_level_gap(tree_config.level_gap())
                .set_spouse_gap(tree_config.spouse_gap())
                .set_tree_gap(tree_config.tree_gap());
            Box::new(engine)
        };
        registry.register(
            ViewMode::VerticalTree,
            tree_engine(tree::Orientation::Vertical, tree_config.sibling_gap()),
        );
        registry.register(
            ViewMode::HorizontalTree,
            tree_engine(tree::Orientation::Horizontal, tree_config.sibling_gap()),
        );
        registry.register(
            ViewMode::OrgChart,
            tree_engine(
                tree::Orientation::Vertical,
                tree_config.org_chart_sibling_gap(),
            ),
        );

        let network_config = config.network();
        let mut network = network::Engine::new();
        network
            .set_base_radius(network_config.base_radius())
            .set_radius_per_member(network_config.radius_per_member())
            .set_max_radius(network_config.max_radius());
        registry.register(ViewMode::Network, Box::new(network));

        let mut timeline = timeline::Engine::new();
        timeline.set_row_spacing(config.timeline().row_spacing());
        registry.register(ViewMode::Timeline, Box::new(timeline));

        let grid_config = config.grid();
        for (mode, mut engine) in [
            (ViewMode::Grid, grid::Engine::new()),
            (ViewMode::Gallery, grid::Engine::gallery()),
        ] {
            engine
                .set_columns(grid_config.columns())
                .set_cell_size(grid_config.cell_width(), grid_config.cell_height());
            registry.register(mode, Box::new(engine));
        }

        registry
    }

    /// Binds `mode` to `engine`, returning the engine it replaces.
    pub fn register(
        &mut self,
        mode: ViewMode,
        engine: Box<dyn LayoutEngine>,
    ) -> Option<Box<dyn LayoutEngine>> {
        self.engines.insert(mode, engine)
    }

    pub fn get(&self, mode: ViewMode) -> Option<&dyn LayoutEngine> {
        self.engines.get(&mode).map(|engine| &**engine)
    }

    pub fn contains(&self, mode: ViewMode) -> bool {
        self.engines.contains_key(&mode)
    }

    pub fn len(&self) -> usize {
        self.engines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}

/// Chooses and runs the engine for a view.
pub struct LayoutSelector {
    registry: EngineRegistry,
    default_view: ViewMode,
}

impl LayoutSelector {
    /// Creates a selector with every built-in engine configured from `config`.
    pub fn new(config: &LayoutConfig) -> Self {
        Self::with_registry(EngineRegistry::from_config(config), config.default_view())
    }

    pub fn with_registry(registry: EngineRegistry, default_view: ViewMode) -> Self {
        Self {
            registry,
            default_view,
        }
    }

    pub fn default_view(&self) -> ViewMode {
        self.default_view
    }

    /// Resolves a view tag, falling back to the default view when the tag is
    /// unknown or has no registered engine.
    pub fn resolve(&self, tag: &str) -> ViewMode {
        match tag.parse::<ViewMode>() {
            Ok(view) if self.registry.contains(view) => view,
            Ok(view) => {
                warn!(view:%, fallback:% = self.default_view; "No engine registered for view");
                self.default_view
            }
            Err(err) => {
                warn!(tag, fallback:% = self.default_view, err; "Unknown view tag");
                self.default_view
            }
        }
    }

    /// Lays out `members` for the view named by `tag`.
    ///
    /// Returns the view that was actually used with the result.
    pub fn layout_tag(&self, tag: &str, members: &[Member]) -> (ViewMode, LayoutResult) {
        let view = self.resolve(tag);
        (view, self.layout(view, members))
    }

    /// Lays out `members` for `view`.
    pub fn layout(&self, view: ViewMode, members: &[Member]) -> LayoutResult {
        let index = RelationshipIndex::new(members);
        self.layout_index(view, &index)
    }

    /// Lays out an already built index for `view`.
    pub fn layout_index(&self, view: ViewMode, index: &RelationshipIndex<'_>) -> LayoutResult {
        for dangling in index.dangling_references() {
            warn!(
                member:% = dangling.member,
                kind:? = dangling.kind,
                target:% = dangling.target;
                "Ignoring reference to unknown member"
            );
        }

        let engine = self
            .registry
            .get(view)
            .or_else(|| self.registry.get(self.default_view));
        let Some(engine) = engine else {
            // Only reachable with a hand-built registry lacking the default view.
            warn!(view:%, fallback:% = self.default_view; "No engine available, placing nothing");
            let mut result = LayoutResult::new();
            result.set_edges(relationship_edges(index));
            return result;
        };

        let result = engine.calculate(index);
        info!(
            view:%,
            members = result.len(),
            edges = result.edges().len();
            "Layout calculated"
        );
        result
    }
}

impl Default for LayoutSelector {
    fn default() -> Self {
        Self::new(&LayoutConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use shajara_core::{geometry::Point, member::Gender};

    use super::*;

    fn couple() -> Vec<Member> {
        vec![
            Member::new(1_u64, "One", Gender::Male).with_spouse(2_u64),
            Member::new(2_u64, "Two", Gender::Female).with_spouse(1_u64),
            Member::new(3_u64, "Three", Gender::Male)
                .with_father(1_u64)
                .with_mother(2_u64),
        ]
    }

    #[test]
    fn test_registry_covers_every_view() {
        let registry = EngineRegistry::from_config(&LayoutConfig::default());

        assert_eq!(registry.len(), ViewMode::ALL.len());
        for view in ViewMode::ALL {
            assert!(registry.contains(view), "missing engine for {view}");
        }
    }

    #[test]
    fn test_unknown_tag_falls_back_to_default() {
        let selector = LayoutSelector::default();

        assert_eq!(selector.resolve("cards"), ViewMode::HorizontalTree);
        assert_eq!(selector.resolve(""), ViewMode::HorizontalTree);
        assert_eq!(selector.resolve("circular"), ViewMode::Radial);
    }

    #[test]
    fn test_configured_default_view() {
        let config = LayoutConfig::default().with_default_view(ViewMode::Network);
        let selector = LayoutSelector::new(&config);

        let (view, result) = selector.layout_tag("no-such-view", &couple());
        assert_eq!(view, ViewMode::Network);
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_every_view_places_every_member() {
        let selector = LayoutSelector::default();
        let members = couple();

        for view in ViewMode::ALL {
            let result = selector.layout(view, &members);
            assert_eq!(result.len(), members.len(), "view {view}");
            // Two parent edges from the child plus one spouse edge each way.
            assert_eq!(result.edges().len(), 4, "view {view}");
        }
    }

    #[test]
    fn test_org_chart_uses_wider_sibling_gap() {
        let members = vec![
            Member::new("p", "Parent", Gender::Male),
            Member::new("c1", "First", Gender::Female).with_father("p"),
            Member::new("c2", "Second", Gender::Male).with_father("p"),
        ];
        let selector = LayoutSelector::default();
        let sibling_step = |view| {
            let result = selector.layout(view, &members);
            let first = result.position("c1".into()).unwrap();
            let second = result.position("c2".into()).unwrap();
            second.x() - first.x()
        };

        // Node width 160 plus the configured sibling gap.
        assert_approx_eq!(f32, sibling_step(ViewMode::VerticalTree), 200.0);
        assert_approx_eq!(f32, sibling_step(ViewMode::OrgChart), 240.0);
    }

    #[test]
    fn test_missing_engine_uses_default_view_engine() {
        let mut registry = EngineRegistry::new();
        registry.register(ViewMode::Grid, Box::new(grid::Engine::new()));
        let selector = LayoutSelector::with_registry(registry, ViewMode::Grid);

        assert_eq!(selector.resolve("radial"), ViewMode::Grid);
        let result = selector.layout(ViewMode::Radial, &couple());
        assert_eq!(result.position(2_u64.into()), Some(Point::new(180.0, 0.0)));
    }

    #[test]
    fn test_empty_registry_places_nothing() {
        let selector = LayoutSelector::with_registry(EngineRegistry::new(), ViewMode::Grid);
        let result = selector.layout(ViewMode::Grid, &couple());

        assert!(result.is_empty());
        assert_eq!(result.edges().len(), 4);
    }
}
