//! Configuration types for family tree layout.
//!
//! Every structure implements [`serde::Deserialize`] with a default for each
//! field, so a configuration file only needs to name the values it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Configuration root.
//! - [`LayoutConfig`] - Default view and the spacing parameters of every engine.
//!
//! # Example
//!
//! ```
//! # use shajara::{config::AppConfig, view::ViewMode};
//! let config = AppConfig::default();
//! assert_eq!(config.layout().default_view(), ViewMode::HorizontalTree);
//! assert_eq!(config.layout().grid().columns(), 4);
//! ```

use serde::Deserialize;

use crate::view::ViewMode;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,
}

impl AppConfig {
    pub fn new(layout: LayoutConfig) -> Self {
        Self { layout }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }
}

/// Layout configuration: the fallback view and per-engine parameters.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// View used when a requested tag is not recognized.
    default_view: ViewMode,
    radial: RadialConfig,
    tree: TreeConfig,
    network: NetworkConfig,
    timeline: TimelineConfig,
    grid: GridConfig,
}

impl LayoutConfig {
    /// Returns a copy using `view` as the fallback view.
    pub fn with_default_view(mut self, view: ViewMode) -> Self {
        self.default_view = view;
        self
    }

    pub fn default_view(&self) -> ViewMode {
        self.default_view
    }

    pub fn radial(&self) -> &RadialConfig {
        &self.radial
    }

    pub fn tree(&self) -> &TreeConfig {
        &self.tree
    }

    pub fn network(&self) -> &NetworkConfig {
        &self.network
    }

    pub fn timeline(&self) -> &TimelineConfig {
        &self.timeline
    }

    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }
}

/// Ring geometry of the radial view.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RadialConfig {
    base_radius: f32,
    ring_increment: f32,
    spouse_offset: f32,
}

impl Default for RadialConfig {
    fn default() -> Self {
        Self {
            base_radius: 120.0,
            ring_increment: 100.0,
            spouse_offset: 140.0,
        }
    }
}

impl RadialConfig {
    /// Radius of the innermost ring.
    pub fn base_radius(&self) -> f32 {
        self.base_radius
    }

    /// Radius added per generation.
    pub fn ring_increment(&self) -> f32 {
        self.ring_increment
    }

    /// Horizontal distance from a member to the spouse drawn beside it.
    pub fn spouse_offset(&self) -> f32 {
        self.spouse_offset
    }
}

/// Box sizes and gaps of the tree views.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    node_width: f32,
    node_height: f32,
    sibling_gap: f32,
    org_chart_sibling_gap: f32,
    level_gap: f32,
    spouse_gap: f32,
    tree_gap: f32,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            node_width: 160.0,
            node_height: 80.0,
            sibling_gap: 40.0,
            org_chart_sibling_gap: 80.0,
            level_gap: 120.0,
            spouse_gap: 20.0,
            tree_gap: 80.0,
        }
    }
}

impl TreeConfig {
    pub fn node_width(&self) -> f32 {
        self.node_width
    }

    pub fn node_height(&self) -> f32 {
        self.node_height
    }

    pub fn sibling_gap(&self) -> f32 {
        self.sibling_gap
    }

    /// Sibling gap used by the org-chart view in place of [`Self::sibling_gap`].
    pub fn org_chart_sibling_gap(&self) -> f32 {
        self.org_chart_sibling_gap
    }

    pub fn level_gap(&self) -> f32 {
        self.level_gap
    }

    pub fn spouse_gap(&self) -> f32 {
        self.spouse_gap
    }

    pub fn tree_gap(&self) -> f32 {
        self.tree_gap
    }
}

/// Ring sizing of the network view.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    base_radius: f32,
    radius_per_member: f32,
    max_radius: f32,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            base_radius: 200.0,
            radius_per_member: 5.0,
            max_radius: 300.0,
        }
    }
}

impl NetworkConfig {
    pub fn base_radius(&self) -> f32 {
        self.base_radius
    }

    pub fn radius_per_member(&self) -> f32 {
        self.radius_per_member
    }

    pub fn max_radius(&self) -> f32 {
        self.max_radius
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    row_spacing: f32,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self { row_spacing: 120.0 }
    }
}

impl TimelineConfig {
    pub fn row_spacing(&self) -> f32 {
        self.row_spacing
    }
}

/// Cell layout of the grid and gallery views.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    columns: usize,
    cell_width: f32,
    cell_height: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: 4,
            cell_width: 180.0,
            cell_height: 200.0,
        }
    }
}

impl GridConfig {
    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn cell_width(&self) -> f32 {
        self.cell_width
    }

    pub fn cell_height(&self) -> f32 {
        self.cell_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let json = r#"{
            "layout": {
                "default_view": "radial",
                "tree": { "level_gap": 200.0 },
                "grid": { "columns": 6 }
            }
        }"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        let layout = config.layout();

        assert_eq!(layout.default_view(), ViewMode::Radial);
        assert_eq!(layout.tree().level_gap(), 200.0);
        assert_eq!(layout.tree().sibling_gap(), 40.0);
        assert_eq!(layout.grid().columns(), 6);
        assert_eq!(layout.grid().cell_width(), 180.0);
        assert_eq!(layout.radial().base_radius(), 120.0);
        assert_eq!(layout.network().max_radius(), 300.0);
        assert_eq!(layout.timeline().row_spacing(), 120.0);
    }

    #[test]
    fn test_default_view_accepts_alias() {
        let json = r#"{ "layout": { "default_view": "circular" } }"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.layout().default_view(), ViewMode::Radial);
    }

    #[test]
    fn test_empty_config() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();

        assert_eq!(config.layout().default_view(), ViewMode::HorizontalTree);
        assert_eq!(config.layout().tree().org_chart_sibling_gap(), 80.0);
    }
}
