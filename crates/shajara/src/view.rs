//! View-mode tags understood by the layout selector.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// Visual layouts a member list can be arranged in.
///
/// The names match external configuration and command-line strings
/// (kebab-case). The short tags `circular`, `vertical`, `horizontal` and
/// `orgchart` are accepted as aliases.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    /// Generations on concentric rings
    #[serde(alias = "circular")]
    Radial,
    /// Generations flowing downward
    #[serde(alias = "vertical")]
    VerticalTree,
    /// Generations flowing rightward (default)
    #[default]
    #[serde(alias = "horizontal")]
    HorizontalTree,
    /// Downward tree with wider sibling spacing
    #[serde(alias = "orgchart")]
    OrgChart,
    /// Every member on one ring, hierarchy ignored
    Network,
    /// Members ordered by birth year on a single axis
    Timeline,
    /// Members in list order on a fixed-column grid
    Grid,
    /// Grid with members carrying an image first
    Gallery,
}

impl ViewMode {
    /// Every view mode, in the order they are presented to users.
    pub const ALL: [ViewMode; 8] = [
        ViewMode::HorizontalTree,
        ViewMode::VerticalTree,
        ViewMode::Radial,
        ViewMode::OrgChart,
        ViewMode::Network,
        ViewMode::Timeline,
        ViewMode::Grid,
        ViewMode::Gallery,
    ];
}

impl FromStr for ViewMode {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "radial" | "circular" => Ok(Self::Radial),
            "vertical-tree" | "vertical" => Ok(Self::VerticalTree),
            "horizontal-tree" | "horizontal" => Ok(Self::HorizontalTree),
            "org-chart" | "orgchart" => Ok(Self::OrgChart),
            "network" => Ok(Self::Network),
            "timeline" => Ok(Self::Timeline),
            "grid" => Ok(Self::Grid),
            "gallery" => Ok(Self::Gallery),
            _ => Err("Unsupported view mode"),
        }
    }
}

impl From<ViewMode> for &'static str {
    fn from(val: ViewMode) -> Self {
        match val {
            ViewMode::Radial => "radial",
            ViewMode::VerticalTree => "vertical-tree",
            ViewMode::HorizontalTree => "horizontal-tree",
            ViewMode::OrgChart => "org-chart",
            ViewMode::Network => "network",
            ViewMode::Timeline => "timeline",
            ViewMode::Grid => "grid",
            ViewMode::Gallery => "gallery",
        }
    }
}

impl Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}
