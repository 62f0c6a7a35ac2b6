//! Shajara - layout for family tree data.
//!
//! Turns a flat list of family members, linked by father, mother and spouse
//! references, into positions on a logical plane for one of several views:
//! radial rings, vertical and horizontal trees, an org chart, a network ring,
//! a timeline, a grid and a gallery.

pub mod config;
pub mod export;
pub mod index;
pub mod layout;
pub mod view;

mod error;

pub use shajara_core::{geometry, identifier, member};

pub use error::ShajaraError;

use log::{debug, info, trace};
use serde::Deserialize;

use config::AppConfig;
use layout::{LayoutResult, selector::LayoutSelector};
use member::Member;
use view::ViewMode;

/// Member file wrapping the list in an object under `familyMembers`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MemberStore {
    family_members: Vec<Member>,
}

/// Façade for loading family data and laying it out.
///
/// # Examples
///
/// ```
/// use shajara::{FamilyBuilder, config::AppConfig, view::ViewMode};
///
/// let source = r#"[
///     { "id": 1, "name": "Bobur", "gender": "male" },
///     { "id": 2, "name": "Dilnoza", "gender": "female", "fatherId": 1 }
/// ]"#;
///
/// let builder = FamilyBuilder::new(AppConfig::default());
/// let members = builder.parse_members(source).expect("valid member data");
/// let result = builder.layout(ViewMode::VerticalTree, &members);
///
/// assert_eq!(result.len(), 2);
/// assert_eq!(result.edges().len(), 1);
/// ```
pub struct FamilyBuilder {
    config: AppConfig,
    selector: LayoutSelector,
}

impl FamilyBuilder {
    /// Create a new family builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let selector = LayoutSelector::new(config.layout());
        Self { config, selector }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a member file.
    ///
    /// The source is either a JSON array of members or an object holding
    /// that array under `familyMembers`.
    ///
    /// # Errors
    ///
    /// Returns [`ShajaraError::Parse`] when the source is not valid member
    /// JSON.
    pub fn parse_members(&self, source: &str) -> Result<Vec<Member>, ShajaraError> {
        info!("Parsing member data");

        let parsed = if source.trim_start().starts_with('{') {
            serde_json::from_str::<MemberStore>(source).map(|store| store.family_members)
        } else {
            serde_json::from_str::<Vec<Member>>(source)
        };
        let members = parsed.map_err(|err| ShajaraError::new_parse_error(err, source))?;

        debug!(members = members.len(); "Member data parsed");
        trace!(members:?; "Parsed members");
        Ok(members)
    }

    /// Lay out `members` for `view`.
    pub fn layout(&self, view: ViewMode, members: &[Member]) -> LayoutResult {
        info!(view:%, members = members.len(); "Laying out family");
        self.selector.layout(view, members)
    }

    /// Lay out `members` for the view named by `tag`.
    ///
    /// Unknown tags fall back to the configured default view, which is
    /// returned alongside the result.
    pub fn layout_tag(&self, tag: &str, members: &[Member]) -> (ViewMode, LayoutResult) {
        info!(tag, members = members.len(); "Laying out family");
        self.selector.layout_tag(tag, members)
    }

    /// Serialize a layout result to the JSON document renderers consume.
    ///
    /// # Errors
    ///
    /// Returns [`ShajaraError::Export`] if serialization fails.
    pub fn render_json(
        &self,
        view: ViewMode,
        result: &LayoutResult,
    ) -> Result<String, ShajaraError> {
        export::to_json(view, result)
    }
}

impl Default for FamilyBuilder {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
