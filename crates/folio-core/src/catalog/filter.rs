//! Project list filtering.
//!
//! Three dimensions combine with AND:
//! - free-text query over title / brand / agency
//! - category (or `all`)
//! - view toggles, OR-ed together

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use super::category::UnknownCategory;
use super::{CatalogEntry, Category};

/// Category dimension of the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => entry.category == *category,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.slug(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Projects",
            CategoryFilter::Only(category) => category.label(),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") || trimmed.eq_ignore_ascii_case("All Projects") {
            return Ok(CategoryFilter::All);
        }
        trimmed.parse::<Category>().map(CategoryFilter::Only)
    }
}

/// A view-type toggle on the project list.
///
/// The named toggles map onto one or more authored tag labels; any other
/// value is treated as a literal tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewToggle {
    Povs,
    Plans,
    Elevations,
    Grid,
    NoGrid,
    Tag(String),
}

impl ViewToggle {
    /// The named toggles in filter-bar order.
    pub const NAMED: [ViewToggle; 5] = [
        ViewToggle::Povs,
        ViewToggle::Plans,
        ViewToggle::Elevations,
        ViewToggle::Grid,
        ViewToggle::NoGrid,
    ];

    pub fn id(&self) -> &str {
        match self {
            ViewToggle::Povs => "povs",
            ViewToggle::Plans => "plans",
            ViewToggle::Elevations => "elevations",
            ViewToggle::Grid => "grid",
            ViewToggle::NoGrid => "no-grid",
            ViewToggle::Tag(tag) => tag,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ViewToggle::Povs => "POVs",
            ViewToggle::Plans => "Plans",
            ViewToggle::Elevations => "Elevations",
            ViewToggle::Grid => "With Grid",
            ViewToggle::NoGrid => "Without Grid",
            ViewToggle::Tag(tag) => tag,
        }
    }

    /// Tags this toggle accepts. `Plans` also accepts `Plan Layout`.
    pub fn accepted_tags(&self) -> &[&str] {
        match self {
            ViewToggle::Povs => &["POVs"],
            ViewToggle::Plans => &["Plans", "Plan Layout"],
            ViewToggle::Elevations => &["Elevations"],
            ViewToggle::Grid => &["Grid"],
            ViewToggle::NoGrid => &["No Grid"],
            ViewToggle::Tag(_) => &[],
        }
    }

    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        match self {
            ViewToggle::Tag(tag) => entry.has_tag(tag),
            named => named.accepted_tags().iter().any(|tag| entry.has_tag(tag)),
        }
    }
}

impl Display for ViewToggle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ViewToggle {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let named = ViewToggle::NAMED
            .into_iter()
            .find(|t| t.id().eq_ignore_ascii_case(trimmed) || t.label().eq_ignore_ascii_case(trimmed));
        Ok(named.unwrap_or_else(|| ViewToggle::Tag(trimmed.to_string())))
    }
}

/// The complete filter-bar state of the project list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogFilter {
    pub category: CategoryFilter,
    /// Active toggles in activation order.
    pub toggles: Vec<ViewToggle>,
    pub query: String,
}

impl CatalogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_toggle(mut self, toggle: ViewToggle) -> Self {
        if !self.toggles.contains(&toggle) {
            self.toggles.push(toggle);
        }
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Flip a toggle: activate it if inactive, otherwise deactivate it.
    pub fn toggle(&mut self, toggle: ViewToggle) {
        if let Some(pos) = self.toggles.iter().position(|t| *t == toggle) {
            self.toggles.remove(pos);
        } else {
            self.toggles.push(toggle);
        }
    }

    /// Back to "all projects, no toggles, empty query".
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }

    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        let toggle_match =
            self.toggles.is_empty() || self.toggles.iter().any(|toggle| toggle.matches(entry));

        self.category.matches(entry) && entry.matches_query(&self.query) && toggle_match
    }
}
