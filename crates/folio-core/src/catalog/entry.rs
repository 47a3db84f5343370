use serde::{Deserialize, Serialize};

use super::{CaseStudy, Category};
use crate::ids::EntryId;

/// One portfolio project / case study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: EntryId,
    pub title: String,
    pub agency_name: String,
    pub brand_name: String,
    pub role: String,
    pub summary: String,
    /// Filter labels in display order. Duplicates are kept as authored.
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: Category,
    /// Opaque label, not necessarily numeric.
    pub year: String,
    #[serde(default)]
    pub image_refs: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_study: Option<CaseStudy>,
}

impl CatalogEntry {
    /// The first image reference, used as the card / page hero.
    pub fn hero_image(&self) -> Option<&str> {
        self.image_refs.first().map(String::as_str)
    }

    /// Whether any tag equals `tag`, ignoring ASCII case.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Case-insensitive substring match over title, brand and agency.
    ///
    /// The query is not trimmed; an empty query matches every entry.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.brand_name.to_lowercase().contains(&needle)
            || self.agency_name.to_lowercase().contains(&needle)
    }

    /// Required display strings, as `(field name, value)` pairs.
    pub(crate) fn display_fields(&self) -> [(&'static str, &str); 5] {
        [
            ("title", self.title.as_str()),
            ("agency_name", self.agency_name.as_str()),
            ("brand_name", self.brand_name.as_str()),
            ("role", self.role.as_str()),
            ("summary", self.summary.as_str()),
        ]
    }
}
