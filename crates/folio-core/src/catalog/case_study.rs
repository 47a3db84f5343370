use serde::{Deserialize, Serialize};

/// Long-form write-up shown on a project's case-study page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CaseStudy {
    pub overview: String,
    #[serde(default)]
    pub objectives: Vec<String>,
    /// "My Role & Responsibilities" bullet list.
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub deliverables: Vec<String>,
    /// Gallery asset references, hero first.
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
}
