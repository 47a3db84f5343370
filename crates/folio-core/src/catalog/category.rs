use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Coarse project category used by the project list filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Stands")]
    Stands,
    #[serde(rename = "Branded Vehicles")]
    BrandedVehicles,
    #[serde(rename = "Events/Experiences")]
    EventsExperiences,
    #[serde(rename = "Retail Pop-ups")]
    RetailPopUps,
    #[serde(rename = "Game/Entertainment IP")]
    GameEntertainmentIp,
}

impl Category {
    /// All categories in filter-bar order.
    pub const ALL: [Category; 5] = [
        Category::Stands,
        Category::BrandedVehicles,
        Category::EventsExperiences,
        Category::RetailPopUps,
        Category::GameEntertainmentIp,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Stands => "Stands",
            Category::BrandedVehicles => "Branded Vehicles",
            Category::EventsExperiences => "Events/Experiences",
            Category::RetailPopUps => "Retail Pop-ups",
            Category::GameEntertainmentIp => "Game/Entertainment IP",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Category::Stands => "stands",
            Category::BrandedVehicles => "branded-vehicles",
            Category::EventsExperiences => "events",
            Category::RetailPopUps => "retail",
            Category::GameEntertainmentIp => "gaming",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Accepts either the slug (`gaming`) or the display label
    /// (`Game/Entertainment IP`), ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.slug().eq_ignore_ascii_case(needle) || c.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
