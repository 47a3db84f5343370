//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - Define site configuration data structures
//! - Provide TOML → DTO mapping
//!
//! ## Prohibited
//!
//! No validation logic and no default value calculation here: an empty
//! string or a zero interval is a fact for the wiring layer to interpret.

use std::path::PathBuf;

/// Site configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Site title shown by the view layer (may be empty)
    pub site_title: String,

    /// Catalog JSON file (empty path means "use the embedded catalog")
    pub catalog_path: PathBuf,

    /// Home carousel auto-advance period in seconds (0 means "not set")
    pub carousel_interval_secs: u64,

    /// Scheduling URL for the contact page (may be empty)
    pub booking_url: String,
}

impl SiteConfig {
    /// Create SiteConfig from TOML value
    ///
    /// Missing keys become empty values. Negative intervals map to 0.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            site_title: toml_value
                .get("site")
                .and_then(|s| s.get("title"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            catalog_path: PathBuf::from(
                toml_value
                    .get("catalog")
                    .and_then(|c| c.get("path"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            carousel_interval_secs: toml_value
                .get("home")
                .and_then(|h| h.get("carousel_interval_secs"))
                .and_then(|v| v.as_integer())
                .map(|secs| u64::try_from(secs).unwrap_or(0))
                .unwrap_or(0),
            booking_url: toml_value
                .get("contact")
                .and_then(|c| c.get("booking_url"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
        })
    }

    /// Create empty SiteConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            site_title: String::new(),
            catalog_path: PathBuf::new(),
            carousel_interval_secs: 0,
            booking_url: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml::Value;

    #[test]
    fn test_from_toml_reads_all_sections() {
        let toml_str = r#"
            [site]
            title = "Studio Folio"

            [catalog]
            path = "/srv/folio/catalog.json"

            [home]
            carousel_interval_secs = 5

            [contact]
            booking_url = "https://calendly.com/studio/intro"
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = SiteConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.site_title, "Studio Folio");
        assert_eq!(config.catalog_path, PathBuf::from("/srv/folio/catalog.json"));
        assert_eq!(config.carousel_interval_secs, 5);
        assert_eq!(config.booking_url, "https://calendly.com/studio/intro");
    }

    #[test]
    fn test_from_toml_returns_empty_values_when_missing() {
        let toml_value: Value = toml::from_str("[site]\n").unwrap();

        let config = SiteConfig::from_toml(&toml_value).unwrap();

        // Empty values are facts, not errors
        assert_eq!(config, SiteConfig::empty());
    }

    #[test]
    fn test_from_toml_maps_negative_interval_to_zero() {
        let toml_value: Value = toml::from_str("[home]\ncarousel_interval_secs = -3\n").unwrap();

        let config = SiteConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.carousel_interval_secs, 0);
    }
}
