use chrono::{DateTime, Datelike};

pub const PROFILE_DOCUMENT: &str = "personal-data.json";
pub const PROJECTS_DOCUMENT: &str = "projects.json";
const CV_FILE: &str = "cv.pdf";

/// Where the site is hosted. Every fetched document and asset is resolved
/// relative to `base_path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    base_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new("/")
    }
}

impl SiteConfig {
    /// The base path is normalized to start and end with a single `/`.
    pub fn new(base_path: &str) -> Self {
        let trimmed = base_path.trim().trim_matches('/');
        let base_path = if trimmed.is_empty() {
            "/".to_string()
        } else {
            format!("/{trimmed}/")
        };
        Self { base_path }
    }

    /// Configuration baked in by `build.rs` (`SITE_BASE_PATH`).
    pub fn from_build() -> Self {
        Self::new(env!("SITE_BASE_PATH"))
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn resource_url(&self, name: &str) -> String {
        format!("{}{}", self.base_path, name.trim_start_matches('/'))
    }

    /// Absolute URLs are kept verbatim, anything else is served from the base path.
    pub fn asset_url(&self, path: &str) -> String {
        if path.is_empty() {
            String::new()
        } else if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            self.resource_url(path)
        }
    }

    pub fn cv_url(&self) -> String {
        self.resource_url(CV_FILE)
    }
}

pub fn build_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|t| t.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_path_normalization() {
        assert_eq!(SiteConfig::new("").base_path(), "/");
        assert_eq!(SiteConfig::new("/").base_path(), "/");
        assert_eq!(SiteConfig::new("portfolio").base_path(), "/portfolio/");
        assert_eq!(SiteConfig::new("/portfolio/").base_path(), "/portfolio/");
        assert_eq!(SiteConfig::new("//a/b//").base_path(), "/a/b/");
    }

    #[test]
    fn test_resource_url() {
        let root = SiteConfig::default();
        assert_eq!(root.resource_url(PROFILE_DOCUMENT), "/personal-data.json");

        let nested = SiteConfig::new("/portfolio");
        assert_eq!(nested.resource_url(PROJECTS_DOCUMENT), "/portfolio/projects.json");
        assert_eq!(nested.resource_url("/projects.json"), "/portfolio/projects.json");
        assert_eq!(nested.cv_url(), "/portfolio/cv.pdf");
    }

    #[test]
    fn test_asset_url() {
        let config = SiteConfig::new("/portfolio/");
        assert_eq!(config.asset_url("me.jpg"), "/portfolio/me.jpg");
        assert_eq!(
            config.asset_url("https://example.com/me.jpg"),
            "https://example.com/me.jpg"
        );
        assert_eq!(config.asset_url(""), "");
    }

    #[test]
    fn test_build_year_is_embedded() {
        assert!(build_year().is_some_and(|y| y >= 2024));
    }
}
