use crate::{paths::normalize_base, RouteError, RouteTable};

/// Browser URL strategy handed to the router.
///
/// `leptos_router` drives client-side navigation through the History API
/// (`BrowserUrl`), so paths are real URL paths rather than `#` fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum HistoryMode {
    #[default]
    Browser,
}

/// Where the route table is mounted and how history is managed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterConfig {
    base: String,
    history: HistoryMode,
}

impl RouterConfig {
    pub fn new(base: &str) -> Self {
        Self {
            base: normalize_base(base),
            history: HistoryMode::Browser,
        }
    }

    /// Normalized base, `""` when served from the root.
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn history(&self) -> HistoryMode {
        self.history
    }

    /// Returns the part of `location` below the base, or [`None`] if the location
    /// lies outside it.
    pub fn strip_base<'a>(&self, location: &'a str) -> Option<&'a str> {
        if self.base.is_empty() {
            return Some(location);
        }
        match location.strip_prefix(self.base.as_str())? {
            "" => Some("/"),
            rest if rest.starts_with('/') => Some(rest),
            _ => None,
        }
    }

    /// Resolves a full browser location (base included) to an entry of `R`.
    pub fn resolve<R: RouteTable>(&self, location: &str) -> Result<R, RouteError> {
        let path = self.strip_base(location).ok_or_else(|| RouteError::OutsideBase {
            location: location.to_string(),
            base: self.base.clone(),
        })?;
        R::from_path(path).ok_or_else(|| RouteError::NoMatch(path.to_string()))
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_root_with_browser_history() {
        let config = RouterConfig::default();
        assert_eq!(config.base(), "");
        assert_eq!(config.history(), HistoryMode::Browser);
    }

    #[test]
    fn root_base_keeps_location() {
        let config = RouterConfig::new("/");
        assert_eq!(config.strip_base("/wind"), Some("/wind"));
    }

    #[test]
    fn base_is_stripped_on_segment_boundary() {
        let config = RouterConfig::new("/dash/");
        assert_eq!(config.strip_base("/dash/wind"), Some("/wind"));
        assert_eq!(config.strip_base("/dash"), Some("/"));
        assert_eq!(config.strip_base("/dashboard/wind"), None);
        assert_eq!(config.strip_base("/wind"), None);
    }
}
