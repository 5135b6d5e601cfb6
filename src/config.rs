use crate::compat::String;

/// Query key that carries the active tag filters.
pub const FILTER_KEY: &str = "i";

/// Separator between tags in a cell's text.
pub const TAG_SEPARATOR: char = ',';

/// Filter key and tag separator used by [`TagBindings`](crate::TagBindings)
/// and [`Address::toggle`](crate::Address::toggle).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    pub key: String,
    pub separator: char,
}

impl FilterConfig {
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            key: String::from(FILTER_KEY),
            separator: TAG_SEPARATOR,
        }
    }
}
