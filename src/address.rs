use crate::compat::{String, ToString};
use crate::config::FilterConfig;
use crate::filter::{Candidate, toggle_filter_with_outcome};
use crate::helpers::{prune_fragment, split_query};
use crate::types::ToggleOutcome;
use crate::url_search_params::UrlSearchParams;

/// A page address split into the parts a filter toggle cares about.
///
/// Only the query is interpreted. Everything before the first `?` is kept
/// verbatim as the location, so absolute (`https://host/list`) and relative
/// (`/list`) addresses are handled the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    location: String,
    query: UrlSearchParams,
    fragment: Option<String>,
}

impl Address {
    /// Split an address into location, query and fragment. Never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagfilter::Address;
    ///
    /// let address = Address::parse("/list?i=rust&page=2#top");
    /// assert_eq!(address.location(), "/list");
    /// assert_eq!(address.query().get_all("i"), vec!["rust"]);
    /// assert_eq!(address.fragment(), Some("top"));
    /// ```
    pub fn parse(href: &str) -> Self {
        let (rest, fragment) = prune_fragment(href);
        let (location, query) = split_query(rest);
        Self {
            location: location.to_string(),
            query: query.map(UrlSearchParams::parse).unwrap_or_default(),
            fragment: fragment.map(ToString::to_string),
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn query(&self) -> &UrlSearchParams {
        &self.query
    }

    /// Fragment without the leading `#`
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Serialized query with leading `?`, or empty
    pub fn search(&self) -> String {
        self.query.serialize()
    }

    /// Full address: location, search and fragment.
    pub fn href(&self) -> String {
        let mut href = self.navigation_target();
        if let Some(fragment) = &self.fragment {
            href.push('#');
            href.push_str(fragment);
        }
        href
    }

    /// Same location with a new query. The fragment does not carry over.
    #[must_use]
    pub fn with_query(&self, query: UrlSearchParams) -> Self {
        Self {
            location: self.location.clone(),
            query,
            fragment: None,
        }
    }

    /// Address to navigate to: location followed by the serialized query.
    /// With an empty query this is the bare location, or `?` when the
    /// location is empty too, since an empty reference reloads the current page.
    pub fn navigation_target(&self) -> String {
        let mut target = self.location.clone();
        target.push_str(&self.search());
        if target.is_empty() {
            target.push('?');
        }
        target
    }

    /// Toggle `candidate` under the configured filter key and compute where to go next.
    pub fn toggle(&self, config: &FilterConfig, candidate: &Candidate) -> Navigation {
        let (query, outcome) = toggle_filter_with_outcome(&self.query, &config.key, candidate);
        let next = self.with_query(query);
        Navigation {
            target: next.navigation_target(),
            outcome,
            address: next,
        }
    }
}

impl From<&str> for Address {
    fn from(href: &str) -> Self {
        Self::parse(href)
    }
}

impl core::fmt::Display for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.href())
    }
}

/// Result of a toggle: the address the caller should load next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    target: String,
    outcome: ToggleOutcome,
    address: Address,
}

impl Navigation {
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn outcome(&self) -> ToggleOutcome {
        self.outcome
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn into_target(self) -> String {
        self.target
    }
}

impl core::fmt::Display for Navigation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.target)
    }
}
