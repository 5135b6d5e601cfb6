use crate::compat::{String, ToString, Vec};
use crate::error::{Error, Result};
use crate::helpers::trim_tag;
use crate::types::ToggleOutcome;
use crate::url_search_params::UrlSearchParams;

/// A tag value ready to be toggled: trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Candidate(String);

impl Candidate {
    /// Build a candidate from raw tag text, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCandidate`] if nothing is left after trimming.
    pub fn new(text: &str) -> Result<Self> {
        let trimmed = trim_tag(text);
        if trimmed.is_empty() {
            return Err(Error::EmptyCandidate);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for Candidate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Candidate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for Candidate {
    type Error = Error;

    fn try_from(text: &str) -> Result<Self> {
        Self::new(text)
    }
}

/// Values currently held under the filter key, in query order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet<'a> {
    values: Vec<&'a str>,
}

impl<'a> FilterSet<'a> {
    pub fn from_query(query: &'a UrlSearchParams, key: &str) -> Self {
        Self {
            values: query.get_all(key),
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(&value)
    }

    pub fn values(&self) -> &[&'a str] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Toggle `candidate` in the filter set held under `key`.
///
/// Every pair equal to the candidate is dropped; if there was none, the
/// candidate is added. The first kept value takes the slot of the first
/// existing pair under `key` and the rest are appended after all other
/// pairs. When nothing is kept, `key` disappears from the query.
///
/// # Examples
///
/// ```
/// use tagfilter::{Candidate, UrlSearchParams, toggle_filter};
///
/// let query = UrlSearchParams::parse("?i=rust&i=web");
/// let rust = Candidate::new("rust").unwrap();
/// assert_eq!(toggle_filter(&query, "i", &rust).serialize(), "?i=web");
///
/// let cli = Candidate::new(" cli ").unwrap();
/// assert_eq!(toggle_filter(&query, "i", &cli).serialize(), "?i=rust&i=web&i=cli");
/// ```
pub fn toggle_filter(
    current_query: &UrlSearchParams,
    key: &str,
    candidate: &Candidate,
) -> UrlSearchParams {
    toggle_filter_with_outcome(current_query, key, candidate).0
}

/// Like [`toggle_filter`], also reporting whether the candidate was added or removed.
pub fn toggle_filter_with_outcome(
    current_query: &UrlSearchParams,
    key: &str,
    candidate: &Candidate,
) -> (UrlSearchParams, ToggleOutcome) {
    let candidate = candidate.as_str();

    let mut removed = false;
    let mut keep: Vec<&str> = Vec::new();
    let filters = FilterSet::from_query(current_query, key);
    for &value in filters.values() {
        if value == candidate {
            removed = true;
        } else {
            keep.push(value);
        }
    }

    let outcome = if removed {
        ToggleOutcome::Removed
    } else {
        keep.push(candidate);
        ToggleOutcome::Added
    };

    let mut next = current_query.clone();
    match keep.split_first() {
        None => next.delete(key, None),
        Some((first, rest)) => {
            next.set(key, first);
            for value in rest {
                next.append(key, value);
            }
        }
    }

    tracing::debug!(key, candidate, ?outcome, kept = keep.len(), "toggled filter");
    (next, outcome)
}
