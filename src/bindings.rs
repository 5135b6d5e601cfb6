use crate::address::{Address, Navigation};
use crate::compat::{String, ToString, Vec};
use crate::config::FilterConfig;
use crate::error::{Error, Result};
use crate::filter::Candidate;
use crate::types::ElementId;

/// Text of a tag cell, e.g. `"rust, web dev,cli"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCell {
    text: String,
}

impl TagCell {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Build a cell from its child text nodes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedCell`] unless there is exactly one node.
    pub fn from_text_nodes<S: AsRef<str>>(nodes: &[S]) -> Result<Self> {
        match nodes {
            [node] => Ok(Self::new(node.as_ref())),
            _ => Err(Error::MalformedCell {
                text_nodes: nodes.len(),
            }),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Labels as they appear in the cell, untrimmed.
    pub fn labels(&self, separator: char) -> impl Iterator<Item = &str> {
        self.text.split(separator)
    }

    /// Toggle candidates for each non-blank label.
    pub fn candidates(&self, separator: char) -> impl Iterator<Item = Candidate> + '_ {
        self.labels(separator)
            .filter_map(|label| Candidate::new(label).ok())
    }
}

impl From<&str> for TagCell {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// One tag of a bound cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTag {
    /// Label as displayed
    pub label: String,
    /// Element to register a click handler for; `None` for blank labels
    pub id: Option<ElementId>,
}

/// Registry mapping rendered tag elements to the tag each one toggles.
///
/// Rendering binds every tag of a cell to a fresh [`ElementId`]; the UI layer
/// attaches one handler per id and calls [`TagBindings::click`] with it.
#[derive(Debug, Clone, Default)]
pub struct TagBindings {
    config: FilterConfig,
    bound: Vec<Candidate>,
    // Id of `bound[0]`; advances on `clear` so old ids stay invalid
    first_id: usize,
}

impl TagBindings {
    pub fn new(config: FilterConfig) -> Self {
        Self {
            config,
            bound: Vec::new(),
            first_id: 0,
        }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Number of bound elements
    pub fn len(&self) -> usize {
        self.bound.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }

    /// Bind every tag of `cell`, returning them in display order.
    pub fn bind_cell(&mut self, cell: &TagCell) -> Vec<RenderedTag> {
        cell.labels(self.config.separator)
            .map(|label| {
                let id = Candidate::new(label).ok().map(|candidate| {
                    let id = ElementId(self.first_id + self.bound.len());
                    self.bound.push(candidate);
                    id
                });
                RenderedTag {
                    label: label.to_string(),
                    id,
                }
            })
            .collect()
    }

    /// Bind each cell given as its text nodes. Malformed cells are skipped
    /// and come back as `None`.
    pub fn render<S: AsRef<str>>(&mut self, cells: &[&[S]]) -> Vec<Option<Vec<RenderedTag>>> {
        cells
            .iter()
            .enumerate()
            .map(|(index, nodes)| match TagCell::from_text_nodes(nodes) {
                Ok(cell) => Some(self.bind_cell(&cell)),
                Err(err) => {
                    tracing::debug!(index, %err, "skipping tag cell");
                    None
                }
            })
            .collect()
    }

    /// Tag bound to `id`, if any.
    pub fn candidate(&self, id: ElementId) -> Option<&Candidate> {
        let index = id.0.checked_sub(self.first_id)?;
        self.bound.get(index)
    }

    /// Handle a click on a bound element: toggle its tag in `current`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownElement`] if `id` was not issued by this registry.
    pub fn click(&self, id: ElementId, current: &Address) -> Result<Navigation> {
        let candidate = self.candidate(id).ok_or(Error::UnknownElement(id))?;
        Ok(current.toggle(&self.config, candidate))
    }

    /// Forget all bindings, e.g. before re-rendering.
    /// Ids issued before the clear are never reissued.
    pub fn clear(&mut self) {
        self.first_id += self.bound.len();
        self.bound.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[cfg(not(feature = "std"))]
    use alloc::vec;

    #[test]
    fn test_cell_requires_single_node() {
        assert!(TagCell::from_text_nodes(&["a,b"]).is_ok());
        assert_eq!(
            TagCell::from_text_nodes::<&str>(&[]),
            Err(Error::MalformedCell { text_nodes: 0 })
        );
        assert_eq!(
            TagCell::from_text_nodes(&["a", "b"]),
            Err(Error::MalformedCell { text_nodes: 2 })
        );
    }

    #[test]
    fn test_labels_and_candidates() {
        let cell = TagCell::new("rust, web dev,,cli ");
        let labels: Vec<&str> = cell.labels(',').collect();
        assert_eq!(labels, vec!["rust", " web dev", "", "cli "]);
        let candidates: Vec<String> = cell.candidates(',').map(Candidate::into_inner).collect();
        assert_eq!(candidates, vec!["rust", "web dev", "cli"]);
    }

    #[test]
    fn test_bind_skips_blank_labels() {
        let mut bindings = TagBindings::default();
        let tags = bindings.bind_cell(&TagCell::new("a, ,b"));
        assert_eq!(tags.len(), 3);
        assert_eq!(tags[0].id, Some(ElementId(0)));
        assert_eq!(tags[1].id, None);
        assert_eq!(tags[1].label, " ");
        assert_eq!(tags[2].id, Some(ElementId(1)));
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings.candidate(ElementId(1)).unwrap().as_str(), "b");
    }

    #[test]
    fn test_click_unknown() {
        let bindings = TagBindings::default();
        let err = bindings.click(ElementId(3), &Address::parse("/")).unwrap_err();
        assert_eq!(err, Error::UnknownElement(ElementId(3)));
    }

    #[test]
    fn test_clear() {
        let mut bindings = TagBindings::default();
        bindings.bind_cell(&TagCell::new("a"));
        bindings.clear();
        assert!(bindings.is_empty());
        assert_eq!(bindings.candidate(ElementId(0)), None);
    }

    #[test]
    fn test_clear_does_not_reuse_ids() {
        let mut bindings = TagBindings::default();
        let old = bindings.bind_cell(&TagCell::new("rust"))[0].id.unwrap();
        bindings.clear();
        let new = bindings.bind_cell(&TagCell::new("cli"))[0].id.unwrap();

        assert_ne!(old, new);
        assert_eq!(bindings.candidate(old), None);
        assert_eq!(bindings.candidate(new).unwrap().as_str(), "cli");
        assert_eq!(
            bindings.click(old, &Address::parse("/")),
            Err(Error::UnknownElement(old))
        );
    }
}
