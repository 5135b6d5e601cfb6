/// Handle for one rendered tag element.
///
/// Issued by [`TagBindings`](crate::TagBindings) when a cell is bound, and
/// passed back on click to look up the tag the element stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub(crate) usize);

impl ElementId {
    /// Raw numeric value, e.g. for use as a DOM `data-` attribute.
    pub fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for ElementId {
    fn from(raw: usize) -> Self {
        Self(raw)
    }
}

impl core::fmt::Display for ElementId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "tag-{}", self.0)
    }
}

/// Whether a toggle added or removed the candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

impl ToggleOutcome {
    pub fn is_added(self) -> bool {
        self == Self::Added
    }
}
