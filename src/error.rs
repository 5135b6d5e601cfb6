use crate::types::ElementId;

/// Errors reported by candidate construction and tag bindings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Tag text was empty after trimming
    EmptyCandidate,
    /// A tag cell did not hold exactly one text node
    MalformedCell { text_nodes: usize },
    /// Click on an element that was never bound
    UnknownElement(ElementId),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::EmptyCandidate => f.write_str("Empty tag"),
            Self::MalformedCell { text_nodes } => {
                write!(f, "Tag cell has {text_nodes} text nodes, expected 1")
            }
            Self::UnknownElement(id) => write!(f, "Unknown tag element {id}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type for tag filter operations
pub type Result<T> = core::result::Result<T, Error>;
