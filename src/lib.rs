//! Toggle tag filters carried in a page address's query string.
//!
//! A list page shows tags like `rust, web dev` in a cell. Each tag becomes a
//! clickable element; clicking it adds the tag to the `i` query parameter if
//! it is not there yet, or removes it if it is. The caller then navigates to
//! the resulting address.
//!
//! ```
//! use tagfilter::{Address, FilterConfig, TagBindings, TagCell};
//!
//! let mut bindings = TagBindings::new(FilterConfig::default());
//! let tags = bindings.bind_cell(&TagCell::new("rust, web dev"));
//! let web = tags[1].id.unwrap();
//!
//! let nav = bindings.click(web, &Address::parse("/list?i=rust")).unwrap();
//! assert_eq!(nav.target(), "/list?i=rust&i=web+dev");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod encoding;
mod helpers;

mod address;
mod bindings;
mod config;
mod error;
mod filter;
mod types;
mod url_search_params;

// Public API
pub use address::{Address, Navigation};
pub use bindings::{RenderedTag, TagBindings, TagCell};
pub use config::{FILTER_KEY, FilterConfig, TAG_SEPARATOR};
pub use error::{Error, Result};
pub use filter::{Candidate, FilterSet, toggle_filter, toggle_filter_with_outcome};
pub use types::{ElementId, ToggleOutcome};
pub use url_search_params::UrlSearchParams;
