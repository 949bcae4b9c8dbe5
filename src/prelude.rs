//! Prelude for common imports.
//!
//! ```ignore
//! use tagtree::prelude::*;
//! ```

// Node types
pub use crate::children;
pub use crate::node::{Child, Element, Node};

// Attributes
pub use crate::attr::{AttrValue, AttrsExt};

// Dialects and raw content
pub use crate::dialect::Dialect;
pub use crate::raw::{raw_html, raw_xml};

// Error
pub use crate::error::{DomError, DomResult};

// Render
pub use crate::render::{Renderer, StringSerializer};

#[cfg(feature = "native")]
pub use crate::native::{NativeDocument, NativeDomSerializer};

#[cfg(feature = "json")]
pub use crate::json::to_json;

// Save
pub use crate::save::SaveConfig;

// Helpers
pub use crate::util::{clx, sty};
