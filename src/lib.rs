//! tagtree - Fluent HTML, XML and SVG tree builder
//!
//! ## Core Concepts
//!
//! **Build once, render many ways**: an [`Element`] tree is assembled from
//! tag factories and fluent attribute setters, then handed to a serializer:
//! plain string concatenation, an html5ever-backed native document, or a
//! JSON projection.
//!
//! ## Modules
//! - `node`: Element/Node types and the `children!` macro
//! - `attr`: Attribute values and storage
//! - `dialect`: HTML / XML / SVG self-closing and header policy
//! - `tags`: Tag factories per dialect
//! - `render`: `Renderer` trait and the string serializer
//! - `native`: html5ever-backed serializer (feature `native`)
//! - `json`: JSON projection (feature `json`)
//! - `save`: Writing rendered trees to files
//! - `util`: `clx`, `sty` and `strip_tags` helpers
//!
//! ## Usage
//!
//! ```ignore
//! use tagtree::prelude::*;
//! use tagtree::tags::html::*;
//!
//! let page = div(children![
//!     h1("Welcome"),
//!     a("Home").href("#"),
//!     raw_html("<li>Contact</li>"),
//! ])
//! .class("container");
//!
//! assert!(page.to_string().starts_with("<div class=\"container\">"));
//! let native = page.to_native()?;
//! page.save("index.html")?;
//! ```

#[macro_use]
mod macros;

// =============================================================================
// Modules
// =============================================================================

/// Attribute values and storage
pub mod attr;

/// HTML / XML / SVG policy
pub mod dialect;

/// Error types
pub mod error;

/// Node types: Element, Node, Child
pub mod node;

/// Verbatim markup fragments
pub mod raw;

/// Renderer trait and string rendering
pub mod render;

/// Tag factories
pub mod tags;

/// Class, style and text helpers
pub mod util;

/// html5ever-backed rendering
#[cfg(feature = "native")]
pub mod native;

/// JSON projection
#[cfg(feature = "json")]
pub mod json;

/// File output
pub mod save;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

// Node types
pub use node::{Child, Children, Element, Node};

// Attribute types
pub use attr::{Attr, AttrValue, Attrs, AttrsExt};

// Dialects and raw content
pub use dialect::{Dialect, DocumentKind};
pub use raw::{Raw, RawKind, raw_html, raw_xml};

// Error types
pub use error::{DomError, DomResult, ErrorKind};

// Rendering
pub use render::{Renderer, StringSerializer, render};

#[cfg(feature = "native")]
pub use native::{NativeDocument, NativeDomSerializer, NativeHandle};

#[cfg(feature = "json")]
pub use json::to_json;

pub use save::{SaveConfig, save};

// Helpers
pub use util::{ClassArg, StyleValue, clx, strip_tags, sty};
