//! Per-dialect tag factories.
//!
//! Container tags take `impl Into<Child>`; self-closing tags take nothing,
//! so the "no children on a self-closing element" rule cannot be broken
//! through this surface. Use [`Element::new`](crate::Element::new) for
//! custom tag names.

pub mod html;
pub mod svg;
