//! Helpers feeding attribute values and text children.

mod clx;
mod strip;

pub use clx::{ClassArg, StyleValue, clx, sty};
pub use strip::strip_tags;
