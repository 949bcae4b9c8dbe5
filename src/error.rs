//! Error types for tagtree.
//!
//! Construction mistakes (structural errors) and native engine rejections
//! (render engine errors) share one enum so callers can `?` through both.

use thiserror::Error;

/// Errors that can occur while building or rendering element trees.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomError {
    /// Tag name was empty
    #[error("tag name cannot be empty")]
    EmptyTagName,

    /// Tag name read as a number
    #[error("tag name cannot be numbers '{0}'")]
    NumericTagName(String),

    /// A self-closing element was given children
    #[error("self-closing element '{tag}' cannot have child elements")]
    SelfCloseWithChildren {
        /// Offending element
        tag: String,
    },

    /// Attribute name was empty
    #[error("element '{tag}' attribute name cannot be empty")]
    EmptyAttrName {
        /// Element receiving the attribute
        tag: String,
    },

    /// Attribute name read as a number
    #[error("element '{tag}' attribute name cannot be numbers '{name}'")]
    NumericAttrName {
        /// Element receiving the attribute
        tag: String,
        /// Rejected name
        name: String,
    },

    /// A dynamic attribute setter received the wrong number of values
    #[error("'{name}()' accepts exactly one parameter, '{tag}().{name}()' received {given}")]
    SetterArity {
        /// Element the setter was called on
        tag: String,
        /// Setter name
        name: String,
        /// Number of values passed
        given: usize,
    },

    /// The native engine rejected a tag name
    #[error("tag '{0}' is invalid")]
    InvalidTagName(String),

    /// The native engine rejected an attribute name
    #[error("attribute '{name}' on element '{tag}' is invalid")]
    InvalidAttrName {
        /// Element carrying the attribute
        tag: String,
        /// Rejected name
        name: String,
    },

    /// A raw XML fragment could not be parsed by the native engine
    #[error("malformed XML fragment: {0}")]
    MalformedFragment(String),
}

/// Broad classification of [`DomError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller bug caught while constructing the tree
    Structural,
    /// Native document engine refused the tree at render time
    RenderEngine,
}

/// Result type alias for tree operations.
pub type DomResult<T> = Result<T, DomError>;

impl DomError {
    /// Which side of the build/render boundary raised this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidTagName(_) | Self::InvalidAttrName { .. } | Self::MalformedFragment(_) => {
                ErrorKind::RenderEngine
            }
            _ => ErrorKind::Structural,
        }
    }

    /// Create a self-closing violation for `tag`.
    pub fn self_close(tag: impl Into<String>) -> Self {
        Self::SelfCloseWithChildren { tag: tag.into() }
    }
}
