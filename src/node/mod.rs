//! Node types: `Element`, the stored `Node` variant, and the `Child` input.
//!
//! Children arrive as a loose `Child` tree (strings, elements, raw
//! fragments, options, nested lists) and are flattened exactly once, at
//! construction, into a homogeneous `Children` sequence. Serializers only
//! ever see `Node`.

mod element;

pub use element::Element;

use smallvec::SmallVec;

use crate::raw::Raw;
use crate::util::strip_tags;

// =============================================================================
// Node
// =============================================================================

/// Stored child of an element.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Box<Element>),
    /// Text, already stripped of markup
    Text(String),
    /// Markup inserted verbatim
    Raw(Raw),
}

impl Node {
    /// Check if this is an element node.
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Check if this is a text node.
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Check if this is a raw fragment.
    #[inline]
    pub fn is_raw(&self) -> bool {
        matches!(self, Node::Raw(_))
    }

    /// Get as element reference.
    #[inline]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get as mutable element reference.
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get as text reference.
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Get as raw fragment reference.
    #[inline]
    pub fn as_raw(&self) -> Option<&Raw> {
        match self {
            Node::Raw(r) => Some(r),
            _ => None,
        }
    }
}

/// Type alias for children collection.
pub type Children = SmallVec<[Node; 4]>;

// =============================================================================
// Child (construction input)
// =============================================================================

/// Anything that can be passed as children when building an element.
///
/// Use [`children!`](crate::children) to mix kinds in one call.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    /// Dropped during flattening
    Empty,
    /// Plain text; markup is stripped on the way in
    Text(String),
    Element(Element),
    Raw(Raw),
    /// Flattened recursively, in order
    List(Vec<Child>),
}

impl From<()> for Child {
    fn from(_: ()) -> Self {
        Self::Empty
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<&String> for Child {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Element> for Child {
    fn from(elem: Element) -> Self {
        Self::Element(elem)
    }
}

impl From<Raw> for Child {
    fn from(raw: Raw) -> Self {
        Self::Raw(raw)
    }
}

impl<T: Into<Child>> From<Option<T>> for Child {
    fn from(child: Option<T>) -> Self {
        child.map_or(Self::Empty, Into::into)
    }
}

impl<T: Into<Child>> From<Vec<T>> for Child {
    fn from(children: Vec<T>) -> Self {
        Self::List(children.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Child>, const N: usize> From<[T; N]> for Child {
    fn from(children: [T; N]) -> Self {
        Self::List(children.into_iter().map(Into::into).collect())
    }
}

macro_rules! impl_child_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Child {
                fn from(value: $ty) -> Self {
                    Self::Text(value.to_string())
                }
            }
        )*
    };
}

impl_child_scalar!(char, i32, i64, u32, u64, usize, f32, f64);

/// Build a [`Child::List`] from mixed child expressions.
///
/// ```ignore
/// div(children![h1("Title"), "text", raw_html("<hr>"), maybe_elem])
/// ```
#[macro_export]
macro_rules! children {
    ($($child:expr),* $(,)?) => {
        $crate::Child::List(::std::vec![$($crate::Child::from($child)),*])
    };
}

/// Flatten `child` into `out`, dropping empties and stripping text markup.
pub(crate) fn flatten_into(child: Child, out: &mut Children) {
    match child {
        Child::Empty => {}
        Child::Text(text) => {
            let stripped = match strip_tags(&text) {
                std::borrow::Cow::Owned(s) => Some(s),
                std::borrow::Cow::Borrowed(_) => None,
            };
            out.push(Node::Text(stripped.unwrap_or(text)));
        }
        Child::Element(elem) => out.push(Node::Element(Box::new(elem))),
        Child::Raw(raw) => out.push(Node::Raw(raw)),
        Child::List(children) => {
            for child in children {
                flatten_into(child, out);
            }
        }
    }
}
