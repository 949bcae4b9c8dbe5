//! Code generation macros for typed setters and tag factories.
//!
//! Both families of generated items are one-liners forwarding to the
//! general-purpose API, so the tables below are the only thing to edit
//! when adding a tag or a setter.

// =============================================================================
// Attribute setter generation
// =============================================================================

/// Generate infallible builder methods for well-known attribute names.
///
/// # Generated method per entry
/// `fn $method(self, value: impl Into<AttrValue>) -> Self`
///
/// # Example
/// ```ignore
/// impl Element {
///     impl_attr_setters! { r#type => "type", view_box => "viewBox" }
/// }
/// ```
macro_rules! impl_attr_setters {
    ($($method:ident => $name:literal),* $(,)?) => {
        $(
            #[doc = concat!("Set the `", $name, "` attribute.")]
            pub fn $method(mut self, value: impl Into<$crate::attr::AttrValue>) -> Self {
                self.attrs.apply($name, value.into());
                self
            }
        )*
    };
}

// =============================================================================
// Tag factory generation
// =============================================================================

/// Generate factory functions for tags that take children.
///
/// # Example
/// ```ignore
/// container_tags!(Dialect::Html; div, span, p);
/// // Expands to: pub fn div(children: impl Into<Child>) -> Element { ... }
/// ```
macro_rules! container_tags {
    ($dialect:expr; $($tag:ident),* $(,)?) => {
        $(
            #[doc = concat!("`<", stringify!($tag), ">` element.")]
            pub fn $tag(children: impl Into<$crate::Child>) -> $crate::Element {
                $crate::Element::assemble($dialect, stringify!($tag), children.into())
            }
        )*
    };
}

/// Generate factory functions for self-closing tags. They take no children.
///
/// # Example
/// ```ignore
/// leaf_tags!(Dialect::Html; br, hr, img);
/// // Expands to: pub fn br() -> Element { ... }
/// ```
macro_rules! leaf_tags {
    ($dialect:expr; $($tag:ident),* $(,)?) => {
        $(
            #[doc = concat!("`<", stringify!($tag), " />` element.")]
            pub fn $tag() -> $crate::Element {
                $crate::Element::assemble($dialect, stringify!($tag), $crate::Child::Empty)
            }
        )*
    };
}
