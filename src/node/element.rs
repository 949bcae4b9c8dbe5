//! Element type - the tree node carrying tag, attributes and children
//!
//! The core building block of every tree. Elements are built once with
//! their children, then refined with attribute setters before being handed
//! to a serializer.

use compact_str::CompactString;

use crate::attr::{self, Attr, AttrValue, Attrs, AttrsExt};
use crate::dialect::Dialect;
use crate::error::{DomError, DomResult};

use super::{Child, Children, Node, flatten_into};

// =============================================================================
// Element
// =============================================================================

/// Markup element: tag, attributes, children and self-close flag.
///
/// Invariant: a self-closing element has no children. Constructors and
/// [`set_self_close`](Self::set_self_close) reject trees that would break it.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: CompactString,
    dialect: Dialect,
    attrs: Attrs,
    children: Children,
    self_close: bool,
}

impl Element {
    /// Create an element of any tag name.
    ///
    /// Fails when the tag is empty or numeric, or when the dialect makes
    /// the tag self-closing and `children` is not empty.
    pub fn new(dialect: Dialect, tag: &str, children: impl Into<Child>) -> DomResult<Self> {
        if tag.is_empty() {
            return Err(DomError::EmptyTagName);
        }
        if attr::is_numeric(tag) {
            return Err(DomError::NumericTagName(tag.to_string()));
        }

        let elem = Self::assemble(dialect, tag, children.into());
        if elem.self_close && !elem.children.is_empty() {
            return Err(DomError::self_close(tag));
        }
        Ok(elem)
    }

    /// Create an HTML element (`<br>`, `<input>` etc. self-close).
    pub fn html(tag: &str, children: impl Into<Child>) -> DomResult<Self> {
        Self::new(Dialect::Html, tag, children)
    }

    /// Create a generic XML element.
    pub fn xml(tag: &str, children: impl Into<Child>) -> DomResult<Self> {
        Self::new(Dialect::Xml, tag, children)
    }

    /// Create an SVG element (`<circle>`, `<path>` etc. self-close).
    pub fn svg(tag: &str, children: impl Into<Child>) -> DomResult<Self> {
        Self::new(Dialect::Svg, tag, children)
    }

    /// Build without validation. Callers guarantee a valid tag, and no
    /// children for tags the dialect self-closes.
    pub(crate) fn assemble(dialect: Dialect, tag: &str, child: Child) -> Self {
        let mut children = Children::new();
        flatten_into(child, &mut children);
        Self {
            tag: tag.into(),
            dialect,
            attrs: Attrs::new(),
            children,
            self_close: dialect.is_self_closing(tag),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Attributes in insertion order.
    pub fn attributes(&self) -> &[Attr] {
        &self.attrs
    }

    /// Get attribute value by name. `className` reads `class`.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        let name = if name == "className" { "class" } else { name };
        self.attrs.get_attr(&attr::normalize_name(name))
    }

    /// Check if attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.has_attr(&attr::normalize_name(name))
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn is_self_closing(&self) -> bool {
        self.self_close
    }

    /// Check if element has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Iterate over child element references
    pub fn children_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Text content of this element (concatenated from all text nodes,
    /// raw fragments excluded)
    pub fn text_content(&self) -> String {
        let mut result = String::new();
        self.collect_text(&mut result);
        result
    }

    fn collect_text(&self, buf: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => buf.push_str(t),
                Node::Element(e) => e.collect_text(buf),
                Node::Raw(_) => {}
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutation
    // ─────────────────────────────────────────────────────────────────────────

    /// Set one attribute.
    ///
    /// `Null` leaves the element untouched, `false` removes the attribute,
    /// `true` stores a presence flag, anything else overwrites the previous
    /// value. Underscores in `name` become hyphens.
    pub fn set_attr(&mut self, name: &str, value: impl Into<AttrValue>) -> DomResult<&mut Self> {
        let value = value.into();
        if value.is_null() {
            return Ok(self);
        }
        let name = attr::check_name(&self.tag, name)?;
        self.attrs.apply(&name, value);
        Ok(self)
    }

    /// Builder form of [`set_attr`](Self::set_attr).
    pub fn attr(mut self, name: &str, value: impl Into<AttrValue>) -> DomResult<Self> {
        self.set_attr(name, value)?;
        Ok(self)
    }

    /// Dynamically named setter: `call("href", vec!["#".into()])`.
    ///
    /// Exactly one value is accepted. `className` is an alias for `class`.
    pub fn call(self, name: &str, args: Vec<AttrValue>) -> DomResult<Self> {
        if args.len() != 1 {
            return Err(DomError::SetterArity {
                tag: self.tag.to_string(),
                name: name.to_string(),
                given: args.len(),
            });
        }
        let name = if name == "className" { "class" } else { name };
        let value = args.into_iter().next().unwrap_or_default();
        self.attr(name, value)
    }

    /// Apply several attributes in order. Stops at the first invalid name.
    pub fn set_attrs<I, K, V>(&mut self, attrs: I) -> DomResult<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<AttrValue>,
    {
        for (name, value) in attrs {
            self.set_attr(name.as_ref(), value)?;
        }
        Ok(self)
    }

    /// Builder form of [`set_attrs`](Self::set_attrs).
    pub fn attrs<I, K, V>(mut self, attrs: I) -> DomResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<AttrValue>,
    {
        self.set_attrs(attrs)?;
        Ok(self)
    }

    /// Rewrite one attribute from its current value.
    ///
    /// `f` sees the current value (if any); returning `None` removes it.
    pub fn update_attr<F>(&mut self, name: &str, f: F) -> DomResult<&mut Self>
    where
        F: FnOnce(Option<&str>) -> Option<String>,
    {
        let name = attr::check_name(&self.tag, name)?;
        match f(self.attrs.get_attr(&name)) {
            Some(value) => self.attrs.put_attr(Attr::new(name, value)),
            None => {
                self.attrs.remove_attr(&name);
            }
        }
        Ok(self)
    }

    /// Force the self-close flag. Fails if `flag` is set and children exist.
    pub fn set_self_close(&mut self, flag: bool) -> DomResult<&mut Self> {
        if flag && !self.children.is_empty() {
            return Err(DomError::self_close(self.tag.as_str()));
        }
        self.self_close = flag;
        Ok(self)
    }

    /// Builder form of [`set_self_close`](Self::set_self_close).
    pub fn self_closing(mut self, flag: bool) -> DomResult<Self> {
        self.set_self_close(flag)?;
        Ok(self)
    }
}

// Typed setters, forwarding to the same attribute rules as `set_attr`.
impl Element {
    impl_attr_setters! {
        // Global
        id => "id",
        class => "class",
        style => "style",
        title => "title",
        lang => "lang",
        dir => "dir",
        hidden => "hidden",
        tabindex => "tabindex",
        role => "role",
        aria_label => "aria-label",
        // Links and media
        href => "href",
        src => "src",
        alt => "alt",
        rel => "rel",
        target => "target",
        // Forms
        r#type => "type",
        name => "name",
        value => "value",
        placeholder => "placeholder",
        r#for => "for",
        action => "action",
        method => "method",
        disabled => "disabled",
        required => "required",
        readonly => "readonly",
        checked => "checked",
        selected => "selected",
        multiple => "multiple",
        autofocus => "autofocus",
        // Document metadata
        charset => "charset",
        content => "content",
        // Geometry (HTML and SVG)
        width => "width",
        height => "height",
        x => "x",
        y => "y",
        x1 => "x1",
        y1 => "y1",
        x2 => "x2",
        y2 => "y2",
        cx => "cx",
        cy => "cy",
        r => "r",
        rx => "rx",
        ry => "ry",
        d => "d",
        points => "points",
        transform => "transform",
        view_box => "viewBox",
        xmlns => "xmlns",
        // Painting
        fill => "fill",
        stroke => "stroke",
        stroke_width => "stroke-width",
        opacity => "opacity",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::raw_html;

    #[test]
    fn test_element_basics() {
        let elem = Element::html("div", ()).unwrap();
        assert_eq!(elem.tag(), "div");
        assert_eq!(elem.dialect(), Dialect::Html);
        assert!(elem.is_empty());
        assert!(!elem.is_self_closing());
    }

    #[test]
    fn test_constructor_keeps_children() {
        let elem = Element::html("custom-tag", "Custom Content").unwrap();
        assert_eq!(elem.tag(), "custom-tag");
        assert_eq!(elem.children(), &[Node::Text("Custom Content".into())]);
    }

    #[test]
    fn test_invalid_tag_names() {
        assert_eq!(Element::xml("", ()), Err(DomError::EmptyTagName));
        assert_eq!(Element::xml("123", ()), Err(DomError::NumericTagName("123".into())));
        assert_eq!(Element::xml("1e3", ()), Err(DomError::NumericTagName("1e3".into())));
        assert!(Element::xml("h1", ()).is_ok());
    }

    #[test]
    fn test_void_element_rejects_children() {
        let err = Element::html("img", "caption").unwrap_err();
        assert_eq!(err, DomError::self_close("img"));

        let img = Element::html("img", ()).unwrap();
        assert!(img.is_self_closing());

        // Empty entries do not count as children
        assert!(Element::html("br", vec![None::<&str>]).is_ok());
    }

    #[test]
    fn test_set_self_close() {
        let mut elem = Element::xml("note", "text").unwrap();
        assert!(matches!(
            elem.set_self_close(true),
            Err(DomError::SelfCloseWithChildren { .. })
        ));
        assert!(!elem.is_self_closing());

        let empty = Element::xml("note", ()).unwrap().self_closing(true).unwrap();
        assert!(empty.is_self_closing());
    }

    #[test]
    fn test_attributes() {
        let input = Element::html("input", ())
            .unwrap()
            .r#type("text")
            .id("my-input")
            .value(0_i32)
            .disabled(false)
            .readonly(None::<&str>)
            .required(true)
            .class("class-a class-b class-c")
            .style("display: inline-block;");

        assert_eq!(input.attributes().len(), 6);
        assert!(!input.has_attr("disabled"));
        assert!(!input.has_attr("readonly"));
        assert_eq!(input.get_attr("type"), Some("text"));
        assert_eq!(input.get_attr("value"), Some("0"));
        assert_eq!(input.get_attr("required"), Some("required"));
        assert_eq!(input.get_attr("className"), Some("class-a class-b class-c"));
    }

    #[test]
    fn test_last_write_wins() {
        let elem = Element::html("div", ())
            .unwrap()
            .attr("data-x", "1")
            .unwrap()
            .attr("data_x", "2")
            .unwrap();
        assert_eq!(elem.attributes().len(), 1);
        assert_eq!(elem.get_attr("data-x"), Some("2"));
    }

    #[test]
    fn test_invalid_attr_names() {
        let elem = Element::html("div", ()).unwrap();
        assert!(matches!(elem.clone().attr("", "x"), Err(DomError::EmptyAttrName { .. })));
        assert!(matches!(elem.clone().attr("42", "x"), Err(DomError::NumericAttrName { .. })));
        // Null short-circuits before name checks
        assert!(elem.attr("", None::<&str>).is_ok());
    }

    #[test]
    fn test_call_arity() {
        let elem = Element::html("a", "Home").unwrap();

        let err = elem.clone().call("href", vec![]).unwrap_err();
        assert_eq!(err, DomError::SetterArity { tag: "a".into(), name: "href".into(), given: 0 });

        let err = elem.clone().call("href", vec!["#".into(), "/".into()]).unwrap_err();
        assert!(matches!(err, DomError::SetterArity { given: 2, .. }));

        let elem = elem.call("className", vec!["nav".into()]).unwrap();
        assert_eq!(elem.get_attr("class"), Some("nav"));
    }

    #[test]
    fn test_set_attrs_bulk() {
        let mut elem = Element::html("div", ()).unwrap();
        elem.set_attrs(Vec::<(&str, AttrValue)>::new()).unwrap();
        assert!(elem.attributes().is_empty());

        elem.set_attrs([("id", AttrValue::from("a")), ("hidden", true.into())]).unwrap();
        let names: Vec<_> = elem.attributes().iter().map(Attr::name).collect();
        assert_eq!(names, vec!["id", "hidden"]);

        assert!(elem.set_attrs([("", "x")]).is_err());
    }

    #[test]
    fn test_update_attr() {
        let mut elem = Element::html("div", ()).unwrap().class("a");
        elem.update_attr("class", |v| v.map(|v| format!("{v} b"))).unwrap();
        assert_eq!(elem.get_attr("class"), Some("a b"));

        elem.update_attr("class", |_| None).unwrap();
        assert!(!elem.has_attr("class"));
    }

    #[test]
    fn test_text_content() {
        let elem = Element::html(
            "div",
            crate::children![
                "Hello ",
                Element::html("b", "World").unwrap(),
                raw_html("<i>!</i>"),
            ],
        )
        .unwrap();
        assert_eq!(elem.text_content(), "Hello World");
        assert_eq!(elem.children_elements().count(), 1);
    }
}
