//! Native document rendering
//!
//! Builds an html5ever node tree from an [`Element`] and stringifies it with
//! the engine's own HTML or XML writer. Unlike string rendering, names are
//! validated, text is escaped, and raw fragments are parsed into nodes.
//!
//! ```ignore
//! let handle = NativeDomSerializer::shared().render(&div("hi"))?;
//! assert_eq!(handle.to_string(), "<div>hi</div>");
//! ```

mod document;
mod names;

use std::fmt;
use std::rc::Rc;

pub use document::NativeDocument;
pub use markup5ever_rcdom::Handle;

use crate::dialect::DocumentKind;
use crate::error::DomResult;
use crate::node::{Element, Node};
use crate::render::Renderer;

// =============================================================================
// NativeHandle
// =============================================================================

/// A rendered native node, stringified on demand.
#[derive(Clone)]
pub struct NativeHandle {
    node: Handle,
    kind: DocumentKind,
    document: Rc<NativeDocument>,
}

impl NativeHandle {
    /// The underlying rcdom node.
    pub fn node(&self) -> &Handle {
        &self.node
    }

    /// Which writer stringifies this node.
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }
}

impl fmt::Display for NativeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.document.save(&self.node, self.kind))
    }
}

impl fmt::Debug for NativeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeHandle")
            .field("kind", &self.kind)
            .field("markup", &self.to_string())
            .finish()
    }
}

// =============================================================================
// NativeDomSerializer
// =============================================================================

/// Renders element trees through an injected [`NativeDocument`].
#[derive(Debug, Clone)]
pub struct NativeDomSerializer {
    document: Rc<NativeDocument>,
}

impl NativeDomSerializer {
    pub fn new(document: Rc<NativeDocument>) -> Self {
        Self { document }
    }

    /// Serializer over the thread's shared document.
    pub fn shared() -> Self {
        Self::new(NativeDocument::shared())
    }

    pub fn document(&self) -> &Rc<NativeDocument> {
        &self.document
    }

    /// Build `elem` in the namespace of the root's document kind.
    fn build(&self, elem: &Element, kind: DocumentKind) -> DomResult<Handle> {
        let node = self.document.create_element(kind, elem.tag(), elem.attributes())?;

        for child in elem.children() {
            match child {
                Node::Element(inner) => {
                    let inner = self.build(inner, kind)?;
                    self.document.append_node(&node, inner);
                }
                Node::Text(text) => self.document.append_text(&node, text),
                Node::Raw(raw) => self.document.append_fragment(&node, raw)?,
            }
        }
        Ok(node)
    }
}

impl Default for NativeDomSerializer {
    fn default() -> Self {
        Self::shared()
    }
}

impl Renderer for NativeDomSerializer {
    type Output = NativeHandle;

    fn render(&self, elem: &Element) -> DomResult<NativeHandle> {
        let kind = elem.dialect().document_kind();
        let node = self.build(elem, kind)?;
        Ok(NativeHandle {
            node,
            kind,
            document: Rc::clone(&self.document),
        })
    }
}

impl Element {
    /// Render through the thread's shared native document.
    pub fn to_native(&self) -> DomResult<NativeHandle> {
        NativeDomSerializer::shared().render(self)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    use html5ever::driver::ParseOpts;
    use html5ever::tendril::TendrilSink;
    use markup5ever::{QualName, local_name, namespace_url, ns};
    use markup5ever_rcdom::{NodeData, RcDom};

    use crate::children;
    use crate::error::DomError;
    use crate::raw::{raw_html, raw_xml};
    use crate::render::render;
    use crate::tags::html::*;
    use crate::tags::svg;

    /// Tag name and attribute set of one element, in document order.
    type ElementSummary = (String, BTreeSet<(String, String)>);

    /// Bare flags parse to an empty value; count them as their own name.
    fn summarize(node: &Handle, out: &mut Vec<ElementSummary>) {
        if let NodeData::Element { name, attrs, .. } = &node.data {
            let attrs = attrs
                .borrow()
                .iter()
                .map(|attr| {
                    let key = attr.name.local.to_string();
                    let value = if attr.value.is_empty() { key.clone() } else { String::from(&*attr.value) };
                    (key, value)
                })
                .collect();
            out.push((name.local.to_string(), attrs));
        }
        for child in node.children.borrow().iter() {
            summarize(child, out);
        }
    }

    fn summarize_markup(markup: &str) -> Vec<ElementSummary> {
        let dom = html5ever::parse_fragment(
            RcDom::default(),
            ParseOpts::default(),
            QualName::new(None, ns!(html), local_name!("body")),
            vec![],
        )
        .one(markup);

        let mut out = Vec::new();
        let root = dom.document.children.borrow().first().cloned();
        if let Some(root) = root {
            for child in root.children.borrow().iter() {
                summarize(child, &mut out);
            }
        }
        out
    }

    #[test]
    fn test_same_elements_and_attributes_as_string_rendering() {
        let el = div(children![
            raw_html("<span class=\"x\" data-k=\"v\">r</span>"),
            form(input().r#type("text").name("q").required(true)),
            svg::svg(svg::circle().cx("5").r("4")).width("10"),
        ])
        .id("root");

        let native = el.to_native().unwrap();
        let mut from_native = Vec::new();
        summarize(native.node(), &mut from_native);

        let from_string = summarize_markup(&render(&el));
        assert_eq!(from_native.len(), 6);
        assert_eq!(from_native, from_string);
    }

    #[test]
    fn test_raw_rows_keep_table_structure() {
        let el = table(tbody(raw_html("<tr><td>x</td></tr>")));
        let native = el.to_native().unwrap();
        assert_eq!(native.to_string(), "<table><tbody><tr><td>x</td></tr></tbody></table>");
        assert_eq!(native.to_string(), render(&el));
    }

    #[test]
    fn test_html_elements_under_xml_root() {
        let el = Element::xml("root", div("x")).unwrap();
        let native = el.to_native().unwrap();
        assert_eq!(native.to_string(), "<root><div>x</div></root>");
    }

    #[test]
    fn test_matches_string_rendering_for_plain_tree() {
        let el = div(children![h1("Title"), p("Body")]).class("a b");
        let native = el.to_native().unwrap();
        assert_eq!(native.to_string(), render(&el));
        assert_eq!(native.kind(), DocumentKind::Html);
    }

    #[test]
    fn test_void_and_flag_attributes() {
        let el = form(input().r#type("text").required(true));
        let native = el.to_native().unwrap();
        assert_eq!(native.to_string(), "<form><input type=\"text\" required=\"required\"></form>");
    }

    #[test]
    fn test_invalid_names_fail() {
        let bad_attr = button("Go").attr("@click", "go()").unwrap();
        assert_eq!(
            bad_attr.to_native().unwrap_err(),
            DomError::InvalidAttrName { tag: "button".into(), name: "@click".into() }
        );

        let bad_tag = div(Element::html("my tag", ()).unwrap());
        assert_eq!(bad_tag.to_native().unwrap_err(), DomError::InvalidTagName("my tag".into()));
    }

    #[test]
    fn test_raw_fragment_is_parsed() {
        let el = ul(children![li("One"), raw_html("<li><a href=\"#\">Two</a></li>")]);
        let native = el.to_native().unwrap();
        assert_eq!(native.to_string(), "<ul><li>One</li><li><a href=\"#\">Two</a></li></ul>");
    }

    #[test]
    fn test_malformed_xml_fragment() {
        let el = Element::xml("root", raw_xml("<a></b>")).unwrap();
        let err = el.to_native().unwrap_err();
        assert!(matches!(err, DomError::MalformedFragment(_)));
    }

    #[test]
    fn test_text_escaped_in_native_output() {
        let el = Element::html("p", "1 & 2").unwrap().title("x");
        let native = el.to_native().unwrap();
        assert_eq!(native.to_string(), "<p title=\"x\">1 &amp; 2</p>");
    }

    #[test]
    fn test_xml_document() {
        let customer = |id: &str, name: &str| {
            Element::xml("customer", Element::xml("name", name.to_string()).unwrap())
                .unwrap()
                .attr("id", id)
                .unwrap()
        };
        let doc = Element::xml("customers", children![customer("1", "Ann"), customer("2", "Bob")]).unwrap();

        let native = doc.to_native().unwrap();
        assert_eq!(native.kind(), DocumentKind::Xml);
        assert_eq!(
            native.to_string(),
            "<customers><customer id=\"1\"><name>Ann</name></customer>\
             <customer id=\"2\"><name>Bob</name></customer></customers>"
        );
    }

    #[test]
    fn test_svg_uses_xml_writer() {
        let el = svg::svg(svg::circle().r("5")).width("10");
        let native = el.to_native().unwrap();
        assert_eq!(native.to_string(), "<svg width=\"10\"><circle r=\"5\"></circle></svg>");
    }

    #[test]
    fn test_injected_document_is_independent() {
        let document = Rc::new(NativeDocument::new());
        let serializer = NativeDomSerializer::new(Rc::clone(&document));
        assert!(Rc::ptr_eq(serializer.document(), &document));
        assert!(!Rc::ptr_eq(serializer.document(), &NativeDocument::shared()));

        let first = serializer.render(&span("a")).unwrap();
        let second = serializer.render(&span("b")).unwrap();
        assert_eq!(first.to_string(), "<span>a</span>");
        assert_eq!(second.to_string(), "<span>b</span>");
    }

    #[test]
    fn test_shared_serializer_reuses_document() {
        let a = NativeDomSerializer::shared();
        let b = NativeDomSerializer::default();
        assert!(Rc::ptr_eq(a.document(), b.document()));
    }
}
