//! The native document: an html5ever `RcDom` used as a node factory.
//!
//! Every element, text node and parsed fragment is created through one
//! `NativeDocument`, then stringified by the html5ever (HTML) or xml5ever
//! (XML) writer. Nodes are never attached to the document root, so
//! independent trees built on the same document do not see each other.

use std::cell::RefCell;
use std::fmt;
use std::io;
use std::rc::Rc;

use html5ever::driver::ParseOpts;
use html5ever::serialize::SerializeOpts as HtmlSerializeOpts;
use html5ever::tendril::{StrTendril, TendrilSink};
use markup5ever::interface::{ElementFlags, NodeOrText, TreeSink};
use markup5ever::serialize::TraversalScope;
use markup5ever::{Attribute, LocalName, Namespace, QualName, local_name, namespace_url, ns};
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};
use xml5ever::driver::XmlParseOpts;
use xml5ever::serialize::SerializeOpts as XmlSerializeOpts;

use super::names::is_valid_name;
use crate::attr::Attr;
use crate::dialect::DocumentKind;
use crate::error::{DomError, DomResult};
use crate::raw::{Raw, RawKind};

const FRAGMENT_ROOT: &str = "tagtree-fragment";

thread_local! {
    static SHARED: Rc<NativeDocument> = {
        log::debug!("creating shared native document");
        Rc::new(NativeDocument::new())
    };
}

/// Node factory and writer backed by an html5ever `RcDom`.
pub struct NativeDocument {
    dom: RefCell<RcDom>,
}

impl NativeDocument {
    /// Create an independent document.
    pub fn new() -> Self {
        Self { dom: RefCell::new(RcDom::default()) }
    }

    /// The lazily-created document shared by every caller on this thread.
    pub fn shared() -> Rc<Self> {
        SHARED.with(Rc::clone)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Node creation
    // ─────────────────────────────────────────────────────────────────────────

    /// Create a detached element carrying `attrs`.
    ///
    /// Tag and attribute names must be XML names. Elements of an HTML
    /// document live in the XHTML namespace, elements of an XML document in
    /// no namespace, whatever their own dialect.
    pub fn create_element(&self, kind: DocumentKind, tag: &str, attrs: &[Attr]) -> DomResult<Handle> {
        if !is_valid_name(tag) {
            return Err(DomError::InvalidTagName(tag.to_string()));
        }

        let mut native_attrs = Vec::with_capacity(attrs.len());
        for attr in attrs {
            if !is_valid_name(attr.name()) {
                return Err(DomError::InvalidAttrName {
                    tag: tag.to_string(),
                    name: attr.name().to_string(),
                });
            }
            native_attrs.push(Attribute {
                name: QualName::new(None, ns!(), LocalName::from(attr.name())),
                value: StrTendril::from_slice(attr.value()),
            });
        }

        let name = QualName::new(None, namespace_of(kind), LocalName::from(tag));
        Ok(self.dom.borrow_mut().create_element(name, native_attrs, ElementFlags::default()))
    }

    /// Append `child` as the last child of `parent`.
    pub fn append_node(&self, parent: &Handle, child: Handle) {
        self.dom.borrow_mut().append(parent, NodeOrText::AppendNode(child));
    }

    /// Append a text node; the writer escapes it.
    pub fn append_text(&self, parent: &Handle, text: &str) {
        self.dom
            .borrow_mut()
            .append(parent, NodeOrText::AppendText(StrTendril::from_slice(text)));
    }

    /// Parse `raw` as a fragment of its kind and append the resulting nodes.
    ///
    /// HTML is parsed in the context of `parent`, so table rows, list items
    /// and options land where the HTML tree builder allows them.
    pub fn append_fragment(&self, parent: &Handle, raw: &Raw) -> DomResult<()> {
        log::trace!("parsing {} fragment ({} bytes)", raw.kind().as_str(), raw.content().len());
        let scratch = match raw.kind() {
            RawKind::Html => parse_html_fragment(raw.content(), fragment_context(parent)),
            RawKind::Xml => parse_xml_fragment(raw.content())?,
        };

        // `scratch` must outlive the move: dropping an rcdom node empties
        // the child lists of everything below it.
        let holder = scratch.document.children.borrow().first().cloned();
        if let Some(holder) = holder {
            self.dom.borrow_mut().reparent_children(&holder, parent);
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Writers
    // ─────────────────────────────────────────────────────────────────────────

    /// Stringify `node` with the writer for `kind`.
    ///
    /// A writer failure yields an empty string.
    pub fn save(&self, node: &Handle, kind: DocumentKind) -> String {
        let written = match kind {
            DocumentKind::Html => write_html(node),
            DocumentKind::Xml => write_xml(node),
        };
        match written.and_then(|bytes| String::from_utf8(bytes).map_err(io::Error::other)) {
            Ok(markup) => markup,
            Err(err) => {
                log::warn!("native {kind:?} writer failed: {err}");
                String::new()
            }
        }
    }

    /// Stringify with the HTML writer.
    pub fn save_html(&self, node: &Handle) -> String {
        self.save(node, DocumentKind::Html)
    }

    /// Stringify with the XML writer.
    pub fn save_xml(&self, node: &Handle) -> String {
        self.save(node, DocumentKind::Xml)
    }
}

impl Default for NativeDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for NativeDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeDocument").finish_non_exhaustive()
    }
}

fn namespace_of(kind: DocumentKind) -> Namespace {
    match kind {
        DocumentKind::Html => ns!(html),
        DocumentKind::Xml => ns!(),
    }
}

/// HTML context element for a fragment appended to `parent`. Parents outside
/// the XHTML namespace fall back to `<body>`.
fn fragment_context(parent: &Handle) -> QualName {
    match &parent.data {
        NodeData::Element { name, .. } if name.ns == ns!(html) => name.clone(),
        _ => QualName::new(None, ns!(html), local_name!("body")),
    }
}

/// Parse HTML in the given context; the nodes end up under the synthetic
/// `<html>` root of the returned scratch document.
fn parse_html_fragment(content: &str, context: QualName) -> RcDom {
    html5ever::parse_fragment(RcDom::default(), ParseOpts::default(), context, vec![]).one(content)
}

/// Parse XML inside a synthetic root, so several top-level nodes and bare
/// text are accepted. The root is the first child of the returned document.
fn parse_xml_fragment(content: &str) -> DomResult<RcDom> {
    let wrapped = format!("<{FRAGMENT_ROOT}>{content}</{FRAGMENT_ROOT}>");
    let dom = xml5ever::driver::parse_document(RcDom::default(), XmlParseOpts::default()).one(wrapped);
    if !dom.errors.is_empty() {
        return Err(DomError::MalformedFragment(dom.errors.join("; ")));
    }
    Ok(dom)
}

fn write_html(node: &Handle) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let opts = HtmlSerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };
    html5ever::serialize(&mut buf, &SerializableHandle::from(node.clone()), opts)?;
    Ok(buf)
}

fn write_xml(node: &Handle) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let opts = XmlSerializeOpts { traversal_scope: TraversalScope::IncludeNode };
    xml5ever::serialize::serialize(&mut buf, &SerializableHandle::from(node.clone()), opts)?;
    Ok(buf)
}
