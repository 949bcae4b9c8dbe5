//! Markup dialects: HTML, XML, SVG.
//!
//! A dialect decides which tags close themselves, which header a saved
//! document starts with, and which native writer renders it.

use std::fmt;

/// Document kind, selecting the native writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Html,
    Xml,
}

/// Markup dialect of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    #[default]
    Html,
    Xml,
    /// XML specialization with its own leaf-element table
    Svg,
}

/// `<!DOCTYPE html>`
pub const HTML_HEADER: &str = "<!DOCTYPE html>";

/// `<?xml version="1.0"?>`
pub const XML_HEADER: &str = "<?xml version=\"1.0\"?>";

impl Dialect {
    /// Whether `tag` is self-closing in this dialect.
    pub fn is_self_closing(self, tag: &str) -> bool {
        match self {
            Self::Html => is_void_element(tag),
            Self::Xml => false,
            Self::Svg => is_svg_leaf(tag),
        }
    }

    /// Header written before the markup on save.
    pub fn header(self) -> &'static str {
        match self {
            Self::Html => HTML_HEADER,
            Self::Xml | Self::Svg => XML_HEADER,
        }
    }

    pub fn document_kind(self) -> DocumentKind {
        match self {
            Self::Html => DocumentKind::Html,
            Self::Xml | Self::Svg => DocumentKind::Xml,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Xml => "xml",
            Self::Svg => "svg",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Check if a tag is an HTML void element. Case-insensitive.
pub fn is_void_element(tag: &str) -> bool {
    const VOID: [&str; 13] = [
        "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
        "track", "wbr",
    ];
    VOID.iter().any(|v| v.eq_ignore_ascii_case(tag))
}

/// Check if a tag is an SVG leaf element. SVG names are case-sensitive.
pub fn is_svg_leaf(tag: &str) -> bool {
    matches!(
        tag,
        // Animation
        "animate" | "animateMotion" | "mpath"
        // Shapes
        | "circle" | "ellipse" | "line" | "path" | "polygon" | "polyline" | "rect"
        // Filter primitives
        | "feBlend" | "feColorMatrix" | "feDisplacementMap" | "feDropShadow"
        | "feGaussianBlur" | "feImage"
        // Other
        | "image" | "stop" | "use"
    )
}
