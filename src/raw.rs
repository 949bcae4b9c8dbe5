//! Raw markup fragments inserted verbatim.

use std::fmt;

/// How a raw fragment is parsed by the native engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawKind {
    Html,
    Xml,
}

impl RawKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Html => "HTML",
            Self::Xml => "XML",
        }
    }
}

/// Pre-rendered markup that bypasses text sanitizing.
///
/// The string serializer copies `content` as-is; the native serializer
/// parses it as a fragment of the matching kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raw {
    kind: RawKind,
    content: String,
}

impl Raw {
    pub fn new(kind: RawKind, content: impl Into<String>) -> Self {
        Self { kind, content: content.into() }
    }

    pub fn kind(&self) -> RawKind {
        self.kind
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl fmt::Display for Raw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

/// Raw HTML fragment.
pub fn raw_html(content: impl Into<String>) -> Raw {
    Raw::new(RawKind::Html, content)
}

/// Raw XML fragment.
pub fn raw_xml(content: impl Into<String>) -> Raw {
    Raw::new(RawKind::Xml, content)
}
