//! Writing rendered trees to files.

use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::Path;

use crate::node::Element;
use crate::render::render;

// =============================================================================
// SaveConfig
// =============================================================================

/// Header policy for [`save`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveConfig {
    /// `None` uses the element's dialect header.
    pub header: Option<Cow<'static, str>>,
}

impl SaveConfig {
    /// Dialect header (`<!DOCTYPE html>` or `<?xml version="1.0"?>`).
    pub const DIALECT: Self = Self { header: None };

    /// No header at all.
    pub const BARE: Self = Self { header: Some(Cow::Borrowed("")) };

    /// Use a custom header.
    pub fn with_header(mut self, header: impl Into<Cow<'static, str>>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Header written before `elem`'s markup.
    pub fn header_for<'a>(&'a self, elem: &Element) -> &'a str {
        match &self.header {
            Some(header) => header.as_ref(),
            None => elem.dialect().header(),
        }
    }
}

// =============================================================================
// Save
// =============================================================================

/// Write header + markup to `path`, returning the number of bytes written.
pub fn save(elem: &Element, path: impl AsRef<Path>, config: &SaveConfig) -> io::Result<usize> {
    let path = path.as_ref();
    let mut output = String::from(config.header_for(elem));
    output.push_str(&render(elem));

    fs::write(path, output.as_bytes())?;
    log::debug!("saved <{}> to {} ({} bytes)", elem.tag(), path.display(), output.len());
    Ok(output.len())
}

impl Element {
    /// Save with the dialect header.
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<usize> {
        save(self, path, &SaveConfig::DIALECT)
    }
}
