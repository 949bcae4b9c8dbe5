//! Attribute system for elements
//!
//! - `Vec<Attr>` keeps insertion order, which is render order
//! - values are stored as strings; booleans collapse on the way in
//! - presence flags (`required`, `disabled`) remember that they are flags

use compact_str::{CompactString, ToCompactString};

use crate::error::{DomError, DomResult};

// =============================================================================
// AttrValue
// =============================================================================

/// A value handed to an attribute setter, before coercion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AttrValue {
    /// Leave the attribute untouched
    #[default]
    Null,
    /// `true` stores a presence flag, `false` removes the attribute
    Bool(bool),
    /// Any scalar, already in string form
    Text(CompactString),
}

impl AttrValue {
    /// Check for the no-op value.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value.into())
    }
}

impl From<CompactString> for AttrValue {
    fn from(value: CompactString) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<char> for AttrValue {
    fn from(value: char) -> Self {
        Self::Text(value.to_compact_string())
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for AttrValue {
                fn from(value: $ty) -> Self {
                    Self::Text(value.to_compact_string())
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

// =============================================================================
// Attr / Attrs
// =============================================================================

/// A stored attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    name: CompactString,
    value: CompactString,
    flag: bool,
}

impl Attr {
    /// Attribute with a real value.
    pub fn new(name: impl Into<CompactString>, value: impl Into<CompactString>) -> Self {
        Self { name: name.into(), value: value.into(), flag: false }
    }

    /// Presence flag; its value is its own name.
    pub fn flag(name: impl Into<CompactString>) -> Self {
        let name = name.into();
        Self { value: name.clone(), name, flag: true }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether this attribute renders as a bare name.
    pub fn is_flag(&self) -> bool {
        self.flag
    }
}

/// Element attributes in insertion order.
pub type Attrs = Vec<Attr>;

/// Extension trait for attribute operations on Attrs
pub trait AttrsExt {
    /// Get an attribute value by name
    fn get_attr(&self, name: &str) -> Option<&str>;

    /// Check if an attribute exists
    fn has_attr(&self, name: &str) -> bool;

    /// Store an attribute (insert or overwrite in place)
    fn put_attr(&mut self, attr: Attr);

    /// Remove an attribute by name, returning the old value if present
    fn remove_attr(&mut self, name: &str) -> Option<CompactString>;

    /// Apply a setter value to an already-normalized, valid name.
    fn apply(&mut self, name: &str, value: AttrValue);
}

impl AttrsExt for Attrs {
    fn get_attr(&self, name: &str) -> Option<&str> {
        self.iter().find(|a| a.name == name).map(|a| a.value.as_str())
    }

    fn has_attr(&self, name: &str) -> bool {
        self.iter().any(|a| a.name == name)
    }

    fn put_attr(&mut self, attr: Attr) {
        if let Some(slot) = self.iter_mut().find(|a| a.name == attr.name) {
            *slot = attr;
        } else {
            self.push(attr);
        }
    }

    fn remove_attr(&mut self, name: &str) -> Option<CompactString> {
        self.iter()
            .position(|a| a.name == name)
            .map(|pos| self.remove(pos).value)
    }

    fn apply(&mut self, name: &str, value: AttrValue) {
        match value {
            AttrValue::Null => {}
            AttrValue::Bool(false) => {
                self.remove_attr(name);
            }
            AttrValue::Bool(true) => self.put_attr(Attr::flag(name)),
            AttrValue::Text(text) => self.put_attr(Attr::new(name, text)),
        }
    }
}

// =============================================================================
// Name rules
// =============================================================================

/// Translate identifier-safe names to attribute names (`aria_current` → `aria-current`).
pub fn normalize_name(name: &str) -> CompactString {
    name.chars().map(|c| if c == '_' { '-' } else { c }).collect()
}

/// Whether `s` reads as a decimal number: optional surrounding whitespace
/// and sign, digits with an optional fraction, then an optional exponent
/// (`42`, `-1`, `1.5`, `.5`, `1e3`). Hex and bare signs are not numbers.
pub(crate) fn is_numeric(s: &str) -> bool {
    let s = s.trim_matches([' ', '\t', '\n', '\r', '\x0B', '\x0C']);
    let s = s.strip_prefix(['+', '-']).unwrap_or(s);
    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(at) => (&s[..at], Some(&s[at + 1..])),
        None => (s, None),
    };

    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let mantissa_ok = !(int.is_empty() && frac.is_empty()) && all_digits(int) && all_digits(frac);
    let exponent_ok = exponent.is_none_or(|exp| {
        let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
        !digits.is_empty() && all_digits(digits)
    });
    mantissa_ok && exponent_ok
}

/// Validate and normalize an attribute name for element `tag`.
pub(crate) fn check_name(tag: &str, name: &str) -> DomResult<CompactString> {
    if name.is_empty() {
        return Err(DomError::EmptyAttrName { tag: tag.to_string() });
    }
    if is_numeric(name) {
        return Err(DomError::NumericAttrName { tag: tag.to_string(), name: name.to_string() });
    }
    Ok(normalize_name(name))
}

// =============================================================================
// Tests
// =============================================================================
