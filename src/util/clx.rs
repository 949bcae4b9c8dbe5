//! `class` and `style` value builders.
//!
//! Both return `None` when nothing survives filtering, which the attribute
//! setters treat as "leave the attribute alone".

use compact_str::{CompactString, ToCompactString};

// =============================================================================
// Class lists
// =============================================================================

/// One input to [`clx`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassArg {
    /// Class name(s), used as-is when non-empty
    Name(CompactString),
    /// Conditional class: kept only when the flag is set
    Toggle(CompactString, bool),
    /// Nested inputs, flattened in order
    List(Vec<ClassArg>),
    Skip,
}

impl From<&str> for ClassArg {
    fn from(name: &str) -> Self {
        Self::Name(name.into())
    }
}

impl From<String> for ClassArg {
    fn from(name: String) -> Self {
        Self::Name(name.into())
    }
}

impl From<(&str, bool)> for ClassArg {
    fn from((name, on): (&str, bool)) -> Self {
        Self::Toggle(name.into(), on)
    }
}

impl From<(String, bool)> for ClassArg {
    fn from((name, on): (String, bool)) -> Self {
        Self::Toggle(name.into(), on)
    }
}

impl<T: Into<ClassArg>> From<Option<T>> for ClassArg {
    fn from(arg: Option<T>) -> Self {
        arg.map_or(Self::Skip, Into::into)
    }
}

impl<T: Into<ClassArg>> From<Vec<T>> for ClassArg {
    fn from(args: Vec<T>) -> Self {
        Self::List(args.into_iter().map(Into::into).collect())
    }
}

/// Join class names, dropping empty names and disabled toggles.
///
/// ```ignore
/// clx(vec![ClassArg::from("btn"), ("active", is_active).into()])
/// ```
pub fn clx<I>(items: I) -> Option<String>
where
    I: IntoIterator,
    I::Item: Into<ClassArg>,
{
    let mut names: Vec<CompactString> = Vec::new();
    for item in items {
        collect_classes(item.into(), &mut names);
    }
    if names.is_empty() {
        return None;
    }
    Some(names.join(" "))
}

fn collect_classes(arg: ClassArg, names: &mut Vec<CompactString>) {
    match arg {
        ClassArg::Name(name) | ClassArg::Toggle(name, true) if !name.is_empty() => names.push(name),
        ClassArg::List(args) => args.into_iter().for_each(|a| collect_classes(a, names)),
        _ => {}
    }
}

// =============================================================================
// Inline styles
// =============================================================================

/// A style declaration value; booleans and `None` are skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleValue {
    Text(CompactString),
    Skip,
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Text(value.into())
    }
}

impl From<bool> for StyleValue {
    fn from(_: bool) -> Self {
        Self::Skip
    }
}

impl<T: Into<StyleValue>> From<Option<T>> for StyleValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Skip, Into::into)
    }
}

macro_rules! impl_style_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for StyleValue {
                fn from(value: $ty) -> Self {
                    Self::Text(value.to_compact_string())
                }
            }
        )*
    };
}

impl_style_number!(i32, i64, u32, u64, usize, f32, f64);

/// Build an inline style string: `"k: v; k2: v2;"`.
pub fn sty<I, K, V>(pairs: I) -> Option<String>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<StyleValue>,
{
    let decls: Vec<String> = pairs
        .into_iter()
        .filter_map(|(key, value)| match Into::<StyleValue>::into(value) {
            StyleValue::Text(v) if !key.as_ref().is_empty() => Some(format!("{}: {}", key.as_ref(), v)),
            _ => None,
        })
        .collect();

    if decls.is_empty() {
        return None;
    }
    Some(format!("{};", decls.join("; ")))
}
