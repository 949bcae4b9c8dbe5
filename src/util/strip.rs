//! Markup stripping for plain text children.

use std::borrow::Cow;

/// Remove markup from `input`, keeping only text.
///
/// Tags (quote-aware), comments and processing instructions are dropped.
/// A `<` followed by whitespace or the end of input is ordinary text. An
/// unterminated tag swallows the rest of the input.
pub fn strip_tags(input: &str) -> Cow<'_, str> {
    if !input.contains('<') {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(pos) = rest.find('<') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        match after.chars().next() {
            Some(c) if !c.is_whitespace() => {}
            _ => {
                out.push('<');
                rest = after;
                continue;
            }
        }

        rest = match after.strip_prefix("!--") {
            Some(body) => body.find("-->").map_or("", |end| &body[end + 3..]),
            None => skip_tag(after),
        };
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Skip past the `>` closing the current tag, ignoring `>` inside quotes.
fn skip_tag(s: &str) -> &str {
    let mut quote = None;
    for (i, c) in s.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '"' || c == '\'' => quote = Some(c),
            None if c == '>' => return &s[i + 1..],
            None => {}
        }
    }
    ""
}
