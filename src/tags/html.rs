//! HTML tag factories.
//!
//! ```ignore
//! use tagtree::tags::html::*;
//!
//! let page = div(children![h1("Title"), p("Body")]).class("a b");
//! ```

use crate::dialect::Dialect;

container_tags!(Dialect::Html;
    a, abbr, address, article, aside, audio, b, bdi, bdo, blockquote, body, button,
    canvas, caption, cite, code, colgroup, data, datalist, dd, del, details, dfn,
    dialog, div, dl, dt, em, fieldset, figcaption, figure, footer, form,
    h1, h2, h3, h4, h5, h6, head, header, hgroup, html, i, iframe, ins, kbd, label,
    legend, li, main, map, mark, menu, meter, nav, noscript, object, ol, optgroup,
    option, output, p, picture, pre, progress, q, rp, rt, ruby, s, samp, script,
    section, select, slot, small, span, strong, style, sub, summary, sup, table,
    tbody, td, template, textarea, tfoot, th, thead, time, title, tr, u, ul, video,
);

leaf_tags!(Dialect::Html;
    area, base, br, col, embed, hr, img, input, link, meta, source, track, wbr,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::children;

    #[test]
    fn test_factories_set_dialect_and_tag() {
        let el = section("x");
        assert_eq!(el.tag(), "section");
        assert_eq!(el.dialect(), Dialect::Html);
        assert!(!el.is_self_closing());
    }

    #[test]
    fn test_void_factories_self_close() {
        for el in [area(), base(), br(), col(), embed(), hr(), img(), input(), link(), meta(), source(), track(), wbr()] {
            assert!(el.is_self_closing(), "{} should self-close", el.tag());
        }
    }

    #[test]
    fn test_nested_construction() {
        let el = ul(children![li("One"), li("Two"), None::<crate::Element>]);
        assert_eq!(el.children().len(), 2);
        assert_eq!(el.text_content(), "OneTwo");
    }
}
