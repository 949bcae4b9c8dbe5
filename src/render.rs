//! String rendering for element trees
//!
//! Renders elements by direct string concatenation, with no document
//! engine involved. Text was sanitized at construction time, so nothing is
//! escaped here and rendering cannot fail.

use std::fmt;

use crate::attr::Attr;
use crate::error::DomResult;
use crate::node::{Element, Node};

// =============================================================================
// Renderer
// =============================================================================

/// A serialization strategy for element trees.
pub trait Renderer {
    /// What a successful render produces.
    type Output;

    /// Render `elem` and its whole subtree.
    fn render(&self, elem: &Element) -> DomResult<Self::Output>;
}

/// Renders markup by string concatenation.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringSerializer;

impl Renderer for StringSerializer {
    type Output = String;

    fn render(&self, elem: &Element) -> DomResult<String> {
        Ok(render(elem))
    }
}

// =============================================================================
// Element Rendering
// =============================================================================

/// Render an element to a markup string.
pub fn render(elem: &Element) -> String {
    let mut output = String::new();
    render_element(elem, &mut output);
    output
}

/// Render an element into `output`.
pub fn render_element(elem: &Element, output: &mut String) {
    output.push('<');
    output.push_str(elem.tag());
    render_attrs(elem.attributes(), output);

    if elem.is_self_closing() {
        output.push_str(" />");
        return;
    }

    output.push('>');
    for child in elem.children() {
        render_node(child, output);
    }
    output.push_str("</");
    output.push_str(elem.tag());
    output.push('>');
}

/// Render a node: text and raw content go out verbatim.
fn render_node(node: &Node, output: &mut String) {
    match node {
        Node::Element(elem) => render_element(elem, output),
        Node::Text(text) => output.push_str(text),
        Node::Raw(raw) => output.push_str(raw.content()),
    }
}

/// Render attributes, each preceded by one space. Flags are bare names.
fn render_attrs(attrs: &[Attr], output: &mut String) {
    for attr in attrs {
        output.push(' ');
        output.push_str(attr.name());
        if !attr.is_flag() {
            output.push_str("=\"");
            output.push_str(attr.value());
            output.push('"');
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::children;
    use crate::raw::raw_html;
    use crate::tags::html::*;
    use crate::tags::svg;
    use crate::util::{clx, sty};

    #[test]
    fn test_render_simple_tree() {
        let el = div(children![h1("Title"), p("Body")]);
        assert_eq!(render(&el), "<div><h1>Title</h1><p>Body</p></div>");

        let el = el.class("a b");
        assert_eq!(render(&el), "<div class=\"a b\"><h1>Title</h1><p>Body</p></div>");
    }

    #[test]
    fn test_render_boolean_attributes() {
        let el = input().r#type("text").disabled(false).required(true);
        assert_eq!(el.to_string(), "<input type=\"text\" required />");
    }

    #[test]
    fn test_render_self_closing_without_attrs() {
        assert_eq!(render(&br()), "<br />");
        assert_eq!(render(&textarea(())), "<textarea></textarea>");
    }

    #[test]
    fn test_render_svg_leaf() {
        let el = svg::svg(svg::circle());
        assert_eq!(render(&el), "<svg><circle /></svg>");

        let el = svg::svg(svg::circle().cx("25").cy("25").r("20").fill("red"))
            .width("50")
            .height("50");
        assert_eq!(
            render(&el),
            "<svg width=\"50\" height=\"50\"><circle cx=\"25\" cy=\"25\" r=\"20\" fill=\"red\" /></svg>"
        );
    }

    #[test]
    fn test_raw_passthrough_differs_from_text() {
        let markup = "<li><a href=\"#\">Contact</a></li>";
        let raw = render(&ul(raw_html(markup)));
        let text = render(&ul(markup));

        assert_eq!(raw, format!("<ul>{markup}</ul>"));
        assert_eq!(text, "<ul>Contact</ul>");
        assert_ne!(raw, text);
    }

    #[test]
    fn test_entities_are_not_reescaped() {
        let el = p("&copy; 2023 My Website. All rights reserved.");
        assert_eq!(render(&el), "<p>&copy; 2023 My Website. All rights reserved.</p>");
    }

    #[test]
    fn test_value_equal_to_name_is_not_a_flag() {
        let el = input().id("name").name("name");
        assert_eq!(render(&el), "<input id=\"name\" name=\"name\" />");
    }

    #[test]
    fn test_helpers_feed_attributes() {
        let el = div(())
            .class(clx(vec![crate::ClassArg::from("btn"), ("active", true).into()]))
            .style(sty([("color", "red")]))
            .title(clx(Vec::<&str>::new()));
        assert_eq!(render(&el), "<div class=\"btn active\" style=\"color: red;\"></div>");
    }

    #[test]
    fn test_string_serializer_renderer() {
        let out = StringSerializer.render(&span("x")).unwrap();
        assert_eq!(out, "<span>x</span>");
    }

    #[test]
    fn test_render_full_page() {
        let page = html(children![
            head(children![meta().charset("UTF-8"), title("Complex HTML Code Example")]),
            body(
                div(children![
                    header(children![
                        h1("Welcome to My Website"),
                        nav(ul(children![
                            li(a("Home").href("#")),
                            li(a("About").href("#")),
                            li(a("Services").href("#")),
                            raw_html("<li><a href=\"#\">Contact</a></li>"),
                        ]))
                        .class("nav"),
                    ])
                    .class("header"),
                    main(section(children![
                        h2("Contact Us"),
                        form(children![
                            label("Name:").class("form-label").r#for("name"),
                            input().r#type("text").id("name").name("name").class("form-input"),
                            textarea(()).id("message").name("message").class("form-input"),
                            button("Submit").r#type("submit").class("button"),
                        ]),
                    ])
                    .class("section")),
                    footer(p("&copy; 2023 My Website. All rights reserved.")).class("footer"),
                ])
                .class("container"),
            ),
        ])
        .lang("en");

        let expected = concat!(
            "<html lang=\"en\"><head><meta charset=\"UTF-8\" /><title>Complex HTML Code Example</title></head>",
            "<body><div class=\"container\"><header class=\"header\"><h1>Welcome to My Website</h1>",
            "<nav class=\"nav\"><ul><li><a href=\"#\">Home</a></li><li><a href=\"#\">About</a></li>",
            "<li><a href=\"#\">Services</a></li><li><a href=\"#\">Contact</a></li></ul></nav></header>",
            "<main><section class=\"section\"><h2>Contact Us</h2><form>",
            "<label class=\"form-label\" for=\"name\">Name:</label>",
            "<input type=\"text\" id=\"name\" name=\"name\" class=\"form-input\" />",
            "<textarea id=\"message\" name=\"message\" class=\"form-input\"></textarea>",
            "<button type=\"submit\" class=\"button\">Submit</button></form></section></main>",
            "<footer class=\"footer\"><p>&copy; 2023 My Website. All rights reserved.</p></footer>",
            "</div></body></html>",
        );
        assert_eq!(page.to_string(), expected);
    }
}
