//! Side-by-side HTML report rendering.
//!
//! The report is built as a small element tree ([`Element`], [`Node`],
//! [`StyleRule`]) and rendered with four-space indentation. The edit script
//! is split into a left column (first file) and a right column (second
//! file), with [`DiffLineType::Blank`] placeholders keeping rows aligned.
//!
//! # Examples
//!
//! ```
//! use sidediff::{diff, html::render_report};
//!
//! let old = vec!["a", "b"];
//! let new = vec!["a", "c"];
//! let report = render_report(&diff(&old, &new), "old.txt", "new.txt");
//!
//! assert!(report.contains("modified-from"));
//! assert!(report.contains("old.txt"));
//! ```

use crate::diff::{DiffLine, DiffLineType};
use std::fmt::Display;

const INDENT: &str = "    ";

/// Elements rendered as `<name />` when they have no children.
const VOID_ELEMENTS: &[&str] = &["meta", "link", "br", "hr", "img", "input"];

/// A node of the HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Already escaped text
    Text(String),
    Style(StyleRule),
}

impl Node {
    /// Creates a text node, escaping `text`.
    pub fn text(text: impl AsRef<str>) -> Self {
        Node::Text(escape_html(text.as_ref()))
    }

    pub fn render(&self, indent: usize) -> String {
        match self {
            Node::Element(element) => element.render(indent),
            Node::Text(text) => indent_lines(text, indent),
            Node::Style(rule) => rule.render(indent),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<StyleRule> for Node {
    fn from(rule: StyleRule) -> Self {
        Node::Style(rule)
    }
}

/// An HTML element with attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Renders the element at the given indentation level.
    ///
    /// An element whose only child is a single-line text node is rendered on
    /// one line.
    pub fn render(&self, indent: usize) -> String {
        let pad = INDENT.repeat(indent);
        let attributes: String = self
            .attributes
            .iter()
            .map(|(name, value)| format!(" {}=\"{}\"", name, escape_html(value)))
            .collect();

        match self.children.as_slice() {
            [] if VOID_ELEMENTS.contains(&self.name.as_str()) => {
                format!("{}<{}{} />", pad, self.name, attributes)
            }
            [] => format!("{}<{}{}></{}>", pad, self.name, attributes, self.name),
            [Node::Text(text)] if !text.contains('\n') => {
                format!("{}<{}{}>{}</{}>", pad, self.name, attributes, text, self.name)
            }
            children => {
                let inner: Vec<String> = children
                    .iter()
                    .map(|child| child.render(indent + 1))
                    .collect();
                format!(
                    "{}<{}{}>\n{}\n{}</{}>",
                    pad,
                    self.name,
                    attributes,
                    inner.join("\n"),
                    pad,
                    self.name
                )
            }
        }
    }
}

/// A CSS rule inside a `<style>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    selector: String,
    declarations: Vec<(String, String)>,
}

impl StyleRule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }

    pub fn declare(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.declarations.push((property.into(), value.into()));
        self
    }

    pub fn render(&self, indent: usize) -> String {
        let pad = INDENT.repeat(indent);
        let inner_pad = INDENT.repeat(indent + 1);
        let mut out = format!("{}{} {{\n", pad, self.selector);
        for (property, value) in &self.declarations {
            out.push_str(&format!("{}{}: {};\n", inner_pad, property, value));
        }
        out.push_str(&pad);
        out.push('}');
        out
    }
}

/// Escapes text for use in HTML content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn indent_lines(text: &str, indent: usize) -> String {
    let pad = INDENT.repeat(indent);
    text.lines()
        .map(|line| format!("{}{}", pad, line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Splits an edit script into left and right columns.
///
/// Removed and added lines get a blank counterpart on the other side.
/// Modified lines go to their own side only; because the diff emits them as
/// adjacent from/to pairs, the columns stay row-aligned.
pub fn side_by_side<T: Clone>(lines: &[DiffLine<T>]) -> (Vec<DiffLine<T>>, Vec<DiffLine<T>>) {
    let mut left = Vec::with_capacity(lines.len());
    let mut right = Vec::with_capacity(lines.len());

    for line in lines {
        match line.line_type {
            DiffLineType::Kept => {
                left.push(line.clone());
                right.push(line.clone());
            }
            DiffLineType::Removed => {
                left.push(line.clone());
                right.push(DiffLine::blank());
            }
            DiffLineType::Added => {
                left.push(DiffLine::blank());
                right.push(line.clone());
            }
            DiffLineType::ModifiedFrom => left.push(line.clone()),
            DiffLineType::ModifiedTo => right.push(line.clone()),
            DiffLineType::Blank => {
                left.push(DiffLine::blank());
                right.push(DiffLine::blank());
            }
        }
    }

    (left, right)
}

/// CSS class name for a line type.
pub fn class_name(line_type: DiffLineType) -> &'static str {
    match line_type {
        DiffLineType::Added => "added",
        DiffLineType::Removed => "removed",
        DiffLineType::Kept => "kept",
        DiffLineType::ModifiedFrom => "modified-from",
        DiffLineType::ModifiedTo => "modified-to",
        DiffLineType::Blank => "blank",
    }
}

fn line_element<T: Display>(line: &DiffLine<T>) -> Element {
    let class = match line.line_type {
        DiffLineType::Blank => class_name(line.line_type).to_string(),
        other => format!("withBorder {}", class_name(other)),
    };
    let element = Element::new("div").class(class);
    match &line.value {
        Some(value) => element.child(Node::text(value.to_string())),
        None => element,
    }
}

fn column<T: Display>(class: &str, file_name: &str, lines: &[DiffLine<T>]) -> Element {
    Element::new("div")
        .class(class)
        .child(Element::new("div").class("fileName").child(Node::text(file_name)))
        .child(Element::new("div").children(lines.iter().map(line_element)))
}

fn style_sheet() -> Element {
    let rules = vec![
        StyleRule::new(".added").declare("background-color", "#517C00"),
        StyleRule::new(".added::before").declare("content", "\"\u{1F60E}\""),
        StyleRule::new(".removed").declare("background-color", "#DC143C"),
        StyleRule::new(".removed::before").declare("content", "\"\u{1F480}\""),
        StyleRule::new(".blank::before").declare("content", "\"\u{2B07}\u{FE0F}\""),
        StyleRule::new(".kept").declare("background-color", "#DBDECD"),
        StyleRule::new(".kept::before").declare("content", "\"\u{1F610}\""),
        StyleRule::new(".modified-from").declare("background-color", "#4663E9"),
        StyleRule::new(".modified-to").declare("background-color", "#4663E9"),
        StyleRule::new(".modified-from::before, .modified-to::before")
            .declare("content", "\"\u{1F635}\""),
        StyleRule::new(".layout")
            .declare("display", "flex")
            .declare("flex-direction", "row")
            .declare("width", "100%")
            .declare("justify-content", "center"),
        StyleRule::new(".layout > div")
            .declare("min-width", "100px")
            .declare("padding", "10px"),
        StyleRule::new(".layout div > div")
            .declare("padding", "5px")
            .declare("margin", "3px")
            .declare("white-space", "pre"),
        StyleRule::new(".withBorder")
            .declare("border-radius", "5px")
            .declare("border", "solid 1px black"),
        StyleRule::new(".blank").declare("border", "1px solid transparent"),
        StyleRule::new(".fileName")
            .declare("text-align", "center")
            .declare("font-weight", "bold"),
    ];
    Element::new("style").children(rules)
}

/// Renders a complete HTML document showing `lines` side by side.
pub fn render_report<T>(lines: &[DiffLine<T>], first_name: &str, second_name: &str) -> String
where
    T: Display + Clone,
{
    let (left, right) = side_by_side(lines);

    let layout = Element::new("div")
        .class("layout")
        .child(column("left", first_name, &left))
        .child(column("right", second_name, &right));

    let document = Element::new("html")
        .attr("lang", "en")
        .child(
            Element::new("head")
                .child(Element::new("title").child(Node::text("Diff Report")))
                .child(Element::new("meta").attr("charset", "UTF-8"))
                .child(style_sheet()),
        )
        .child(Element::new("body").child(layout));

    format!("<!DOCTYPE html>\n{}\n", document.render(0))
}
