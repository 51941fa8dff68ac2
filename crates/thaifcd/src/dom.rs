// ABOUTME: Document text helpers shared by the extractors.
// ABOUTME: Approximates rendered text (innerText) with a node walk that honors block boundaries.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html};

// Tags whose subtrees never contribute rendered text
const SKIP_TAGS: &[&str] = &["head", "script", "style", "noscript"];

// Tags that end a rendered line
const BLOCK_TAGS: &[&str] = &[
    "address",
    "article",
    "aside",
    "blockquote",
    "div",
    "dl",
    "dd",
    "dt",
    "fieldset",
    "figure",
    "footer",
    "form",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hr",
    "li",
    "main",
    "nav",
    "ol",
    "p",
    "pre",
    "section",
    "table",
    "tr",
    "ul",
];

static HORIZONTAL_WS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\S\n]+").unwrap());
static BLANK_LINES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r" ?\n[ \n]*").unwrap());

/// Collapses runs of whitespace into single spaces and trims.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalized text content of a single element, e.g. one table cell.
pub fn element_text(el: ElementRef) -> String {
    normalize_whitespace(&el.text().collect::<Vec<_>>().join(" "))
}

/// Approximation of the document's rendered text.
///
/// Source whitespace (including newlines inside text nodes) collapses to
/// spaces; block-level elements and `<br>` end a line. Head, script, style
/// and noscript subtrees are dropped. Line-oriented patterns can therefore
/// anchor on `\n` the way they would against the body's `innerText`.
pub fn visible_text(doc: &Html) -> String {
    let mut out = String::new();
    for child in doc.root_element().children() {
        append_visible(child, &mut out);
    }

    let spaced = HORIZONTAL_WS_RE.replace_all(&out, " ");
    let collapsed = BLANK_LINES_RE.replace_all(&spaced, "\n");
    collapsed.trim().to_string()
}

fn append_visible(node: ego_tree::NodeRef<scraper::Node>, out: &mut String) {
    match node.value() {
        scraper::Node::Text(text) => {
            for ch in text.chars() {
                out.push(if ch.is_whitespace() { ' ' } else { ch });
            }
        }
        scraper::Node::Element(el) => {
            let name = el.name().to_lowercase();
            if SKIP_TAGS.contains(&name.as_str()) {
                return;
            }
            if name == "br" {
                out.push('\n');
                return;
            }

            for child in node.children() {
                append_visible(child, out);
            }

            if name == "td" || name == "th" {
                out.push(' ');
            } else if BLOCK_TAGS.contains(&name.as_str()) {
                out.push('\n');
            }
        }
        _ => {}
    }
}
