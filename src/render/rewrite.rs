use ego_tree::{NodeId, NodeRef};
use html_escape::{encode_double_quoted_attribute, encode_text};
use scraper::node::Element;
use scraper::{ElementRef, Html, Node};
use std::collections::{HashMap, HashSet};

/// Replacement markup keyed by the node it stands in for.
pub type Replacements = HashMap<NodeId, String>;

// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Serialize a parsed document back to HTML, substituting the given
/// markup for each replaced node.
///
/// Subtrees that contain no replaced node are re-emitted through the
/// parser's own serializer; only the spine from the root down to a
/// replaced node is rebuilt tag by tag. With no replacements this is a
/// plain re-serialization of the document.
pub fn rewrite_document(document: &Html, replacements: &Replacements) -> String {
    let spine = ancestor_spine(document, replacements);
    let mut out = String::new();
    for child in document.tree.root().children() {
        serialize_node(child, replacements, &spine, &mut out);
    }
    out
}

/// Serialize one element's outer HTML with the given nodes substituted.
pub fn rewrite_element(root: ElementRef, replacements: &Replacements) -> String {
    let mut spine = HashSet::new();
    for id in replacements.keys() {
        let mut node = root.tree().get(*id);
        while let Some(current) = node {
            spine.insert(current.id());
            node = current.parent();
        }
    }
    let mut out = String::new();
    serialize_node(*root, replacements, &spine, &mut out);
    out
}

fn ancestor_spine(document: &Html, replacements: &Replacements) -> HashSet<NodeId> {
    let mut spine = HashSet::new();
    for id in replacements.keys() {
        let mut node = document.tree.get(*id);
        while let Some(current) = node {
            spine.insert(current.id());
            node = current.parent();
        }
    }
    spine
}

fn serialize_node(
    node: NodeRef<Node>,
    replacements: &Replacements,
    spine: &HashSet<NodeId>,
    out: &mut String,
) {
    if let Some(html) = replacements.get(&node.id()) {
        out.push_str(html);
        return;
    }

    match node.value() {
        Node::Element(element) => {
            if !spine.contains(&node.id()) {
                if let Some(el) = ElementRef::wrap(node) {
                    out.push_str(&el.html());
                }
                return;
            }
            push_open_tag(element, out);
            for child in node.children() {
                serialize_node(child, replacements, spine, out);
            }
            if !VOID_ELEMENTS.contains(&element.name()) {
                out.push_str("</");
                out.push_str(element.name());
                out.push('>');
            }
        }
        Node::Text(text) => out.push_str(&encode_text(&**text)),
        Node::Comment(comment) => {
            out.push_str("<!--");
            out.push_str(comment);
            out.push_str("-->");
        }
        Node::Doctype(doctype) => {
            out.push_str("<!DOCTYPE ");
            out.push_str(&doctype.name());
            out.push('>');
        }
        _ => {}
    }
}

pub(crate) fn push_open_tag(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(element.name());
    for (key, value) in element.attrs() {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&encode_double_quoted_attribute(value));
        out.push('"');
    }
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::{rewrite_document, rewrite_element, Replacements};
    use scraper::{Html, Selector};

    #[test]
    fn replaces_a_nested_node_and_keeps_siblings() {
        let document =
            Html::parse_document("<body><div id=\"a\"><span>old</span></div><p>keep</p></body>");
        let span = Selector::parse("span").unwrap();
        let node = document.select(&span).next().unwrap();

        let mut replacements = Replacements::new();
        replacements.insert(node.id(), "<em>new</em>".to_string());

        let out = rewrite_document(&document, &replacements);
        assert!(out.contains("<em>new</em>"));
        assert!(!out.contains("old"));
        assert!(out.contains("<p>keep</p>"));
    }

    #[test]
    fn no_replacements_round_trips_the_markup() {
        let document = Html::parse_document("<body><div class=\"x\">текст</div></body>");
        let out = rewrite_document(&document, &Replacements::new());
        assert!(out.contains("<div class=\"x\">текст</div>"));
    }

    #[test]
    fn element_rewrite_keeps_the_outer_tag() {
        let document = Html::parse_document("<div class=\"wrap\"><b>x</b></div>");
        let div = Selector::parse("div.wrap").unwrap();
        let el = document.select(&div).next().unwrap();
        let b = Selector::parse("b").unwrap();
        let inner = el.select(&b).next().unwrap();

        let mut replacements = Replacements::new();
        replacements.insert(inner.id(), "<i>y</i>".to_string());

        let out = rewrite_element(el, &replacements);
        assert_eq!(out, "<div class=\"wrap\"><i>y</i></div>");
    }
}
