//! HTML serialization of a document subtree.
//!
//! # Responsibility
//! - Render any attached or detached subtree to a self-contained HTML
//!   string with escaped text and attribute values.
//!
//! # Invariants
//! - Output is deterministic: attributes in name order, then `class`,
//!   `data-*` entries and the checked marker.

use crate::view::dom::{Child, Document, NodeId};
use std::fmt::Write;

const VOID_TAGS: [&str; 4] = ["br", "hr", "img", "input"];

/// Serializes the subtree rooted at `id`.
pub fn render(doc: &Document, id: NodeId) -> String {
    let mut out = String::new();
    render_node(doc, id, &mut out);
    out
}

fn render_node(doc: &Document, id: NodeId, out: &mut String) {
    let element = doc.element(id);
    let tag = element.tag();

    out.push('<');
    out.push_str(tag);
    for (name, value) in element.attributes() {
        let _ = write!(out, " {name}=\"{}\"", escape_attr(value));
    }
    if !element.classes().is_empty() {
        let _ = write!(out, " class=\"{}\"", escape_attr(&element.classes().join(" ")));
    }
    for (key, value) in element.dataset() {
        let _ = write!(out, " data-{key}=\"{}\"", escape_attr(value));
    }
    if element.checked() {
        out.push_str(" checked");
    }

    if VOID_TAGS.contains(&tag) {
        out.push_str("/>");
        return;
    }
    out.push('>');

    for child in element.children() {
        match child {
            Child::Text(text) => out.push_str(&escape_text(text)),
            Child::Node(node) => render_node(doc, *node, out),
        }
    }

    let _ = write!(out, "</{tag}>");
}

fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
