//! Arena document of view nodes.
//!
//! # Responsibility
//! - Provide the host surface the page is constructed into: create nodes,
//!   append children, set attributes and classes, look nodes up by id.
//! - Keep attribute application a closed table instead of runtime
//!   introspection.
//!
//! # Invariants
//! - A `NodeId` stays valid for the document's whole lifetime; nodes are
//!   never destroyed, only detached conceptually by never being appended.
//! - Class lists stay duplicate-free and keep insertion order.

use std::collections::BTreeMap;

/// Handle to one element owned by a [`Document`].
///
/// Handles are freely copyable; holding one does not own the node. The
/// filter controller keeps card handles for repeated visibility toggling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// One child slot of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    Text(String),
    Node(NodeId),
}

/// Closed attribute table for element construction.
///
/// Each supported key has one fixed effect: class-list replacement, a
/// namespaced data entry, a direct property, or the generic attribute
/// fallback. No runtime introspection decides where a value lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attr {
    /// Replaces the whole class set.
    ClassList(Vec<String>),
    /// Sets one namespaced `data-*` entry.
    Data(String, String),
    /// Direct property: document id.
    Id(String),
    /// Direct property: tooltip text.
    Title(String),
    /// Direct property: label target.
    For(String),
    /// Direct property: input type.
    InputType(String),
    /// Direct property: checkbox state.
    Checked(bool),
    /// Generic attribute fallback.
    Other(String, String),
}

impl Attr {
    /// Convenience constructor for a space-free class list literal.
    pub fn classes(values: &[&str]) -> Self {
        Attr::ClassList(values.iter().map(|value| value.to_string()).collect())
    }
}

/// One constructed view element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    dataset: BTreeMap<String, String>,
    checked: bool,
    children: Vec<Child>,
}

impl Element {
    fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            classes: Vec::new(),
            dataset: BTreeMap::new(),
            checked: false,
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|entry| entry == class)
    }

    pub fn data(&self, key: &str) -> Option<&str> {
        self.dataset.get(key).map(String::as_str)
    }

    pub fn dataset(&self) -> impl Iterator<Item = (&str, &str)> {
        self.dataset
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }
}

/// Arena owning the whole constructed view tree.
///
/// The document starts with a single root element (`body`); hosts append
/// their mount container under it before page assembly.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Element>,
    root: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![Element::new("body")],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Creates a new, unattached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.push(Element::new(tag));
        NodeId(self.nodes.len() - 1)
    }

    pub fn element(&self, id: NodeId) -> &Element {
        &self.nodes[id.0]
    }

    fn element_mut(&mut self, id: NodeId) -> &mut Element {
        &mut self.nodes[id.0]
    }

    /// Applies one attribute through the closed table.
    pub fn apply_attr(&mut self, id: NodeId, attr: Attr) {
        match attr {
            Attr::ClassList(classes) => self.set_class_list(id, classes),
            Attr::Data(key, value) => self.set_data(id, &key, &value),
            Attr::Id(value) => self.set_attribute(id, "id", &value),
            Attr::Title(value) => self.set_attribute(id, "title", &value),
            Attr::For(value) => self.set_attribute(id, "for", &value),
            Attr::InputType(value) => self.set_attribute(id, "type", &value),
            Attr::Checked(value) => self.set_checked(id, value),
            Attr::Other(name, value) => self.set_attribute(id, &name, &value),
        }
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        self.element_mut(id)
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).attribute(name)
    }

    pub fn set_data(&mut self, id: NodeId, key: &str, value: &str) {
        self.element_mut(id)
            .dataset
            .insert(key.to_string(), value.to_string());
    }

    pub fn data(&self, id: NodeId, key: &str) -> Option<&str> {
        self.element(id).data(key)
    }

    /// Replaces the class set, dropping duplicates but keeping order.
    pub fn set_class_list(&mut self, id: NodeId, classes: Vec<String>) {
        let element = self.element_mut(id);
        element.classes.clear();
        for class in classes {
            if !element.classes.contains(&class) {
                element.classes.push(class);
            }
        }
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        let element = self.element_mut(id);
        if !element.has_class(class) {
            element.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        self.element_mut(id).classes.retain(|entry| entry != class);
    }

    /// Adds the class when absent, removes it when present.
    pub fn toggle_class(&mut self, id: NodeId, class: &str) -> bool {
        if self.element(id).has_class(class) {
            self.remove_class(id, class);
            false
        } else {
            self.add_class(id, class);
            true
        }
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element(id).has_class(class)
    }

    pub fn set_checked(&mut self, id: NodeId, checked: bool) {
        self.element_mut(id).checked = checked;
    }

    pub fn checked(&self, id: NodeId) -> bool {
        self.element(id).checked
    }

    pub fn append_node(&mut self, parent: NodeId, child: NodeId) {
        self.element_mut(parent).children.push(Child::Node(child));
    }

    pub fn append_text(&mut self, parent: NodeId, text: &str) {
        self.element_mut(parent)
            .children
            .push(Child::Text(text.to_string()));
    }

    /// Replaces all children with one text node.
    pub fn set_text(&mut self, id: NodeId, text: &str) {
        let element = self.element_mut(id);
        element.children.clear();
        element.children.push(Child::Text(text.to_string()));
    }

    /// Direct element children, in document order.
    pub fn child_elements(&self, id: NodeId) -> Vec<NodeId> {
        self.element(id)
            .children
            .iter()
            .filter_map(|child| match child {
                Child::Node(node) => Some(*node),
                Child::Text(_) => None,
            })
            .collect()
    }

    /// Parent of an attached node, scanning the attached tree.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        let mut stack = vec![self.root];
        while let Some(candidate) = stack.pop() {
            let children = self.child_elements(candidate);
            if children.contains(&id) {
                return Some(candidate);
            }
            stack.extend(children);
        }
        None
    }

    /// Every element below `id` in the attached tree, depth-first.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.child_elements(id).into_iter().rev().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            let mut children = self.child_elements(next);
            children.reverse();
            stack.extend(children);
        }
        out
    }

    /// First attached element carrying the given document id.
    ///
    /// Duplicate ids are not guarded against; the first match in document
    /// order wins.
    pub fn get_element_by_id(&self, document_id: &str) -> Option<NodeId> {
        std::iter::once(self.root)
            .chain(self.descendants(self.root))
            .find(|id| self.attribute(*id, "id") == Some(document_id))
    }

    /// Concatenated text of the whole subtree.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        for child in self.element(id).children() {
            match child {
                Child::Text(text) => out.push_str(text),
                Child::Node(node) => self.collect_text(*node, out),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Attr, Document};

    #[test]
    fn class_toggle_round_trips() {
        let mut doc = Document::new();
        let node = doc.create_element("div");
        assert!(doc.toggle_class(node, "visible"));
        assert!(doc.has_class(node, "visible"));
        assert!(!doc.toggle_class(node, "visible"));
        assert!(!doc.has_class(node, "visible"));
    }

    #[test]
    fn class_list_replace_drops_duplicates_keeps_order() {
        let mut doc = Document::new();
        let node = doc.create_element("div");
        doc.add_class(node, "stale");
        doc.apply_attr(node, Attr::classes(&["card", "project", "card"]));
        assert_eq!(doc.element(node).classes(), ["card", "project"]);
    }

    #[test]
    fn lookup_by_id_finds_first_attached_match() {
        let mut doc = Document::new();
        let attached = doc.create_element("div");
        doc.apply_attr(attached, Attr::Id("loading".to_string()));
        let detached = doc.create_element("div");
        doc.apply_attr(detached, Attr::Id("loading".to_string()));
        let root = doc.root();
        doc.append_node(root, attached);

        assert_eq!(doc.get_element_by_id("loading"), Some(attached));
        assert_eq!(doc.get_element_by_id("absent"), None);
    }

    #[test]
    fn descendants_walk_depth_first() {
        let mut doc = Document::new();
        let root = doc.root();
        let first = doc.create_element("div");
        let nested = doc.create_element("span");
        let second = doc.create_element("div");
        doc.append_node(root, first);
        doc.append_node(first, nested);
        doc.append_node(root, second);

        assert_eq!(doc.descendants(root), vec![first, nested, second]);
        assert_eq!(doc.parent(nested), Some(first));
        assert_eq!(doc.parent(root), None);
    }

    #[test]
    fn text_content_concatenates_subtree() {
        let mut doc = Document::new();
        let outer = doc.create_element("div");
        let inner = doc.create_element("span");
        doc.append_text(outer, "Bac ");
        doc.append_node(outer, inner);
        doc.append_text(inner, "+3");
        assert_eq!(doc.text_content(outer), "Bac +3");

        doc.set_text(outer, "RNCP 6");
        assert_eq!(doc.text_content(outer), "RNCP 6");
    }
}
