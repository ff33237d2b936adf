//! Declarative construction of the page tree.
//!
//! # Responsibility
//! - Map static card records to view nodes: navigation bar, loading
//!   indicator, one card per record.
//! - Keep every constructor free of data mutation; the only side effect is
//!   insertion into a supplied mount point.
//!
//! # Invariants
//! - `build_element` always returns a new, unattached node.
//! - Card order follows input order; chronological collections are
//!   reversed by `build_all_cards` for most-recent-first display.

use crate::catalog::Catalog;
use crate::model::card::{CardRecord, Category};
use crate::model::content::ContentBlock;
use crate::view::dom::{Attr, Document, NodeId};
use log::debug;

/// Document id of the cards container.
pub const CARDS_ID: &str = "cards";
/// Document id of the loading indicator.
pub const LOADING_ID: &str = "loading";
/// Document id of the menu-toggle checkbox.
pub const MENU_TOGGLE_ID: &str = "btnNavbar";
/// Document id of the navigation entry list.
pub const NAV_LIST_ID: &str = "navbarItems";

/// One child input for [`build_element`]: literal text, an existing node,
/// or an ordered sequence of either.
#[derive(Debug, Clone)]
pub enum ChildSpec {
    Text(String),
    Node(NodeId),
    Sequence(Vec<ChildSpec>),
}

impl From<&str> for ChildSpec {
    fn from(value: &str) -> Self {
        ChildSpec::Text(value.to_string())
    }
}

impl From<String> for ChildSpec {
    fn from(value: String) -> Self {
        ChildSpec::Text(value)
    }
}

impl From<NodeId> for ChildSpec {
    fn from(value: NodeId) -> Self {
        ChildSpec::Node(value)
    }
}

/// Constructs one node, applies each attribute through the closed table
/// and appends each child. The returned node is never attached anywhere.
pub fn build_element(
    doc: &mut Document,
    tag: &str,
    attrs: Vec<Attr>,
    children: Vec<ChildSpec>,
) -> NodeId {
    let node = doc.create_element(tag);
    for attr in attrs {
        doc.apply_attr(node, attr);
    }
    for child in children {
        append_child_spec(doc, node, child);
    }
    node
}

fn append_child_spec(doc: &mut Document, parent: NodeId, child: ChildSpec) {
    match child {
        ChildSpec::Text(text) => doc.append_text(parent, &text),
        ChildSpec::Node(node) => doc.append_node(parent, node),
        ChildSpec::Sequence(children) => {
            for entry in children {
                append_child_spec(doc, parent, entry);
            }
        }
    }
}

/// Appends the busy placeholder to the mount point.
///
/// Invoking this twice produces a duplicate `loading` id; id lookup then
/// resolves to the first occurrence. Not guarded.
pub fn build_loading_indicator(doc: &mut Document, mount: NodeId) -> NodeId {
    let loading = build_element(
        doc,
        "div",
        vec![
            Attr::classes(&["loading"]),
            Attr::Id(LOADING_ID.to_string()),
        ],
        Vec::new(),
    );
    doc.append_node(mount, loading);
    loading
}

/// Constructs the header, the menu-toggle control and the navigation
/// entries, and appends the bar to the mount point.
///
/// The identity entry exists only when `unlocked` is true; every entry
/// carries its category tag as a `data-class` marker.
pub fn build_navigation_bar(doc: &mut Document, mount: NodeId, unlocked: bool) -> NodeId {
    let header = build_element(
        doc,
        "h1",
        vec![Attr::classes(&["header"]), Attr::Id("header".to_string())],
        vec![ChildSpec::from("Curriculum Vitae")],
    );

    let stripes: Vec<ChildSpec> = (0..3)
        .map(|_| ChildSpec::Node(build_element(doc, "span", Vec::new(), Vec::new())))
        .collect();
    let toggle_label = build_element(
        doc,
        "label",
        vec![
            Attr::classes(&["btnLabel"]),
            Attr::Id("labelBtnNavbar".to_string()),
            Attr::For(MENU_TOGGLE_ID.to_string()),
        ],
        stripes,
    );

    let toggle = build_element(
        doc,
        "input",
        vec![
            Attr::classes(&["btn"]),
            Attr::Id(MENU_TOGGLE_ID.to_string()),
            Attr::InputType("checkbox".to_string()),
        ],
        Vec::new(),
    );

    let entries: Vec<ChildSpec> = Category::ALL
        .iter()
        .filter(|category| **category != Category::Identity || unlocked)
        .map(|category| {
            let entry = build_element(
                doc,
                "li",
                vec![Attr::Data("class".to_string(), category.as_str().to_string())],
                vec![ChildSpec::from(category.label())],
            );
            ChildSpec::Node(entry)
        })
        .collect();
    let list = build_element(
        doc,
        "ul",
        vec![
            Attr::classes(&["navbarItems"]),
            Attr::Id(NAV_LIST_ID.to_string()),
        ],
        entries,
    );

    let navbar = build_element(
        doc,
        "nav",
        vec![Attr::classes(&["fixed"]), Attr::Id("navbar".to_string())],
        vec![
            ChildSpec::Node(header),
            ChildSpec::Node(toggle_label),
            ChildSpec::Node(toggle),
            ChildSpec::Node(list),
        ],
    );
    doc.append_node(mount, navbar);
    navbar
}

/// Constructs one card: titled container plus nested body container.
///
/// Returns the card unattached so callers can batch cards under one
/// container node.
///
/// # Panics
/// - On a record failing [`CardRecord::validate`]; malformed static data
///   is a configuration bug, not a runtime condition.
pub fn build_card(doc: &mut Document, record: &CardRecord) -> NodeId {
    if let Err(err) = record.validate() {
        panic!("invalid card record: {err}");
    }

    let mut classes = vec!["card".to_string(), record.category.as_str().to_string()];
    classes.extend(record.style_classes.iter().cloned());

    let card = build_element(
        doc,
        "div",
        vec![
            Attr::ClassList(classes),
            Attr::Id(record.identifier.clone()),
        ],
        vec![ChildSpec::Text(record.title.clone())],
    );

    let body_children: Vec<ChildSpec> = record
        .body
        .iter()
        .map(|block| ChildSpec::Node(render_block(doc, block)))
        .collect();
    let body = build_element(
        doc,
        "div",
        vec![
            Attr::classes(&["body"]),
            Attr::Id(record.body_identifier.clone()),
        ],
        body_children,
    );
    doc.append_node(card, body);

    card
}

/// Builds and appends one card per record, preserving the given order.
pub fn build_card_group<'a, I>(doc: &mut Document, mount: NodeId, records: I)
where
    I: IntoIterator<Item = &'a CardRecord>,
{
    for record in records {
        let card = build_card(doc, record);
        doc.append_node(mount, card);
    }
}

/// Builds the cards container and every card collection in fixed order:
/// identity (gated on `unlocked`), professional, formation, skills,
/// project. Experience and formation are supplied oldest-first and shown
/// most-recent-first.
pub fn build_all_cards(
    doc: &mut Document,
    mount: NodeId,
    catalog: &Catalog,
    unlocked: bool,
) -> NodeId {
    let cards = build_element(
        doc,
        "div",
        vec![Attr::classes(&["cards"]), Attr::Id(CARDS_ID.to_string())],
        Vec::new(),
    );

    if unlocked {
        build_card_group(doc, cards, &catalog.identity);
    }
    build_card_group(doc, cards, catalog.professional.iter().rev());
    build_card_group(doc, cards, catalog.formation.iter().rev());
    build_card_group(doc, cards, &catalog.skills);
    build_card_group(doc, cards, &catalog.project);

    doc.append_node(mount, cards);
    debug!(
        "event=cards_built module=view status=ok count={} unlocked={}",
        doc.child_elements(cards).len(),
        unlocked
    );
    cards
}

/// Maps one content block to its fixed element shape.
fn render_block(doc: &mut Document, block: &ContentBlock) -> NodeId {
    match block {
        ContentBlock::Text { body, note } => {
            let mut attrs = Vec::new();
            if let Some(note) = note {
                attrs.push(Attr::Data("after".to_string(), note.clone()));
            }
            build_element(doc, "div", attrs, vec![ChildSpec::Text(body.clone())])
        }
        ContentBlock::Labeled { role, body } => build_element(
            doc,
            "div",
            vec![Attr::Other("role".to_string(), role.clone())],
            vec![ChildSpec::Text(body.clone())],
        ),
        ContentBlock::Link {
            role,
            label,
            href,
            new_tab,
        } => {
            let anchor = render_anchor(doc, label, href, *new_tab);
            let mut attrs = Vec::new();
            if let Some(role) = role {
                attrs.push(Attr::Other("role".to_string(), role.clone()));
            }
            build_element(doc, "div", attrs, vec![ChildSpec::Node(anchor)])
        }
        ContentBlock::LinkGroup { role, links } => {
            let items: Vec<ChildSpec> = links
                .iter()
                .map(|link| {
                    let anchor = render_anchor(doc, &link.label, &link.href, true);
                    let item =
                        build_element(doc, "li", Vec::new(), vec![ChildSpec::Node(anchor)]);
                    ChildSpec::Node(item)
                })
                .collect();
            build_element(
                doc,
                "ul",
                vec![Attr::Other("role".to_string(), role.clone())],
                items,
            )
        }
        ContentBlock::List { role, items } => {
            let entries: Vec<ChildSpec> = items
                .iter()
                .map(|item| {
                    let entry = build_element(
                        doc,
                        "li",
                        Vec::new(),
                        vec![ChildSpec::Text(item.clone())],
                    );
                    ChildSpec::Node(entry)
                })
                .collect();
            build_element(
                doc,
                "ul",
                vec![Attr::Other("role".to_string(), role.clone())],
                entries,
            )
        }
        ContentBlock::Image { src } => {
            let image = build_element(
                doc,
                "img",
                vec![Attr::Other("src".to_string(), src.clone())],
                Vec::new(),
            );
            build_element(
                doc,
                "div",
                vec![Attr::classes(&["imgContainer"])],
                vec![ChildSpec::Node(image)],
            )
        }
        ContentBlock::Logo { image, caption } => {
            let inner = match (image, caption) {
                (Some(src), _) => build_element(
                    doc,
                    "img",
                    vec![Attr::Other("src".to_string(), src.clone())],
                    Vec::new(),
                ),
                (None, Some(text)) => build_element(
                    doc,
                    "span",
                    Vec::new(),
                    vec![ChildSpec::Text(text.clone())],
                ),
                (None, None) => build_element(doc, "span", Vec::new(), Vec::new()),
            };
            build_element(
                doc,
                "div",
                vec![Attr::classes(&["imgLogo"])],
                vec![ChildSpec::Node(inner)],
            )
        }
        ContentBlock::Period { text, months } => {
            let mut attrs = vec![Attr::Other("role".to_string(), "periode".to_string())];
            if let Some(months) = months {
                attrs.push(Attr::Data("diff".to_string(), format!("{months} mois")));
            }
            build_element(doc, "div", attrs, vec![ChildSpec::Text(text.clone())])
        }
        ContentBlock::Level { value } => build_element(
            doc,
            "div",
            vec![Attr::Other("role".to_string(), "level".to_string())],
            vec![ChildSpec::Text(value.clone())],
        ),
        ContentBlock::Rule => build_element(doc, "hr", Vec::new(), Vec::new()),
    }
}

fn render_anchor(doc: &mut Document, label: &str, href: &str, new_tab: bool) -> NodeId {
    let mut attrs = vec![Attr::Other("href".to_string(), href.to_string())];
    if new_tab {
        attrs.push(Attr::Other("target".to_string(), "_blank".to_string()));
    }
    build_element(doc, "a", attrs, vec![ChildSpec::Text(label.to_string())])
}

#[cfg(test)]
mod tests {
    use super::{build_card, build_element, build_navigation_bar, ChildSpec};
    use crate::model::card::{CardRecord, Category};
    use crate::model::content::ContentBlock;
    use crate::view::dom::{Attr, Document};

    fn minimal_record() -> CardRecord {
        CardRecord {
            category: Category::Formation,
            identifier: "formation9".to_string(),
            title: "Formation test".to_string(),
            body_identifier: "bodyFormation9".to_string(),
            style_classes: vec!["ul".to_string()],
            body: vec![
                ContentBlock::Level {
                    value: "Bac +5".to_string(),
                },
                ContentBlock::Rule,
            ],
        }
    }

    #[test]
    fn build_element_returns_unattached_node() {
        let mut doc = Document::new();
        let node = build_element(
            &mut doc,
            "div",
            vec![Attr::Id("header".to_string())],
            vec![ChildSpec::from("Curriculum Vitae")],
        );
        // Not reachable from the root until a caller appends it.
        assert_eq!(doc.get_element_by_id("header"), None);
        assert_eq!(doc.text_content(node), "Curriculum Vitae");
    }

    #[test]
    fn nested_child_sequences_flatten_in_order() {
        let mut doc = Document::new();
        let inner = doc.create_element("span");
        doc.append_text(inner, "b");
        let node = build_element(
            &mut doc,
            "div",
            Vec::new(),
            vec![ChildSpec::Sequence(vec![
                ChildSpec::from("a"),
                ChildSpec::Node(inner),
                ChildSpec::from("c"),
            ])],
        );
        assert_eq!(doc.text_content(node), "abc");
    }

    #[test]
    fn card_carries_category_class_and_body_container() {
        let mut doc = Document::new();
        let card = build_card(&mut doc, &minimal_record());

        assert!(doc.has_class(card, "card"));
        assert!(doc.has_class(card, "formation"));
        assert!(doc.has_class(card, "ul"));
        assert_eq!(doc.attribute(card, "id"), Some("formation9"));

        let body = doc.child_elements(card)[0];
        assert!(doc.has_class(body, "body"));
        assert_eq!(doc.attribute(body, "id"), Some("bodyFormation9"));
        assert_eq!(doc.child_elements(body).len(), 2);
    }

    #[test]
    #[should_panic(expected = "invalid card record")]
    fn card_with_empty_title_panics() {
        let mut doc = Document::new();
        let mut record = minimal_record();
        record.title = String::new();
        build_card(&mut doc, &record);
    }

    #[test]
    fn navigation_bar_gates_identity_entry() {
        let mut doc = Document::new();
        let root = doc.root();
        build_navigation_bar(&mut doc, root, false);

        let list = doc.get_element_by_id("navbarItems").unwrap();
        let tags: Vec<&str> = doc
            .child_elements(list)
            .into_iter()
            .map(|entry| doc.data(entry, "class").unwrap())
            .collect();
        assert_eq!(tags, ["professional", "formation", "skills", "project"]);
    }
}
