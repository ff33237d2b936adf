use vitae_core::view::builder::{
    build_card_group, build_element, build_loading_indicator, ChildSpec,
};
use vitae_core::{Attr, CardRecord, Category, ContentBlock, Document};

fn record(category: Category, identifier: &str) -> CardRecord {
    CardRecord {
        category,
        identifier: identifier.to_string(),
        title: format!("Titre {identifier}"),
        body_identifier: format!("body-{identifier}"),
        style_classes: Vec::new(),
        body: vec![ContentBlock::Text {
            body: "contenu".to_string(),
            note: None,
        }],
    }
}

#[test]
fn card_group_renders_one_card_per_record_in_input_order() {
    let mut doc = Document::new();
    let root = doc.root();
    let records = vec![
        record(Category::Professional, "professional1"),
        record(Category::Professional, "professional2"),
        record(Category::Professional, "professional3"),
    ];

    build_card_group(&mut doc, root, &records);

    let cards = doc.child_elements(root);
    assert_eq!(cards.len(), records.len());
    for (card, expected) in cards.iter().zip(&records) {
        assert_eq!(doc.attribute(*card, "id"), Some(expected.identifier.as_str()));
        assert!(doc.has_class(*card, "card"));
        assert!(doc.has_class(*card, expected.category.as_str()));
    }
}

#[test]
fn attribute_table_routes_each_key_to_its_effect() {
    let mut doc = Document::new();
    let node = build_element(
        &mut doc,
        "input",
        vec![
            Attr::classes(&["btn"]),
            Attr::Id("btnNavbar".to_string()),
            Attr::InputType("checkbox".to_string()),
            Attr::Checked(true),
            Attr::Data("class".to_string(), "skills".to_string()),
            Attr::Other("aria-hidden".to_string(), "true".to_string()),
        ],
        Vec::new(),
    );

    assert_eq!(doc.element(node).classes(), ["btn"]);
    assert_eq!(doc.attribute(node, "id"), Some("btnNavbar"));
    assert_eq!(doc.attribute(node, "type"), Some("checkbox"));
    assert!(doc.checked(node));
    assert_eq!(doc.data(node, "class"), Some("skills"));
    assert_eq!(doc.attribute(node, "aria-hidden"), Some("true"));
}

#[test]
fn children_accept_text_nodes_and_sequences() {
    let mut doc = Document::new();
    let inner = build_element(&mut doc, "span", Vec::new(), vec![ChildSpec::from("deux")]);
    let node = build_element(
        &mut doc,
        "div",
        Vec::new(),
        vec![
            ChildSpec::from("un "),
            ChildSpec::Node(inner),
            ChildSpec::Sequence(vec![ChildSpec::from(" trois")]),
        ],
    );
    assert_eq!(doc.text_content(node), "un deux trois");
}

#[test]
fn second_loading_indicator_duplicates_the_identifier() {
    let mut doc = Document::new();
    let root = doc.root();
    let first = build_loading_indicator(&mut doc, root);
    let second = build_loading_indicator(&mut doc, root);

    assert_ne!(first, second);
    assert_eq!(doc.attribute(second, "id"), Some("loading"));
    // Lookup resolves to the first occurrence; the duplicate is unguarded.
    assert_eq!(doc.get_element_by_id("loading"), Some(first));
}
