use vitae_core::view::html;
use vitae_core::{
    host_document, Catalog, CardRecord, Category, ContentBlock, Document, Page, PageError,
};

#[test]
fn missing_mount_aborts_with_diagnostic() {
    let mut doc = Document::new();
    let err = Page::mount(&mut doc, &Catalog::builtin(), "").unwrap_err();
    match &err {
        PageError::MissingMount { id } => assert_eq!(id, "content"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("#content"));
    // Nothing was rendered.
    assert!(doc.child_elements(doc.root()).is_empty());
}

#[test]
fn invalid_catalog_record_stops_assembly_before_any_insertion() {
    let mut catalog = Catalog::builtin();
    catalog.skills.push(CardRecord {
        category: Category::Skills,
        identifier: "skills8".to_string(),
        title: String::new(),
        body_identifier: "bodySkills8".to_string(),
        style_classes: Vec::new(),
        body: vec![ContentBlock::Rule],
    });

    let mut doc = host_document();
    let err = Page::mount(&mut doc, &catalog, "").unwrap_err();
    assert!(matches!(err, PageError::InvalidCard(_)));
    assert!(err.to_string().contains("skills8"));

    let mount = doc.get_element_by_id("content").unwrap();
    assert!(doc.child_elements(mount).is_empty());
}

#[test]
fn assembly_inserts_loading_navbar_then_cards() {
    let mut doc = host_document();
    let page = Page::mount(&mut doc, &Catalog::builtin(), "").unwrap();

    // The loading indicator lives beside the mount, on its parent.
    let shell_children = doc.child_elements(doc.root());
    assert_eq!(shell_children.len(), 2);
    assert_eq!(shell_children[0], page.mount_node());
    assert_eq!(shell_children[1], page.loading());

    let mount_children = doc.child_elements(page.mount_node());
    assert_eq!(mount_children, vec![page.navbar(), page.cards_container()]);

    // The busy marker was toggled on and back off around assembly.
    assert!(doc.has_class(page.loading(), "loading"));
    assert!(!doc.has_class(page.loading(), "load"));
}

#[test]
fn rendered_page_serializes_to_stable_html() {
    let mut doc = host_document();
    Page::mount(&mut doc, &Catalog::builtin(), "").unwrap();

    let markup = html::render(&doc, doc.root());
    assert!(markup.contains("<h1 id=\"header\" class=\"header\">Curriculum Vitae</h1>"));
    assert!(markup.contains("data-class=\"professional\""));
    assert!(markup.contains("title=\"6 ans &amp; 5 mois\""));
    assert!(markup.contains("id=\"cards\""));
    // Locked page: no identity anywhere in the markup.
    assert!(!markup.contains("identity"));
}
