use vitae_core::service::summary::{
    derive_accessible_projects, derive_formation_label, derive_tenure_months,
};
use vitae_core::{host_document, Catalog, CardRecord, Category, ContentBlock, Document, Page};

fn entry_title(doc: &Document, page: &Page, category: Category) -> String {
    let entry = page.controller().navigation_entry(doc, category).unwrap();
    doc.attribute(entry, "title").unwrap_or_default().to_string()
}

#[test]
fn builtin_tenure_sums_all_experience_periods() {
    let mut doc = host_document();
    let page = Page::mount(&mut doc, &Catalog::builtin(), "").unwrap();

    // 2 + 4 + 18 + 15 + 36 + 2 months across the six experiences.
    assert_eq!(derive_tenure_months(&doc), 77);
    assert_eq!(
        entry_title(&doc, &page, Category::Professional),
        "6 ans & 5 mois"
    );
}

#[test]
fn builtin_formation_label_keeps_highest_bac_then_others() {
    let mut doc = host_document();
    let page = Page::mount(&mut doc, &Catalog::builtin(), "").unwrap();

    assert_eq!(derive_formation_label(&doc), "BAC +3 / RNCP 6");
    assert_eq!(
        entry_title(&doc, &page, Category::Formation),
        "BAC +3 / RNCP 6"
    );
}

#[test]
fn builtin_accessible_projects_counts_access_tagged_children() {
    let mut doc = host_document();
    let page = Page::mount(&mut doc, &Catalog::builtin(), "").unwrap();

    assert_eq!(derive_accessible_projects(&doc), 5);
    assert_eq!(
        entry_title(&doc, &page, Category::Project),
        "5 projets accessibles"
    );
}

#[test]
fn access_count_only_sees_access_tagged_direct_children() {
    let project = |n: usize, accessible: bool| {
        let mut body = vec![ContentBlock::Link {
            role: Some("repository".to_string()),
            label: "Repository".to_string(),
            href: format!("https://example.com/repo{n}"),
            new_tab: true,
        }];
        if accessible {
            body.push(ContentBlock::Link {
                role: Some("access".to_string()),
                label: "Access".to_string(),
                href: format!("https://example.com/demo{n}"),
                new_tab: true,
            });
        }
        CardRecord {
            category: Category::Project,
            identifier: format!("project{n}"),
            title: format!("Projet {n}"),
            body_identifier: format!("bodyProject{n}"),
            style_classes: Vec::new(),
            body,
        }
    };
    let catalog = Catalog {
        identity: Vec::new(),
        professional: Vec::new(),
        formation: Vec::new(),
        skills: Vec::new(),
        project: vec![project(1, true), project(2, false), project(3, true)],
    };

    let mut doc = host_document();
    let page = Page::mount(&mut doc, &catalog, "").unwrap();
    assert_eq!(derive_accessible_projects(&doc), 2);
    assert_eq!(
        entry_title(&doc, &page, Category::Project),
        "2 projets accessibles"
    );
}

#[test]
fn empty_collections_fall_back_to_zero_defaults() {
    let catalog = Catalog {
        identity: Vec::new(),
        professional: Vec::new(),
        formation: Vec::new(),
        skills: Vec::new(),
        project: Vec::new(),
    };
    let mut doc = host_document();
    let page = Page::mount(&mut doc, &catalog, "").unwrap();

    assert_eq!(derive_tenure_months(&doc), 0);
    assert_eq!(derive_formation_label(&doc), "");
    assert_eq!(derive_accessible_projects(&doc), 0);
    assert_eq!(
        entry_title(&doc, &page, Category::Professional),
        "0 an & 0 mois"
    );
    assert_eq!(
        entry_title(&doc, &page, Category::Project),
        "0 projets accessibles"
    );
}
