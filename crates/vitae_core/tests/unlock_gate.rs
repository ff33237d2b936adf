use vitae_core::{encode_token, host_document, Catalog, Category, Page, ACCESS_PARAM};

const SECRET: &str = "LucasKuntz57070Metz";

fn unlock_query() -> String {
    format!("{ACCESS_PARAM}={SECRET}")
}

#[test]
fn secret_round_trip_unlocks_the_page() {
    assert_eq!(encode_token(SECRET), "THVjYXNLdW50ejU3MDcwTWV0eg==");
    assert!(vitae_core::unlock_from_query(&unlock_query()));
    assert!(!vitae_core::unlock_from_query(&format!("{ACCESS_PARAM}=autre")));
    assert!(!vitae_core::unlock_from_query(""));
    assert!(!vitae_core::unlock_from_query(&format!(
        "{}&page=2",
        unlock_query()
    )));
}

#[test]
fn unlocked_page_renders_identity_cards_and_entry() {
    let mut doc = host_document();
    let page = Page::mount(&mut doc, &Catalog::builtin(), &unlock_query()).unwrap();

    let state = page.controller().state();
    assert!(state.unlocked);
    assert_eq!(state.active_category, Category::Identity);

    assert!(page
        .controller()
        .navigation_entry(&doc, Category::Identity)
        .is_some());
    let identity_cards: Vec<_> = page
        .controller()
        .cards()
        .iter()
        .filter(|card| doc.has_class(**card, "identity"))
        .collect();
    assert_eq!(identity_cards.len(), 4);
    assert!(doc.get_element_by_id("identity1").is_some());
}

#[test]
fn locked_page_excludes_identity_everywhere() {
    let mut doc = host_document();
    let mut page = Page::mount(&mut doc, &Catalog::builtin(), "").unwrap();

    let state = page.controller().state();
    assert!(!state.unlocked);
    assert_eq!(state.active_category, Category::Professional);

    assert!(page
        .controller()
        .navigation_entry(&doc, Category::Identity)
        .is_none());
    assert!(doc.get_element_by_id("identity1").is_none());
    assert!(page
        .controller()
        .cards()
        .iter()
        .all(|card| !doc.has_class(*card, "identity")));

    // Clicking a category without a rendered entry is a no-op.
    assert!(!page.click(&mut doc, Category::Identity));
    assert_eq!(page.controller().active_category(), Category::Professional);
}
