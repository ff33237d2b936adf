//! CLI smoke entry point.
//!
//! # Responsibility
//! - Mount the builtin page headlessly and print deterministic facts
//!   about the result.
//! - Render the page HTML on demand for quick visual checks.

use vitae_core::view::html;
use vitae_core::{host_document, Catalog, Category, Page};

fn main() {
    let mut query = String::new();
    let mut emit_html = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--html" => emit_html = true,
            other => query = other.to_string(),
        }
    }

    let mut doc = host_document();
    let catalog = Catalog::builtin();
    let page = match Page::mount(&mut doc, &catalog, &query) {
        Ok(page) => page,
        Err(err) => {
            eprintln!("vitae: {err}");
            std::process::exit(1);
        }
    };

    println!("vitae_core version={}", vitae_core::core_version());
    let state = page.controller().state();
    println!("unlocked={} active={}", state.unlocked, state.active_category);
    println!(
        "cards={} nav_entries={}",
        page.controller().cards().len(),
        page.controller().nav_entries().len()
    );
    for category in [Category::Professional, Category::Formation, Category::Project] {
        let summary = page
            .controller()
            .navigation_entry(&doc, category)
            .and_then(|entry| doc.attribute(entry, "title"))
            .unwrap_or("-");
        println!("summary {category}={summary}");
    }

    if emit_html {
        println!("{}", html::render(&doc, doc.root()));
    }
}
