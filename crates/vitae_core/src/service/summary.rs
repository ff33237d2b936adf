//! One-shot summary derivation onto navigation tooltips.
//!
//! # Responsibility
//! - Aggregate the rendered card tree into three human-readable labels:
//!   professional tenure, highest formation level, accessible projects.
//! - Write each label into the matching navigation entry's tooltip text.
//!
//! # Invariants
//! - Runs once after initial render; card content never changes after
//!   load, so re-deriving would be redundant.
//! - A derivation with no matching elements resolves to its zero/empty
//!   default, never an error.
//! - The rendered tree is deliberately the data source here, matching the
//!   page it models; the catalog is not consulted.

use crate::model::card::Category;
use crate::view::builder::NAV_LIST_ID;
use crate::view::dom::{Document, NodeId};
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;

static MONTHS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\s*mois").expect("valid months regex"));
static BAC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^BAC \+(\d+)").expect("valid level regex"));

/// Derives all three summaries and writes them onto the navigation
/// entries' `title` attributes. Entries absent from the tree are skipped.
pub fn annotate_navigation(doc: &mut Document) {
    let months = derive_tenure_months(doc);
    let tenure = format_tenure(months);
    let formation = derive_formation_label(doc);
    let projects = derive_accessible_projects(doc);

    set_entry_title(doc, Category::Professional, &tenure);
    set_entry_title(doc, Category::Formation, &formation);
    set_entry_title(doc, Category::Project, &format_accessible_projects(projects));

    info!(
        "event=summary_derived module=summary status=ok months={months} formation=\"{formation}\" accessible_projects={projects}"
    );
}

/// Sum of the numeric months tags on every rendered professional period.
pub fn derive_tenure_months(doc: &Document) -> u32 {
    category_cards(doc, Category::Professional)
        .into_iter()
        .flat_map(|card| doc.descendants(card))
        .filter(|node| doc.attribute(*node, "role") == Some("periode"))
        .filter_map(|node| doc.data(node, "diff"))
        .filter_map(|diff| MONTHS_RE.captures(diff))
        .filter_map(|caps| caps[1].parse::<u32>().ok())
        .sum()
}

/// `"{Y} an(s) & {M} mois"`; "an" is pluralized only above one year, so a
/// sum below twelve months still reads `0 an`.
pub fn format_tenure(total_months: u32) -> String {
    let years = total_months / 12;
    let months = total_months % 12;
    let plural = if years > 1 { "s" } else { "" };
    format!("{years} an{plural} & {months} mois")
}

/// Highest formation label from the rendered level lines.
pub fn derive_formation_label(doc: &Document) -> String {
    let levels: Vec<String> = category_cards(doc, Category::Formation)
        .into_iter()
        .flat_map(|card| doc.descendants(card))
        .filter(|node| doc.attribute(*node, "role") == Some("level"))
        .map(|node| doc.text_content(node).trim().to_uppercase())
        .collect();
    highest_formation_label(&levels)
}

/// Selection rule over upper-cased level strings: the `BAC +<n>` entry
/// with the highest `n` (first occurrence wins ties), followed by each
/// distinct non-`BAC +` label in first-occurrence order, joined with
/// `" / "`. Empty parts are omitted entirely.
pub fn highest_formation_label(levels: &[String]) -> String {
    let mut bac: Vec<(u32, &str)> = levels
        .iter()
        .filter_map(|level| {
            BAC_RE
                .captures(level)
                .and_then(|caps| caps[1].parse::<u32>().ok())
                .map(|grade| (grade, level.as_str()))
        })
        .collect();
    // Stable sort: among equal maxima the earliest occurrence stays first.
    bac.sort_by(|a, b| b.0.cmp(&a.0));

    let mut parts: Vec<String> = Vec::new();
    if let Some((_, selected)) = bac.first() {
        parts.push((*selected).to_string());
    }
    for level in levels {
        if BAC_RE.is_match(level) {
            continue;
        }
        if parts.iter().any(|part| part == level) {
            continue;
        }
        parts.push(level.clone());
    }
    parts.join(" / ")
}

/// Count of direct `access`-tagged children across project card bodies.
pub fn derive_accessible_projects(doc: &Document) -> u32 {
    category_cards(doc, Category::Project)
        .into_iter()
        .filter_map(|card| {
            doc.descendants(card)
                .into_iter()
                .find(|node| doc.has_class(*node, "body"))
        })
        .flat_map(|body| doc.child_elements(body))
        .filter(|child| doc.attribute(*child, "role") == Some("access"))
        .count() as u32
}

pub fn format_accessible_projects(count: u32) -> String {
    format!("{count} projets accessibles")
}

fn category_cards(doc: &Document, category: Category) -> Vec<NodeId> {
    doc.descendants(doc.root())
        .into_iter()
        .filter(|id| doc.has_class(*id, "card") && doc.has_class(*id, category.as_str()))
        .collect()
}

fn set_entry_title(doc: &mut Document, category: Category, title: &str) {
    let entry = doc.get_element_by_id(NAV_LIST_ID).and_then(|list| {
        doc.child_elements(list)
            .into_iter()
            .find(|entry| doc.data(*entry, "class") == Some(category.as_str()))
    });
    if let Some(entry) = entry {
        doc.set_attribute(entry, "title", title);
    }
}
