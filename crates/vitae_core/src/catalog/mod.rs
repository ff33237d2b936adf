//! Builtin résumé content tables.
//!
//! # Responsibility
//! - Ship the five ordered card collections the page renders.
//! - Keep chronological collections (experience, formation) oldest-first;
//!   display order is the renderer's concern.
//!
//! # Invariants
//! - Every record passes `CardRecord::validate`.
//! - Identifiers follow the page's historical numbering, gaps included.

use crate::model::card::{CardRecord, Category};
use crate::model::content::ContentBlock;

mod formation;
mod identity;
mod professional;
mod project;
mod skills;

/// The five ordered card collections supplied to the view builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub identity: Vec<CardRecord>,
    pub professional: Vec<CardRecord>,
    pub formation: Vec<CardRecord>,
    pub skills: Vec<CardRecord>,
    pub project: Vec<CardRecord>,
}

impl Catalog {
    /// The résumé content shipped with the page.
    pub fn builtin() -> Self {
        Self {
            identity: identity::cards(),
            professional: professional::cards(),
            formation: formation::cards(),
            skills: skills::cards(),
            project: project::cards(),
        }
    }

    /// Every record, in build order.
    pub fn iter(&self) -> impl Iterator<Item = &CardRecord> {
        self.identity
            .iter()
            .chain(&self.professional)
            .chain(&self.formation)
            .chain(&self.skills)
            .chain(&self.project)
    }
}

fn record(
    category: Category,
    identifier: &str,
    title: &str,
    body_identifier: &str,
    style_classes: &[&str],
    body: Vec<ContentBlock>,
) -> CardRecord {
    CardRecord {
        category,
        identifier: identifier.to_string(),
        title: title.to_string(),
        body_identifier: body_identifier.to_string(),
        style_classes: style_classes.iter().map(|class| class.to_string()).collect(),
        body,
    }
}

fn text(body: &str) -> ContentBlock {
    ContentBlock::Text {
        body: body.to_string(),
        note: None,
    }
}

fn annotated(body: &str, note: &str) -> ContentBlock {
    ContentBlock::Text {
        body: body.to_string(),
        note: Some(note.to_string()),
    }
}

fn labeled(role: &str, body: &str) -> ContentBlock {
    ContentBlock::Labeled {
        role: role.to_string(),
        body: body.to_string(),
    }
}

fn link(role: Option<&str>, label: &str, href: &str, new_tab: bool) -> ContentBlock {
    ContentBlock::Link {
        role: role.map(|value| value.to_string()),
        label: label.to_string(),
        href: href.to_string(),
        new_tab,
    }
}

fn list(role: &str, items: &[&str]) -> ContentBlock {
    ContentBlock::List {
        role: role.to_string(),
        items: items.iter().map(|item| item.to_string()).collect(),
    }
}

fn logo_image(src: &str) -> ContentBlock {
    ContentBlock::Logo {
        image: Some(src.to_string()),
        caption: None,
    }
}

fn logo_caption(caption: &str) -> ContentBlock {
    ContentBlock::Logo {
        image: None,
        caption: Some(caption.to_string()),
    }
}

fn period(text: &str, months: Option<u32>) -> ContentBlock {
    ContentBlock::Period {
        text: text.to_string(),
        months,
    }
}

fn level(value: &str) -> ContentBlock {
    ContentBlock::Level {
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::Catalog;
    use crate::model::card::Category;
    use crate::model::content::ContentBlock;

    #[test]
    fn every_builtin_record_is_valid_and_categorized() {
        let catalog = Catalog::builtin();
        for record in catalog.iter() {
            record.validate().unwrap();
        }
        assert!(catalog
            .identity
            .iter()
            .all(|record| record.category == Category::Identity));
        assert!(catalog
            .project
            .iter()
            .all(|record| record.category == Category::Project));
    }

    #[test]
    fn collection_sizes_match_the_page() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.identity.len(), 4);
        assert_eq!(catalog.professional.len(), 6);
        assert_eq!(catalog.formation.len(), 3);
        assert_eq!(catalog.skills.len(), 7);
        assert_eq!(catalog.project.len(), 11);
    }

    #[test]
    fn professional_periods_carry_the_tenure_tags() {
        let catalog = Catalog::builtin();
        let months: Vec<u32> = catalog
            .professional
            .iter()
            .flat_map(|record| &record.body)
            .filter_map(|block| match block {
                ContentBlock::Period { months, .. } => *months,
                _ => None,
            })
            .collect();
        assert_eq!(months, [2, 4, 18, 15, 36, 2]);
    }

    #[test]
    fn identifiers_are_unique() {
        let catalog = Catalog::builtin();
        let mut seen = Vec::new();
        for record in catalog.iter() {
            assert!(
                !seen.contains(&record.identifier),
                "duplicate id {}",
                record.identifier
            );
            seen.push(record.identifier.clone());
        }
    }
}
