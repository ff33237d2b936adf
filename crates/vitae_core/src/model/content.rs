//! Typed content blocks for card bodies.
//!
//! # Responsibility
//! - Describe card body content declaratively, one variant per block shape.
//! - Carry the tags the summary derivations read back from the rendered
//!   tree (period months, formation level, access role).
//!
//! # Invariants
//! - Bodies hold no raw markup; rendering is a closed mapping over these
//!   variants.

use serde::{Deserialize, Serialize};

/// One anchor inside a link group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkTarget {
    pub label: String,
    pub href: String,
}

impl LinkTarget {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// One block of card body content.
///
/// The inventory covers every body shape in the builtin catalog: identity
/// notes, experience periods, formation levels, skill lists and project
/// links. Renderers map each variant to a fixed element shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Plain text line, optionally carrying a hover annotation rendered as
    /// a `data-after` entry.
    Text {
        body: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    /// Role-tagged text line (`titre`, `label`, `location`, `internship`,
    /// `description`, ...).
    Labeled { role: String, body: String },
    /// Single anchor wrapped in a line container. `role` tags the wrapper
    /// (`repository`, `access`); `new_tab` asks the host to open the target
    /// separately.
    Link {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        role: Option<String>,
        label: String,
        href: String,
        #[serde(default, skip_serializing_if = "std::ops::Not::not")]
        new_tab: bool,
    },
    /// Bullet list of anchors under one role tag.
    LinkGroup { role: String, links: Vec<LinkTarget> },
    /// Bullet list of text items under one role tag.
    List { role: String, items: Vec<String> },
    /// Framed picture.
    Image { src: String },
    /// Employer or school logo; falls back to a caption when no image
    /// exists for the entry.
    Logo {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
    /// Work or study period. `months` is the numeric tenure tag summed by
    /// the professional summary; formation periods carry none.
    Period {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        months: Option<u32>,
    },
    /// Diploma level line (`Bac +3`, `RNCP 6`, ...).
    Level { value: String },
    /// Horizontal separator between body sections.
    Rule,
}
