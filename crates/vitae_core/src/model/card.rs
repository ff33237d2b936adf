//! Card record domain model.
//!
//! # Responsibility
//! - Define the category enum the page is filtered by.
//! - Define the immutable card record and its fail-fast validation.
//!
//! # Invariants
//! - `identifier` and `body_identifier` are unique within one document.
//! - A record never changes after construction; it is only rendered.

use crate::model::content::ContentBlock;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Dimension the cards are filtered by.
///
/// The identity category is gated behind the access token and may be absent
/// from a rendered document entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Identity,
    Professional,
    Formation,
    Skills,
    Project,
}

impl Category {
    /// Every category, in navigation order.
    pub const ALL: [Category; 5] = [
        Category::Identity,
        Category::Professional,
        Category::Formation,
        Category::Skills,
        Category::Project,
    ];

    /// Lowercase tag used for filter classes and `data-class` markers.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Identity => "identity",
            Category::Professional => "professional",
            Category::Formation => "formation",
            Category::Skills => "skills",
            Category::Project => "project",
        }
    }

    /// Caption shown on the navigation entry.
    pub fn label(self) -> &'static str {
        match self {
            Category::Identity => "Identité",
            Category::Professional => "Expériences Pro",
            Category::Formation => "Formations",
            Category::Skills => "Compétences",
            Category::Project => "Projets",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for category tags read back from rendered markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError {
    pub tag: String,
}

impl Display for CategoryParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown category tag: `{}`", self.tag)
    }
}

impl Error for CategoryParseError {}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "identity" => Ok(Category::Identity),
            "professional" => Ok(Category::Professional),
            "formation" => Ok(Category::Formation),
            "skills" => Ok(Category::Skills),
            "project" => Ok(Category::Project),
            other => Err(CategoryParseError {
                tag: other.to_string(),
            }),
        }
    }
}

/// Validation error for malformed static card data.
///
/// A violation is a bug in the configuration tables, not a runtime
/// condition, so construction paths fail fast on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardValidationError {
    EmptyIdentifier,
    EmptyTitle { identifier: String },
    EmptyBodyIdentifier { identifier: String },
}

impl Display for CardValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyIdentifier => write!(f, "card record has an empty identifier"),
            Self::EmptyTitle { identifier } => {
                write!(f, "card `{identifier}` has an empty title")
            }
            Self::EmptyBodyIdentifier { identifier } => {
                write!(f, "card `{identifier}` has an empty body identifier")
            }
        }
    }
}

impl Error for CardValidationError {}

/// One immutable résumé entry.
///
/// Defined once as static configuration and only ever rendered; the view
/// layer never writes back into a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub category: Category,
    /// Document id of the card container, unique within the page.
    pub identifier: String,
    pub title: String,
    /// Document id of the nested body container.
    pub body_identifier: String,
    /// Extra presentation classes carried next to the category class.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub style_classes: Vec<String>,
    /// Ordered typed content blocks; the body holds no raw markup.
    pub body: Vec<ContentBlock>,
}

impl CardRecord {
    /// Checks the required fields the renderer depends on.
    ///
    /// # Errors
    /// - Returns the first violated field, with the card identifier where
    ///   one exists for context.
    pub fn validate(&self) -> Result<(), CardValidationError> {
        if self.identifier.trim().is_empty() {
            return Err(CardValidationError::EmptyIdentifier);
        }
        if self.title.trim().is_empty() {
            return Err(CardValidationError::EmptyTitle {
                identifier: self.identifier.clone(),
            });
        }
        if self.body_identifier.trim().is_empty() {
            return Err(CardValidationError::EmptyBodyIdentifier {
                identifier: self.identifier.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{CardRecord, CardValidationError, Category};

    fn record(identifier: &str, title: &str, body_identifier: &str) -> CardRecord {
        CardRecord {
            category: Category::Skills,
            identifier: identifier.to_string(),
            title: title.to_string(),
            body_identifier: body_identifier.to_string(),
            style_classes: Vec::new(),
            body: Vec::new(),
        }
    }

    #[test]
    fn category_tags_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = "sidebar".parse::<Category>().unwrap_err();
        assert_eq!(err.tag, "sidebar");
    }

    #[test]
    fn validate_reports_first_missing_field() {
        assert_eq!(
            record(" ", "t", "b").validate(),
            Err(CardValidationError::EmptyIdentifier)
        );
        assert_eq!(
            record("skills1", "", "b").validate(),
            Err(CardValidationError::EmptyTitle {
                identifier: "skills1".to_string()
            })
        );
        assert_eq!(
            record("skills1", "t", "").validate(),
            Err(CardValidationError::EmptyBodyIdentifier {
                identifier: "skills1".to_string()
            })
        );
        assert_eq!(record("skills1", "t", "bodySkills1").validate(), Ok(()));
    }

    #[test]
    fn category_serializes_snake_case() {
        let json = serde_json::to_value(Category::Professional).unwrap();
        assert_eq!(json, "professional");
    }
}
