use serde::{Serialize, Deserialize};

use crate::utils::error::{BoxResult, RustocError};

/// A single flat headline record, in document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headline {
    /// Heading level (h1 = 1, h2 = 2, etc.)
    pub level: usize,
    /// Display text of the heading
    pub text: String,
    /// Anchor target in the document; may be empty
    #[serde(default)]
    pub anchor: String,
}

impl Headline {
    pub fn new(level: usize, text: impl Into<String>, anchor: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            anchor: anchor.into(),
        }
    }
}

/// Which list tag to emit for the generated outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    #[default]
    Unordered,
    Ordered,
}

impl ListType {
    /// Parse a list type from a config or attribute value.
    /// Anything that isn't recognizably "ordered" falls back to unordered.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "ordered" | "ol" => ListType::Ordered,
            _ => ListType::Unordered,
        }
    }

    /// Tag name used for list containers
    pub fn tag(&self) -> &'static str {
        match self {
            ListType::Unordered => "ul",
            ListType::Ordered => "ol",
        }
    }
}

/// Check a full headline sequence before any tree construction.
/// Rejects non-positive levels; nothing is built from a sequence that
/// fails here.
pub fn validate_headlines(headlines: &[Headline]) -> BoxResult<()> {
    for (index, headline) in headlines.iter().enumerate() {
        if headline.level == 0 {
            return Err(Box::new(RustocError::Validation(format!(
                "headline {} (\"{}\") has level 0; levels start at 1",
                index, headline.text
            ))));
        }
    }
    Ok(())
}
