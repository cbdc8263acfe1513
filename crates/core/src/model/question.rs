use serde::{Deserialize, Serialize};
use std::fmt;

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

/// Three-level difficulty rating attached to every question by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Capitalized label for display ("Easy", "Medium", "Hard").
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Lowercase class suffix used for difficulty-specific styling.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single multiple-choice question as fetched for a session.
///
/// All text fields hold decoded text; HTML entities coming from the backend
/// are resolved at the API boundary, so display and answer comparison always
/// operate on the same representation. Option order is fixed at fetch time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    category: String,
    difficulty: Difficulty,
    text: String,
    options: Vec<String>,
}

impl Question {
    #[must_use]
    pub fn new(
        category: impl Into<String>,
        difficulty: Difficulty,
        text: impl Into<String>,
        options: Vec<String>,
    ) -> Self {
        Self {
            category: category.into(),
            difficulty,
            text: text.into(),
            options,
        }
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// The option at `index`, or `None` when out of range.
    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }
}
