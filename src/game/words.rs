//! Built-in Hebrew word list and grammatical categories

use std::fmt;

/// Grammatical number of a displayed word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Singular form ("יחיד")
    Singular,
    /// Plural form ("רבים")
    Plural,
}

impl Category {
    /// Both categories, in bucket order
    pub const ALL: [Category; 2] = [Category::Singular, Category::Plural];

    /// Hebrew label shown on the bucket
    pub fn label(self) -> &'static str {
        match self {
            Category::Singular => "יחיד",
            Category::Plural => "רבים",
        }
    }

    /// Map the bucket index reported by the UI (0 = singular, 1 = plural)
    ///
    /// Any other index means the word was released outside both buckets.
    pub fn from_bucket_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(Category::Singular),
            1 => Some(Category::Plural),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A noun in its singular and plural forms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordPair {
    /// Singular form
    pub singular: &'static str,
    /// Plural form
    pub plural: &'static str,
}

impl WordPair {
    const fn new(singular: &'static str, plural: &'static str) -> Self {
        Self { singular, plural }
    }

    /// The form of this noun for the given category
    pub fn form(&self, category: Category) -> &'static str {
        match category {
            Category::Singular => self.singular,
            Category::Plural => self.plural,
        }
    }
}

/// The fixed word list every round samples from
pub const WORD_PAIRS: [WordPair; 15] = [
    WordPair::new("כלב", "כלבים"),
    WordPair::new("חתול", "חתולים"),
    WordPair::new("ספר", "ספרים"),
    WordPair::new("עפרון", "עפרונות"),
    WordPair::new("כדור", "כדורים"),
    WordPair::new("פרח", "פרחים"),
    WordPair::new("עץ", "עצים"),
    WordPair::new("ילד", "ילדים"),
    WordPair::new("ילדה", "ילדות"),
    WordPair::new("כוכב", "כוכבים"),
    WordPair::new("דג", "דגים"),
    WordPair::new("ציפור", "ציפורים"),
    WordPair::new("בית", "בתים"),
    WordPair::new("שולחן", "שולחנות"),
    WordPair::new("כיסא", "כיסאות"),
];
