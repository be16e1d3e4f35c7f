//! The fixed set of headline categories.
//!
//! The remote service only understands these seven values, so the type is a
//! closed enum: there is no way to construct (and therefore no way to
//! request) a category outside the set.

use std::fmt;
use std::str::FromStr;

/// A topical headline filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    General,
    Business,
    Entertainment,
    Health,
    Science,
    Sports,
    Technology,
}

impl Category {
    /// All categories, in the order they appear in the selector.
    pub const ALL: [Category; 7] = [
        Category::General,
        Category::Business,
        Category::Entertainment,
        Category::Health,
        Category::Science,
        Category::Sports,
        Category::Technology,
    ];

    /// The lowercase identifier the remote service expects in the
    /// `category` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Business => "business",
            Category::Entertainment => "entertainment",
            Category::Health => "health",
            Category::Science => "science",
            Category::Sports => "sports",
            Category::Technology => "technology",
        }
    }

    /// Capitalised label shown in the selector tabs.
    pub fn label(self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Business => "Business",
            Category::Entertainment => "Entertainment",
            Category::Health => "Health",
            Category::Science => "Science",
            Category::Sports => "Sports",
            Category::Technology => "Technology",
        }
    }

    /// Position within [`Category::ALL`]; drives tab highlighting.
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|c| *c == self)
            .unwrap_or_default()
    }

    /// Category at `index`, if in range. Used for the 1–7 number keys.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The next category in selector order, wrapping at the end.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The previous category in selector order, wrapping at the start.
    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ();

    /// Case-insensitive parse of the service identifier (`"technology"`,
    /// `"Sports"`, …). Used for the optional CLI argument.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_general() {
        assert_eq!(Category::default(), Category::General);
    }

    #[test]
    fn all_has_seven_distinct_entries() {
        assert_eq!(Category::ALL.len(), 7);
        for (i, a) in Category::ALL.iter().enumerate() {
            for b in &Category::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn index_round_trips_through_from_index() {
        for cat in Category::ALL {
            assert_eq!(Category::from_index(cat.index()), Some(cat));
        }
        assert_eq!(Category::from_index(7), None);
    }

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(Category::Technology.next(), Category::General);
        assert_eq!(Category::General.prev(), Category::Technology);
        assert_eq!(Category::General.next(), Category::Business);
    }

    #[test]
    fn parses_service_identifiers() {
        assert_eq!("technology".parse(), Ok(Category::Technology));
        assert_eq!("Sports".parse(), Ok(Category::Sports));
        assert_eq!("GENERAL".parse(), Ok(Category::General));
        assert!("weather".parse::<Category>().is_err());
    }

    #[test]
    fn as_str_is_lowercase_of_label() {
        for cat in Category::ALL {
            assert_eq!(cat.as_str(), cat.label().to_lowercase());
        }
    }
}
