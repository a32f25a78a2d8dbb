use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::item::TodoItem;

/// Which items the list shows.
///
/// Filtering is display-only: it never changes stored items.
/// Persisted as `"All"`, `"Active"` or `"Completed"`; any other string reads
/// back as [`Filter::All`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Filter {
    /// Every item
    #[default]
    All,
    /// Items not yet completed
    Active,
    /// Completed items only
    Completed,
}

impl Filter {
    /// All filters in display order.
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    /// Returns true if `item` passes this filter.
    pub fn matches(self, item: &TodoItem) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !item.completed,
            Filter::Completed => item.completed,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Filter::All => Filter::Active,
            Filter::Active => Filter::Completed,
            Filter::Completed => Filter::All,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Filter::All => Filter::Completed,
            Filter::Active => Filter::All,
            Filter::Completed => Filter::Active,
        }
    }

    /// Returns the label used both on screen and in snapshots.
    pub fn title(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Filter::All => 0,
            Filter::Active => 1,
            Filter::Completed => 2,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Error returned when parsing an unknown filter name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown filter: {0} (expected all, active or completed)")]
pub struct ParseFilterError(pub String);

impl FromStr for Filter {
    type Err = ParseFilterError;

    /// Parses a filter name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "active" => Ok(Filter::Active),
            "completed" => Ok(Filter::Completed),
            _ => Err(ParseFilterError(s.to_string())),
        }
    }
}

impl From<String> for Filter {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Active" => Filter::Active,
            "Completed" => Filter::Completed,
            _ => Filter::All,
        }
    }
}

impl From<Filter> for String {
    fn from(filter: Filter) -> Self {
        filter.title().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::TodoId;

    #[test]
    fn test_matches() {
        let mut item = TodoItem::new(TodoId::new(1), "x");
        assert!(Filter::All.matches(&item));
        assert!(Filter::Active.matches(&item));
        assert!(!Filter::Completed.matches(&item));

        item.completed = true;
        assert!(Filter::All.matches(&item));
        assert!(!Filter::Active.matches(&item));
        assert!(Filter::Completed.matches(&item));
    }

    #[test]
    fn test_cycle() {
        let mut filter = Filter::All;
        for _ in 0..3 {
            filter = filter.next();
        }
        assert_eq!(filter, Filter::All);
        assert_eq!(Filter::All.previous(), Filter::Completed);
    }

    #[test]
    fn test_unknown_string_reads_as_all() {
        let filter: Filter = serde_json::from_str(r#""Someday""#).unwrap();
        assert_eq!(filter, Filter::All);

        let filter: Filter = serde_json::from_str(r#""Completed""#).unwrap();
        assert_eq!(filter, Filter::Completed);
    }

    #[test]
    fn test_from_str_ignores_case() {
        assert_eq!("ACTIVE".parse::<Filter>().unwrap(), Filter::Active);
        assert!("done".parse::<Filter>().is_err());
    }
}
