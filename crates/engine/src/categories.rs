//! The fixed set of expense categories.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::EngineError;

/// Category an expense is filed under.
///
/// Matching is case-insensitive; the stored form is always the lowercase
/// string returned by [`Category::as_str`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Entertainment,
    Utilities,
    Health,
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Self::Food,
        Self::Transport,
        Self::Shopping,
        Self::Entertainment,
        Self::Utilities,
        Self::Health,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Shopping => "shopping",
            Self::Entertainment => "entertainment",
            Self::Utilities => "utilities",
            Self::Health => "health",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Category {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "transport" => Ok(Self::Transport),
            "shopping" => Ok(Self::Shopping),
            "entertainment" => Ok(Self::Entertainment),
            "utilities" => Ok(Self::Utilities),
            "health" => Ok(Self::Health),
            "other" => Ok(Self::Other),
            other => Err(EngineError::UnknownCategory(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_case_insensitively() {
        assert_eq!(Category::try_from("food").unwrap(), Category::Food);
        assert_eq!(Category::try_from("FOOD").unwrap(), Category::Food);
        assert_eq!(Category::try_from("Transport").unwrap(), Category::Transport);
    }

    #[test]
    fn rejects_unknown_values() {
        assert!(Category::try_from("groceries").is_err());
        assert!(Category::try_from("").is_err());
    }

    #[test]
    fn round_trips_through_as_str() {
        for category in Category::ALL {
            assert_eq!(Category::try_from(category.as_str()).unwrap(), category);
        }
    }
}
