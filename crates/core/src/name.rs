//! Validated item name.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Name of a stocked item.
///
/// Case-sensitive, arbitrary text, but never empty or whitespace-only.
/// The surrounding text is kept verbatim; only blank names are rejected.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct ItemName(String);

impl ItemName {
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("item name cannot be empty"));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<String> for ItemName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for ItemName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_names() {
        let name = ItemName::new("apple").unwrap();
        assert_eq!(name.as_str(), "apple");
    }

    #[test]
    fn accepts_interior_whitespace() {
        assert!(ItemName::new("green apple").is_ok());
    }

    #[test]
    fn rejects_empty_name() {
        assert_eq!(
            ItemName::new(""),
            Err(DomainError::validation("item name cannot be empty"))
        );
    }

    #[test]
    fn rejects_whitespace_only_name() {
        assert!(ItemName::new("   ").is_err());
    }

    #[test]
    fn names_are_case_sensitive() {
        let lower = ItemName::new("apple").unwrap();
        let upper = ItemName::new("Apple").unwrap();
        assert_ne!(lower, upper);
    }
}
