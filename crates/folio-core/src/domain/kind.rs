use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The owned resource types served by the application.
///
/// Both kinds share one schema; the kind decides the URL segment, the
/// human-readable names used in messages and page titles, and the value
/// stored in the `kind` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Blog,
    Contact,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 2] = [ResourceKind::Blog, ResourceKind::Contact];

    /// Lowercase singular noun, also the persisted value (`blog`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Blog => "blog",
            ResourceKind::Contact => "contact",
        }
    }

    /// Collection segment used in URLs (`blogs`).
    pub fn collection(&self) -> &'static str {
        match self {
            ResourceKind::Blog => "blogs",
            ResourceKind::Contact => "contacts",
        }
    }

    /// Capitalized singular (`Blog`).
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Blog => "Blog",
            ResourceKind::Contact => "Contact",
        }
    }

    /// Capitalized plural (`Blogs`).
    pub fn plural_label(&self) -> &'static str {
        match self {
            ResourceKind::Blog => "Blogs",
            ResourceKind::Contact => "Contacts",
        }
    }

    /// Look a kind up by its collection segment.
    pub fn from_collection(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.collection() == segment)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown resource kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for ResourceKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_persisted_value() {
        assert_eq!("blog".parse::<ResourceKind>(), Ok(ResourceKind::Blog));
        assert_eq!("contact".parse::<ResourceKind>(), Ok(ResourceKind::Contact));
        assert!("blogs".parse::<ResourceKind>().is_err());
    }

    #[test]
    fn test_from_collection() {
        assert_eq!(
            ResourceKind::from_collection("contacts"),
            Some(ResourceKind::Contact)
        );
        assert_eq!(ResourceKind::from_collection("contact"), None);
    }
}
