//! Explicit validation run before every resource write.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Unvalidated title/content as received from a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDraft {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl ResourceDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }
}

/// Title and content that passed [`validate`].
///
/// Only `validate` can build one, so a resource can never be created or
/// updated from fields that skipped validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidFields {
    title: String,
    content: String,
}

impl ValidFields {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub(crate) fn into_parts(self) -> (String, String) {
        (self.title, self.content)
    }
}

/// Trim and check a draft. An empty or whitespace-only title is rejected.
pub fn validate(draft: &ResourceDraft) -> Result<ValidFields, ValidationError> {
    let title = draft.title.as_deref().unwrap_or_default().trim();
    if title.is_empty() {
        return Err(ValidationError::RequiredField("title"));
    }

    let content = draft.content.as_deref().unwrap_or_default().trim();

    Ok(ValidFields {
        title: title.to_string(),
        content: content.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_title_and_content() {
        let fields = validate(&ResourceDraft::new("  Title  ", "\tbody\n")).unwrap();
        assert_eq!(fields.title(), "Title");
        assert_eq!(fields.content(), "body");
    }

    #[test]
    fn test_rejects_blank_titles() {
        for title in ["", "   ", "\n\t"] {
            let result = validate(&ResourceDraft::new(title, "content"));
            assert_eq!(result, Err(ValidationError::RequiredField("title")));
        }
    }

    #[test]
    fn test_rejects_missing_title() {
        let draft = ResourceDraft {
            title: None,
            content: Some("content".to_string()),
        };
        assert!(validate(&draft).is_err());
    }

    #[test]
    fn test_content_is_optional() {
        let draft = ResourceDraft {
            title: Some("Title".to_string()),
            content: None,
        };
        let fields = validate(&draft).unwrap();
        assert_eq!(fields.content(), "");
    }
}
