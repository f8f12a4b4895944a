use crate::error::DomainError;

/// Validated author + body pair used to create or overwrite posts and comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentDraft {
    pub username: String,
    pub content: String,
}

impl ContentDraft {
    /// Build a draft, rejecting blank usernames or content.
    pub fn new(username: String, content: String) -> Result<Self, DomainError> {
        validate_username(&username)?;
        if content.trim().is_empty() {
            return Err(DomainError::MissingField { field: "Content" });
        }
        Ok(Self { username, content })
    }
}

/// Usernames must contain at least one non-whitespace character.
pub fn validate_username(username: &str) -> Result<(), DomainError> {
    if username.trim().is_empty() {
        return Err(DomainError::MissingField { field: "Username" });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_accepts_non_blank_fields() {
        let draft = ContentDraft::new("alice".into(), "hi".into()).unwrap();
        assert_eq!(draft.username, "alice");
        assert_eq!(draft.content, "hi");
    }

    #[test]
    fn test_draft_rejects_blank_username() {
        let err = ContentDraft::new("   ".into(), "hi".into()).unwrap_err();
        assert_eq!(err.to_string(), "Username is required");
    }

    #[test]
    fn test_draft_rejects_empty_content() {
        let err = ContentDraft::new("alice".into(), String::new()).unwrap_err();
        assert_eq!(err, DomainError::MissingField { field: "Content" });
    }
}
