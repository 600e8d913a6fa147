//! Message types for conversations

use serde::{Deserialize, Serialize};

/// The role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Role {
    /// System message (instructions)
    System,
    /// User message
    User,
    /// Assistant message
    Assistant,
}

/// Content types that can be included in a message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Content {
    /// Plain text content
    Text(String),
    /// Multiple content items
    Multiple(Vec<Content>),
}

/// Metadata associated with a message
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Name override for the message
    pub name: Option<String>,
}

/// A message in a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// The content of the message
    pub content: Content,
    /// Additional metadata
    pub metadata: Metadata,
}

impl Message {
    /// Create a simple text message
    pub fn text(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            content: Content::Text(text.into()),
            metadata: Metadata::default(),
        }
    }

    /// Create a system message
    pub fn system(text: impl Into<String>) -> Self {
        Self::text(Role::System, text)
    }

    /// Create a user message
    pub fn user(text: impl Into<String>) -> Self {
        Self::text(Role::User, text)
    }

    /// Create an assistant message
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::text(Role::Assistant, text)
    }
}

impl Content {
    /// Get text content if this is a Text variant
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Content::Text(s) => Some(s),
            Content::Multiple(_) => None,
        }
    }

    /// Concatenate every text part, depth first
    pub fn flatten_text(&self) -> String {
        match self {
            Content::Text(s) => s.clone(),
            Content::Multiple(parts) => parts
                .iter()
                .map(Content::flatten_text)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

// Conversion implementations
impl From<String> for Content {
    fn from(s: String) -> Self {
        Content::Text(s)
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Content::Text(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        let msg = Message::system("Be helpful");
        assert_eq!(msg.role, Role::System);
        assert_eq!(msg.content.as_text(), Some("Be helpful"));

        let msg = Message::user("Hello");
        assert_eq!(msg.role, Role::User);

        let msg = Message::assistant("Hi");
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.metadata.name, None);
    }

    #[test]
    fn test_flatten_text() {
        let content = Content::Multiple(vec![
            Content::from("first"),
            Content::Multiple(vec![Content::from("second")]),
        ]);
        assert_eq!(content.as_text(), None);
        assert_eq!(content.flatten_text(), "first\nsecond");
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), "\"assistant\"");
    }
}
