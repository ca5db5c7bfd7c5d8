use crate::error::{ChatUiError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sender classification of a chat message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Agent,
}

impl Role {
    /// Whether the message came from the automated agent
    pub const fn is_agent(self) -> bool {
        matches!(self, Self::Agent)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Agent => "agent",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ChatUiError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "user" => Ok(Self::User),
            "agent" => Ok(Self::Agent),
            other => Err(ChatUiError::UnknownRole(other.to_string())),
        }
    }
}

/// A single chat message as produced by the session controller
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    /// Create a new message with role and content
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create an agent message
    pub fn agent(content: impl Into<String>) -> Self {
        Self::new(Role::Agent, content)
    }

    pub const fn is_agent(&self) -> bool {
        self.role.is_agent()
    }
}

/// Body returned by the agent chat endpoint, e.g.
/// `{"status": "chat", "message": "..."}`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentReply {
    #[serde(default)]
    pub status: String,
    pub message: String,
}

impl AgentReply {
    /// Turn the reply into an agent message, keeping the text verbatim
    pub fn into_message(self) -> Message {
        Message::agent(self.message)
    }
}

impl From<AgentReply> for Message {
    fn from(reply: AgentReply) -> Self {
        reply.into_message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parses_known_values() {
        assert_eq!("user".parse::<Role>().unwrap(), Role::User);
        assert_eq!("agent".parse::<Role>().unwrap(), Role::Agent);
    }

    #[test]
    fn test_role_rejects_unknown_values() {
        let err = "assistant".parse::<Role>().unwrap_err();
        assert_eq!(err, ChatUiError::UnknownRole("assistant".to_string()));

        // Parsing is exact, not case-insensitive
        assert!("Agent".parse::<Role>().is_err());
        assert!(" user".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_round_trips_through_display() {
        for role in [Role::User, Role::Agent] {
            let parsed: Result<Role> = role.to_string().parse();
            assert_eq!(parsed, Ok(role));
        }
    }

    #[test]
    fn test_only_agent_role_is_agent() {
        assert!(Role::Agent.is_agent());
        assert!(!Role::User.is_agent());
        assert!(Message::agent("hi").is_agent());
        assert!(!Message::user("hi").is_agent());
    }

    #[test]
    fn test_message_wire_format() {
        let message = Message::agent("TSLA looks overvalued.");
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"role": "agent", "content": "TSLA looks overvalued."})
        );

        let parsed: Message =
            serde_json::from_str(r#"{"role":"user","content":"What about AAPL?"}"#).unwrap();
        assert_eq!(parsed, Message::user("What about AAPL?"));
    }

    #[test]
    fn test_message_rejects_unknown_role_on_the_wire() {
        let result = serde_json::from_str::<Message>(r#"{"role":"system","content":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_agent_reply_becomes_agent_message() {
        let reply: AgentReply = serde_json::from_str(
            r#"{"status":"chat","message":"Which company would you like me to analyse?"}"#,
        )
        .unwrap();
        assert_eq!(reply.status, "chat");

        let message = Message::from(reply);
        assert_eq!(message.role, Role::Agent);
        assert_eq!(
            message.content,
            "Which company would you like me to analyse?"
        );
    }

    #[test]
    fn test_agent_reply_status_is_optional() {
        let reply: AgentReply = serde_json::from_str(r#"{"message":"  padded  "}"#).unwrap();
        assert!(reply.status.is_empty());
        assert_eq!(reply.into_message().content, "  padded  ");
    }
}
