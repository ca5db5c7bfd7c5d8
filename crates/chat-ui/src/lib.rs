//! Presentational Yew components for the stock agent chat client.
//!
//! Every component here is controlled by its owner: messages, the draft text
//! and the pending-response flag all arrive as props, and user actions leave
//! as callbacks. Talking to the agent backend is the owner's job.

pub mod components;
pub mod config;
pub mod error;
pub mod styles;
pub mod types;

// Re-export main components
pub use components::{
    ChatBubble, ChatList, ChatPanel, InputArea, RowStyle, TypingIndicator, can_send,
};
pub use config::ChatConfig;
pub use error::{ChatUiError, Result};
pub use types::{AgentReply, Message, Role};
