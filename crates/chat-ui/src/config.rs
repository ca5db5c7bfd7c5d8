//! Chat UI configuration

/// Compile-time defaults shared by the chat components
pub struct ChatConfig;

impl ChatConfig {
    /// Placeholder shown in an empty input field
    pub const INPUT_PLACEHOLDER: &'static str = "Ask about any stock (e.g. TSLA)...";

    /// Avatar glyph for rows sent by the agent
    pub const AGENT_AVATAR: &'static str = "🤖";

    /// Avatar glyph for rows sent by the user
    pub const USER_AVATAR: &'static str = "👤";

    /// Send button label while idle
    pub const SEND_LABEL: &'static str = "➜";

    /// Send button label while a response is pending
    pub const PENDING_LABEL: &'static str = "...";

    /// Avatar glyph for the given sender side
    pub const fn avatar(is_agent: bool) -> &'static str {
        if is_agent {
            Self::AGENT_AVATAR
        } else {
            Self::USER_AVATAR
        }
    }

    /// Send button label for the given pending state
    pub const fn send_label(loading: bool) -> &'static str {
        if loading {
            Self::PENDING_LABEL
        } else {
            Self::SEND_LABEL
        }
    }
}
