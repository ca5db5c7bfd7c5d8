mod chat_bubble;
mod chat_list;
mod chat_panel;
mod input_area;
mod typing_indicator;

pub use chat_bubble::{ChatBubble, ChatBubbleProps};
pub use chat_list::{ChatList, ChatListProps, RowStyle};
pub use chat_panel::{ChatPanel, ChatPanelProps};
pub use input_area::{InputArea, InputAreaProps, can_send};
pub use typing_indicator::{TypingIndicator, TypingIndicatorProps};
