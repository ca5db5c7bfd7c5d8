use crate::components::ChatBubble;
use crate::config::ChatConfig;
use crate::styles::{AVATAR, AVATAR_BG, FLEX_COL_GAP_4, STANDARD_PADDING, row_layout, sender_class};
use crate::types::{Message, Role};
use std::rc::Rc;
use tracing::debug;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

/// Role-derived presentation of one list row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowStyle {
    pub is_agent: bool,
    /// `agent` or `user`, applied next to `message-row`
    pub sender: &'static str,
    /// Flex layout placing the avatar and bubble on the sender's side
    pub layout: &'static str,
    pub avatar: &'static str,
}

impl RowStyle {
    pub const fn for_role(role: Role) -> Self {
        let is_agent = role.is_agent();
        Self {
            is_agent,
            sender: sender_class(is_agent),
            layout: row_layout(is_agent),
            avatar: ChatConfig::avatar(is_agent),
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct ChatListProps {
    /// Shared so the scroll effect can compare it without copying
    pub messages: Rc<[Message]>,
    #[prop_or_default]
    pub class: Classes,
    /// Notified after the trailing anchor has been scrolled into view
    #[prop_or_default]
    pub on_scrolled: Option<Callback<()>>,
}

/// Scroll `anchor_ref` into view every time `messages` changes.
#[hook]
fn use_scroll_to_anchor(
    messages: Rc<[Message]>,
    anchor_ref: NodeRef,
    on_scrolled: Option<Callback<()>>,
) {
    use_effect_with(messages, move |messages: &Rc<[Message]>| {
        if let Some(anchor) = anchor_ref.cast::<Element>() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            anchor.scroll_into_view_with_scroll_into_view_options(&options);
            debug!(count = messages.len(), "scrolled chat anchor into view");

            if let Some(on_scrolled) = &on_scrolled {
                on_scrolled.emit(());
            }
        } else {
            debug!("chat anchor is not mounted, skipping scroll");
        }
    });
}

#[function_component(ChatList)]
pub fn chat_list(props: &ChatListProps) -> Html {
    let ChatListProps {
        messages,
        class,
        on_scrolled,
    } = props;

    let anchor_ref = use_node_ref();
    use_scroll_to_anchor(messages.clone(), anchor_ref.clone(), on_scrolled.clone());

    html! {
        <div class={classes!("chat-window", STANDARD_PADDING, FLEX_COL_GAP_4, "overflow-y-auto", class.clone())}>
            {for messages.iter().enumerate().map(|(index, message)| {
                let row = RowStyle::for_role(message.role);
                html! {
                    <div key={index} class={classes!("message-row", row.sender, row.layout)}>
                        <div class={classes!("avatar", AVATAR, AVATAR_BG)}>{row.avatar}</div>
                        <ChatBubble content={message.content.clone()} is_agent={row.is_agent} />
                    </div>
                }
            })}

            // Invisible anchor kept below the last row
            <div ref={anchor_ref} class="chat-anchor" aria-hidden="true" />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_rows_take_the_automated_branch() {
        let row = RowStyle::for_role(Role::Agent);
        assert!(row.is_agent);
        assert_eq!(row.sender, "agent");
        assert_eq!(row.avatar, "🤖");
        assert_eq!(row.layout, crate::styles::AGENT_ROW_LAYOUT);
    }

    #[test]
    fn test_user_rows_take_the_human_branch() {
        let row = RowStyle::for_role(Role::User);
        assert!(!row.is_agent);
        assert_eq!(row.sender, "user");
        assert_eq!(row.avatar, "👤");
        assert_eq!(row.layout, crate::styles::USER_ROW_LAYOUT);
    }

    #[test]
    fn test_row_style_follows_message_role() {
        let conversation = [
            Message::user("Analyse NVDA"),
            Message::agent("NVDA trades at 45x earnings."),
            Message::user("And the DCF?"),
        ];

        let senders: Vec<_> = conversation
            .iter()
            .map(|message| RowStyle::for_role(message.role).sender)
            .collect();
        assert_eq!(senders, ["user", "agent", "user"]);
    }
}
