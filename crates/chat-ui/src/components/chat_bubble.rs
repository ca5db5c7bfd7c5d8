use crate::styles::{BUBBLE_BASE, bubble_colors, sender_class};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ChatBubbleProps {
    /// Text shown inside the bubble, rendered as a plain text node
    pub content: AttrValue,
    /// True for messages sent by the agent, false for the user
    #[prop_or_default]
    pub is_agent: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ChatBubble)]
pub fn chat_bubble(props: &ChatBubbleProps) -> Html {
    let ChatBubbleProps {
        content,
        is_agent,
        class,
    } = props;

    html! {
        <div class={classes!("bubble", sender_class(*is_agent), BUBBLE_BASE, bubble_colors(*is_agent), class.clone())}>
            {content.clone()}
        </div>
    }
}
