use crate::components::{ChatList, InputArea, TypingIndicator};
use crate::styles::{CONTAINER_BG, FLEX_COL, ROUNDED_STANDARD};
use crate::types::Message;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ChatPanelProps {
    pub messages: Rc<[Message]>,
    /// Current draft text
    pub value: AttrValue,
    pub on_change: Callback<String>,
    pub on_send: Callback<()>,
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub on_scrolled: Option<Callback<()>>,
    #[prop_or_default]
    pub class: Classes,
}

/// List, typing indicator and input stacked into one panel.
///
/// Stateless: every prop is forwarded to the child that uses it.
#[function_component(ChatPanel)]
pub fn chat_panel(props: &ChatPanelProps) -> Html {
    let ChatPanelProps {
        messages,
        value,
        on_change,
        on_send,
        loading,
        placeholder,
        on_scrolled,
        class,
    } = props;

    html! {
        <div class={classes!("chat-panel", FLEX_COL, "h-full", CONTAINER_BG, ROUNDED_STANDARD, "overflow-hidden", class.clone())}>
            <div class="flex-1 overflow-y-auto">
                <ChatList messages={messages.clone()} on_scrolled={on_scrolled.clone()} />
            </div>

            if *loading {
                <TypingIndicator />
            }

            <div class="flex-shrink-0">
                <InputArea
                    value={value.clone()}
                    on_change={on_change.clone()}
                    on_send={on_send.clone()}
                    loading={*loading}
                    placeholder={placeholder.clone()}
                />
            </div>
        </div>
    }
}
