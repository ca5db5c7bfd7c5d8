use crate::config::ChatConfig;
use crate::styles::{AVATAR, AVATAR_BG, FLEX_CENTER};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct TypingIndicatorProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(TypingIndicator)]
pub fn typing_indicator(props: &TypingIndicatorProps) -> Html {
    let TypingIndicatorProps { class } = props;

    html! {
        <div class={classes!("typing-indicator", FLEX_CENTER, "gap-2", "py-2", "px-4", class.clone())} aria-live="polite" aria-label="Agent is typing">
            <div class={classes!(AVATAR, AVATAR_BG)}>{ChatConfig::AGENT_AVATAR}</div>
            <div class="flex gap-1">
                <span class="w-2 h-2 rounded-full bg-gray-600 dark:bg-gray-400 animate-pulse" style="animation-delay: -0.32s;"></span>
                <span class="w-2 h-2 rounded-full bg-gray-600 dark:bg-gray-400 animate-pulse" style="animation-delay: -0.16s;"></span>
                <span class="w-2 h-2 rounded-full bg-gray-600 dark:bg-gray-400 animate-pulse"></span>
            </div>
        </div>
    }
}
