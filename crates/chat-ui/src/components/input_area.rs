use crate::config::ChatConfig;
use crate::styles::{
    CARD_BG, FLEX_CENTER, INPUT_COLORS, PRIMARY_BORDER, PRIMARY_TEXT, SEND_BUTTON,
    STANDARD_PADDING, TRANSITION_ALL, TRANSITION_COLORS, combine_styles,
};
use tracing::{debug, trace};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Whether a send may fire for the given draft and pending state.
pub fn can_send(value: &str, loading: bool) -> bool {
    !loading && !value.trim().is_empty()
}

#[derive(Properties, PartialEq)]
pub struct InputAreaProps {
    /// Current draft text, owned by the parent
    pub value: AttrValue,
    /// Receives the field's new text on every input event
    pub on_change: Callback<String>,
    pub on_send: Callback<()>,
    /// True while the owner waits for the agent's reply
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
}

#[function_component(InputArea)]
pub fn input_area(props: &InputAreaProps) -> Html {
    let sendable = can_send(&props.value, props.loading);

    let handle_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            on_change.emit(input.value());
        })
    };

    let send = {
        let on_send = props.on_send.clone();
        let len = props.value.len();
        Callback::from(move |()| {
            if sendable {
                debug!(len, "sending chat message");
                on_send.emit(());
            }
        })
    };

    let handle_keydown = {
        let send = send.clone();
        Callback::from(move |e: KeyboardEvent| {
            // Enter inside an IME composition confirms the candidate text
            if e.key() == "Enter" && !e.is_composing() {
                if sendable {
                    e.prevent_default();
                    send.emit(());
                } else {
                    trace!("ignoring Enter while send is gated");
                }
            }
        })
    };

    let handle_click = Callback::from(move |_: MouseEvent| send.emit(()));

    let placeholder = props
        .placeholder
        .clone()
        .unwrap_or_else(|| AttrValue::from(ChatConfig::INPUT_PLACEHOLDER));

    html! {
        <div class={combine_styles(&["input-area", FLEX_CENTER, "gap-3", STANDARD_PADDING, CARD_BG, "border-t", PRIMARY_BORDER])}>
            <input
                type="text"
                class={combine_styles(&["flex-1 h-[42px] px-3 border rounded-lg text-sm outline-none", INPUT_COLORS, TRANSITION_COLORS, CARD_BG, PRIMARY_TEXT, "focus:border-gray-400 focus:ring-1 focus:ring-gray-400 disabled:bg-gray-100 disabled:cursor-not-allowed placeholder:text-gray-400"])}
                placeholder={placeholder}
                value={props.value.clone()}
                oninput={handle_input}
                onkeydown={handle_keydown}
                disabled={props.loading}
            />

            <button
                class={combine_styles(&[SEND_BUTTON, TRANSITION_ALL])}
                onclick={handle_click}
                disabled={!sendable}
                title="Send message"
                aria-label="Send message"
                aria-busy={if props.loading { "true" } else { "false" }}
            >
                <span>{ChatConfig::send_label(props.loading)}</span>
            </button>
        </div>
    }
}
