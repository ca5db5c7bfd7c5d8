use gloo_timers::callback::Timeout;
use serde_json::json;
use std::rc::Rc;
use stock_agent_chat_ui::{AgentReply, ChatPanel, Message};
use tracing::{info, warn};
use wasm_bindgen::prelude::*;
use yew::prelude::*;

/// Delay before the canned agent reply lands
const REPLY_DELAY_MS: u32 = 800;

/// Build the body the agent endpoint would return for `question`.
fn canned_reply(question: &str) -> serde_json::Value {
    let ticker = question
        .split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_ascii_alphanumeric()))
        .find(|word| (2..=5).contains(&word.len()) && word.chars().all(|c| c.is_ascii_uppercase()));

    let message = match ticker {
        Some(ticker) => format!(
            "This is a simulated response. A connected agent would load {ticker}'s \
             historical ratios and a DCF valuation before answering."
        ),
        None => "This is a simulated response. Which company would you like me to analyse?"
            .to_string(),
    };

    json!({ "status": "chat", "message": message })
}

#[function_component(App)]
fn app() -> Html {
    let messages = use_state(|| {
        Rc::<[Message]>::from(vec![Message::agent(
            "Hi! Ask me about any listed company and I'll walk through its fundamentals.",
        )])
    });
    let draft = use_state(String::new);
    let loading = use_state(|| false);

    let on_change = {
        let draft = draft.clone();
        Callback::from(move |value: String| draft.set(value))
    };

    let on_send = {
        let messages = messages.clone();
        let draft = draft.clone();
        let loading = loading.clone();
        Callback::from(move |()| {
            let question = draft.trim().to_string();
            if question.is_empty() || *loading {
                return;
            }

            let mut history = messages.to_vec();
            history.push(Message::user(question.clone()));
            messages.set(Rc::from(history.clone()));
            draft.set(String::new());
            loading.set(true);
            info!(turns = history.len(), "question submitted");

            let messages = messages.clone();
            let loading = loading.clone();
            Timeout::new(REPLY_DELAY_MS, move || {
                match serde_json::from_value::<AgentReply>(canned_reply(&question)) {
                    Ok(reply) => {
                        history.push(reply.into_message());
                        messages.set(Rc::from(history));
                    }
                    Err(err) => warn!(%err, "discarding malformed agent reply"),
                }
                loading.set(false);
            })
            .forget();
        })
    };

    html! {
        <div class="h-screen flex flex-col">
            <div class="bg-blue-600 dark:bg-gray-800 text-white p-4 shadow-lg">
                <h1 class="text-2xl font-bold">{"Stock Fundamental Analysis Agent"}</h1>
                <p class="text-sm opacity-80">{"Demo mode: replies are simulated locally"}</p>
            </div>
            <div class="flex-1 overflow-hidden">
                <ChatPanel
                    messages={(*messages).clone()}
                    value={(*draft).clone()}
                    on_change={on_change}
                    on_send={on_send}
                    loading={*loading}
                />
            </div>
        </div>
    }
}

#[wasm_bindgen(start)]
#[allow(clippy::main_recursion)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canned_reply_mentions_detected_ticker() {
        let reply: AgentReply =
            serde_json::from_value(canned_reply("What do you think of TSLA? I am curious.")).unwrap();
        assert_eq!(reply.status, "chat");
        assert!(reply.message.contains("TSLA"));
    }

    #[test]
    fn test_canned_reply_asks_for_a_company_without_ticker() {
        let reply: AgentReply = serde_json::from_value(canned_reply("hello there")).unwrap();
        assert!(reply.message.contains("Which company"));
    }
}
