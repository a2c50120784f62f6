use crate::ai::{CompletionBackend, HttpCompletionClient};
use crate::error::ChatResult;
use crate::params::ParameterSettings;
use crate::store::ConversationStore;
use crate::types::Message;
use dioxus::events::Key;
use dioxus::prelude::*;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

fn format_message_timestamp(timestamp: OffsetDateTime) -> Option<String> {
    let mut datetime = timestamp;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    datetime.format(MESSAGE_TIME_FORMAT).ok()
}

#[component]
pub fn ChatView(
    store: Signal<ConversationStore>,
    settings: Signal<ParameterSettings>,
    client: Signal<ChatResult<HttpCompletionClient>>,
    param_error: Signal<Option<String>>,
) -> Element {
    let mut input = use_signal(String::new);

    let mut send_message = {
        let mut store = store;
        let mut param_error = param_error;
        let mut input_signal = input;
        move |text: String| {
            if !store.peek().accepts(&text) {
                return;
            }

            let snapshot = match settings.peek().snapshot() {
                Ok(snapshot) => snapshot,
                Err(err) => {
                    tracing::warn!("submission rejected: {err}");
                    param_error.set(Some(err.to_string()));
                    return;
                }
            };
            param_error.set(None);

            let Some(request) = store.with_mut(|s| s.submit(&text, &snapshot)) else {
                return;
            };
            input_signal.set(String::new());

            let backend = client.peek().clone();
            spawn(async move {
                let outcome = match backend {
                    Ok(backend) => backend.complete(&request).await,
                    Err(err) => Err(err),
                };
                if let Err(err) = store.with_mut(|s| s.resolve(outcome)) {
                    tracing::warn!("dropping completion outcome: {err}");
                }
            });
        }
    };

    let (pending, messages) = {
        let conversation = store.read();
        (conversation.is_pending(), conversation.messages().to_vec())
    };

    rsx! {
        div { id: "chat-list", class: "chat-list",
            if messages.is_empty() {
                div { class: "empty-state",
                    span { class: "icon", "💬" }
                    p { "Hi! Type a message to get started." }
                }
            } else {
                for msg in messages {
                    MessageRow { key: "{msg.id()}", message: msg.clone() }
                }
            }
            if pending {
                TypingIndicator {}
            }
        }

        div { class: "composer",
            input {
                r#type: "text",
                placeholder: "Type your message...",
                value: "{input}",
                disabled: pending,
                autofocus: true,
                oninput: move |ev| input.set(ev.value()),
                onkeydown: move |ev| {
                    if ev.key() == Key::Enter && !ev.modifiers().shift() {
                        ev.prevent_default();
                        let text = input();
                        send_message(text);
                    }
                },
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                disabled: pending || input().trim().is_empty(),
                onclick: move |_| {
                    let text = input();
                    send_message(text);
                },
                "📤"
            }
        }
    }
}

#[component]
fn MessageRow(message: Message) -> Element {
    let side = if message.is_user() { "user" } else { "assistant" };
    let timestamp = format_message_timestamp(message.created_at());

    rsx! {
        div { class: "message-row {side}",
            if !message.is_user() {
                div { class: "avatar assistant", "🤖" }
            }
            div { class: "bubble {side}",
                p { "{message.content()}" }
                if let Some(ts) = timestamp {
                    p { class: "message-timestamp", "{ts}" }
                }
            }
            if message.is_user() {
                div { class: "avatar user", "👤" }
            }
        }
    }
}

#[component]
fn TypingIndicator() -> Element {
    rsx! {
        div { class: "message-row assistant",
            div { class: "avatar assistant", "🤖" }
            div { class: "bubble assistant",
                div { class: "typing",
                    span { "Typing" }
                    span { class: "dot" }
                    span { class: "dot" }
                    span { class: "dot" }
                }
            }
        }
    }
}
