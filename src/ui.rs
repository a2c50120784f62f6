use crate::ai::HttpCompletionClient;
use crate::config::ClientConfig;
use crate::error::ChatResult;
use crate::params::ParameterSettings;
use crate::store::ConversationStore;
use crate::theme::CHAT_CSS;
use crate::views::{ChatView, ConfigPanel};
use dioxus::prelude::*;

fn build_client() -> ChatResult<HttpCompletionClient> {
    let config = ClientConfig::from_env().unwrap_or_else(|err| {
        tracing::warn!("invalid completion config, using defaults: {err:#}");
        ClientConfig::default()
    });
    tracing::info!(endpoint = %config.endpoint, timeout = ?config.timeout, "completion client configured");
    HttpCompletionClient::new(&config).inspect_err(|err| {
        tracing::error!("failed to build completion client: {err}");
    })
}

#[component]
pub fn App() -> Element {
    let store = use_signal(ConversationStore::new);
    let settings = use_signal(ParameterSettings::default);
    let client = use_signal(build_client);
    let show_settings = use_signal(|| false);
    let param_error = use_signal(|| Option::<String>::None);

    rsx! {
        style { dangerous_inner_html: CHAT_CSS }
        div { class: "app-shell",
            AppHeader { show_settings }
            if show_settings() {
                SettingsPanel { settings, param_error }
            }
            ChatView { store, settings, client, param_error }
        }
    }
}

#[component]
fn AppHeader(show_settings: Signal<bool>) -> Element {
    let mut show_settings = show_settings;
    rsx! {
        div { class: "header",
            h1 { "🤖 Chat Assistant" }
            button {
                class: "btn",
                r#type: "button",
                onclick: move |_| {
                    let open = show_settings();
                    show_settings.set(!open);
                },
                "⚙ Settings"
            }
        }
    }
}

#[component]
fn SettingsPanel(settings: Signal<ParameterSettings>, param_error: Signal<Option<String>>) -> Element {
    let mut settings = settings;
    let mut param_error = param_error;
    let initial = settings.peek().clone();
    rsx! {
        div { class: "config-panel",
            ConfigPanel {
                settings: initial,
                on_change: move |next: ParameterSettings| {
                    settings.set(next);
                    param_error.set(None);
                },
            }
            if let Some(err) = param_error() {
                p { class: "config-error", "{err}" }
            }
        }
    }
}
