use crate::params::{ParameterModel, ParameterSettings, ReasoningEffort};
use dioxus::prelude::*;

/// Generation parameter controls. Owns a `ParameterModel` seeded from `settings`
/// and reports every change through `on_change`.
#[component]
pub fn ConfigPanel(settings: ParameterSettings, on_change: EventHandler<ParameterSettings>) -> Element {
    let mut model = use_signal(move || {
        let mut model = ParameterModel::new(settings);
        model.subscribe(move |next| on_change.call(next.clone()));
        model
    });
    let current = model.read().settings().clone();

    rsx! {
        div {
            h2 { "Chat settings" }
            div { class: "config-field",
                label { "Temperature (0 - 2)" }
                input {
                    r#type: "number",
                    min: "0",
                    max: "2",
                    step: "0.1",
                    value: "{current.temperature}",
                    oninput: move |ev| model.with_mut(|m| m.set_temperature(&ev.value())),
                }
            }
            div { class: "config-field",
                label { "Top K (0 - 20)" }
                input {
                    r#type: "number",
                    min: "0",
                    max: "20",
                    value: "{current.top_k}",
                    disabled: current.top_k_locked(),
                    oninput: move |ev| model.with_mut(|m| m.set_top_k(&ev.value())),
                }
            }
            div { class: "config-field",
                label { "Top P (0 - 1)" }
                input {
                    r#type: "number",
                    min: "0",
                    max: "1",
                    step: "0.01",
                    value: "{current.top_p}",
                    disabled: current.top_p_locked(),
                    oninput: move |ev| model.with_mut(|m| m.set_top_p(&ev.value())),
                }
            }
            div { class: "config-field",
                label { "Reasoning effort" }
                select {
                    value: "{current.reasoning_effort}",
                    onchange: move |ev| match ev.value().parse::<ReasoningEffort>() {
                        Ok(effort) => model.with_mut(|m| m.set_reasoning_effort(effort)),
                        Err(err) => tracing::warn!("ignoring reasoning effort: {err}"),
                    },
                    for effort in ReasoningEffort::ALL {
                        option {
                            value: "{effort}",
                            selected: effort == current.reasoning_effort,
                            "{effort.label()}"
                        }
                    }
                }
            }
        }
    }
}
