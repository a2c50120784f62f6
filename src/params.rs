//! Generation parameters tuned from the side panel.
//!
//! The model keeps the raw text the user typed and only normalizes it into a
//! [`ParameterSnapshot`] when a request is about to be built. Top-K and Top-P are
//! mutually exclusive: a non-empty value in one clears the other.

use crate::error::{ChatError, ChatResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_TEMPERATURE: f64 = 0.8;
const DEFAULT_TEMPERATURE_TEXT: &str = "0.8";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasoningEffort {
    Minimal,
    Low,
    #[default]
    Medium,
    High,
}

impl ReasoningEffort {
    pub const ALL: [ReasoningEffort; 4] = [
        ReasoningEffort::Minimal,
        ReasoningEffort::Low,
        ReasoningEffort::Medium,
        ReasoningEffort::High,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ReasoningEffort::Minimal => "minimal",
            ReasoningEffort::Low => "low",
            ReasoningEffort::Medium => "medium",
            ReasoningEffort::High => "high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReasoningEffort::Minimal => "Minimal",
            ReasoningEffort::Low => "Low",
            ReasoningEffort::Medium => "Medium",
            ReasoningEffort::High => "High",
        }
    }
}

impl fmt::Display for ReasoningEffort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReasoningEffort {
    type Err = ChatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimal" => Ok(ReasoningEffort::Minimal),
            "low" => Ok(ReasoningEffort::Low),
            "medium" => Ok(ReasoningEffort::Medium),
            "high" => Ok(ReasoningEffort::High),
            _ => Err(ChatError::MalformedParameter {
                field: "reasoning_effort",
                value: s.to_string(),
            }),
        }
    }
}

/// Parameter values exactly as entered, before any numeric coercion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterSettings {
    pub temperature: String,
    pub top_k: String,
    pub top_p: String,
    pub reasoning_effort: ReasoningEffort,
}

impl Default for ParameterSettings {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE_TEXT.to_string(),
            top_k: String::new(),
            top_p: String::new(),
            reasoning_effort: ReasoningEffort::default(),
        }
    }
}

impl ParameterSettings {
    /// Normalize into numeric form. Blank Top-K/Top-P mean "omit", a blank
    /// temperature means the default; anything else that fails to parse is rejected.
    /// Surrounding whitespace is ignored. If both Top-K and Top-P hold a value,
    /// Top-K is kept and Top-P dropped.
    pub fn snapshot(&self) -> ChatResult<ParameterSnapshot> {
        let temperature_text = self.temperature.trim();
        let temperature = if temperature_text.is_empty() {
            DEFAULT_TEMPERATURE
        } else {
            parse_finite("temperature", temperature_text)?
        };

        let top_k_text = self.top_k.trim();
        let top_k = if top_k_text.is_empty() {
            None
        } else {
            let value = top_k_text
                .parse::<u32>()
                .map_err(|_| ChatError::MalformedParameter {
                    field: "top_k",
                    value: self.top_k.clone(),
                })?;
            Some(value)
        };

        let top_p_text = self.top_p.trim();
        let top_p = if top_k.is_some() || top_p_text.is_empty() {
            None
        } else {
            Some(parse_finite("top_p", top_p_text)?)
        };

        Ok(ParameterSnapshot {
            temperature,
            top_k,
            top_p,
            reasoning_effort: self.reasoning_effort,
        })
    }

    /// Clear Top-P when both sampling fields hold a value, matching what
    /// `ParameterModel::set_top_k` would leave behind.
    pub fn normalized(mut self) -> Self {
        if has_value(&self.top_k) && has_value(&self.top_p) {
            self.top_p.clear();
        }
        self
    }

    /// Top-K input is locked while Top-P holds a value.
    pub fn top_k_locked(&self) -> bool {
        has_value(&self.top_p)
    }

    /// Top-P input is locked while Top-K holds a value.
    pub fn top_p_locked(&self) -> bool {
        has_value(&self.top_k)
    }
}

fn has_value(raw: &str) -> bool {
    !raw.trim().is_empty()
}

fn parse_finite(field: &'static str, raw: &str) -> ChatResult<f64> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ChatError::MalformedParameter {
            field,
            value: raw.to_string(),
        }),
    }
}

/// Immutable numeric view of the parameters, taken once per request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParameterSnapshot {
    pub temperature: f64,
    pub top_k: Option<u32>,
    pub top_p: Option<f64>,
    pub reasoning_effort: ReasoningEffort,
}

impl Default for ParameterSnapshot {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            top_k: None,
            top_p: None,
            reasoning_effort: ReasoningEffort::default(),
        }
    }
}

type Listener = Box<dyn FnMut(&ParameterSettings)>;

/// Mutable parameter state with a single change listener.
#[derive(Default)]
pub struct ParameterModel {
    settings: ParameterSettings,
    listener: Option<Listener>,
}

impl fmt::Debug for ParameterModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterModel")
            .field("settings", &self.settings)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

impl ParameterModel {
    /// Seeds the model; a value with both Top-K and Top-P set keeps only Top-K.
    pub fn new(settings: ParameterSettings) -> Self {
        Self {
            settings: settings.normalized(),
            listener: None,
        }
    }

    /// Register the listener invoked after every mutation. Replaces any previous one.
    pub fn subscribe(&mut self, listener: impl FnMut(&ParameterSettings) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn settings(&self) -> &ParameterSettings {
        &self.settings
    }

    pub fn snapshot(&self) -> ChatResult<ParameterSnapshot> {
        self.settings.snapshot()
    }

    /// Setters store the text as typed; trimming happens in `snapshot`.
    pub fn set_temperature(&mut self, value: &str) {
        self.settings.temperature = value.to_string();
        self.notify();
    }

    pub fn set_top_k(&mut self, value: &str) {
        self.settings.top_k = value.to_string();
        if has_value(value) {
            self.settings.top_p.clear();
        }
        self.notify();
    }

    pub fn set_top_p(&mut self, value: &str) {
        self.settings.top_p = value.to_string();
        if has_value(value) {
            self.settings.top_k.clear();
        }
        self.notify();
    }

    pub fn set_reasoning_effort(&mut self, value: ReasoningEffort) {
        self.settings.reasoning_effort = value;
        self.notify();
    }

    fn notify(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            listener(&self.settings);
        }
    }
}
