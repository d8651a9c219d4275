use clap::ValueEnum;
use serde_json::Value;

/// Which backend endpoint a request goes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum EndpointTarget {
    /// A randomly selected fortune.
    Random,
    /// The next fortune in the backend's sequence.
    Next,
}

impl EndpointTarget {
    pub const ALL: [EndpointTarget; 2] = [EndpointTarget::Random, EndpointTarget::Next];

    /// Path appended to the base URL.
    pub fn path(self) -> &'static str {
        match self {
            EndpointTarget::Random => "/api/random",
            EndpointTarget::Next => "/api/list/next",
        }
    }

    /// Button label shown while idle.
    pub fn label(self) -> &'static str {
        match self {
            EndpointTarget::Random => "Random",
            EndpointTarget::Next => "Next",
        }
    }
}

/// Extracts the text to display from a decoded response body.
///
/// Uses `text` when it holds something truthy; a non-empty string is shown
/// as-is, any other truthy value as compact JSON. Everything else falls back
/// to the whole body serialized as JSON.
pub fn display_text(body: &Value) -> String {
    match body.get("text") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(value) if is_truthy(value) && !value.is_string() => value.to_string(),
        _ => body.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
