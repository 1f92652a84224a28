use serde_json::{Map, Value};
use tracing::debug;

use crate::shared::validation::number_text;

/// Descriptor parameter names and their URL codes
const PARAMETER_CODES: &[(&str, &str)] = &[
    ("width", "w"),
    ("height", "h"),
    ("crop", "c"),
    ("quality", "q"),
    ("format", "f"),
    ("fetch_format", "f"),
    ("gravity", "g"),
    ("angle", "a"),
    ("aspect_ratio", "ar"),
    ("background", "b"),
    ("border", "bo"),
    ("color", "co"),
    ("dpr", "dpr"),
    ("effect", "e"),
    ("flags", "fl"),
    ("opacity", "o"),
    ("radius", "r"),
    ("x", "x"),
    ("y", "y"),
    ("zoom", "z"),
    ("overlay", "l"),
    ("underlay", "u"),
    ("transformation", "t"),
    ("default_image", "d"),
    ("density", "dn"),
    ("page", "pg"),
    ("start_offset", "so"),
    ("end_offset", "eo"),
    ("duration", "du"),
    ("video_codec", "vc"),
    ("audio_codec", "ac"),
    ("bit_rate", "br"),
];

const RAW_TRANSFORMATION: &str = "raw_transformation";

fn parameter_code(name: &str) -> Option<&'static str> {
    PARAMETER_CODES
        .iter()
        .find(|(param, _)| *param == name)
        .map(|(_, code)| *code)
}

fn encode_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_text(n)),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(encode_value).collect();
            (!parts.is_empty()).then(|| parts.join("."))
        }
        Value::Object(_) => None,
    }
}

/// One chain component: `code_value` pairs in the order the caller wrote them
fn encode_component(params: &Map<String, Value>) -> String {
    let mut parts = Vec::with_capacity(params.len());
    let mut raw = None;

    for (name, value) in params {
        if name == RAW_TRANSFORMATION {
            raw = value.as_str().filter(|s| !s.is_empty());
            continue;
        }
        let Some(code) = parameter_code(name) else {
            debug!("Skipping unknown transformation parameter '{}'", name);
            continue;
        };
        if let Some(encoded) = encode_value(value) {
            parts.push(format!("{}_{}", code, encoded));
        }
    }

    if let Some(raw) = raw {
        parts.push(raw.to_string());
    }
    parts.join(",")
}

fn encode_step(step: &Value) -> String {
    match step {
        Value::Object(params) => encode_component(params),
        Value::String(name) if !name.is_empty() => format!("t_{}", name),
        _ => String::new(),
    }
}

/// Encode a transformation descriptor into its URL form
///
/// Accepts an object (one component), an array (a chain of components,
/// each an object or a named transformation), or a string (a named
/// transformation). Components are joined with `/`; empty ones are dropped.
pub fn transformation_string(descriptor: &Value) -> String {
    let steps: Vec<String> = match descriptor {
        Value::Array(steps) => steps.iter().map(encode_step).collect(),
        other => vec![encode_step(other)],
    };

    steps
        .into_iter()
        .filter(|step| !step.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}
