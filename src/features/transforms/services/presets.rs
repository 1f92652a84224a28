use serde_json::{Map, Value};

/// A single preset parameter value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetParam {
    Int(u32),
    Text(&'static str),
}

impl From<PresetParam> for Value {
    fn from(param: PresetParam) -> Self {
        match param {
            PresetParam::Int(n) => Value::from(n),
            PresetParam::Text(s) => Value::from(s),
        }
    }
}

/// A named, fixed transformation chain
#[derive(Debug)]
pub struct Preset {
    pub name: &'static str,
    /// Chain components, each an ordered list of (parameter, value)
    pub steps: &'static [&'static [(&'static str, PresetParam)]],
}

impl Preset {
    /// The preset as a descriptor, encoded by the same path as caller-supplied ones
    pub fn descriptor(&self) -> Value {
        Value::Array(
            self.steps
                .iter()
                .map(|step| {
                    let params: Map<String, Value> = step
                        .iter()
                        .map(|(name, value)| (name.to_string(), Value::from(*value)))
                        .collect();
                    Value::Object(params)
                })
                .collect(),
        )
    }
}

use PresetParam::{Int, Text};

const AUTO_QUALITY_AND_FORMAT: &[(&str, PresetParam)] =
    &[("quality", Text("auto")), ("format", Text("auto"))];

/// Presets returned with every transform, in response order.
///
/// Downstream caches key on these URLs; parameter names, order and values must not change.
pub const PRESETS: &[Preset] = &[
    Preset {
        name: "thumbnail",
        steps: &[
            &[("width", Int(150)), ("height", Int(150)), ("crop", Text("fill"))],
            AUTO_QUALITY_AND_FORMAT,
        ],
    },
    Preset {
        name: "medium",
        steps: &[
            &[("width", Int(500)), ("height", Int(500)), ("crop", Text("limit"))],
            AUTO_QUALITY_AND_FORMAT,
        ],
    },
    Preset {
        name: "large",
        steps: &[
            &[("width", Int(1200)), ("height", Int(1200)), ("crop", Text("limit"))],
            AUTO_QUALITY_AND_FORMAT,
        ],
    },
    Preset {
        name: "optimized",
        steps: &[AUTO_QUALITY_AND_FORMAT, &[("fetch_format", Text("auto"))]],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::cloudinary::transformation_string;
    use serde_json::json;

    fn encoded(name: &str) -> String {
        let preset = PRESETS.iter().find(|p| p.name == name).unwrap();
        transformation_string(&preset.descriptor())
    }

    #[test]
    fn test_preset_names_in_order() {
        let names: Vec<&str> = PRESETS.iter().map(|p| p.name).collect();
        assert_eq!(names, ["thumbnail", "medium", "large", "optimized"]);
    }

    #[test]
    fn test_thumbnail_descriptor() {
        assert_eq!(
            PRESETS[0].descriptor(),
            json!([
                { "width": 150, "height": 150, "crop": "fill" },
                { "quality": "auto", "format": "auto" }
            ])
        );
    }

    #[test]
    fn test_preset_encodings() {
        assert_eq!(encoded("thumbnail"), "w_150,h_150,c_fill/q_auto,f_auto");
        assert_eq!(encoded("medium"), "w_500,h_500,c_limit/q_auto,f_auto");
        assert_eq!(encoded("large"), "w_1200,h_1200,c_limit/q_auto,f_auto");
        assert_eq!(encoded("optimized"), "q_auto,f_auto/f_auto");
    }
}
