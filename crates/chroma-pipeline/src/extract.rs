//! JSON extraction from inference prose.
//!
//! Services wrap their JSON in varying amounts of prose, markdown fences, or
//! trailing commentary. The extractor scans for balanced top-level objects
//! (string- and escape-aware), and the first candidate that deserializes
//! into [`ColorIntelligence`] wins. Missing required fields take the fixed
//! placeholder via the type's serde defaults. A response with no usable
//! object is a hard [`InferenceError::Malformed`] — the pipeline switches on
//! that error kind instead of catching panics or generic failures.

use chroma_core::types::ColorIntelligence;
use chroma_core::InferenceError;

/// Field names of the intelligence contract, used to rank candidates.
const KNOWN_FIELDS: &[&str] = &[
    "suggestedName",
    "reasoning",
    "emotionalImpact",
    "culturalContext",
    "accessibilityNotes",
    "usageGuidance",
    "balancingGuidance",
];

/// Extract the intelligence payload from raw model text.
///
/// Preference order: the first object carrying at least one contract field;
/// failing that, the first object that deserializes at all (every missing
/// field then takes the placeholder).
///
/// # Errors
///
/// Returns `InferenceError::Malformed` when no balanced JSON object in the
/// text deserializes into the expected shape.
pub fn extract_intelligence(raw: &str) -> Result<ColorIntelligence, InferenceError> {
    let mut fallback: Option<ColorIntelligence> = None;
    for candidate in JsonObjectScanner::new(raw) {
        let Ok(value) = serde_json::from_str::<serde_json::Value>(candidate) else {
            continue;
        };
        let has_known_field = value
            .as_object()
            .is_some_and(|object| KNOWN_FIELDS.iter().any(|field| object.contains_key(*field)));
        let Ok(intelligence) = serde_json::from_value::<ColorIntelligence>(value) else {
            continue;
        };
        if has_known_field {
            return Ok(intelligence);
        }
        fallback.get_or_insert(intelligence);
    }
    fallback.ok_or_else(|| {
        InferenceError::Malformed("no JSON object found in inference response".to_owned())
    })
}

/// Iterator over balanced `{...}` slices of the input, outermost first.
struct JsonObjectScanner<'a> {
    text: &'a str,
    position: usize,
}

impl<'a> JsonObjectScanner<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, position: 0 }
    }
}

impl<'a> Iterator for JsonObjectScanner<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let bytes = self.text.as_bytes();
        while self.position < bytes.len() {
            if bytes[self.position] != b'{' {
                self.position += 1;
                continue;
            }
            let start = self.position;
            if let Some(end) = balanced_end(&bytes[start..]) {
                self.position = start + end;
                return Some(&self.text[start..start + end]);
            }
            // unbalanced from here; no later '{' can close either
            self.position = bytes.len();
        }
        None
    }
}

/// Length of the balanced object starting at `bytes[0] == b'{'`, if any.
/// Tracks string literals and escapes so braces inside values don't count.
fn balanced_end(bytes: &[u8]) -> Option<usize> {
    let mut depth = 0_usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, &byte) in bytes.iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }
    None
}
