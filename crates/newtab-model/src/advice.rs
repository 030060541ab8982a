use crate::normalize;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Rendered when the advice fetch fails outright (transport error, unreadable
/// body, or a body that is not valid JSON).
pub const FETCH_FAILED_FALLBACK: &str = "Could not load advice.";

/// Rendered when the fetch succeeded and returned valid JSON, but no known
/// field path held usable advice text.
pub const NO_ADVICE_FALLBACK: &str = "No advice available.";

/// Field-extraction strategy for an advice payload.
///
/// The two deployed upstream variants return different JSON shapes; each
/// variant is a configuration of the same loader, selected by this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceShape {
    /// `{ "slip": { "advice": "..." } }`
    Slip,
    /// `{ "text": "..." }`, falling back to `{ "message": "..." }`
    TextOrMessage,
}

/// Extract the display string from a parsed advice payload.
///
/// Returns `None` when no known field path holds usable text. A field that
/// is missing, not a string, or empty after normalization is treated as
/// absent; for [`AdviceShape::TextOrMessage`] that means falling through
/// from `text` to `message`.
pub fn extract_advice(shape: AdviceShape, payload: &Value) -> Option<String> {
    match shape {
        AdviceShape::Slip => field_text(payload.get("slip")?.get("advice")?),
        AdviceShape::TextOrMessage => payload
            .get("text")
            .and_then(field_text)
            .or_else(|| payload.get("message").and_then(field_text)),
    }
}

fn field_text(value: &Value) -> Option<String> {
    let normalized = normalize::normalize_advice(value.as_str()?);
    (!normalized.is_empty()).then_some(normalized)
}
