use unicode_normalization::UnicodeNormalization;

/// Normalize remote advice text to NFC form and trim surrounding whitespace.
///
/// Upstream APIs occasionally serve decomposed accented characters; NFC
/// keeps the rendered text consistent regardless of which form arrives.
pub fn normalize_advice(input: &str) -> String {
    let nfc: String = input.nfc().collect();
    nfc.trim().to_string()
}
