use base64::alphabet;
use base64::engine::general_purpose::{self, GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;

/// Standard alphabet that accepts missing padding and non-canonical trailing bits.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encodes a string to Base64 format.
pub fn base64_encode(input: &str) -> String {
    general_purpose::STANDARD.encode(input)
}

/// Decodes a Base64 string to its original form.
///
/// Whitespace is stripped, the URL-safe alphabet is mapped back to the
/// standard one and padding is optional. Returns `None` when the input is
/// not Base64 or does not decode to valid UTF-8.
pub fn base64_decode(input: &str) -> Option<String> {
    let cleaned: String = url_safe_base64_reverse(input)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    let bytes = LENIENT.decode(cleaned.as_bytes()).ok()?;
    String::from_utf8(bytes).ok()
}

/// Reverses a URL-safe Base64 string to standard Base64 format.
pub fn url_safe_base64_reverse(input: &str) -> String {
    input.replace('-', "+").replace('_', "/")
}

/// Converts a Base64 string to URL-safe Base64 format by replacing specific characters.
pub fn url_safe_base64_apply(input: &str) -> String {
    input
        .replace('+', "-")
        .replace('/', "_")
        .replace('=', "") // Remove padding
}

/// Encodes a string to URL-safe Base64 format.
pub fn url_safe_base64_encode(input: &str) -> String {
    url_safe_base64_apply(&base64_encode(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_standard_and_url_safe() {
        assert_eq!(base64_decode("aGVsbG8gd29ybGQ=").as_deref(), Some("hello world"));
        // "??>" encodes to "Pz8+" in the standard alphabet
        assert_eq!(base64_decode("Pz8-").as_deref(), Some("??>"));
    }

    #[test]
    fn test_decode_without_padding_and_with_whitespace() {
        assert_eq!(base64_decode("aGVsbG8gd29ybGQ").as_deref(), Some("hello world"));
        assert_eq!(base64_decode(" aGVs\nbG8g\r\nd29y bGQ= ").as_deref(), Some("hello world"));
    }

    #[test]
    fn test_decode_utf8_payload() {
        let encoded = base64_encode("节点 ✓");
        assert_eq!(base64_decode(&encoded).as_deref(), Some("节点 ✓"));
    }

    #[test]
    fn test_url_safe_encode_is_decodable() {
        let encoded = url_safe_base64_encode("a?b>c~");
        assert!(!encoded.contains('='));
        assert!(!encoded.contains('+') && !encoded.contains('/'));
        assert_eq!(base64_decode(&encoded).as_deref(), Some("a?b>c~"));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert_eq!(base64_decode(""), None);
        assert_eq!(base64_decode("not base64!"), None);
        // valid base64 of the bytes ff fe, which is not UTF-8
        assert_eq!(base64_decode("//4="), None);
    }
}
