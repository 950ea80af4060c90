//! Identifier case conversion

/// Convert an identifier to UpperCamelCase
///
/// Word boundaries are `_`, `-`, `.`, spaces, and digits. Letters keep their
/// original casing except the first letter of each word, which is
/// uppercased; any other character is dropped.
///
/// - "elastic search service" -> "ElasticSearchService"
/// - "next_token" -> "NextToken"
/// - "IAM" -> "IAM"
pub fn to_upper_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for ch in s.trim().chars() {
        if ch.is_ascii_alphabetic() {
            if capitalize_next {
                result.push(ch.to_ascii_uppercase());
            } else {
                result.push(ch);
            }
            capitalize_next = false;
        } else if ch.is_ascii_digit() {
            result.push(ch);
            capitalize_next = true;
        } else {
            capitalize_next = matches!(ch, '_' | ' ' | '-' | '.');
        }
    }

    result
}
