// WHY: Plain-text preparation for catalog and CLI input before truncation
// Truncation rejoins kept words with single spaces, so inputs are collapsed the same way up front

/// Collapse every whitespace run (including \r\n pairs) into one space and trim the ends
pub fn normalize_whitespace(text: &str) -> String {
    let mut buffer = String::with_capacity(text.len());
    normalize_whitespace_into(text, &mut buffer);
    buffer
}

/// Normalize into a supplied buffer
/// WHY: catalog normalization reuses one buffer across descriptions
pub fn normalize_whitespace_into(text: &str, buffer: &mut String) {
    buffer.clear();
    buffer.reserve(text.len());

    for word in text.split_whitespace() {
        if !buffer.is_empty() {
            buffer.push(' ');
        }
        buffer.push_str(word);
    }
}
