// Output rendering — workbook export and terminal display.

pub mod terminal;
pub mod xlsx;

/// Truncate a string to at most `max_chars` characters, appending "..."
/// if truncated. Char-based rather than byte-based so multi-byte text
/// never panics.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
