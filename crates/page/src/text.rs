//! Greedy line wrapping against an approximate Helvetica advance width.
//! Half an em per character is close enough for layout purposes; the
//! consuming viewer renders with real metrics.

const AVG_CHAR_WIDTH_EM: f32 = 0.5;

/// Approximate rendered width of `text` at `size` points.
pub fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * AVG_CHAR_WIDTH_EM
}

/// Split `text` into lines no wider than `max_width`. Words longer than a
/// full line stand alone rather than being hyphenated.
pub fn wrap(text: &str, size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if text_width(&candidate, size) <= max_width || current.is_empty() {
            current = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
