//! Extraction of `<li>` items from rich-text course fields

use std::sync::LazyLock;

use regex::Regex;

// Item content never crosses a line terminator (LF, CR, U+2028, U+2029).
static LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<li>([^\n\r\x{2028}\x{2029}]*?)</li>").expect("valid list item pattern"));

/// Whitespace stripped around an item: Unicode white space plus the BOM, minus NEL
fn is_trimmed(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// Turn an HTML list fragment into its plain-text items, in source order.
///
/// Absent, empty or tag-free input yields an empty list. Content is trimmed
/// but otherwise kept verbatim: entities are not decoded and nested tags stay.
pub fn parse_list(input: Option<&str>) -> Vec<String> {
    let Some(html) = input.filter(|s| !s.is_empty()) else {
        return Vec::new();
    };

    LIST_ITEM
        .captures_iter(html)
        .map(|caps| caps[1].trim_matches(is_trimmed).to_string())
        .collect()
}
