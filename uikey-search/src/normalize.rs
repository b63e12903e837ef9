//! Text normalisation shared by stored keys and incoming queries.

/// Byte-order mark; editors and exporters occasionally leave one at the
/// start of a string.
const BOM: char = '\u{feff}';

/// Lower-case then trim whitespace and stray byte-order marks. Applied
/// identically to keys and queries so that substring tests compare like
/// with like.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .trim_matches(|c: char| c.is_whitespace() || c == BOM)
        .to_string()
}

/// Resolve the escape sequences that appear inside catalog string literals.
///
/// Passes run in a fixed order, each over the output of the previous one:
/// `\n`, `\t`, `\"`, then `\\`. The backslash pass runs last so it cannot
/// create sequences for the earlier passes to pick up.
pub fn decode_escapes(raw: &str) -> String {
    raw.replace("\\n", "\n")
        .replace("\\t", "\t")
        .replace("\\\"", "\"")
        .replace("\\\\", "\\")
}
