//! Import-style name shortening.

/// Last segment of a qualified name: `java/util/List` and `java.util.List`
/// both become `List`. Array suffixes survive: `java.lang.String[]` becomes
/// `String[]`.
pub fn shorten(name: &str) -> &str {
    match name.rfind(['/', '.']) {
        Some(i) => &name[i + 1..],
        None => name,
    }
}

/// Replace the last occurrence of `from` in `text` with `to`.
pub fn replace_last(text: &str, from: &str, to: &str) -> String {
    match text.rfind(from) {
        Some(i) => format!("{}{to}{}", &text[..i], &text[i + from.len()..]),
        None => text.to_string(),
    }
}
