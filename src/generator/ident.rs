//! Identifier sanitization for generated source.

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be written as raw identifiers.
const NOT_RAW: &[&str] = &["crate", "self", "Self", "super"];

/// Replaces every character outside `[A-Za-z0-9_]` with `_` and prefixes a leading digit
/// with `_`. An empty input stays empty.
///
/// The result is always safe to embed in a longer identifier such as `with_{name}`.
pub fn sanitize(raw: &str) -> String {
    let mut out: String = raw
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

/// A standalone identifier for `raw`: sanitized, then escaped if it is a keyword.
pub fn ident(raw: &str) -> String {
    let name = sanitize(raw);
    match name.as_str() {
        "" => "_blank".to_string(),
        "_" => "__".to_string(),
        kw if NOT_RAW.contains(&kw) => format!("{}_", kw),
        kw if KEYWORDS.contains(&kw) => format!("r#{}", kw),
        _ => name,
    }
}
