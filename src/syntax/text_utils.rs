//! Identifier and path text utilities.

use smol_str::SmolStr;

/// Check if a string is a valid identifier.
///
/// Uses Unicode Standard Annex #31 rules: a start character (or `_`)
/// followed by continue characters.
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first == '_' || unicode_ident::is_xid_start(first) => {
            chars.all(unicode_ident::is_xid_continue)
        }
        _ => false,
    }
}

/// One dot-separated component of a ref path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment {
    pub name: SmolStr,
    /// Byte offset of the segment inside the path text.
    pub offset: u32,
}

/// Split a dotted path into its segments.
///
/// Empty segments (`a..b`, `.a`, `a.`) are kept as empty names so callers
/// can report the offending index; nothing is validated here.
pub fn split_path(path: &str) -> Vec<PathSegment> {
    let mut offset = 0u32;
    path.split('.')
        .map(|part| {
            let segment = PathSegment {
                name: SmolStr::new(part),
                offset,
            };
            offset += part.len() as u32 + 1;
            segment
        })
        .collect()
}
