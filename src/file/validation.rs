//! Upload filename validation and sanitizing.

use super::{ALLOWED_EXTENSION, FALLBACK_STEM, MAX_STEM_LENGTH};

/// Check whether a client-supplied filename is acceptable.
///
/// True iff the name contains a `.` and the text after the last `.` is
/// `pdf` in any case. File contents are not inspected.
pub fn is_acceptable(original_filename: &str) -> bool {
    match original_filename.rsplit_once('.') {
        Some((_, ext)) => ext.eq_ignore_ascii_case(ALLOWED_EXTENSION),
        None => false,
    }
}

/// Produce a filesystem-safe name from a client-supplied filename.
///
/// Path separators become `_`, anything outside `[A-Za-z0-9_.-]` is
/// dropped, runs of dots collapse to one and leading/trailing `.` and `_`
/// are trimmed from both the stem and the extension. The result is never
/// empty, never contains a separator or `..`, and
/// `sanitize(sanitize(s)) == sanitize(s)`.
pub fn sanitize(original_filename: &str) -> String {
    let normalized = original_filename
        .replace(['/', '\\'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");

    split_clean(&normalized)
}

/// Split at the last `.` and clean both halves.
///
/// An extension that cleans to nothing is dropped and the remaining stem is
/// processed again, so the output never ends in a half-cleaned segment.
fn split_clean(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((stem, ext)) => {
            let ext = clean_part(ext);
            if ext.is_empty() {
                return split_clean(stem);
            }
            format!("{}.{}", finish_stem(stem), ext)
        }
        None => finish_stem(name),
    }
}

fn finish_stem(stem: &str) -> String {
    let mut stem = clean_part(stem);
    stem.truncate(MAX_STEM_LENGTH);
    let stem = stem.trim_end_matches(['.', '_']);
    if stem.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        stem.to_string()
    }
}

/// Keep portable characters, collapse dot runs, trim `.`/`_` at the edges.
fn clean_part(part: &str) -> String {
    let mut cleaned = String::with_capacity(part.len());
    for c in part.chars() {
        if !(c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')) {
            continue;
        }
        if c == '.' && cleaned.ends_with('.') {
            continue;
        }
        cleaned.push(c);
    }
    cleaned.trim_matches(['.', '_']).to_string()
}
