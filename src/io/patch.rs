//! Text patching from an explicit edit list.

use std::ops::Range;

use crate::core::errors::{FnTagError, Result};

/// Replacement of a byte span in one source unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// Index of the unit in the session's unit list
    pub unit: usize,
    /// Byte span to replace
    pub span: Range<usize>,
    /// Replacement text
    pub replacement: String,
}

/// Applies non-overlapping edits to a source text
pub struct TextPatcher;

impl TextPatcher {
    /// Apply `edits` to `source`, returning the patched text.
    ///
    /// Edits may come in any order. Overlapping spans, spans past the end of
    /// the text, or spans that split a UTF-8 character are internal errors.
    pub fn apply<'e>(source: &str, edits: impl IntoIterator<Item = &'e Edit>) -> Result<String> {
        let mut ordered: Vec<&Edit> = edits.into_iter().collect();
        ordered.sort_by_key(|edit| edit.span.start);

        for pair in ordered.windows(2) {
            if pair[0].span.end > pair[1].span.start {
                return Err(FnTagError::internal(format!(
                    "overlapping edits at bytes {:?} and {:?}",
                    pair[0].span, pair[1].span
                )));
            }
        }

        let mut patched = source.to_string();
        for edit in ordered.iter().rev() {
            let span = edit.span.clone();
            if span.start > span.end
                || span.end > patched.len()
                || !patched.is_char_boundary(span.start)
                || !patched.is_char_boundary(span.end)
            {
                return Err(FnTagError::internal(format!(
                    "edit span {span:?} out of bounds for {} byte source",
                    source.len()
                )));
            }
            patched.replace_range(span, &edit.replacement);
        }

        Ok(patched)
    }
}
