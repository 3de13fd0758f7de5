//! Comparison of declared fn tags against their canonical form.
//!
//! The reconciler performs no I/O: it turns parsed units into findings and,
//! in correction mode, an edit list for the text patcher.

use std::fmt;

use tracing::debug;

use super::naming::CanonicalTag;
use crate::core::errors::Result;
use crate::io::patch::Edit;
use crate::lang::common::SourceUnit;

/// A declared tag that matches neither the canonical nor a legacy form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// File identity as printed
    pub file_path: String,
    /// 1-based line of the tag literal
    pub line: usize,
    /// Declared function or method name
    pub declaration: String,
    /// Tag found in the source
    pub found: String,
    /// Canonical tag it should be
    pub expected: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} Incorrect fn tag {}. Should be {}",
            self.file_path,
            self.line,
            go_quote(&self.found),
            go_quote(&self.expected)
        )
    }
}

/// Outcome of reconciling a set of source units
#[derive(Debug, Default)]
pub struct Reconciliation {
    /// Mismatches in discovery order
    pub findings: Vec<Finding>,
    /// Planned corrections (empty unless correcting)
    pub edits: Vec<Edit>,
    /// Number of tagged declarations examined
    pub checked: usize,
    /// Tags accepted only under an older naming scheme
    pub legacy: usize,
}

/// Compares declared tags with canonical tags
#[derive(Debug, Clone, Copy, Default)]
pub struct Reconciler {
    correct: bool,
}

impl Reconciler {
    /// Create a reconciler; `correct` plans edits for every non-canonical tag
    pub fn new(correct: bool) -> Self {
        Self { correct }
    }

    /// Reconcile every tagged declaration of `units`, in order.
    ///
    /// An unsupported receiver on any tagged declaration fails the whole
    /// reconciliation before anything is reported.
    pub fn reconcile(&self, units: &[SourceUnit]) -> Result<Reconciliation> {
        let mut outcome = Reconciliation::default();

        for (unit_index, unit) in units.iter().enumerate() {
            for (identity, tag) in unit.tagged() {
                let canonical = CanonicalTag::derive(identity)?;
                outcome.checked += 1;

                if canonical.is_primary(&tag.value) {
                    continue;
                }

                if canonical.accepts(&tag.value) {
                    outcome.legacy += 1;
                    debug!(
                        file = %unit.display_path,
                        line = tag.location.line,
                        tag = %tag.value,
                        canonical = %canonical.primary,
                        scheme = canonical.scheme,
                        "legacy fn tag"
                    );
                } else {
                    debug!(
                        file = %unit.display_path,
                        line = tag.location.line,
                        tag = %tag.value,
                        canonical = %canonical.primary,
                        "incorrect fn tag"
                    );
                    outcome.findings.push(Finding {
                        file_path: unit.display_path.clone(),
                        line: tag.location.line,
                        declaration: identity.name.clone(),
                        found: tag.value.clone(),
                        expected: canonical.primary.clone(),
                    });
                }

                if self.correct {
                    outcome.edits.push(Edit {
                        unit: unit_index,
                        span: tag.location.byte_range.clone(),
                        replacement: go_quote(&canonical.primary),
                    });
                }
            }
        }

        Ok(outcome)
    }
}

/// Quote a string the way Go's `%q` verb does for printable text.
pub fn go_quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            '\r' => quoted.push_str("\\r"),
            '\u{07}' => quoted.push_str("\\a"),
            '\u{08}' => quoted.push_str("\\b"),
            '\u{0b}' => quoted.push_str("\\v"),
            '\u{0c}' => quoted.push_str("\\f"),
            c if c.is_control() && (c as u32) < 0x80 => {
                quoted.push_str(&format!("\\x{:02x}", c as u32));
            }
            c if c.is_control() => quoted.push_str(&format!("\\u{:04x}", c as u32)),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
