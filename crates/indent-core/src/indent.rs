//! Definitive-line indentation resolution.
//!
//! Given a buffer and a target line, [`Indenter::indentation_for`] decides what leading
//! whitespace that line should have: it walks backward to the nearest definitive line
//! (block begin/end or label), inherits its indentation, and adjusts by one indent unit
//! for block/label boundaries. Everything is recomputed from the buffer on every call;
//! there is no cached index, so results can never go stale after an edit.

use crate::classify::LineClassifier;
use crate::line_buffer::LineBuffer;
use indent_core_lang::{IndentConfig, IndentUnit};
use regex::Regex;

/// Indentation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndentError {
    /// The requested line index is outside `[0, line_count)`. Caller error; the engine
    /// fails fast instead of clamping.
    LineOutOfRange {
        /// The requested line index.
        line: usize,
        /// The buffer's line count at call time.
        line_count: usize,
    },
}

impl std::fmt::Display for IndentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndentError::LineOutOfRange { line, line_count } => {
                write!(f, "Line {} out of range (0..{})", line, line_count)
            }
        }
    }
}

impl std::error::Error for IndentError {}

/// Append one indent unit to an indentation string.
pub fn increase_indentation(indentation: &str, unit: &IndentUnit) -> String {
    let mut out = String::with_capacity(indentation.len() + unit.as_str().len());
    out.push_str(indentation);
    out.push_str(unit.as_str());
    out
}

/// Remove one indent unit from the end of an indentation string, clamped at empty.
///
/// If the indentation doesn't end with the unit exactly (mixed tabs/spaces), the unit's
/// character count is removed instead.
pub fn decrease_indentation(indentation: &str, unit: &IndentUnit) -> String {
    if let Some(stripped) = indentation.strip_suffix(unit.as_str()) {
        return stripped.to_string();
    }
    let keep = indentation.chars().count().saturating_sub(unit.char_len());
    indentation.chars().take(keep).collect()
}

/// The indentation engine.
///
/// Holds a [`LineClassifier`] for one language configuration. Stateless across calls:
/// every query re-reads the buffer.
#[derive(Debug, Clone)]
pub struct Indenter {
    classifier: LineClassifier,
    comment_open_regex: Regex,
}

impl Indenter {
    /// Build an indenter for the given language configuration.
    pub fn new(config: IndentConfig) -> Result<Self, regex::Error> {
        Ok(Self {
            classifier: LineClassifier::new(config)?,
            // `/*` or `/**` alone on a line opens a doc comment.
            comment_open_regex: Regex::new(r"^/\*{1,2}$")?,
        })
    }

    /// The classifier this indenter uses.
    pub fn classifier(&self) -> &LineClassifier {
        &self.classifier
    }

    /// True for characters whose insertion should trigger an immediate re-indent of the
    /// current line. The editor decides when to act on this.
    pub fn is_electric(&self, c: char) -> bool {
        self.classifier.is_electric(c)
    }

    /// The nearest definitive line strictly before `start_line_number`, scanning in
    /// descending order. `None` means no definitive predecessor, i.e. the target sits at
    /// top-level scope.
    ///
    /// Unbounded scan: worst case O(line count) per query. Callers needing interactive
    /// performance on huge files should debounce rather than expect an early yield.
    pub fn previous_definitive_line(
        &self,
        buffer: &impl LineBuffer,
        start_line_number: usize,
    ) -> Option<usize> {
        (0..start_line_number.min(buffer.line_count()))
            .rev()
            .find(|&line_number| {
                buffer
                    .line_text(line_number)
                    .is_some_and(|text| self.classifier.is_definitive(&text))
            })
    }

    /// The indentation string `line_number` should have.
    ///
    /// Idempotent by construction: the result depends only on buffer content, never on a
    /// previous result, so reformatting an already-correct buffer changes nothing.
    pub fn indentation_for(
        &self,
        buffer: &impl LineBuffer,
        line_number: usize,
        unit: &IndentUnit,
    ) -> Result<String, IndentError> {
        let line_count = buffer.line_count();
        if line_number >= line_count {
            return Err(IndentError::LineOutOfRange {
                line: line_number,
                line_count,
            });
        }

        let mut indentation = String::new();

        if let Some(previous_definitive) = self.previous_definitive_line(buffer, line_number) {
            indentation = buffer.leading_whitespace_of(previous_definitive);

            let previous_raw = buffer.line_text(previous_definitive).unwrap_or_default();
            let active_part_of_previous = self.classifier.active_part_of(&previous_raw);
            if self.classifier.is_block_begin(&active_part_of_previous)
                || self.classifier.is_label(&active_part_of_previous)
            {
                indentation = increase_indentation(&indentation, unit);
            }
        }

        let raw_line = buffer.line_text(line_number).unwrap_or_default();
        let active_part = self.classifier.active_part_of(&raw_line);
        if self.classifier.is_block_end(&active_part) || self.classifier.is_label(&active_part) {
            indentation = decrease_indentation(&indentation, unit);
        }
        // FIXME: this is a pain for Perl/Ruby, where `#` is a comment rather than a
        // preprocessor directive. Preserved as-is; language-specific indenters override.
        if active_part.starts_with('#') {
            indentation.clear();
        }

        // Recognize doc comments, and help out with the ASCII art.
        if line_number > 0 {
            let previous_raw = buffer.line_text(line_number - 1).unwrap_or_default();
            let previous_line = previous_raw.trim();
            if previous_line.ends_with("*/") {
                // Whatever the previous line looks like, if it ends with a close of
                // comment, we're not in a comment, and should do nothing.
            } else if self.comment_open_regex.is_match(previous_line)
                || previous_line.starts_with("* ")
            {
                // We're in a doc comment.
                if active_part.starts_with("* ") || active_part.starts_with("*/") {
                    // The line already has the ASCII art, and just needs to be
                    // indented one space to line up the asterisks.
                    indentation.push(' ');
                } else {
                    indentation.push_str(" * ");
                }
            }
        }

        Ok(indentation)
    }
}
