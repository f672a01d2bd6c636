//! Style-masked text view.
//!
//! For structural scans (bracket matching), text inside comments and strings must not
//! participate: a `{` in a comment shouldn't match a `}` in code. [`MaskedText`] is a
//! read-only view over a buffer snapshot where every character covered by a
//! non-[`Style::Normal`] span is replaced with a space, preserving all offsets.
//!
//! Construction copies the whole text and walks every span, so it is a one-shot
//! operation; rebuild after edits rather than trying to patch it.

/// A lexical style tag for a buffer span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Plain code. Only normal-styled characters survive masking.
    Normal,
    /// Comment text (line or block).
    Comment,
    /// String or character literal.
    String,
    /// Keyword.
    Keyword,
    /// Preprocessor directive.
    Preprocessor,
    /// Lexically invalid text (unterminated literal, etc.).
    Error,
}

impl Style {
    /// Returns `true` for plain code.
    pub fn is_normal(self) -> bool {
        matches!(self, Style::Normal)
    }
}

/// A contiguous buffer range tagged with a lexical style.
///
/// Offsets are character offsets, half-open: `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSpan {
    /// The style of every character in the range.
    pub style: Style,
    /// Inclusive start character offset.
    pub start: usize,
    /// Exclusive end character offset.
    pub end: usize,
}

impl StyleSpan {
    /// Create a span over `[start, end)`.
    pub fn new(style: Style, start: usize, end: usize) -> Self {
        Self { style, start, end }
    }

    /// Check if the span contains a specific offset.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Length of the span in characters.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if the span is empty.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Masking errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// Sub-range extraction is not supported: a sub-view would shift offsets and break
    /// every caller that indexes into it.
    SubSequenceUnsupported {
        /// Requested start offset.
        start: usize,
        /// Requested end offset.
        end: usize,
    },
}

impl std::fmt::Display for MaskError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaskError::SubSequenceUnsupported { start, end } => {
                write!(f, "sub_sequence({}, {}) is not supported", start, end)
            }
        }
    }
}

impl std::error::Error for MaskError {}

/// A read-only character view that returns `' '` for uninteresting characters.
///
/// Length always equals the source text's character length exactly.
#[derive(Debug, Clone)]
pub struct MaskedText {
    chars: Vec<char>,
}

impl MaskedText {
    /// Build the masked view from a text snapshot and an ordered sequence of style
    /// spans covering it.
    ///
    /// Spans are clamped to the text length; normal-styled spans are left alone, so a
    /// sparse sequence carrying only the non-normal spans works too.
    pub fn new(text: &str, spans: impl IntoIterator<Item = StyleSpan>) -> Self {
        let mut chars: Vec<char> = text.chars().collect();
        for span in spans {
            if span.style.is_normal() {
                continue;
            }
            let end = span.end.min(chars.len());
            for c in &mut chars[span.start.min(end)..end] {
                *c = ' ';
            }
        }
        Self { chars }
    }

    /// Length in characters; equals the source text's character count.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` if the view is empty.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The character at `offset`, or `' '` if the original was inside a non-normal
    /// span. `None` past the end.
    pub fn char_at(&self, offset: usize) -> Option<char> {
        self.chars.get(offset).copied()
    }

    /// The masked characters, offset-for-offset with the source text.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Sub-range extraction. Always fails: see [`MaskError::SubSequenceUnsupported`].
    pub fn sub_sequence(&self, start: usize, end: usize) -> Result<Self, MaskError> {
        Err(MaskError::SubSequenceUnsupported { start, end })
    }
}
