//! Line-oriented buffer access.
//!
//! The indentation engine is read-only over whatever text store the host editor uses; it
//! only needs random-access line lookup. [`LineBuffer`] is that seam, and [`TextBuffer`]
//! is a Rope-backed implementation for hosts (and tests) that don't bring their own.

use ropey::Rope;

/// Random-access line lookup consumed by the indentation engine.
///
/// Implementations must not be mutated concurrently with an engine query; the engine
/// computes everything fresh from the buffer on every call and caches nothing.
pub trait LineBuffer {
    /// Total line count. An empty buffer has one (empty) line.
    fn line_count(&self) -> usize;

    /// Text of the given line, excluding the trailing newline. `None` if out of range.
    fn line_text(&self, line_number: usize) -> Option<String>;

    /// The leading whitespace of the given line, i.e. its current indentation.
    ///
    /// Out-of-range lines yield the empty string.
    fn leading_whitespace_of(&self, line_number: usize) -> String {
        let Some(text) = self.line_text(line_number) else {
            return String::new();
        };
        text.chars().take_while(|c| c.is_whitespace()).collect()
    }
}

/// Rope-backed text buffer.
///
/// Rope gives O(log n) line access, which keeps the engine's backward definitive-line
/// scan cheap on large files. Mutation belongs to the host editor; the engine never
/// writes.
pub struct TextBuffer {
    rope: Rope,
}

impl TextBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Build a buffer from text.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Build a buffer from lines, joined with `\n`.
    pub fn from_lines(lines: &[&str]) -> Self {
        Self::from_text(&lines.join("\n"))
    }

    /// Get complete text.
    pub fn get_text(&self) -> String {
        self.rope.to_string()
    }

    /// Get text of the specified line (excluding newline).
    pub fn get_line_text(&self, line_number: usize) -> Option<String> {
        if line_number >= self.rope.len_lines() {
            return None;
        }

        let mut text = self.rope.line(line_number).to_string();

        // Remove trailing newline
        if text.ends_with('\n') {
            text.pop();
        }
        if text.ends_with('\r') {
            text.pop();
        }

        Some(text)
    }

    /// Get total character count.
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// Insert text at the specified character offset.
    pub fn insert(&mut self, char_offset: usize, text: &str) {
        let char_offset = char_offset.min(self.rope.len_chars());
        self.rope.insert(char_offset, text);
    }

    /// Delete a character range.
    pub fn delete(&mut self, start_char: usize, len_chars: usize) {
        let start_char = start_char.min(self.rope.len_chars());
        let end_char = (start_char + len_chars).min(self.rope.len_chars());

        if start_char < end_char {
            self.rope.remove(start_char..end_char);
        }
    }

    /// Character offset of the start of the given line.
    pub fn line_to_char_offset(&self, line_number: usize) -> usize {
        if line_number >= self.rope.len_lines() {
            return self.rope.len_chars();
        }
        self.rope.line_to_char(line_number)
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBuffer for TextBuffer {
    fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    fn line_text(&self, line_number: usize) -> Option<String> {
        self.get_line_text(line_number)
    }
}
