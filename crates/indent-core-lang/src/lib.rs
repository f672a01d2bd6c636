#![warn(missing_docs)]
//! `indent-core-lang` - data-driven language configuration helpers for `indent-core`.
//!
//! This crate intentionally stays lightweight and does **not** depend on any parsing or
//! highlighting systems. It provides small structs that hosts can use to configure the
//! indentation engine in a language-aware way: which token starts a line comment, which
//! keywords introduce a label line, and which typed characters should trigger a re-indent.

/// Line-classification tokens for a given language.
///
/// The indentation engine uses this to strip trailing line comments and to recognize
/// label lines (`case ...:`, access specifiers, etc.). The stock C-family values are
/// available via [`IndentConfig::c_family`]; languages with a different comment marker
/// or label vocabulary construct their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentConfig {
    /// Line comment token (e.g. `//`). `None` disables comment stripping.
    pub line_comment: Option<String>,
    /// Keywords that, at the start of a line and followed by a trailing `:`, mark a label line.
    pub label_keywords: Vec<String>,
    /// Characters whose insertion should prompt the editor to re-indent the current line.
    pub electric_chars: Vec<char>,
}

impl IndentConfig {
    /// The stock configuration shared by C, C++, Java and similar brace languages.
    ///
    /// Line comments are `//`; labels are access specifiers and `switch` arms; typing
    /// `}`, `:` or `#` re-indents.
    pub fn c_family() -> Self {
        Self {
            line_comment: Some("//".to_string()),
            label_keywords: vec![
                "private".to_string(),
                "public".to_string(),
                "protected".to_string(),
                "case".to_string(),
                "default".to_string(),
            ],
            electric_chars: vec!['}', ':', '#'],
        }
    }

    /// Returns `true` if a line comment token is configured.
    pub fn has_line_comment(&self) -> bool {
        self.line_comment.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Returns `true` if `c` is one of the configured electric characters.
    pub fn is_electric(&self, c: char) -> bool {
        self.electric_chars.contains(&c)
    }
}

impl Default for IndentConfig {
    fn default() -> Self {
        Self::c_family()
    }
}

/// The whitespace string representing one level of indentation.
///
/// The unit is editor policy (a per-buffer property, often guessed from file content on
/// load); the engine only appends and removes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentUnit(String);

impl IndentUnit {
    /// One tab per level.
    pub fn tab() -> Self {
        Self("\t".to_string())
    }

    /// `n` spaces per level.
    pub fn spaces(n: usize) -> Self {
        Self(" ".repeat(n))
    }

    /// Use an arbitrary whitespace string as the unit.
    ///
    /// Non-whitespace input falls back to [`IndentUnit::tab`] rather than producing
    /// indentation that changes line content.
    pub fn from_str_lossy(unit: &str) -> Self {
        if !unit.is_empty() && unit.chars().all(|c| c == ' ' || c == '\t') {
            Self(unit.to_string())
        } else {
            Self::tab()
        }
    }

    /// The unit as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the unit in characters.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl Default for IndentUnit {
    fn default() -> Self {
        Self::tab()
    }
}
