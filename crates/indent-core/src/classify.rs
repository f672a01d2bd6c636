//! Line classification.
//!
//! Classification is intentionally syntactic and line-local: no parser, no brace-depth
//! counter. That trades precision for robustness against partially-typed or malformed
//! code, and lets the same classifier serve any brace language via [`IndentConfig`].

use indent_core_lang::IndentConfig;
use regex::Regex;

/// How a single line's active part reads for indentation purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// The active part ends with `{`.
    BlockBegin,
    /// The active part starts with `}`.
    BlockEnd,
    /// A label line: a configured keyword at the start, a trailing `:` at the end.
    Label,
    /// No indentation signal of its own.
    Plain,
}

impl LineClass {
    /// Block begins, block ends and labels tell us definitively what the indentation
    /// for the next line should be; plain lines inherit transitively.
    pub fn is_definitive(self) -> bool {
        !matches!(self, LineClass::Plain)
    }
}

/// Classifies lines using the tokens of one [`IndentConfig`].
#[derive(Debug, Clone)]
pub struct LineClassifier {
    config: IndentConfig,
    label_regex: Option<Regex>,
}

impl LineClassifier {
    /// Build a classifier, compiling the label pattern from the configured keywords.
    pub fn new(config: IndentConfig) -> Result<Self, regex::Error> {
        let label_regex = if config.label_keywords.is_empty() {
            None
        } else {
            let keywords = config
                .label_keywords
                .iter()
                .map(|k| regex::escape(k))
                .collect::<Vec<_>>()
                .join("|");
            Some(Regex::new(&format!("^(?:{keywords})\\b.*:$"))?)
        };
        Ok(Self {
            config,
            label_regex,
        })
    }

    /// The configuration this classifier was built from.
    pub fn config(&self) -> &IndentConfig {
        &self.config
    }

    /// That part of a raw line that isn't leading/trailing whitespace or trailing
    /// line comment.
    ///
    /// The comment is stripped after trimming and the result is not re-trimmed, so
    /// whitespace before the comment marker survives: `"x { // c"` yields `"x { "`,
    /// which is not a block begin. Total over all inputs; empty is valid.
    pub fn active_part_of(&self, raw_line: &str) -> String {
        let trimmed = raw_line.trim();
        match self.config.line_comment.as_deref() {
            Some(token) if !token.is_empty() => match trimmed.find(token) {
                Some(pos) => trimmed[..pos].to_string(),
                None => trimmed.to_string(),
            },
            _ => trimmed.to_string(),
        }
    }

    /// True iff the active part ends with an opening brace.
    pub fn is_block_begin(&self, active_part: &str) -> bool {
        active_part.ends_with('{')
    }

    /// True iff the active part starts with a closing brace.
    pub fn is_block_end(&self, active_part: &str) -> bool {
        active_part.starts_with('}')
    }

    /// True iff the active part is a label: a configured keyword as a whole word at the
    /// start, anything in between, and a trailing `:`.
    pub fn is_label(&self, active_part: &str) -> bool {
        self.label_regex
            .as_ref()
            .is_some_and(|re| re.is_match(active_part))
    }

    /// Classify an active part.
    pub fn classify(&self, active_part: &str) -> LineClass {
        if self.is_block_begin(active_part) {
            LineClass::BlockBegin
        } else if self.is_block_end(active_part) {
            LineClass::BlockEnd
        } else if self.is_label(active_part) {
            LineClass::Label
        } else {
            LineClass::Plain
        }
    }

    /// True iff the raw line carries a direct indentation signal.
    ///
    /// Operates on the trimmed line with the comment still attached. Going back to the
    /// nearest such line keeps us tidy in the face of multi-line comment styles,
    /// multi-line expressions and preprocessor commands.
    pub fn is_definitive(&self, raw_line: &str) -> bool {
        let trimmed = raw_line.trim();
        self.is_block_begin(trimmed) || self.is_block_end(trimmed) || self.is_label(trimmed)
    }

    /// True for characters whose insertion should trigger an immediate re-indent.
    ///
    /// Classification only; acting on it is the editor's job.
    pub fn is_electric(&self, c: char) -> bool {
        self.config.is_electric(c)
    }
}
