#![warn(missing_docs)]
//! Indent Core - Headless Indentation Engine
//!
//! # Overview
//!
//! `indent-core` decides what leading whitespace a line of code should have, without
//! parsing the language. It classifies nearby lines as block begins (`... {`), block
//! ends (`} ...`) or labels (`case ...:`), walks backward to the nearest such
//! "definitive" line, and derives the target line's indentation from it. A companion
//! style-masked view lets structural scans (bracket matching) ignore text inside
//! comments and strings without re-lexing.
//!
//! The engine is headless: it renders nothing, owns no buffer, and performs no I/O.
//! The host editor owns the text, decides *when* to re-indent (on newline, on an
//! electric character, on an explicit reformat command), and applies the returned
//! string.
//!
//! # Core Features
//!
//! - **Definitive-line resolution**: single backward scan, no parser, no brace counter
//! - **Language-aware classification**: comment token, label keywords and electric
//!   characters come from `indent-core-lang` configuration
//! - **Style masking**: offset-preserving view for bracket matching through
//!   comments/strings
//! - **Indent-unit guessing**: pick tab vs N-spaces from existing file content
//!
//! # Quick Start
//!
//! ```rust
//! use indent_core::{Indenter, TextBuffer};
//! use indent_core_lang::{IndentConfig, IndentUnit};
//!
//! let indenter = Indenter::new(IndentConfig::c_family()).unwrap();
//! let buffer = TextBuffer::from_text("if (x) {\nreturn 1;\n}");
//!
//! let unit = IndentUnit::tab();
//! assert_eq!(indenter.indentation_for(&buffer, 1, &unit).unwrap(), "\t");
//! assert_eq!(indenter.indentation_for(&buffer, 2, &unit).unwrap(), "");
//! ```
//!
//! # Module Description
//!
//! - [`line_buffer`] - line-oriented buffer access ([`LineBuffer`] seam + Rope-backed
//!   [`TextBuffer`])
//! - [`classify`] - active-part extraction and line classification
//! - [`indent`] - backward definitive-line search and the indentation resolver
//! - [`mask`] - style-masked character view
//! - [`bracket`] - bracket matching over the masked view
//! - [`guess`] - indent-unit guessing from file content
//!
//! # Concurrency
//!
//! Every operation is a pure function over the buffer at call time; nothing is cached
//! between calls. Callers must not mutate a buffer concurrently with a query that reads
//! it; there is no internal locking. Worst-case cost is bounded by file length, so
//! hosts editing very large files should debounce queries after edits.

pub mod bracket;
pub mod classify;
pub mod guess;
pub mod indent;
pub mod line_buffer;
pub mod mask;

pub use bracket::{is_close_bracket, is_open_bracket, matching_bracket_offset, partner_of};
pub use classify::{LineClass, LineClassifier};
pub use guess::guess_indent_unit;
pub use indent::{IndentError, Indenter, decrease_indentation, increase_indentation};
pub use line_buffer::{LineBuffer, TextBuffer};
pub use mask::{MaskError, MaskedText, Style, StyleSpan};
