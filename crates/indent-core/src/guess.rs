//! Indent-unit guessing.
//!
//! Editors pick the indent unit per buffer when a file is opened, so that re-indenting
//! matches whatever convention the file already uses instead of fighting it. The guess
//! assumes an environment where indentation is reasonably consistent; mixed files get
//! whatever convention dominates.

use indent_core_lang::IndentUnit;
use std::collections::HashMap;

/// Guess the indent unit used by `text`, falling back to `fallback` when the content
/// carries no signal (empty file, nothing indented).
///
/// Any tab-indented line makes the whole file tab-indented. Otherwise the most common
/// increase in leading-space count between consecutive non-blank lines wins, with ties
/// going to the narrower unit.
pub fn guess_indent_unit(text: &str, fallback: &IndentUnit) -> IndentUnit {
    let mut delta_counts: HashMap<usize, usize> = HashMap::new();
    let mut previous_depth = 0usize;

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        if line.starts_with('\t') {
            return IndentUnit::tab();
        }
        let depth = line.chars().take_while(|&c| c == ' ').count();
        if depth > previous_depth {
            *delta_counts.entry(depth - previous_depth).or_insert(0) += 1;
        }
        previous_depth = depth;
    }

    delta_counts
        .into_iter()
        // Highest count wins; among equals, the narrower unit.
        .max_by(|(a_delta, a_count), (b_delta, b_count)| {
            a_count.cmp(b_count).then(b_delta.cmp(a_delta))
        })
        .map(|(delta, _)| IndentUnit::spaces(delta))
        .unwrap_or_else(|| fallback.clone())
}
