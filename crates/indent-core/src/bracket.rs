//! Bracket matching over a masked view.
//!
//! Scans run on a [`MaskedText`] rather than raw text, so brackets inside comments and
//! strings are spaces by the time we see them and never match.

use crate::mask::MaskedText;

/// Returns `true` for `(`, `[`, `{`.
pub fn is_open_bracket(c: char) -> bool {
    matches!(c, '(' | '[' | '{')
}

/// Returns `true` for `)`, `]`, `}`.
pub fn is_close_bracket(c: char) -> bool {
    matches!(c, ')' | ']' | '}')
}

/// The matching partner of a bracket character, `None` for anything else.
pub fn partner_of(c: char) -> Option<char> {
    match c {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        ')' => Some('('),
        ']' => Some('['),
        '}' => Some('{'),
        _ => None,
    }
}

/// The offset of the bracket matching the one at `offset`, or `None` if `offset` does
/// not hold a bracket or the buffer is unbalanced.
///
/// Open brackets scan forward, close brackets scan backward, counting nesting depth of
/// the same bracket kind only.
pub fn matching_bracket_offset(masked: &MaskedText, offset: usize) -> Option<usize> {
    let bracket = masked.char_at(offset)?;
    let partner = partner_of(bracket)?;

    let mut depth = 1usize;
    if is_open_bracket(bracket) {
        for i in offset + 1..masked.len() {
            let c = masked.char_at(i)?;
            if c == bracket {
                depth += 1;
            } else if c == partner {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
        }
        None
    } else {
        for i in (0..offset).rev() {
            let c = masked.char_at(i)?;
            if c == bracket {
                depth += 1;
            } else if c == partner {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
        }
        None
    }
}
