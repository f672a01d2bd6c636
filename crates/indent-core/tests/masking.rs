use indent_core::{MaskedText, Style, StyleSpan, matching_bracket_offset};

/// A crude one-pass lexer over a single line: good enough to produce realistic span
/// sequences (comments and string literals) for the mask.
fn lex_line(text: &str) -> Vec<StyleSpan> {
    let chars: Vec<char> = text.chars().collect();
    let mut spans = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '"' {
            let start = i;
            i += 1;
            while i < chars.len() && chars[i] != '"' {
                i += 1;
            }
            i = (i + 1).min(chars.len());
            spans.push(StyleSpan::new(Style::String, start, i));
        } else if chars[i] == '/' && chars.get(i + 1) == Some(&'*') {
            let start = i;
            i += 2;
            while i < chars.len() && !(chars[i] == '*' && chars.get(i + 1) == Some(&'/')) {
                i += 1;
            }
            i = (i + 2).min(chars.len());
            spans.push(StyleSpan::new(Style::Comment, start, i));
        } else {
            i += 1;
        }
    }
    spans
}

#[test]
fn test_masked_view_preserves_length_and_offsets() {
    let text = r#"f("{") /* } */ {}"#;
    let spans = lex_line(text);
    let masked = MaskedText::new(text, spans);

    assert_eq!(masked.len(), text.chars().count());
    for (offset, original) in text.chars().enumerate() {
        let c = masked.char_at(offset).unwrap();
        assert!(c == original || c == ' ');
    }
}

#[test]
fn test_bracket_matching_ignores_comments_and_strings() {
    //          0         1
    //          0123456789012345678
    let text = r#"f("{") /* } */ {}"#;
    let spans = lex_line(text);
    let masked = MaskedText::new(text, spans);

    // The string and comment braces are blanked; the paren pair still matches.
    assert_eq!(matching_bracket_offset(&masked, 1), Some(5));
    // The code-level brace pair at the end matches each other, not the masked ones.
    assert_eq!(matching_bracket_offset(&masked, 15), Some(16));
    assert_eq!(matching_bracket_offset(&masked, 16), Some(15));
    // The brace inside the string is a space now; no match from there.
    assert_eq!(matching_bracket_offset(&masked, 3), None);
}

#[test]
fn test_unterminated_string_masks_to_end() {
    let text = r#"x = "oops {"#;
    let masked = MaskedText::new(text, lex_line(text));

    assert_eq!(matching_bracket_offset(&masked, 10), None);
    assert_eq!(masked.char_at(10), Some(' '));
}

#[test]
fn test_spans_accepted_from_lazy_iterator() {
    // The span source is consumed once, in order, as produced.
    let text = "{abc}";
    let spans = (1..4).map(|i| StyleSpan::new(Style::Comment, i, i + 1));
    let masked = MaskedText::new(text, spans);

    assert_eq!(masked.chars().iter().collect::<String>(), "{   }");
    assert_eq!(matching_bracket_offset(&masked, 0), Some(4));
}

#[test]
fn test_sub_sequence_fails_rather_than_shifting_offsets() {
    let masked = MaskedText::new("{}", []);
    assert!(masked.sub_sequence(1, 2).is_err());
}
