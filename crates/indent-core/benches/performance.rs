use criterion::{Criterion, black_box, criterion_group, criterion_main};
use indent_core::{Indenter, MaskedText, Style, StyleSpan, TextBuffer, matching_bracket_offset};
use indent_core_lang::{IndentConfig, IndentUnit};

fn large_source(block_count: usize) -> String {
    let mut out = String::with_capacity(block_count * 96);
    for i in 0..block_count {
        out.push_str(&format!("void function_{i}() {{\n"));
        out.push_str("    int x = 0; // indent-core benchmark line\n");
        out.push_str("    x += 1;\n");
        out.push_str("}\n");
    }
    // Remove the final '\n' to avoid creating an extra trailing empty line.
    out.pop();
    out
}

fn bench_indentation_near_bottom(c: &mut Criterion) {
    let text = large_source(12_500); // 50k lines
    let buffer = TextBuffer::from_text(&text);
    let indenter = Indenter::new(IndentConfig::c_family()).unwrap();
    let unit = IndentUnit::spaces(4);

    // A plain line deep in the file: the backward scan stops at the nearest brace,
    // but the line lookups themselves go through the rope.
    let target = 49_998;
    c.bench_function("indentation_for/50k_lines_bottom", |b| {
        b.iter(|| {
            let indentation = indenter
                .indentation_for(black_box(&buffer), black_box(target), &unit)
                .unwrap();
            black_box(indentation);
        })
    });
}

fn bench_worst_case_backward_scan(c: &mut Criterion) {
    // No definitive line anywhere: the scan walks all the way to the top.
    let mut text = String::new();
    for i in 0..50_000 {
        text.push_str(&format!("x{i} = {i};\n"));
    }
    text.pop();
    let buffer = TextBuffer::from_text(&text);
    let indenter = Indenter::new(IndentConfig::c_family()).unwrap();
    let unit = IndentUnit::tab();

    c.bench_function("indentation_for/50k_lines_full_scan", |b| {
        b.iter(|| {
            let indentation = indenter
                .indentation_for(black_box(&buffer), black_box(49_999), &unit)
                .unwrap();
            black_box(indentation);
        })
    });
}

fn bench_masked_view_construction(c: &mut Criterion) {
    let text = large_source(12_500);
    // One comment span per block, like a lexer would emit.
    let spans: Vec<StyleSpan> = (0..12_500)
        .map(|i| StyleSpan::new(Style::Comment, i * 90 + 40, i * 90 + 70))
        .collect();

    c.bench_function("masked_view/50k_lines_build", |b| {
        b.iter(|| {
            let masked = MaskedText::new(black_box(&text), spans.iter().copied());
            black_box(masked.len());
        })
    });
}

fn bench_bracket_match_across_file(c: &mut Criterion) {
    let mut text = String::from("{\n");
    for _ in 0..25_000 {
        text.push_str("    call(); /* { */\n");
    }
    text.push('}');
    let open = 0;
    let spans: Vec<StyleSpan> = {
        // Mask every comment so the stray `{`s don't count.
        let chars: Vec<char> = text.chars().collect();
        let mut spans = Vec::new();
        let mut i = 0;
        while i < chars.len() {
            if chars[i] == '/' && chars.get(i + 1) == Some(&'*') {
                let start = i;
                while i < chars.len() && !(chars[i] == '*' && chars.get(i + 1) == Some(&'/')) {
                    i += 1;
                }
                i += 2;
                spans.push(StyleSpan::new(Style::Comment, start, i));
            } else {
                i += 1;
            }
        }
        spans
    };
    let masked = MaskedText::new(&text, spans);

    c.bench_function("bracket_match/25k_line_span", |b| {
        b.iter(|| {
            let partner = matching_bracket_offset(black_box(&masked), black_box(open));
            black_box(partner);
        })
    });
}

criterion_group!(
    benches,
    bench_indentation_near_bottom,
    bench_worst_case_backward_scan,
    bench_masked_view_construction,
    bench_bracket_match_across_file
);
criterion_main!(benches);
