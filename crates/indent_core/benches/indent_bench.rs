use criterion::{Criterion, black_box, criterion_group, criterion_main};
use indent_core::{IndentUnit, SelectionRange, indent, outdent};

const SMALL_LINES: usize = 64;
const LARGE_LINES: usize = 20_000;

fn make_lines(lines: usize) -> String {
    let mut text = String::with_capacity(lines * 24);
    for i in 0..lines {
        text.push_str("\tlet value = ");
        text.push_str(&i.to_string());
        text.push_str(";\n");
    }
    text
}

fn bench_indent_caret(c: &mut Criterion) {
    let input = make_lines(LARGE_LINES);
    let unit = IndentUnit::tab();
    let caret = SelectionRange::caret(input.len() / 2);
    c.bench_function("bench_indent_caret", |b| {
        b.iter(|| {
            let edit = indent(black_box(&input), caret, &unit);
            black_box(edit.selection);
        });
    });
}

fn bench_indent_all_small(c: &mut Criterion) {
    let input = make_lines(SMALL_LINES);
    let unit = IndentUnit::tab();
    let all = SelectionRange::new(0, input.len());
    c.bench_function("bench_indent_all_small", |b| {
        b.iter(|| {
            let edit = indent(black_box(&input), all, &unit);
            black_box(edit.lines_changed);
        });
    });
}

fn bench_indent_all_large(c: &mut Criterion) {
    let input = make_lines(LARGE_LINES);
    let unit = IndentUnit::tab();
    let all = SelectionRange::new(0, input.len());
    c.bench_function("bench_indent_all_large", |b| {
        b.iter(|| {
            let edit = indent(black_box(&input), all, &unit);
            black_box(edit.lines_changed);
        });
    });
}

fn bench_outdent_all_small(c: &mut Criterion) {
    let input = make_lines(SMALL_LINES);
    let unit = IndentUnit::tab();
    let all = SelectionRange::new(0, input.len());
    c.bench_function("bench_outdent_all_small", |b| {
        b.iter(|| {
            let edit = outdent(black_box(&input), all, &unit);
            black_box(edit.lines_changed);
        });
    });
}

criterion_group!(
    benches,
    bench_indent_caret,
    bench_indent_all_small,
    bench_indent_all_large,
    bench_outdent_all_small
);
criterion_main!(benches);
