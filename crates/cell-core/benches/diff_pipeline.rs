use cell_core::{apply, edits_between};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn cell_body(line_count: usize) -> String {
    let mut out = String::with_capacity(line_count * 48);
    for i in 0..line_count {
        out.push_str(&format!("val field{i:04} = compute(input, {i})\n"));
    }
    out
}

fn bench_small_insert_in_large_cell(c: &mut Criterion) {
    let old = cell_body(500);
    let mut new = old.clone();
    new.insert_str(old.len() / 2, "// checkpoint\n");

    c.bench_function("edits_between/500_lines_small_insert", |b| {
        b.iter(|| black_box(edits_between(black_box(&old), black_box(&new))))
    });
}

fn bench_line_rewrite(c: &mut Criterion) {
    let old = cell_body(200);
    let new = old.replacen("compute(input, 100)", "reduce(buffer, 100)", 1);

    c.bench_function("edits_between/200_lines_line_rewrite", |b| {
        b.iter(|| black_box(edits_between(black_box(&old), black_box(&new))))
    });
}

fn bench_replay(c: &mut Criterion) {
    let old = cell_body(200);
    let new = old.replacen("val field0100", "val renamed0100", 1);
    let edits = edits_between(&old, &new);

    c.bench_function("apply/200_lines", |b| {
        b.iter(|| black_box(apply(black_box(&old), black_box(&edits)).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_small_insert_in_large_cell,
    bench_line_rewrite,
    bench_replay
);
criterion_main!(benches);
