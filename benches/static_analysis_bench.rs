use cai_check::ai::interpret_response;
use cai_check::analyzers::{analyze_paths, analyze_source};
use cai_check::comparison::reconcile;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::path::PathBuf;
use tempfile::TempDir;

fn generate_source(functions: usize) -> String {
    let mut content = String::from("#include <stdio.h>\n\n");
    for i in 0..functions {
        content.push_str(&format!(
            r#"
// function {i}
int func_{i}(int *data, int n) {{
    int sum = 0;
    for (int k = 0; k < n; k++) {{
        if (data[k] > {i} && data[k] < {limit}) {{
            sum += data[k];
        }} else if (data[k] == 0 || sum > {limit}) {{
            sum = sum > 0 ? sum - 1 : 0;
        }}
    }}
    switch (n) {{
        case 0: return 0;
        case 1: return sum;
    }}
    return sum;
}}
"#,
            limit = i * 10 + 100,
        ));
    }
    content
}

fn create_test_project(files: usize) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let src_dir = temp_dir.path().join("src");
    std::fs::create_dir_all(&src_dir).unwrap();
    for i in 0..files {
        std::fs::write(src_dir.join(format!("module_{i}.c")), generate_source(20)).unwrap();
    }
    let path = temp_dir.path().to_path_buf();
    (temp_dir, path)
}

fn benchmark_analyze_source(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_source");
    for functions in [10, 100, 1000] {
        let source = generate_source(functions);
        group.bench_with_input(BenchmarkId::from_parameter(functions), &source, |b, src| {
            b.iter(|| analyze_source(black_box(src)))
        });
    }
    group.finish();
}

fn benchmark_analyze_paths(c: &mut Criterion) {
    let (_temp_dir, path) = create_test_project(50);
    c.bench_function("analyze_paths_50_files", |b| {
        b.iter(|| analyze_paths(black_box(&[path.clone()])).unwrap())
    });
}

fn benchmark_reconcile(c: &mut Criterion) {
    let report = analyze_source(&generate_source(10));
    let reply = "Here you go:\n```json\n{\"loc\": 140, \"complexity1\": 71, \"c2\": 70, \"notes\": [\"loops\"]}\n```";
    c.bench_function("interpret_and_reconcile", |b| {
        b.iter(|| reconcile(black_box(&report), &interpret_response(black_box(reply))))
    });
}

criterion_group!(
    benches,
    benchmark_analyze_source,
    benchmark_analyze_paths,
    benchmark_reconcile
);
criterion_main!(benches);
