use bitty_splitter::processing::split_records;
use bitty_splitter::rules::{RuleEntry, RuleSet};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn rule_set() -> RuleSet {
    RuleSet::from_entries(&[
        RuleEntry::new(".*,Rent,", r#"{"rowsToSplit":[2],"split":{"a":"0.30","b":"0.70"}}"#),
        RuleEntry::new(
            ".*,Utilities,",
            r#"{"rowsToSplit":[2],"dateCol":0,"dateSplit":{
                "h1":{"DateEnd":"2024-06-30","split":{"a":"0.5","b":"0.5"}},
                "h2":{"DateStart":"2024-06-30","split":{"b":"1"}}
            }}"#,
        ),
        RuleEntry::new(".*", r#"{"rowsToSplit":[],"split":{"shared":"1"}}"#),
    ])
    .unwrap_or_else(|e| panic!("bench rules: {e}"))
}

fn rows(n: usize) -> Vec<Vec<String>> {
    let categories = ["Rent", "Utilities", "Groceries"];
    std::iter::once(vec!["date".into(), "category".into(), "amount".into()])
        .chain((0..n).map(|i| {
            vec![
                format!("2024-{:02}-{:02}", i % 12 + 1, i % 28 + 1),
                categories[i % categories.len()].to_string(),
                format!("{}.{:02}", i % 1000, i % 100),
            ]
        }))
        .collect()
}

fn bench_split_records(c: &mut Criterion) {
    let rules = rule_set();
    let mut group = c.benchmark_group("split_records");
    for n in [1_000usize, 10_000] {
        let input = rows(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &input, |b, input| {
            b.iter(|| {
                let records = input.iter().cloned().map(Ok);
                black_box(split_records("bench.csv", records, &rules))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_split_records);
criterion_main!(benches);
