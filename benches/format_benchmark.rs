//! Benchmark measuring the time to render settings profile element lists.
//!
//! Two list shapes are measured:
//! - **constraints**: setting constraints carrying every optional clause
//! - **mixed**: alternating constraints and profile references
//!
//! Each shape is rendered at 10, 100 and 1000 elements, with and without
//! keyword highlighting.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use settings_profile_sql::{
    FormatSettings, FormatSql, ProfileElement, ProfileElements, ProfileReference,
    SettingConstraint, Writability,
};
use std::hint::black_box;

const SIZES: [usize; 3] = [10, 100, 1000];

fn constraint(i: usize) -> ProfileElement {
    SettingConstraint::new(format!("custom.setting_{i}"))
        .value(i as u64)
        .min(0u64)
        .max(i as u64 * 2)
        .writability(Writability::ALL[i % Writability::ALL.len()])
        .into()
}

fn constraints(len: usize) -> ProfileElements {
    (0..len).map(constraint).collect()
}

fn mixed(len: usize) -> ProfileElements {
    let mut list: ProfileElements = (0..len)
        .map(|i| {
            if i % 2 == 0 {
                constraint(i)
            } else {
                ProfileReference::new(format!("profile {i}")).into()
            }
        })
        .collect();
    list.set_use_inherit_keyword(true);
    list
}

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");
    for len in SIZES {
        for (shape, list) in [("constraints", constraints(len)), ("mixed", mixed(len))] {
            for (mode, settings) in [
                ("plain", FormatSettings::default()),
                ("hilite", FormatSettings::highlighted()),
            ] {
                group.bench_with_input(
                    BenchmarkId::new(format!("{shape}/{mode}"), len),
                    &list,
                    |b, list| {
                        let mut sql = String::with_capacity(len * 64);
                        b.iter(|| {
                            sql.clear();
                            black_box(list).format_sql(settings, &mut sql).unwrap();
                            black_box(sql.len())
                        });
                    },
                );
            }
        }
    }
    group.finish();
}

criterion_group!(benches, bench_format);
criterion_main!(benches);
