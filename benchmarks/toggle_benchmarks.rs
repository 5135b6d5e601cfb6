#![allow(clippy::unwrap_used, clippy::expect_used)]

/// Toggle benchmarks: parse, toggle and serialize a page address
use criterion::{Criterion, criterion_group, criterion_main};
use std::fmt::Write;
use std::hint::black_box;
use tagfilter::{Address, Candidate, FILTER_KEY, FilterConfig, UrlSearchParams, toggle_filter};

/// Query with `filters` values under `i` interleaved with unrelated params
fn build_query(filters: usize) -> String {
    let mut query = String::from("?page=3&sort=date");
    for n in 0..filters {
        write!(query, "&i=tag{n}&x{n}=web+dev").unwrap();
    }
    query
}

fn bench_toggle(c: &mut Criterion) {
    let mut group = c.benchmark_group("toggle_filter");
    for filters in [1, 8, 64] {
        let query = UrlSearchParams::parse(&build_query(filters));
        let present = Candidate::new(&format!("tag{}", filters / 2)).unwrap();
        let absent = Candidate::new("missing").unwrap();

        group.bench_function(format!("remove/{filters}"), |b| {
            b.iter(|| toggle_filter(black_box(&query), FILTER_KEY, black_box(&present)));
        });
        group.bench_function(format!("add/{filters}"), |b| {
            b.iter(|| toggle_filter(black_box(&query), FILTER_KEY, black_box(&absent)));
        });
    }
    group.finish();
}

fn bench_address(c: &mut Criterion) {
    let config = FilterConfig::default();
    let href = format!("https://example.com/list{}#results", build_query(16));
    let candidate = Candidate::new("web dev").unwrap();

    c.bench_function("address_toggle", |b| {
        b.iter(|| {
            Address::parse(black_box(&href))
                .toggle(&config, &candidate)
                .into_target()
        });
    });
}

criterion_group!(benches, bench_toggle, bench_address);
criterion_main!(benches);
