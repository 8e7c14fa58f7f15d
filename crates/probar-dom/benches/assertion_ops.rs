//! Assertion Operations Benchmarks
//!
//! Benchmarks for selector resolution, value matching, and full assertion calls
//! against the mock document.
//!
//! Run with: `cargo bench --bench assertion_ops`

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use probar_dom::prelude::*;
use serde_json::json;

fn fixture(items: usize) -> MockDocument {
    let mut html = String::from(r#"<div id="app"><h2 class="title">Welcome to <b>QUnit</b></h2><ul>"#);
    for i in 0..items {
        html.push_str(&format!(r#"<li class="item" data-index="{i}">Item {i}</li>"#));
    }
    html.push_str(r#"</ul><form><input id="name" value="Jane" required></form></div>"#);
    MockDocument::parse(&html)
}

fn bench_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolution");
    let doc = fixture(200);

    let selectors = vec![
        ("id", "#name"),
        ("class", ".item"),
        ("attribute", "[data-index=\"150\"]"),
        ("descendant", "div ul li.item"),
        ("child", "ul > li"),
        ("group", "h2, input, li"),
    ];

    for (name, selector) in selectors {
        group.bench_with_input(BenchmarkId::from_parameter(name), &selector, |bench, sel| {
            let target = Target::selector(*sel);
            bench.iter(|| {
                let resolved = probar_dom::resolve(&doc, black_box(&target), &doc.root()).unwrap();
                black_box(resolved.len());
            });
        });
    }

    group.finish();
}

fn bench_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("matching");
    let text = "Welcome to QUnit, the JavaScript testing framework";

    let specs = vec![
        ("literal", MatchSpec::literal(text)),
        ("pattern", MatchSpec::pattern(r"\bQUnit\b").unwrap()),
        ("any", MatchSpec::Any),
    ];

    for (name, spec) in specs {
        group.bench_with_input(BenchmarkId::from_parameter(name), &spec, |bench, spec| {
            bench.iter(|| black_box(spec.matches(black_box(Some(text)))));
        });
    }

    group.finish();
}

fn bench_assertions(c: &mut Criterion) {
    let mut group = c.benchmark_group("assertions");

    for items in [10usize, 100, 1000] {
        let doc = fixture(items);
        group.bench_with_input(BenchmarkId::new("exists_count", items), &items, |bench, n| {
            bench.iter(|| {
                let mut sink: Vec<AssertionResult> = Vec::new();
                let result = assert_dom(&doc, &mut sink, "li.item")
                    .exists_with(ExistsOptions::count(*n), None)
                    .unwrap();
                black_box(result.passed);
            });
        });
    }

    let doc = fixture(50);
    group.bench_function("has_text", |bench| {
        bench.iter(|| {
            let mut sink: Vec<AssertionResult> = Vec::new();
            let result = assert_dom(&doc, &mut sink, "h2.title")
                .has_text(black_box("Welcome to QUnit"), None)
                .unwrap();
            black_box(result.passed);
        });
    });

    group.bench_function("dynamic_call", |bench| {
        let args = [json!("required")];
        bench.iter(|| {
            let mut sink: Vec<AssertionResult> = Vec::new();
            let result = assert_dom(&doc, &mut sink, "#name")
                .call(black_box("hasAttribute"), &args)
                .unwrap();
            black_box(result.passed);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_resolution, bench_matching, bench_assertions);
criterion_main!(benches);
