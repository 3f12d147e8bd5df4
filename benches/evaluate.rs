//! This bench test evaluates a large catalog of deep requirement trees
//! against a candidate.

#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use eligibility::{Company, Possessions, Requirement, eligibility::evaluate_eligibility};

/// Builds an AND of ORs, `depth` levels deep, with `width` children per node.
fn tree(depth: usize, width: usize, prefix: &str) -> Requirement {
    if depth == 0 {
        return Requirement::simple(prefix).unwrap();
    }
    let children = (0..width)
        .map(|i| tree(depth - 1, width, &format!("{prefix}-{i}")))
        .collect();
    if depth % 2 == 0 {
        Requirement::all(children).unwrap()
    } else {
        Requirement::any(children).unwrap()
    }
}

fn catalog() -> Vec<Company> {
    (0..100)
        .map(|i| Company::new(&format!("Company {i}"), Some(tree(4, 4, "item"))).unwrap())
        .collect()
}

fn evaluate(c: &mut Criterion) {
    let companies = catalog();
    let possessions: Possessions = (0..4)
        .flat_map(|a| (0..4).map(move |b| format!("item-{a}-{b}-0-0")))
        .collect();

    c.bench_function("evaluate catalog", |b| {
        b.iter(|| evaluate_eligibility(&companies, &possessions));
    });
}

criterion_group!(benches, evaluate);
criterion_main!(benches);
