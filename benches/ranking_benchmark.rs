use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scheme_finder::{
    core::{Profile, Scheme},
    ranking::{RandomJitter, SchemeRanker},
};

fn create_test_pool(count: usize) -> Vec<Scheme> {
    let categories = ["scholarship", "subsidy", "loan", "grant"];
    (0..count)
        .map(|i| {
            Scheme::new(format!("Test Scheme {}", i), categories[i % categories.len()])
                .with_amount(format!("₹{},000/year", i % 50))
                .with_eligibility("SC/ST/Women entrepreneurs, Family income below ₹8 Lakh")
        })
        .collect()
}

fn bench_rule_ranking(c: &mut Criterion) {
    let ranker = SchemeRanker::default();
    let profile = Profile::new("student", "sc", "female", "bpl");

    let pool_10 = create_test_pool(10);
    let pool_100 = create_test_pool(100);
    let pool_1000 = create_test_pool(1000);

    c.bench_function("rules_rank_10", |b| {
        b.iter(|| {
            black_box(ranker.rank_with(&profile, &pool_10, &mut RandomJitter::seeded(1)))
        });
    });

    c.bench_function("rules_rank_100", |b| {
        b.iter(|| {
            black_box(ranker.rank_with(&profile, &pool_100, &mut RandomJitter::seeded(1)))
        });
    });

    c.bench_function("rules_rank_1000", |b| {
        b.iter(|| {
            black_box(ranker.rank_with(&profile, &pool_1000, &mut RandomJitter::seeded(1)))
        });
    });
}

criterion_group!(benches, bench_rule_ranking);
criterion_main!(benches);
