// Criterion benchmarks for Kampus Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kampus_match::core::{calculate_compatibility, Ranker};
use kampus_match::models::Profile;

fn create_profile(id: usize) -> Profile {
    let zodiacs = ["Aries ♈", "Taurus ♉", "Gemini ♊", "Cancer ♋"];
    let mbtis = ["INFP", "ENFP", "ISTJ", "ESTP"];

    Profile {
        id: Some(id.to_string()),
        nickname: Some(format!("Anon {}", id)),
        interests: vec![
            "gaming".to_string(),
            "music".to_string(),
            format!("hobby-{}", id % 5),
        ],
        zodiac: Some(zodiacs[id % zodiacs.len()].to_string()),
        mbti: Some(mbtis[id % mbtis.len()].to_string()),
        self_intro: Some("gym rat, quiet cat person, loves coffee".to_string()),
        looking_for: Some("someone for gym and movie nights".to_string()),
        city: Some("Melaka Campus".to_string()),
        age: Some(19 + (id % 10) as u8),
    }
}

fn bench_calculate_compatibility(c: &mut Criterion) {
    let a = create_profile(1);
    let b = create_profile(2);

    c.bench_function("calculate_compatibility", |bench| {
        bench.iter(|| calculate_compatibility(black_box(Some(&a)), black_box(Some(&b))));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let ranker = Ranker::new();
    let subject = create_profile(0);

    let mut group = c.benchmark_group("ranking");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<Profile> = (1..=*candidate_count).map(create_profile).collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(candidate_count),
            candidate_count,
            |bench, _| {
                bench.iter(|| {
                    ranker.rank(
                        black_box(&subject),
                        black_box(candidates.clone()),
                        black_box(20),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_calculate_compatibility, bench_ranking);
criterion_main!(benches);
