use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use fake_artist_rs::{CsvVocabulary, FakeArtist};

fn full_round(vocabulary: &CsvVocabulary, num_players: usize) {
    let mut rng = Pcg64Mcg::seed_from_u64(num_players as u64);
    let mut game =
        black_box(FakeArtist::new(num_players, vocabulary.clone()).unwrap());

    game.deal_new_cards(&mut rng).unwrap();

    for _ in 0..num_players * 2 {
        game.next_cycle_item().unwrap();
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let vocabulary = CsvVocabulary::from_path("data/words.csv").unwrap();

    let mut group = c.benchmark_group("full_round");
    for num_players in 3..=6usize {
        group.bench_with_input(
            BenchmarkId::from_parameter(num_players),
            &num_players,
            |b, &num_players| b.iter(|| full_round(&vocabulary, num_players)),
        );
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
