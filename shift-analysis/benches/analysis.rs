use criterion::{black_box, criterion_group, criterion_main, Criterion};
use shift_analysis::{examine, Analyzer, Caesar, Cipher, Distribution, Vigenere};

const PLAINTEXT: &str = include_str!("../tests/data/gettysburg.txt");

fn bench_distribution(c: &mut Criterion) {
    c.bench_function("distribution", |b| {
        b.iter(|| Distribution::of(black_box(PLAINTEXT)))
    });
}

fn bench_decode_shift(c: &mut Criterion) {
    let analyzer = Analyzer::default();
    let ciphertext = Caesar::new(11).unwrap().encrypt(PLAINTEXT);

    c.bench_function("decode_shift", |b| {
        b.iter(|| analyzer.decode_shift(black_box(&ciphertext)))
    });
}

fn bench_kasiski(c: &mut Criterion) {
    let ciphertext = Vigenere::new("liberty").unwrap().encrypt(PLAINTEXT);

    c.bench_function("kasiski", |b| b.iter(|| examine(black_box(&ciphertext))));
}

fn bench_decode_vigenere(c: &mut Criterion) {
    let analyzer = Analyzer::default();
    let ciphertext = Vigenere::new("liberty").unwrap().encrypt(PLAINTEXT);

    c.bench_function("decode_vigenere", |b| {
        b.iter(|| analyzer.decode_vigenere(black_box(&ciphertext)))
    });
}

criterion_group!(
    benches,
    bench_distribution,
    bench_decode_shift,
    bench_kasiski,
    bench_decode_vigenere
);
criterion_main!(benches);
