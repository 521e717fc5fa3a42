//! Recovery properties over a longer English text

use shift_analysis::{
    examine, find_key_length, normalize, Analyzer, Caesar, Cipher, Distribution, Vigenere,
};

const PLAINTEXT: &str = include_str!("data/gettysburg.txt");

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .without_time()
        .with_test_writer()
        .try_init();
}

#[test]
fn test_shift_recovers_every_offset() {
    init_tracing();
    let analyzer = Analyzer::default();
    let expected = PLAINTEXT.to_lowercase();

    for offset in 0..26 {
        let ciphertext = Caesar::new(offset).unwrap().encrypt(PLAINTEXT);
        let solution = analyzer.decode_shift(&ciphertext).unwrap();

        assert_eq!(solution.offset, offset);
        assert_eq!(solution.plaintext, expected);
    }
}

#[test]
fn test_shift_round_trip_on_lowercase_letters() {
    let analyzer = Analyzer::default();
    let letters = normalize(PLAINTEXT);

    for offset in [1, 9, 17, 24] {
        let ciphertext = Caesar::new(offset).unwrap().encrypt(&letters);
        let solution = analyzer.decode_shift(&ciphertext).unwrap();
        assert_eq!((solution.plaintext, solution.offset), (letters.clone(), offset));
    }
}

#[test]
fn test_shift_keeps_non_letters() {
    let ciphertext = Caesar::new(19).unwrap().encrypt(PLAINTEXT);
    let solution = Analyzer::default().decode_shift(&ciphertext).unwrap();

    let skeleton = |text: &str| -> Vec<(usize, char)> {
        text.chars()
            .enumerate()
            .filter(|(_, c)| !c.is_ascii_alphabetic())
            .collect()
    };
    assert_eq!(skeleton(&solution.plaintext), skeleton(&ciphertext));
}

#[test]
fn test_vigenere_recovers_key_and_plaintext() {
    init_tracing();
    let analyzer = Analyzer::default();
    let expected = PLAINTEXT.to_lowercase();

    for key in ["lemon", "abc", "liberty", "key", "go"] {
        let ciphertext = Vigenere::new(key).unwrap().encrypt(PLAINTEXT);
        let solution = analyzer.decode_vigenere(&ciphertext).unwrap();

        assert_eq!(solution.key, key);
        assert_eq!(solution.plaintext, expected);
    }
}

#[test]
fn test_kasiski_finds_key_length_or_divisor() {
    for key in ["lemon", "cipher", "liberty", "secret", "dice"] {
        let ciphertext = Vigenere::new(key).unwrap().encrypt(PLAINTEXT);
        let key_length = find_key_length(&ciphertext).unwrap();

        assert!(
            key.len() % key_length == 0 || key_length % key.len() == 0,
            "key {} gave length {}",
            key,
            key_length
        );
        assert!(examine(&ciphertext).repeats.len() >= 3);
    }
}

#[test]
fn test_known_key_length_recovers_even_keys() {
    let analyzer = Analyzer::default();

    for key in ["cipher", "secret", "nation"] {
        let ciphertext = Vigenere::new(key).unwrap().encrypt(PLAINTEXT);
        let solution = analyzer
            .decode_vigenere_with_length(&ciphertext, key.len())
            .unwrap();
        assert_eq!(solution.key, key);
    }
}

#[test]
fn test_distribution_sums() {
    let total = Distribution::of(PLAINTEXT).total();
    assert!((total - 100.0).abs() < 1e-9);
    assert_eq!(Distribution::of("").total(), 0.0);
}
