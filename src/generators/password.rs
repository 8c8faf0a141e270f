// src/generators/password.rs
use rand::{Rng, seq::SliceRandom};
use std::collections::HashSet;
use std::ops::RangeInclusive;

pub const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!#$%&()*+";

const LETTER_COUNT: RangeInclusive<usize> = 8..=10;
const SYMBOL_COUNT: RangeInclusive<usize> = 2..=4;
const NUMBER_COUNT: RangeInclusive<usize> = 2..=4;

pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    /// Generate a password using the thread-local RNG.
    pub fn generate_password(&self) -> String {
        self.generate_with(&mut rand::thread_rng())
    }

    /// Generate a password from the given RNG.
    ///
    /// Picks 8-10 letters, 2-4 symbols and 2-4 numbers (with replacement),
    /// then shuffles the combined characters so the classes are interleaved.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let nr_letters = rng.gen_range(LETTER_COUNT);
        let nr_symbols = rng.gen_range(SYMBOL_COUNT);
        let nr_numbers = rng.gen_range(NUMBER_COUNT);

        let mut chars: Vec<u8> = Vec::with_capacity(nr_letters + nr_symbols + nr_numbers);
        chars.extend(draw(rng, LETTERS, nr_letters));
        chars.extend(draw(rng, SYMBOLS, nr_symbols));
        chars.extend(draw(rng, NUMBERS, nr_numbers));

        chars.shuffle(rng);

        chars.into_iter().map(char::from).collect()
    }

    pub fn analyze_password_strength(&self, password: &str) -> u8 {
        analyze_password_strength(password)
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn draw<R: Rng + ?Sized>(rng: &mut R, pool: &[u8], count: usize) -> Vec<u8> {
    (0..count)
        .map(|_| pool[rng.gen_range(0..pool.len())])
        .collect()
}

// Rough 0-100 score, informational only
pub fn analyze_password_strength(password: &str) -> u8 {
    let length = password.chars().count();

    // Length contribution (up to 40 points)
    let mut score = length.min(40) as u8;

    // Character variety (10 points each)
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 10;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 10;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 10;
    }
    if password.chars().any(|c| !c.is_alphanumeric()) {
        score += 10;
    }

    // Repeated characters
    if password.chars().collect::<HashSet<_>>().len() < length / 2 {
        score = score.saturating_sub(10);
    }

    score.min(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn count_in(password: &str, pool: &[u8]) -> usize {
        password.bytes().filter(|b| pool.contains(b)).count()
    }

    #[test]
    fn test_pools_are_disjoint() {
        for b in LETTERS {
            assert!(!NUMBERS.contains(b) && !SYMBOLS.contains(b));
        }
        for b in NUMBERS {
            assert!(!SYMBOLS.contains(b));
        }
    }

    #[test]
    fn test_generated_password_shape() {
        let generator = PasswordGenerator::new();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..500 {
            let password = generator.generate_with(&mut rng);
            let letters = count_in(&password, LETTERS);
            let numbers = count_in(&password, NUMBERS);
            let symbols = count_in(&password, SYMBOLS);

            assert!((12..=18).contains(&password.len()), "bad length: {}", password);
            assert!((8..=10).contains(&letters), "bad letter count: {}", password);
            assert!((2..=4).contains(&numbers), "bad number count: {}", password);
            assert!((2..=4).contains(&symbols), "bad symbol count: {}", password);
            assert_eq!(letters + numbers + symbols, password.len(), "foreign char in {}", password);
        }
    }

    #[test]
    fn test_thread_rng_password_is_in_range() {
        let password = PasswordGenerator::new().generate_password();
        assert!((12..=18).contains(&password.len()));
    }

    #[test]
    fn test_same_seed_same_password() {
        let generator = PasswordGenerator::new();
        let a = generator.generate_with(&mut ChaCha8Rng::seed_from_u64(42));
        let b = generator.generate_with(&mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_classes_get_interleaved() {
        // Without the shuffle every password would start with a letter run
        let generator = PasswordGenerator::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let shuffled = (0..200)
            .map(|_| generator.generate_with(&mut rng))
            .any(|p| !LETTERS.contains(&p.as_bytes()[0]));
        assert!(shuffled);
    }

    #[test]
    fn test_strength_scores() {
        assert_eq!(analyze_password_strength(""), 0);
        assert!(analyze_password_strength("aaaaaaaaaaaa") < analyze_password_strength("aB3$kP9!xQ2&"));
        assert!(analyze_password_strength("aB3$kP9!xQ2&") <= 100);
    }
}
