//! Short code generation and validation.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::AppError;

/// The 62 ASCII letters and digits short codes are drawn from.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Bounds for caller-supplied short codes.
pub const CUSTOM_CODE_MIN_LEN: usize = 6;
pub const CUSTOM_CODE_MAX_LEN: usize = 50;

/// Generates random alphanumeric short codes.
///
/// Length is drawn uniformly from `[min_len, max_len]`, then every character
/// independently and uniformly from [`ALPHABET`]. The randomness source is not
/// cryptographic: codes are public and uniqueness is enforced by the store.
///
/// The generator owns its RNG behind a mutex, the only state shared between
/// requests.
pub struct ShortCodeGenerator {
    rng: Mutex<StdRng>,
    min_len: usize,
    max_len: usize,
}

impl ShortCodeGenerator {
    /// Default length window.
    pub const DEFAULT_MIN_LEN: usize = 6;
    pub const DEFAULT_MAX_LEN: usize = 10;

    /// Creates a generator seeded from the operating system.
    ///
    /// Bounds given in the wrong order are swapped; a zero minimum is raised to 1.
    pub fn new(min_len: usize, max_len: usize) -> Self {
        Self::with_rng(StdRng::from_os_rng(), min_len, max_len)
    }

    /// Creates a reproducible generator.
    pub fn seeded(seed: u64, min_len: usize, max_len: usize) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), min_len, max_len)
    }

    fn with_rng(rng: StdRng, min_len: usize, max_len: usize) -> Self {
        let (min_len, max_len) = if min_len <= max_len {
            (min_len, max_len)
        } else {
            (max_len, min_len)
        };

        Self {
            rng: Mutex::new(rng),
            min_len: min_len.max(1),
            max_len: max_len.max(1),
        }
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Draws a fresh code.
    pub fn generate(&self) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        let len = rng.random_range(self.min_len..=self.max_len);
        (0..len)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

impl Default for ShortCodeGenerator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_LEN, Self::DEFAULT_MAX_LEN)
    }
}

/// Returns true if `code` is a well-formed caller-supplied short code.
pub fn is_valid_custom_code(code: &str) -> bool {
    (CUSTOM_CODE_MIN_LEN..=CUSTOM_CODE_MAX_LEN).contains(&code.len())
        && code.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Validates a caller-supplied short code.
///
/// # Errors
///
/// Returns [`AppError::InvalidShortCode`] unless the code is 6 to 50 ASCII
/// letters or digits.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if is_valid_custom_code(code) {
        Ok(())
    } else {
        Err(AppError::InvalidShortCode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_alphabet_has_62_distinct_symbols() {
        let symbols: HashSet<u8> = ALPHABET.iter().copied().collect();
        assert_eq!(symbols.len(), 62);
        assert!(symbols.iter().all(|b| b.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generate_respects_bounds() {
        for (min, max) in [(1, 1), (5, 10), (6, 10), (10, 15)] {
            let generator = ShortCodeGenerator::new(min, max);
            for _ in 0..200 {
                let code = generator.generate();
                assert!(
                    (min..=max).contains(&code.len()),
                    "length {} outside [{min}, {max}]",
                    code.len()
                );
                assert!(code.bytes().all(|b| ALPHABET.contains(&b)));
            }
        }
    }

    #[test]
    fn test_generate_covers_whole_length_window() {
        let generator = ShortCodeGenerator::seeded(7, 6, 10);
        let lengths: HashSet<usize> = (0..500).map(|_| generator.generate().len()).collect();
        assert_eq!(lengths, (6..=10).collect::<HashSet<usize>>());
    }

    #[test]
    fn test_seeded_generators_agree() {
        let a = ShortCodeGenerator::seeded(42, 6, 10);
        let b = ShortCodeGenerator::seeded(42, 6, 10);
        assert_eq!(a.generate(), b.generate());
    }

    #[test]
    fn test_bounds_normalized() {
        let generator = ShortCodeGenerator::new(10, 6);
        assert_eq!(generator.min_len(), 6);
        assert_eq!(generator.max_len(), 10);

        let generator = ShortCodeGenerator::new(0, 0);
        assert_eq!(generator.generate().len(), 1);
    }

    #[test]
    fn test_concurrent_generation() {
        let generator = std::sync::Arc::new(ShortCodeGenerator::default());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let generator = std::sync::Arc::clone(&generator);
                std::thread::spawn(move || (0..100).map(|_| generator.generate()).collect::<Vec<_>>())
            })
            .collect();

        for handle in handles {
            for code in handle.join().unwrap() {
                assert!((6..=10).contains(&code.len()));
            }
        }
    }

    #[test]
    fn test_validate_custom_code() {
        assert!(validate_custom_code("testtest").is_ok());
        assert!(validate_custom_code("ABC123").is_ok());
        assert!(validate_custom_code(&"a".repeat(50)).is_ok());

        assert!(matches!(
            validate_custom_code("short"),
            Err(AppError::InvalidShortCode)
        ));
        assert!(validate_custom_code(&"a".repeat(51)).is_err());
        assert!(validate_custom_code("!@#$!asdasd").is_err());
        assert!(validate_custom_code("with-dash").is_err());
        assert!(validate_custom_code("ünïcödé").is_err());
    }
}
