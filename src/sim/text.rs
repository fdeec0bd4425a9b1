//! Random token text
//!
//! Draws from the seeded RNG only, so a run is reproducible from its seed.

use rand::Rng;

/// Lowercase alphabet tokens are drawn from
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Generate `len` letters, uniform with replacement over the full alphabet.
///
/// A zero length yields an empty string.
pub fn generate_text<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Speed drawn from `[min, max)`; a degenerate range returns `min`.
pub fn random_speed<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    min + rng.random::<f64>() * (max - min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_generate_length_and_alphabet() {
        let mut rng = Pcg32::seed_from_u64(7);
        for len in 0..12 {
            let text = generate_text(&mut rng, len);
            assert_eq!(text.chars().count(), len);
            assert!(text.bytes().all(|b| b.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_generate_reaches_every_letter() {
        // 'z' must be reachable too
        let mut rng = Pcg32::seed_from_u64(1);
        let text = generate_text(&mut rng, 5000);
        for &letter in ALPHABET {
            assert!(text.contains(letter as char), "missing {}", letter as char);
        }
    }

    #[test]
    fn test_same_seed_same_text() {
        let mut a = Pcg32::seed_from_u64(42);
        let mut b = Pcg32::seed_from_u64(42);
        assert_eq!(generate_text(&mut a, 8), generate_text(&mut b, 8));
    }

    #[test]
    fn test_speed_range() {
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..1000 {
            let s = random_speed(&mut rng, 0.5, 0.8);
            assert!((0.5..0.8).contains(&s));
        }
        assert_eq!(random_speed(&mut rng, 0.5, 0.5), 0.5);
    }
}
