//! RNG module - letter generation with English-like frequency.
//!
//! Letters are drawn by rolling a uniform integer in [0, 98) and mapping it
//! through a fixed cumulative-frequency table (26 buckets). The cutoffs are
//! part of the game's tuning and must not drift.
//!
//! The underlying generator is a simple LCG so games are reproducible under
//! a seed.

/// Simple LCG (Linear Congruential Generator) RNG.
/// Uses constants from Numerical Recipes.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max).
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Current internal state (for restarting with the same sequence).
    pub fn seed(&self) -> u32 {
        self.state
    }
}

/// Total weight of the letter frequency table.
pub const LETTER_ROLL_RANGE: u32 = 98;

/// Cumulative letter frequency cutoffs: a roll below the cutoff selects the
/// letter, scanning in order. The final bucket ('z') catches the rest.
const LETTER_CUTOFFS: [(u32, char); 25] = [
    (12, 'e'),
    (21, 'a'),
    (30, 'i'),
    (38, 'o'),
    (44, 'n'),
    (50, 'r'),
    (56, 't'),
    (60, 'l'),
    (64, 's'),
    (68, 'u'),
    (72, 'd'),
    (75, 'g'),
    (77, 'b'),
    (79, 'c'),
    (81, 'm'),
    (83, 'p'),
    (85, 'f'),
    (87, 'h'),
    (89, 'v'),
    (91, 'w'),
    (93, 'y'),
    (94, 'k'),
    (95, 'j'),
    (96, 'x'),
    (97, 'q'),
];

/// Map a raw roll in [0, 98) to a letter via the cumulative table.
pub fn letter_for_roll(roll: u32) -> char {
    for &(cutoff, letter) in LETTER_CUTOFFS.iter() {
        if roll < cutoff {
            return letter;
        }
    }
    'z'
}

/// Draw one random letter.
pub fn random_letter(rng: &mut SimpleRng) -> char {
    letter_for_roll(rng.next_range(LETTER_ROLL_RANGE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_remapped() {
        let mut a = SimpleRng::new(0);
        let mut b = SimpleRng::new(1);
        assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn test_cutoff_boundaries() {
        assert_eq!(letter_for_roll(0), 'e');
        assert_eq!(letter_for_roll(11), 'e');
        assert_eq!(letter_for_roll(12), 'a');
        assert_eq!(letter_for_roll(96), 'q');
        assert_eq!(letter_for_roll(97), 'z');
    }

    #[test]
    fn test_every_bucket_boundary() {
        // First roll of each bucket.
        let firsts = [
            (0, 'e'),
            (12, 'a'),
            (21, 'i'),
            (30, 'o'),
            (38, 'n'),
            (44, 'r'),
            (50, 't'),
            (56, 'l'),
            (60, 's'),
            (64, 'u'),
            (68, 'd'),
            (72, 'g'),
            (75, 'b'),
            (77, 'c'),
            (79, 'm'),
            (81, 'p'),
            (83, 'f'),
            (85, 'h'),
            (87, 'v'),
            (89, 'w'),
            (91, 'y'),
            (93, 'k'),
            (94, 'j'),
            (95, 'x'),
            (96, 'q'),
            (97, 'z'),
        ];
        for (roll, expect) in firsts {
            assert_eq!(letter_for_roll(roll), expect, "roll {}", roll);
        }
    }

    #[test]
    fn test_random_letter_is_lowercase_ascii() {
        let mut rng = SimpleRng::new(42);
        for _ in 0..1000 {
            let letter = random_letter(&mut rng);
            assert!(letter.is_ascii_lowercase());
        }
    }
}
