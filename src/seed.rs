//! Seed policy - tops the store up to a minimum population
//!
//! Seeded entries draw text and color independently, with replacement, from a
//! fixed palette.

use crate::entry::Entry;
use rand::seq::SliceRandom;
use rand::Rng;

/// Display texts used for seeding
pub const TEXTS: &[&str] = &[
    "Test text 1",
    "blah blah blah",
    "New info: top secret!",
    "Test text 2",
    "Lorem Ipsum",
    "That's My Bag",
];

/// Color encodings used for seeding; each is a well-formed `r_g_b` triple
pub const COLORS: &[&str] = &[
    "1_0.0_0.0",
    "0.0_1_0.0",
    "0.0_0.0_1",
    "0.5_0.5_0.5",
    "0.0_0.0_0.0",
    "1_1_1",
];

/// Number of rows to insert given the current row count.
///
/// Below the threshold the store is topped up to `min_entries + 1` rows; at or
/// above it nothing is inserted.
pub fn top_up_count(existing: usize, min_entries: usize) -> usize {
    if existing >= min_entries {
        0
    } else {
        min_entries + 1 - existing
    }
}

/// Generate `n` random palette entries
pub fn generate_seed_batch<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Entry> {
    (0..n)
        .map(|_| {
            // Palettes are non-empty constants
            let text = TEXTS.choose(rng).copied().unwrap_or_default();
            let color = COLORS.choose(rng).copied().unwrap_or_default();
            Entry::new(text, color)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_top_up_count() {
        assert_eq!(top_up_count(0, 100), 101);
        assert_eq!(top_up_count(1, 100), 100);
        assert_eq!(top_up_count(99, 100), 2);
        assert_eq!(top_up_count(100, 100), 0);
        assert_eq!(top_up_count(250, 100), 0);
    }

    #[test]
    fn test_batch_draws_from_palette() {
        let mut rng = StdRng::seed_from_u64(7);
        let batch = generate_seed_batch(500, &mut rng);

        assert_eq!(batch.len(), 500);
        for entry in &batch {
            assert!(TEXTS.contains(&entry.text.as_str()));
            assert!(COLORS.contains(&entry.color.as_str()));
        }

        // With 500 draws every palette item should show up at least once
        for text in TEXTS {
            assert!(batch.iter().any(|e| e.text == *text));
        }
    }

    #[test]
    fn test_empty_batch() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_seed_batch(0, &mut rng).is_empty());
    }
}
