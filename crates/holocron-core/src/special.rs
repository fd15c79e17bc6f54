//! Random rarity assignment for card slots.

use rand::Rng;

use crate::types::SpecialClass;

/// Chance that a freshly queried slot turns out special at all
pub const SPECIAL_PROBABILITY: f64 = 0.15;

/// Roll a rarity for a slot: 15% special, split evenly between gold and limited.
pub fn random_special_class<R: Rng + ?Sized>(rng: &mut R) -> Option<SpecialClass> {
    if !rng.random_bool(SPECIAL_PROBABILITY) {
        return None;
    }

    if rng.random_bool(0.5) {
        Some(SpecialClass::Gold)
    } else {
        Some(SpecialClass::Limited)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_special_rate_is_roughly_fifteen_percent() {
        let mut rng = StdRng::seed_from_u64(42);
        let specials = (0..10_000)
            .filter(|_| random_special_class(&mut rng).is_some())
            .count();
        // Wide band; only guards against the probability being inverted
        assert!(specials > 1_000, "too few specials: {}", specials);
        assert!(specials < 2_200, "too many specials: {}", specials);
    }

    #[test]
    fn test_both_rarities_occur() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut saw_gold = false;
        let mut saw_limited = false;
        for _ in 0..10_000 {
            match random_special_class(&mut rng) {
                Some(SpecialClass::Gold) => saw_gold = true,
                Some(SpecialClass::Limited) => saw_limited = true,
                None => {}
            }
        }
        assert!(saw_gold);
        assert!(saw_limited);
    }
}
