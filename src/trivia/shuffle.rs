use rand::Rng;

/// In-place Fisher–Yates: walking from the last index down to 1, swap each
/// slot with a uniformly chosen index in `[0, i]`.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::shuffle;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    #[test]
    fn keeps_the_same_elements() {
        let mut rng = StdRng::seed_from_u64(7);
        let original = vec!["Paris", "Rome", "Madrid", "Berlin", "Rome"];
        for _ in 0..50 {
            let mut shuffled = original.clone();
            shuffle(&mut shuffled, &mut rng);
            let mut a = shuffled.clone();
            let mut b = original.clone();
            a.sort();
            b.sort();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn empty_and_single_are_untouched() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut empty: Vec<u8> = vec![];
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut one = vec![42];
        shuffle(&mut one, &mut rng);
        assert_eq!(one, [42]);
    }

    #[test]
    fn permutations_are_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(2024);
        let runs = 60_000;
        let mut seen: HashMap<Vec<u8>, u32> = HashMap::new();

        for _ in 0..runs {
            let mut items = vec![0u8, 1, 2, 3];
            shuffle(&mut items, &mut rng);
            *seen.entry(items).or_default() += 1;
        }

        // 4! permutations, 2500 expected each
        assert_eq!(seen.len(), 24);
        let expected = runs as f64 / 24.0;
        for (perm, count) in &seen {
            let deviation = (*count as f64 - expected).abs() / expected;
            assert!(deviation < 0.1, "{perm:?} appeared {count} times");
        }
    }
}
