use std::collections::HashSet;

use proptest::prelude::*;
use xrand::Xrand;

use super::*;

/// Test that bounded draws are a modulo reduction of 64-bit words.
#[test]
fn random_u32_is_modulo_reduction() {
    let mut rng = Xrand::new(42);
    let mut words = Xrand::new(42);
    for _ in 0..32 {
        let expected = 100 + (words.next_u64() % 11) as u32;
        assert_eq!(rng.random_u32(100, 110), expected);
    }
}

/// Test degenerate and full-width ranges.
#[test]
fn random_u32_edge_ranges() {
    let mut rng = Xrand::new(1);
    for _ in 0..16 {
        assert_eq!(rng.random_u32(7, 7), 7);
        assert_eq!(rng.random_u32(0, 0), 0);
        assert_eq!(rng.random_u32(u32::MAX, u32::MAX), u32::MAX);
    }

    // The full range must not wrap its width to zero.
    let mut words = Xrand::new(2);
    let mut rng = Xrand::new(2);
    let expected = (words.next_u64() % (1u64 << 32)) as u32;
    assert_eq!(rng.random_u32(0, u32::MAX), expected);
}

/// Test that inverted bounds are rejected.
#[test]
#[should_panic(expected = "invalid range")]
fn random_u32_rejects_inverted_bounds() {
    Xrand::new(0).random_u32(5, 4);
}

/// Test the permutation walk against a hand-driven replay.
#[test]
fn permute_follows_reverse_walk() {
    let mut values = [10u32, 20, 30, 40, 50];
    Xrand::new(3).permute(&mut values);

    let mut expected = [10u32, 20, 30, 40, 50];
    let mut replay = Xrand::new(3);
    for i in (1..expected.len()).rev() {
        let j = (replay.next_u64() % i as u64) as usize;
        expected.swap(i, j);
    }
    assert_eq!(values, expected);
}

/// Test short permutations.
#[test]
fn permute_short_inputs() {
    let mut rng = Xrand::new(4);

    let mut empty: [u32; 0] = [];
    rng.permute(&mut empty);

    let mut one = [9u32];
    rng.permute(&mut one);
    assert_eq!(one, [9]);

    // At i = 1 the only candidate is index 0, so two elements always swap.
    let mut two = [1u32, 2];
    rng.permute(&mut two);
    assert_eq!(two, [2, 1]);
}

/// Test that permutation works for any element type.
#[test]
fn permute_generic_elements() {
    let mut names = vec!["a", "b", "c", "d"];
    Xrand::new(8).permute(&mut names);
    names.sort_unstable();
    assert_eq!(names, ["a", "b", "c", "d"]);
}

/// Test uniform sequences stay in range and are reproducible.
#[test]
fn random_sequence_in_range() {
    let mut a = [0u32; 64];
    let mut b = [0u32; 64];
    Xrand::new(5).random_sequence(10, 20, &mut a);
    Xrand::new(5).random_sequence(10, 20, &mut b);
    assert_eq!(a, b);
    assert!(a.iter().all(|v| (10..=20).contains(v)));
}

/// Test unique sequences with a non-zero lower bound.
#[test]
fn unique_sequence_respects_lower_bound() {
    let mut values = [0u32; 10];
    Xrand::new(6).unique_sequence(1_000, 1_010, &mut values);

    let distinct: HashSet<u32> = values.iter().copied().collect();
    assert_eq!(distinct.len(), values.len());
    assert!(values.iter().all(|v| (1_000..=1_010).contains(v)));
}

/// Test the narrowest range that still has a stride of one.
#[test]
fn unique_sequence_tight_range() {
    let mut values = [0u32; 5];
    Xrand::new(7).unique_sequence(0, 5, &mut values);

    let mut sorted = values;
    sorted.sort_unstable();
    for (slot, value) in sorted.iter().take(4).enumerate() {
        assert_eq!(*value, slot as u32);
    }
    assert!((4..=5).contains(&sorted[4]));
}

/// Test that unique generation leaves empty slices alone.
#[test]
fn unique_sequence_empty_is_noop() {
    let mut empty: [u32; 0] = [];
    Xrand::new(0).unique_sequence(0, 0, &mut empty);
}

/// Test that a too-narrow range is a contract violation.
#[test]
#[should_panic(expected = "too narrow")]
fn unique_sequence_rejects_narrow_range() {
    let mut values = [0u32; 4];
    Xrand::new(0).unique_sequence(0, 3, &mut values);
}

/// Test the checked stride computation.
#[test]
fn unique_stride_checks_arguments() {
    assert_eq!(unique_stride(0, 100, 10).unwrap(), 10);
    assert_eq!(unique_stride(50, 60, 3).unwrap(), 3);
    assert_eq!(unique_stride(0, u32::MAX, 1).unwrap(), u32::MAX);

    assert!(matches!(
        unique_stride(9, 1, 1),
        Err(Error::InvalidRange { min: 9, max: 1 })
    ));
    assert!(matches!(
        unique_stride(0, 3, 4),
        Err(Error::RangeTooNarrow { count: 4, .. })
    ));
    assert!(matches!(
        unique_stride(0, 3, 0),
        Err(Error::RangeTooNarrow { count: 0, .. })
    ));
}

/// Test that the ambient functions replay after reseeding.
#[test]
fn ambient_functions_are_reproducible() {
    let run = || {
        xrand::tls::init(1234);
        let single = generate_random_u32(0, 1_000);
        let mut uniform = [0u32; 16];
        generate_random_u32_sequence(0, 50, &mut uniform);
        let mut unique = [0u32; 16];
        generate_random_u32_sequence_unique(0, 10_000, &mut unique);
        let mut order: Vec<u32> = (0..16).collect();
        permute_u32_sequence(&mut order);
        (single, uniform, unique, order)
    };

    let first = run();
    let second = run();
    assert_eq!(first, second);

    let mut explicit = Xrand::new(1234);
    assert_eq!(first.0, explicit.random_u32(0, 1_000));
    xrand::tls::reset();
}

proptest! {
    /// Bounded draws never leave the requested range.
    #[test]
    fn bounded_draws_in_range(seed in any::<u64>(), a in any::<u32>(), b in any::<u32>()) {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        let mut rng = Xrand::new(seed);
        for _ in 0..16 {
            let value = rng.random_u32(min, max);
            prop_assert!(min <= value && value <= max);
        }
    }

    /// Permutation keeps the same multiset.
    #[test]
    fn permutation_preserves_multiset(seed in any::<u64>(), input in proptest::collection::vec(any::<u32>(), 0..100)) {
        let mut shuffled = input.clone();
        Xrand::new(seed).permute(&mut shuffled);

        let mut expected = input;
        expected.sort_unstable();
        shuffled.sort_unstable();
        prop_assert_eq!(shuffled, expected);
    }

    /// Unique sequences have no duplicates and stay within bounds.
    #[test]
    fn unique_values_are_distinct(
        seed in any::<u64>(),
        min in 0u32..1_000_000,
        span in 1u32..1_000_000,
        count in 1usize..200,
    ) {
        let max = min + span;
        prop_assume!(unique_stride(min, max, count).is_ok());

        let mut values = vec![0u32; count];
        Xrand::new(seed).unique_sequence(min, max, &mut values);

        let distinct: HashSet<u32> = values.iter().copied().collect();
        prop_assert_eq!(distinct.len(), count);
        prop_assert!(values.iter().all(|v| (min..=max).contains(v)));
    }
}
