// Permutations draw from a real generator, never from a fixed index
// pattern; the Fisher-Yates pass itself is rand's.

use rand::seq::SliceRandom;
use rand::Rng;

/// A new, uniformly random permutation of `seq`; the input is untouched.
///
/// Uses the process-standard generator. For reproducible permutations use
/// [`shuffle_with`] with a seeded generator such as
/// `rand_xoshiro::Xoshiro256PlusPlus`.
pub fn shuffle<T: Clone>(seq: &[T]) -> Vec<T> {
    shuffle_with(seq, &mut rand::thread_rng())
}

/// A new, uniformly random permutation of `seq`, drawn from the supplied
/// generator.
pub fn shuffle_with<T: Clone, R: Rng>(seq: &[T], rng: &mut R) -> Vec<T> {
    let mut result = seq.to_vec();
    result.shuffle(rng);
    result
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    use super::*;

    #[test]
    fn test_shuffle_is_a_permutation() {
        let input = vec![5, 3, 9, 1, 7, 2, 8];
        let mut shuffled = shuffle(&input);
        assert_eq!(shuffled.len(), input.len());
        shuffled.sort();
        let mut expected = input.clone();
        expected.sort();
        assert_eq!(shuffled, expected);
    }

    #[test]
    fn test_shuffle_leaves_input_untouched() {
        let input = vec![1, 2, 3, 4, 5];
        let _ = shuffle(&input);
        assert_eq!(input, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_shuffle_with_equal_seeds_reproduces() {
        let input: Vec<u32> = (0..100).collect();
        let mut first_rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let mut second_rng = Xoshiro256PlusPlus::seed_from_u64(42);
        assert_eq!(
            shuffle_with(&input, &mut first_rng),
            shuffle_with(&input, &mut second_rng)
        );
    }

    #[test]
    fn test_shuffle_with_distinct_seeds_diverge() {
        // two independent seeds agreeing on 100 elements would mean the
        // permutation does not depend on the generator at all
        let input: Vec<u32> = (0..100).collect();
        let mut first_rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let mut second_rng = Xoshiro256PlusPlus::seed_from_u64(2);
        assert_ne!(
            shuffle_with(&input, &mut first_rng),
            shuffle_with(&input, &mut second_rng)
        );
    }

    #[test]
    fn test_shuffle_degenerate_lengths() {
        let empty: &[i32] = &[];
        assert_eq!(shuffle(empty), Vec::<i32>::new());
        assert_eq!(shuffle(&[7]), vec![7]);
    }
}
