//! Random benchmark words.

use rand::Rng;

/// Length of generated words.
pub const WORD_LENGTH: usize = 6;

/// A random lowercase ASCII word of `len` letters.
pub fn random_word(rng: &mut impl Rng, len: usize) -> String {
    (0..len)
        .map(|_| char::from(rng.random_range(b'a'..=b'z')))
        .collect()
}

/// `count` random words of [`WORD_LENGTH`] letters.
pub fn random_words(rng: &mut impl Rng, count: usize) -> Vec<String> {
    (0..count).map(|_| random_word(rng, WORD_LENGTH)).collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn words_are_lowercase_letters() {
        let mut rng = SmallRng::seed_from_u64(42);
        for word in random_words(&mut rng, 50) {
            assert_eq!(word.len(), WORD_LENGTH);
            assert!(word.bytes().all(|b| b.is_ascii_lowercase()), "{word}");
        }
    }

    #[test]
    fn same_seed_same_words() {
        let first = random_words(&mut SmallRng::seed_from_u64(7), 3);
        let second = random_words(&mut SmallRng::seed_from_u64(7), 3);
        assert_eq!(first, second);
    }

    #[test]
    fn zero_length_word_is_empty() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(random_word(&mut rng, 0).is_empty());
    }
}
