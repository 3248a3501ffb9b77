// Copyright 2022 houseme
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::alphabet::Alphabet;
use crate::error::Error;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const LETTERS: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// A source of uniformly distributed floats, the only capability the generator
/// needs from its random number generator.
///
/// Production code uses [`SystemRandom`]. Any other implementation must be
/// cryptographically secure as well, the collision resistance of the ids rests on it.
pub trait RandomSource: Send {
    /// Returns a value in `[0, 1)`.
    fn uniform01(&mut self) -> f64;
}

/// The default [`RandomSource`], a CSPRNG seeded once from the operating system.
pub struct SystemRandom(StdRng);

impl SystemRandom {
    pub fn new() -> Self {
        Self(StdRng::from_os_rng())
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        SystemRandom::new()
    }
}

impl RandomSource for SystemRandom {
    fn uniform01(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

/// Maps a uniform draw onto `0..len`, never past the last index.
fn pick(random: &mut dyn RandomSource, len: usize) -> usize {
    let index = (random.uniform01() * len as f64).floor() as usize;
    index.min(len - 1)
}

/// Creates `length` random base36 symbols, each drawn independently.
pub fn create_entropy(random: &mut dyn RandomSource, length: usize) -> Result<String, Error> {
    if length < 1 {
        return Err(Error::InvalidEntropyLength);
    }
    let symbols = Alphabet::base36().symbols();
    Ok((0..length)
        .map(|_| symbols[pick(random, symbols.len())])
        .collect())
}

/// Picks a random lowercase letter.
pub fn create_letter(random: &mut dyn RandomSource) -> char {
    LETTERS[pick(random, LETTERS.len())]
}

#[cfg(test)]
pub(crate) mod test_random {
    use super::RandomSource;

    /// Always returns the same draw.
    pub(crate) struct FixedRandom(pub(crate) f64);

    impl RandomSource for FixedRandom {
        fn uniform01(&mut self) -> f64 {
            self.0
        }
    }

    /// Cycles through a fixed list of draws.
    pub(crate) struct SequenceRandom {
        values: Vec<f64>,
        next: usize,
    }

    impl SequenceRandom {
        pub(crate) fn new(values: Vec<f64>) -> Self {
            Self { values, next: 0 }
        }
    }

    impl RandomSource for SequenceRandom {
        fn uniform01(&mut self) -> f64 {
            let value = self.values[self.next % self.values.len()];
            self.next += 1;
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_random::{FixedRandom, SequenceRandom};
    use super::*;
    use crate::alphabet::BASE36_SYMBOLS;

    #[test]
    fn entropy_has_requested_length() {
        let mut random = FixedRandom(0.5);
        for length in [1, 4, 10, 36, 40] {
            let entropy = create_entropy(&mut random, length).unwrap();
            assert_eq!(entropy.len(), length);
            assert!(entropy.chars().all(|c| BASE36_SYMBOLS.contains(c)));
        }
        assert_eq!(create_entropy(&mut random, 4).unwrap(), "iiii");
    }

    #[test]
    fn entropy_rejects_zero_length() {
        let err = create_entropy(&mut FixedRandom(0.5), 0).unwrap_err();
        assert!(matches!(err, Error::InvalidEntropyLength));
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("length >= 1"));
    }

    #[test]
    fn entropy_covers_the_whole_alphabet() {
        let draws = (0..36).map(|i| (i as f64 + 0.5) / 36.0).collect();
        let entropy = create_entropy(&mut SequenceRandom::new(draws), 36).unwrap();
        assert_eq!(entropy, BASE36_SYMBOLS);
    }

    #[test]
    fn letters_stay_in_range() {
        assert_eq!(create_letter(&mut FixedRandom(0.0)), 'a');
        assert_eq!(create_letter(&mut FixedRandom(0.5)), 'n');
        assert_eq!(create_letter(&mut FixedRandom(0.999)), 'z');
        // a misbehaving source returning exactly 1.0 still lands on a letter
        assert_eq!(create_letter(&mut FixedRandom(1.0)), 'z');
    }

    #[test]
    fn system_random_is_uniform01() {
        let mut random = SystemRandom::new();
        for _ in 0..1000 {
            let value = random.uniform01();
            assert!((0.0..1.0).contains(&value));
        }
        let entropy = create_entropy(&mut random, 32).unwrap();
        assert!(entropy.chars().all(|c| BASE36_SYMBOLS.contains(c)));
    }
}
