// Copyright 2022 houseme
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::alphabet::{encode_base36, Alphabet};
use crate::builder::Builder;
use crate::clock::Clock;
use crate::counter::Counter;
use crate::entropy::{create_entropy, create_letter, RandomSource};
use crate::error::*;
use crate::hash::hash_mix;
use log::debug;
use std::sync::{Mutex, OnceLock};

/// default length of a generated id
pub const DEFAULT_LENGTH: usize = 24;
/// longest id a single call can produce
pub const MAXIMUM_LENGTH: usize = 98;
/// upper bound (exclusive) of the random counter seed
// ~22k hosts before a 50% chance of two initial counters colliding
pub const INITIAL_COUNT_MAX: u64 = 476_782_367;

/// How often a too short digest is rehashed with fresh salt before giving up.
const MAX_MIX_ATTEMPTS: usize = 8;

/// Cuid is a collision-resistant unique id generator.
///
/// Every id is a random lowercase letter followed by a base36 SHA3 hash of the
/// current time, a random salt, a counter and the generator's fingerprint.
///
/// A generator mutates its counter and random source on every call, so it is
/// not shared between threads. Give each worker its own generator, or guard a
/// shared one with a `Mutex` the way [`quick_generate`] does.
pub struct Cuid {
    random: Box<dyn RandomSource>,
    counter: Counter,
    length: usize,
    fingerprint: String,
    clock: Box<dyn Clock>,
}

impl Cuid {
    /// Create a new Cuid with the default configuration.
    /// For custom configuration see [`builder`].
    ///
    /// [`builder`]: struct.Cuid.html#method.builder
    pub fn new() -> Result<Self, Error> {
        Builder::new().finalize()
    }

    /// Create a new [`Builder`] to construct a Cuid.
    ///
    /// [`Builder`]: struct.Builder.html
    pub fn builder<'a>() -> Builder<'a> {
        Builder::new()
    }

    pub(crate) fn new_inner(
        random: Box<dyn RandomSource>,
        counter: Counter,
        length: usize,
        fingerprint: String,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            random,
            counter,
            length,
            fingerprint,
            clock,
        }
    }

    /// The length of ids produced by [`generate`](Cuid::generate).
    pub fn length(&self) -> usize {
        self.length
    }

    #[cfg(test)]
    pub(crate) fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Generate an id of the configured length.
    pub fn generate(&mut self) -> Result<String, Error> {
        self.generate_with_length(self.length)
    }

    /// Generate an id of exactly `length` characters.
    /// Lengths of 0 or above [`MAXIMUM_LENGTH`] are rejected before any state changes.
    pub fn generate_with_length(&mut self, length: usize) -> Result<String, Error> {
        check_length(length)?;
        let nanos = self
            .clock
            .now()
            .timestamp_nanos_opt()
            .ok_or(Error::OverTimeLimit)?;
        let time = encode_base36(i128::from(nanos))?;

        let letter = create_letter(self.random.as_mut());
        let salt = create_entropy(self.random.as_mut(), length)?;
        let count = Alphabet::base36().encode(u128::from(self.counter.increment_and_get()));

        let mut input =
            String::with_capacity(time.len() + salt.len() + count.len() + self.fingerprint.len());
        input.push_str(&time);
        input.push_str(&salt);
        input.push_str(&count);
        input.push_str(&self.fingerprint);

        let hash = self.mix(&input, length)?;
        let mut id = String::with_capacity(length);
        id.push(letter);
        id.push_str(&hash[1..length]);
        Ok(id)
    }

    /// Hash `input` until the digest holds at least `needed` symbols.
    fn mix(&mut self, input: &str, needed: usize) -> Result<String, Error> {
        let mut available = 0;
        for attempt in 1..=MAX_MIX_ATTEMPTS {
            let hash = hash_mix(input, self.random.as_mut())?;
            if hash.len() >= needed {
                return Ok(hash);
            }
            available = hash.len();
            debug!(
                "digest encoded to {} symbols on attempt {}, {} needed, rehashing",
                available, attempt, needed
            );
        }
        Err(Error::DigestTooShort { needed, available })
    }
}

pub(crate) fn check_length(length: usize) -> Result<(), Error> {
    if length == 0 || length > MAXIMUM_LENGTH {
        return Err(Error::InvalidLength {
            length,
            max: MAXIMUM_LENGTH,
        });
    }
    Ok(())
}

/// The process-wide generator behind [`quick_generate`].
///
/// It is built with the default configuration on first use and lives until the
/// process exits. Should two threads race the first call, one of the built
/// generators is dropped unused.
fn default_cuid() -> Result<&'static Mutex<Cuid>, Error> {
    static DEFAULT_CUID: OnceLock<Mutex<Cuid>> = OnceLock::new();
    if let Some(cuid) = DEFAULT_CUID.get() {
        return Ok(cuid);
    }
    let cuid = Cuid::new()?;
    debug!("initialized the process-wide cuid generator");
    Ok(DEFAULT_CUID.get_or_init(|| Mutex::new(cuid)))
}

/// Generate an id of `length` characters from the process-wide generator.
pub fn quick_generate(length: usize) -> Result<String, Error> {
    check_length(length)?;
    let mut cuid = default_cuid()?.lock().map_err(|_| Error::MutexPoisoned)?;
    cuid.generate_with_length(length)
}

/// Generate an id of [`DEFAULT_LENGTH`] characters from the process-wide generator.
pub fn cuid() -> Result<String, Error> {
    quick_generate(DEFAULT_LENGTH)
}
