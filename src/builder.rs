// Copyright 2022 houseme
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::clock::{Clock, SystemClock};
use crate::counter::Counter;
use crate::cuid::{check_length, Cuid, DEFAULT_LENGTH, INITIAL_COUNT_MAX};
use crate::entropy::{RandomSource, SystemRandom};
use crate::error::{BoxDynError, Error};
use crate::fingerprint::create_fingerprint;
use log::debug;

/// A builder for building the [`Cuid`] generator.
///
/// [`Cuid`]: struct.Cuid.html
pub struct Builder<'a> {
    length: usize,
    random_source: Option<&'a dyn Fn() -> Box<dyn RandomSource>>,
    counter: Option<&'a dyn Fn(u64) -> Counter>,
    fingerprint: Option<&'a dyn Fn(&mut dyn RandomSource) -> Result<String, BoxDynError>>,
    clock: Option<Box<dyn Clock>>,
}

impl<'a> Default for Builder<'a> {
    fn default() -> Self {
        Builder::new()
    }
}

impl<'a> Builder<'a> {
    /// Construct a new builder for the build of [`Cuid`].
    ///
    /// [`Cuid`]: struct.Cuid.html
    pub fn new() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            random_source: None,
            counter: None,
            fingerprint: None,
            clock: None,
        }
    }

    /// Set the default length of generated ids.
    /// If the length is 0 or above `MAXIMUM_LENGTH`, 'finalize' will fail.
    pub fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Set the factory of the random source.
    /// It is called once, the generator keeps the source for its whole lifetime.
    pub fn random_source(mut self, random_source: &'a dyn Fn() -> Box<dyn RandomSource>) -> Self {
        self.random_source = Some(random_source);
        self
    }

    /// Set the factory of the counter.
    /// It receives the random seed drawn from `[0, INITIAL_COUNT_MAX)`.
    pub fn counter(mut self, counter: &'a dyn Fn(u64) -> Counter) -> Self {
        self.counter = Some(counter);
        self
    }

    /// Set the factory of the fingerprint, called with the generator's random source.
    /// If the provided closure returns an error, 'finalize' will fail.
    pub fn fingerprint(
        mut self,
        fingerprint: &'a dyn Fn(&mut dyn RandomSource) -> Result<String, BoxDynError>,
    ) -> Self {
        self.fingerprint = Some(fingerprint);
        self
    }

    /// Set the clock supplying timestamps.
    pub fn clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Finish building and create a Cuid instance.
    /// This method will return an error if the length is out of range or the fingerprint factory fails.
    pub fn finalize(self) -> Result<Cuid, Error> {
        check_length(self.length)?;

        let mut random: Box<dyn RandomSource> = match self.random_source {
            Some(random_source) => random_source(),
            None => Box::new(SystemRandom::new()),
        };

        let seed = (random.uniform01() * INITIAL_COUNT_MAX as f64).floor() as u64;
        let counter = match self.counter {
            Some(counter) => counter(seed),
            None => Counter::new(seed),
        };

        let fingerprint = match self.fingerprint {
            Some(fingerprint) => fingerprint(random.as_mut()).map_err(Error::FingerprintFailed)?,
            None => create_fingerprint(random.as_mut(), None)?,
        };

        let clock: Box<dyn Clock> = match self.clock {
            Some(clock) => clock,
            None => Box::new(SystemClock),
        };

        debug!(
            "cuid generator ready, length {} counter seed {}",
            self.length, seed
        );
        Ok(Cuid::new_inner(random, counter, self.length, fingerprint, clock))
    }
}
