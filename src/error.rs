// Copyright 2022 houseme
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::error::Error as StdError;
use thiserror::Error;

/// Convenience type alias for errors returned by user supplied factories.
pub type BoxDynError = Box<dyn StdError + 'static + Send + Sync>;

/// The error type for this crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("length {length} is out of range, must be between 1 and {max} characters")]
    InvalidLength { length: usize, max: usize },
    #[error("cannot create entropy without a length >= 1")]
    InvalidEntropyLength,
    #[error("cannot encode negative integers: {0}")]
    NegativeInteger(i128),
    #[error("symbol `{symbol}` at position {position} is not part of the alphabet")]
    InvalidSymbol { symbol: char, position: usize },
    #[error("cannot decode an empty string")]
    EmptyEncoding,
    #[error("decoded value does not fit in 128 bits")]
    DecodeOverflow,
    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(String),
    #[error("fingerprint returned an error: {0}")]
    FingerprintFailed(#[source] BoxDynError),
    #[error("over the time limit")]
    OverTimeLimit,
    #[error("digest encoded to {available} symbols, {needed} are required")]
    DigestTooShort { needed: usize, available: usize },
    #[error("mutex is poisoned (i.e. a panic happened while it was locked)")]
    MutexPoisoned,
}

impl Error {
    /// Returns `true` when the error was caused by an argument the caller passed in,
    /// as opposed to a failure inside the generator.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::InvalidLength { .. }
                | Error::InvalidEntropyLength
                | Error::NegativeInteger(_)
                | Error::InvalidSymbol { .. }
                | Error::EmptyEncoding
                | Error::DecodeOverflow
                | Error::InvalidAlphabet(_)
        )
    }
}
