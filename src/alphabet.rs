// Copyright 2022 houseme
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::error::Error;
use std::sync::OnceLock;

/// Digits followed by lowercase letters, the symbol set of every generated id.
pub const BASE36_SYMBOLS: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

/// Largest alphabet accepted by [`Alphabet::new`].
pub const MAX_ALPHABET_LENGTH: usize = 256;

/// An ordered set of unique symbols used to write non-negative integers in base N,
/// where N is the number of symbols.
///
/// Encoding never pads: every value except zero starts with a non-zero symbol,
/// and zero is written as the first symbol alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    // Largest power of the radix that fits in a u32 limb, and its exponent.
    chunk: u64,
    chunk_digits: usize,
}

impl Alphabet {
    /// Build an alphabet from the characters of `symbols`, in order.
    pub fn new(symbols: &str) -> Result<Self, Error> {
        let symbols: Vec<char> = symbols.chars().collect();
        if symbols.len() < 2 || symbols.len() > MAX_ALPHABET_LENGTH {
            return Err(Error::InvalidAlphabet(format!(
                "expected between 2 and {} symbols, got {}",
                MAX_ALPHABET_LENGTH,
                symbols.len()
            )));
        }
        for (position, symbol) in symbols.iter().enumerate() {
            if symbols[..position].contains(symbol) {
                return Err(Error::InvalidAlphabet(format!(
                    "symbol `{}` appears more than once",
                    symbol
                )));
            }
        }

        let radix = symbols.len() as u64;
        let mut chunk = radix;
        let mut chunk_digits = 1;
        while chunk * radix <= u64::from(u32::MAX) {
            chunk *= radix;
            chunk_digits += 1;
        }

        Ok(Self {
            symbols,
            chunk,
            chunk_digits,
        })
    }

    /// The shared `0-9a-z` alphabet.
    pub fn base36() -> &'static Alphabet {
        static BASE36: OnceLock<Alphabet> = OnceLock::new();
        BASE36.get_or_init(|| Alphabet {
            symbols: BASE36_SYMBOLS.chars().collect(),
            chunk: 36u64.pow(6),
            chunk_digits: 6,
        })
    }

    /// Number of symbols, i.e. the radix.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`, an alphabet holds at least two symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbol standing for digit `index`, if there is one.
    pub fn symbol(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    /// The digit value of `symbol`, if it belongs to the alphabet.
    pub fn value_of(&self, symbol: char) -> Option<usize> {
        self.symbols.iter().position(|candidate| *candidate == symbol)
    }

    pub(crate) fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Encode `number`, most significant digit first.
    pub fn encode(&self, mut number: u128) -> String {
        if number == 0 {
            return self.symbols[0].to_string();
        }
        let radix = self.symbols.len() as u128;
        let mut digits = Vec::with_capacity(32);
        while number != 0 {
            digits.push(self.symbols[(number % radix) as usize]);
            number /= radix;
        }
        digits.iter().rev().collect()
    }

    /// Encode the non-negative integer whose big-endian magnitude is `bytes`.
    ///
    /// There is no width limit, this is how hash digests are written out. The
    /// division runs on u32 limbs and peels off a whole chunk of digits per pass.
    pub fn encode_be_bytes(&self, bytes: &[u8]) -> String {
        let radix = self.symbols.len() as u64;
        let significant = bytes.iter().position(|byte| *byte != 0).unwrap_or(bytes.len());
        let bytes = &bytes[significant..];

        let mut limbs: Vec<u32> = Vec::with_capacity(bytes.len() / 4 + 1);
        let head = bytes.len() % 4;
        if head != 0 {
            limbs.push(
                bytes[..head]
                    .iter()
                    .fold(0u32, |acc, byte| (acc << 8) | u32::from(*byte)),
            );
        }
        for word in bytes[head..].chunks_exact(4) {
            limbs.push(u32::from_be_bytes([word[0], word[1], word[2], word[3]]));
        }

        let mut digits: Vec<char> = Vec::with_capacity(bytes.len() * 2);
        while !limbs.is_empty() {
            let mut remainder = 0u64;
            for limb in limbs.iter_mut() {
                let acc = (remainder << 32) | u64::from(*limb);
                *limb = (acc / self.chunk) as u32;
                remainder = acc % self.chunk;
            }
            let leading_zeros = limbs.iter().take_while(|limb| **limb == 0).count();
            limbs.drain(..leading_zeros);

            // Inner chunks are zero padded, the most significant one is not.
            for _ in 0..self.chunk_digits {
                digits.push(self.symbols[(remainder % radix) as usize]);
                remainder /= radix;
                if limbs.is_empty() && remainder == 0 {
                    break;
                }
            }
        }

        if digits.is_empty() {
            return self.symbols[0].to_string();
        }
        digits.iter().rev().collect()
    }

    /// Decode `text` back into the integer it encodes.
    pub fn decode(&self, text: &str) -> Result<u128, Error> {
        if text.is_empty() {
            return Err(Error::EmptyEncoding);
        }
        let radix = self.symbols.len() as u128;
        text.chars()
            .enumerate()
            .try_fold(0u128, |acc, (position, symbol)| {
                let value = self
                    .value_of(symbol)
                    .ok_or(Error::InvalidSymbol { symbol, position })?;
                acc.checked_mul(radix)
                    .and_then(|acc| acc.checked_add(value as u128))
                    .ok_or(Error::DecodeOverflow)
            })
    }

    /// Decode `text` into a minimal big-endian magnitude. Zero decodes to no bytes.
    pub fn decode_be_bytes(&self, text: &str) -> Result<Vec<u8>, Error> {
        if text.is_empty() {
            return Err(Error::EmptyEncoding);
        }
        let radix = self.symbols.len() as u32;
        // little-endian while accumulating
        let mut bytes: Vec<u8> = Vec::with_capacity(text.len());
        for (position, symbol) in text.chars().enumerate() {
            let mut carry = self
                .value_of(symbol)
                .ok_or(Error::InvalidSymbol { symbol, position })? as u32;
            for byte in bytes.iter_mut() {
                let acc = u32::from(*byte) * radix + carry;
                *byte = (acc & 0xff) as u8;
                carry = acc >> 8;
            }
            while carry != 0 {
                bytes.push((carry & 0xff) as u8);
                carry >>= 8;
            }
        }
        bytes.reverse();
        Ok(bytes)
    }

    /// Rewrite `text`, written in this alphabet, symbol by symbol into `target`.
    ///
    /// Both alphabets must have the same size so that every digit keeps its value.
    pub fn translate(&self, text: &str, target: &Alphabet) -> Result<String, Error> {
        if self.len() != target.len() {
            return Err(Error::InvalidAlphabet(format!(
                "expected {} symbols to translate into, got {}",
                self.len(),
                target.len()
            )));
        }
        text.chars()
            .enumerate()
            .map(|(position, symbol)| {
                self.value_of(symbol)
                    .map(|value| target.symbols[value])
                    .ok_or(Error::InvalidSymbol { symbol, position })
            })
            .collect()
    }
}

/// Encode `number` in base36.
///
/// Fails for negative numbers, which have no representation in the alphabet.
pub fn encode_base36(number: i128) -> Result<String, Error> {
    if number < 0 {
        return Err(Error::NegativeInteger(number));
    }
    Ok(Alphabet::base36().encode(number as u128))
}

/// Decode a base36 string, the inverse of [`encode_base36`].
pub fn decode_base36(text: &str) -> Result<u128, Error> {
    Alphabet::base36().decode(text)
}
