// Copyright 2022 houseme
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::alphabet::Alphabet;
use crate::entropy::{create_entropy, RandomSource};
use crate::error::Error;
use sha3::{Digest, Sha3_512};

/// Number of entropy symbols appended to every input before hashing.
pub const DEFAULT_SALT_LENGTH: usize = 4;

/// Salt `data` with [`DEFAULT_SALT_LENGTH`] random symbols, hash it with SHA3-512
/// and write the digest in base36.
///
/// The leading symbol of the encoding is dropped, it is skewed towards low values.
/// A 512 bit digest usually leaves 98 or 99 symbols, occasionally fewer; callers
/// truncate to what they need and must check that enough is there.
pub fn hash_mix(data: &str, random: &mut dyn RandomSource) -> Result<String, Error> {
    hash_mix_with_salt(data, random, DEFAULT_SALT_LENGTH)
}

/// Like [`hash_mix`] with a custom salt length.
pub fn hash_mix_with_salt(
    data: &str,
    random: &mut dyn RandomSource,
    salt_length: usize,
) -> Result<String, Error> {
    let salt = create_entropy(random, salt_length)?;

    let mut hasher = Sha3_512::new();
    hasher.update(data.as_bytes());
    hasher.update(salt.as_bytes());
    let digest = hasher.finalize();

    let mut encoded = Alphabet::base36().encode_be_bytes(&digest);
    encoded.remove(0);
    Ok(encoded)
}
