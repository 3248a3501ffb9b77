// Copyright 2022 houseme
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::entropy::{create_entropy, RandomSource};
use crate::error::Error;
use crate::hash::hash_mix;
use log::warn;

/// Length of a fingerprint, and of the entropy mixed into it.
pub const BIG_LENGTH: usize = 32;

/// Derives a [`BIG_LENGTH`] symbol fingerprint for the generator owning `random`.
///
/// Without `fingerprint_data` (or with an empty string) the host and process are
/// described by [`default_fingerprint_data`]. Either way the data is salted with
/// [`BIG_LENGTH`] random symbols before hashing, so two generators in the same
/// process still end up with different fingerprints.
pub fn create_fingerprint(
    random: &mut dyn RandomSource,
    fingerprint_data: Option<&str>,
) -> Result<String, Error> {
    let mut data = match fingerprint_data {
        Some(data) if !data.is_empty() => data.to_owned(),
        _ => default_fingerprint_data(),
    };
    data.push_str(&create_entropy(random, BIG_LENGTH)?);

    let mut fingerprint = hash_mix(&data, random)?;
    if fingerprint.len() < BIG_LENGTH {
        return Err(Error::DigestTooShort {
            needed: BIG_LENGTH,
            available: fingerprint.len(),
        });
    }
    fingerprint.truncate(BIG_LENGTH);
    Ok(fingerprint)
}

/// The process id, the host name and the names of all environment variables,
/// concatenated. Anything that cannot be read contributes nothing.
pub fn default_fingerprint_data() -> String {
    let mut data = std::process::id().to_string();
    data.push_str(&hostname());
    data.extend(
        std::env::vars_os().map(|(name, _)| name.to_string_lossy().into_owned()),
    );
    #[cfg(feature = "interface-fingerprint")]
    data.push_str(&interface_addresses());
    data
}

fn hostname() -> String {
    match gethostname::gethostname().into_string() {
        Ok(name) => name,
        Err(name) => {
            warn!(
                "hostname {:?} is not valid UTF-8, leaving it out of the fingerprint",
                name
            );
            String::new()
        }
    }
}

/// Hardware addresses of the interfaces that are up, loopback excluded.
#[cfg(feature = "interface-fingerprint")]
fn interface_addresses() -> String {
    pnet_datalink::interfaces()
        .iter()
        .filter(|iface| iface.is_up() && !iface.is_loopback())
        .filter_map(|iface| iface.mac)
        .map(|mac| mac.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::BASE36_SYMBOLS;
    use crate::entropy::test_random::FixedRandom;
    use crate::entropy::SystemRandom;

    #[test]
    fn explicit_data_is_deterministic_for_fixed_randomness() {
        let fingerprint = create_fingerprint(&mut FixedRandom(0.5), Some("test_data")).unwrap();
        assert_eq!(fingerprint, "w5gezc2xa1ffnp7gcxoez2s9gcb4q1mr");
    }

    #[test]
    fn default_data_yields_full_length() {
        let fingerprint = create_fingerprint(&mut FixedRandom(0.5), None).unwrap();
        assert_eq!(fingerprint.len(), BIG_LENGTH);
        assert!(fingerprint.chars().all(|c| BASE36_SYMBOLS.contains(c)));

        let fingerprint = create_fingerprint(&mut FixedRandom(0.5), Some("")).unwrap();
        assert_eq!(fingerprint.len(), BIG_LENGTH);
    }

    #[test]
    fn default_data_names_the_process() {
        let data = default_fingerprint_data();
        assert!(data.starts_with(&std::process::id().to_string()));
    }

    #[test]
    fn distinct_random_sources_give_distinct_fingerprints() {
        let first = create_fingerprint(&mut FixedRandom(0.1), None).unwrap();
        let second = create_fingerprint(&mut FixedRandom(0.9), None).unwrap();
        assert_ne!(first, second);

        let first = create_fingerprint(&mut SystemRandom::new(), None).unwrap();
        let second = create_fingerprint(&mut SystemRandom::new(), None).unwrap();
        assert_ne!(first, second);
    }
}
