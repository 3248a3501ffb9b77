//! A collision-resistant unique ID generator in the style of [CUID2].
//!
//! Ids are short lowercase strings that always start with a letter. They are
//! safe to generate on any number of hosts and processes without coordination:
//! each id hashes the current time, fresh random salt, a randomly seeded
//! counter and a per-generator fingerprint of the host and process.
//!
//! ## Quickstart
//!
//! Add the following to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! cuid2_me = "0.1"
//! ```
//!
//! Use the library like this:
//!
//! ```
//! use cuid2_me::Cuid;
//!
//! let mut cuid = Cuid::new().unwrap();
//! let id = cuid.generate().unwrap();
//! assert_eq!(id.len(), 24);
//! println!("{}", id);
//! ```
//!
//! Or let the crate keep a process-wide generator around:
//!
//! ```
//! let id = cuid2_me::quick_generate(10).unwrap();
//! assert_eq!(id.len(), 10);
//! ```
//!
//! ## Concurrent use
//!
//! A generator is cheap to build. Give every thread its own:
//! ```
//! use cuid2_me::Cuid;
//! use std::thread;
//!
//! let mut children = Vec::new();
//! for _ in 0..10 {
//!     children.push(thread::spawn(move || {
//!         let mut cuid = Cuid::new().unwrap();
//!         println!("{}", cuid.generate().unwrap());
//!     }));
//! }
//!
//! for child in children {
//!     child.join().unwrap();
//! }
//! ```
//!
//! [CUID2]: https://github.com/paralleldrive/cuid2

mod alphabet;
mod builder;
mod clock;
mod counter;
mod cuid;
mod entropy;
mod error;
mod fingerprint;
mod hash;

pub use crate::cuid::*;
pub use alphabet::{decode_base36, encode_base36, Alphabet, BASE36_SYMBOLS, MAX_ALPHABET_LENGTH};
pub use builder::*;
pub use clock::{Clock, SystemClock};
pub use counter::Counter;
pub use entropy::{create_entropy, create_letter, RandomSource, SystemRandom};
pub use error::*;
pub use fingerprint::{create_fingerprint, default_fingerprint_data, BIG_LENGTH};
pub use hash::{hash_mix, hash_mix_with_salt, DEFAULT_SALT_LENGTH};
