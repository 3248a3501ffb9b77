// Copyright 2022 houseme
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// A per-generator sequence seeded with a random offset, so that processes
/// started at the same moment do not walk the same counter values.
///
/// The count is private and only moves forward through [`Counter::increment_and_get`].
#[derive(Debug)]
pub struct Counter {
    count: u64,
}

impl Counter {
    /// Create a counter whose first value will be `seed + 1`.
    pub fn new(seed: u64) -> Self {
        Self { count: seed }
    }

    /// Advance the counter and return the new value.
    pub fn increment_and_get(&mut self) -> u64 {
        self.count = self.count.wrapping_add(1);
        self.count
    }
}
