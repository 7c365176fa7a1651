//! Short, time-prefixed identifiers.
//!
//! An id is the base-36 encoding of the current Unix time in milliseconds,
//! right-padded with random `[A-Za-z0-9]` characters and cut to the requested
//! length. Uniqueness is probabilistic and ids are not suitable as secrets.
//!
//! The millisecond timestamp currently encodes to 8 characters, so ids of the
//! default length carry no random part. Request a longer id when several may be
//! generated within the same millisecond.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::base36::encode_base36;

pub const DEFAULT_ID_LENGTH: usize = 8;

const ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Source of the millisecond timestamp that prefixes every id.
pub trait Clock {
    fn now_millis(&self) -> u64;
}

/// Wall-clock time since the Unix epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or(0)
    }
}

impl<F: Fn() -> u64> Clock for F {
    fn now_millis(&self) -> u64 {
        self()
    }
}

#[derive(Debug)]
pub struct UniqueIdGenerator<C = SystemClock, R = ThreadRng> {
    clock: C,
    rng: R,
}

impl UniqueIdGenerator {
    pub fn new() -> Self {
        Self {
            clock: SystemClock,
            rng: rand::rng(),
        }
    }
}

impl Default for UniqueIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock, R: Rng> UniqueIdGenerator<C, R> {
    pub fn with_sources(clock: C, rng: R) -> Self {
        Self { clock, rng }
    }

    /// Generates an id of exactly `length` ASCII alphanumeric characters.
    pub fn generate(&mut self, length: usize) -> String {
        let mut id = encode_base36(self.clock.now_millis());

        while id.len() < length {
            let idx = self.rng.random_range(0..ID_ALPHABET.len());
            id.push(char::from(ID_ALPHABET[idx]));
        }
        id.truncate(length);

        id
    }
}

/// Generates an id from the system clock and the thread-local RNG.
pub fn generate_unique_id(length: usize) -> String {
    UniqueIdGenerator::new().generate(length)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    const FIXED_MILLIS: u64 = 1_700_000_000_000;

    fn is_alphanumeric(id: &str) -> bool {
        id.chars().all(|c| c.is_ascii_alphanumeric())
    }

    #[test]
    fn default_length_is_timestamp_prefix() {
        let mut generator =
            UniqueIdGenerator::with_sources(|| FIXED_MILLIS, StdRng::seed_from_u64(1));

        assert_eq!(generator.generate(DEFAULT_ID_LENGTH), "loyw3v28");
    }

    #[test]
    fn short_ids_truncate_timestamp() {
        let mut generator =
            UniqueIdGenerator::with_sources(|| FIXED_MILLIS, StdRng::seed_from_u64(1));

        assert_eq!(generator.generate(4), "loyw");
        assert_eq!(generator.generate(0), "");
    }

    #[test]
    fn long_ids_are_padded_with_random_characters() {
        let mut generator =
            UniqueIdGenerator::with_sources(|| FIXED_MILLIS, StdRng::seed_from_u64(7));

        let id = generator.generate(20);
        assert_eq!(id.len(), 20);
        assert!(id.starts_with("loyw3v28"), "id {id} lost its timestamp prefix");
        assert!(is_alphanumeric(&id), "id {id} has non-alphanumeric characters");
    }

    #[test]
    fn seeded_generators_are_reproducible() {
        let mut a = UniqueIdGenerator::with_sources(|| 35u64, StdRng::seed_from_u64(42));
        let mut b = UniqueIdGenerator::with_sources(|| 35u64, StdRng::seed_from_u64(42));

        let id = a.generate(DEFAULT_ID_LENGTH);
        assert_eq!(id, b.generate(DEFAULT_ID_LENGTH));
        assert_eq!(id.len(), DEFAULT_ID_LENGTH);
        assert!(id.starts_with('z'));
        assert!(is_alphanumeric(&id));
    }

    #[test]
    fn random_padding_differs_between_calls() {
        let mut generator = UniqueIdGenerator::with_sources(|| 0u64, StdRng::seed_from_u64(3));

        let first = generator.generate(16);
        let second = generator.generate(16);
        assert_ne!(first, second);
    }

    #[test]
    fn system_generator_produces_alphanumeric_ids() {
        let id = generate_unique_id(DEFAULT_ID_LENGTH);
        assert_eq!(id.len(), DEFAULT_ID_LENGTH);
        assert!(is_alphanumeric(&id), "id {id} has non-alphanumeric characters");

        let a = generate_unique_id(24);
        let b = generate_unique_id(24);
        assert_eq!(a.len(), 24);
        assert_ne!(a, b);
    }
}
