//! Opaque identifier generation.
//!
//! Builders ask an [`IdentifierSource`] for a default `id` when the caller never sets one.
//! Production code uses [`RandomIdentifiers`]; tests swap in
//! [`SequentialIdentifiers`](crate::mock::SequentialIdentifiers) for stable output.

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Length of identifiers generated for resources that were not given one.
pub const DEFAULT_ID_LENGTH: usize = 8;

/// Shortest identifier any source will hand out.
pub const MIN_ID_LENGTH: usize = 4;

/// Supplies random opaque tokens on demand.
pub trait IdentifierSource: Send + Sync {
    /// Returns a fresh identifier of (at least) `length` characters.
    fn new_id(&self, length: usize) -> String;
}

/// Alphanumeric identifiers drawn from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdentifiers;

impl IdentifierSource for RandomIdentifiers {
    fn new_id(&self, length: usize) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(length.max(MIN_ID_LENGTH))
            .map(char::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_ids_are_alphanumeric() {
        let id = RandomIdentifiers.new_id(DEFAULT_ID_LENGTH);
        assert_eq!(id.len(), DEFAULT_ID_LENGTH);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_short_lengths_are_clamped() {
        assert_eq!(RandomIdentifiers.new_id(1).len(), MIN_ID_LENGTH);
    }
}
