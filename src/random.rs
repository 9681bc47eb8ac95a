//! Secure random source used by the generator.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;

/// Uniform selection and shuffling backed by a cryptographically secure generator.
///
/// Implementations must be safe to share between threads without external
/// locking and must never accept a caller-supplied seed.
pub trait SecureRandomSource: Send + Sync {
    /// Picks one element uniformly at random. Returns `None` only for an empty slice.
    fn choose_one<'a, T>(&self, items: &'a [T]) -> Option<&'a T>;

    /// Permutes `items` in place, every permutation equally likely.
    fn shuffle<T>(&self, items: &mut [T]);
}

/// Operating-system CSPRNG. Stateless; each call reads fresh OS entropy.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl SecureRandomSource for OsRandom {
    fn choose_one<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut OsRng)
    }

    fn shuffle<T>(&self, items: &mut [T]) {
        // SliceRandom::shuffle is an unbiased Fisher-Yates
        items.shuffle(&mut OsRng);
    }
}
