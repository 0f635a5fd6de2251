//! The djb2 (Bernstein) string hash and start slot selection

use std::num::NonZeroUsize;

/// Initial accumulator of the djb2 hash
const DJB2_SEED: u64 = 5381;

/// Hashes `bytes` with djb2: `acc = acc * 33 + byte`, starting from 5381.
///
/// The hash is unseeded, so the same bytes hash to the same value in every run.
/// Arithmetic wraps on overflow.
#[must_use]
pub fn djb2(bytes: &[u8]) -> u64 {
    bytes.iter().fold(DJB2_SEED, |acc, &byte| {
        acc.wrapping_shl(5).wrapping_add(acc).wrapping_add(u64::from(byte))
    })
}

/// Returns the slot where probing for `bytes` starts in a table of `capacity` slots.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::arithmetic_side_effects)]
pub fn start_slot(bytes: &[u8], capacity: NonZeroUsize) -> usize {
    // the remainder is below `capacity`, so narrowing back to `usize` is lossless
    (djb2(bytes) % capacity.get() as u64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_key_is_seed() {
        assert_eq!(djb2(b""), 5381);
    }

    #[test]
    fn test_known_values() {
        assert_eq!(djb2(b"a"), 5381 * 33 + 97);
        assert_eq!(djb2(b"ab"), (5381 * 33 + 97) * 33 + 98);
    }

    #[test]
    fn test_wraps_instead_of_overflowing() {
        let long = vec![0xff_u8; 4096];
        // just has to not panic in debug builds
        assert_eq!(djb2(&long), djb2(&long));
    }

    #[test]
    fn test_interior_zero_bytes_are_hashed() {
        assert_ne!(djb2(b"a\0b"), djb2(b"a"));
    }

    #[test]
    fn test_start_slot_within_capacity() {
        for capacity in 1..64 {
            let Some(capacity) = NonZeroUsize::new(capacity) else { continue };
            for key in ["", "a", "apple", "banana", "a much longer key than usual"] {
                assert!(start_slot(key.as_bytes(), capacity) < capacity.get());
            }
        }
    }

    #[test]
    fn test_start_slot_is_hash_modulo_capacity() {
        let capacity = NonZeroUsize::new(8).unwrap();
        assert_eq!(start_slot(b"a", capacity), usize::try_from(djb2(b"a") % 8).unwrap());
    }
}
