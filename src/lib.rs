//! # Probing Map
//!
//! A small hash table mapping byte-string keys to values, using open addressing with
//! linear probing.
//!
//! Keys are hashed with djb2, and collisions are resolved by scanning forward one slot at a
//! time until the key or an empty slot is found. The table doubles its slot count once it
//! is 60% full.
//!
//! Keys are borrowed rather than copied: the map stores the caller's `&[u8]` (or anything
//! that is `AsRef<[u8]>`, such as `&str` and `String`) and the borrow checker keeps the key
//! storage alive for as long as the map.
//!
//! ## Basic Usage
//!
//! ```rust
//! use probing_map::ProbingMap;
//!
//! // Create a map with four slots
//! let mut map = ProbingMap::try_with_capacity(4)?;
//!
//! // Insert values
//! map.insert("apple", 1);
//! map.insert("banana", 2);
//!
//! // Retrieve values
//! assert_eq!(map.get("apple"), Some(&1));
//! assert!(map.contains_key("banana"));
//!
//! // Remove values
//! assert_eq!(map.remove("apple"), Some(1));
//! assert_eq!(map.get("apple"), None);
//! assert_eq!(map.len(), 1);
//! # Ok::<(), probing_map::ProbingMapError>(())
//! ```
//!
//! ## Borrowed Keys
//!
//! ```rust
//! use probing_map::ProbingMap;
//!
//! let names: Vec<String> = (0..10).map(|i| format!("name-{i}")).collect();
//!
//! let mut map = ProbingMap::new();
//! for (i, name) in names.iter().enumerate() {
//!     map.insert(name, i);
//! }
//!
//! // Lookups compare key contents, not addresses
//! assert_eq!(map.get("name-3"), Some(&3));
//! assert_eq!(map.get(b"name-4".as_slice()), Some(&4));
//! ```
//!
//! ## Caveats
//!
//! Removal leaves no tombstone behind, and every `insert` counts towards `len`, even when it
//! overwrites an existing key. See [`ProbingMap`] for details.

/// Errors returned by the map
mod error;
/// The djb2 hash and start slot selection
mod hash;
/// Module implementing the linear probing map
mod probing_map;

pub use error::ProbingMapError;
pub use hash::{djb2, start_slot};
pub use probing_map::ProbingMap;
