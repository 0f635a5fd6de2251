use std::{mem, num::NonZeroUsize};

use log::{debug, trace};

use crate::{ProbingMapError, hash::start_slot};

/// Load at which `insert` grows the table before placing a new entry
const RESIZE_TRIGGER: f64 = 0.6;

/// Factor by which the slot count is multiplied on growth
const GROWTH_FACTOR: usize = 2;

/// Slot count used by `ProbingMap::new`
const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(64) {
    Some(capacity) => capacity,
    None => NonZeroUsize::MIN,
};

/// Outcome of walking the probe sequence for one key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Probe {
    /// Slot where the walk stopped: a matching key, an empty slot, or the last slot
    /// examined once every slot has been visited
    slot: usize,
    /// Number of slots examined, including the one the walk stopped at
    len: usize,
}

/// Walks the linear probe sequence for `key` over `keys`.
///
/// `capacity` must equal `keys.len()`.
#[allow(clippy::arithmetic_side_effects)]
fn probe(keys: &[Option<&[u8]>], capacity: NonZeroUsize, key: &[u8]) -> Probe {
    let mut slot = start_slot(key, capacity);
    let mut len = 1;

    while let Some(Some(stored)) = keys.get(slot) {
        if *stored == key || len >= capacity.get() {
            break;
        }
        slot = (slot + 1) % capacity.get();
        len += 1;
    }

    Probe { slot, len }
}

/// Allocates `capacity` empty value slots without requiring `V: Clone`
fn empty_values<V>(capacity: NonZeroUsize) -> Box<[Option<V>]> {
    std::iter::repeat_with(|| None).take(capacity.get()).collect()
}

/// A hash table mapping borrowed byte-string keys to values, using open addressing with
/// linear probing.
///
/// Keys are stored by reference: the map never copies key bytes, and the `'k` lifetime
/// keeps every key alive for as long as the map may read it, including across resizes.
/// Any `AsRef<[u8]>` type can be used as a key, so `&str`, `String`, `[u8]` and `Vec<u8>`
/// all work and compare by content.
///
/// The table doubles once it is 60% full. Two behaviours of the plain linear probing
/// scheme are kept as they are:
///
/// - `remove` empties the slot outright and leaves no tombstone. A key that collided with
///   the removed one and was placed after it can become unreachable.
/// - `insert` counts every call, including overwrites of an existing key, so `len` can
///   exceed the number of distinct keys and growth happens sooner.
///
/// The map is not thread-safe; mutation requires `&mut self`.
#[derive(Debug, Clone)]
pub struct ProbingMap<'k, V> {
    /// Total number of slots in each of the parallel arrays
    capacity: NonZeroUsize,
    /// Number of `insert` calls minus successful removals
    count: usize,
    /// Key of every slot, `None` when the slot is empty
    keys: Box<[Option<&'k [u8]>]>,
    /// Value of every slot, `None` exactly when the matching key slot is empty
    values: Box<[Option<V>]>,
}

impl<V> Default for ProbingMap<'_, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'k, Q, V> Extend<(&'k Q, V)> for ProbingMap<'k, V>
where
    Q: AsRef<[u8]> + ?Sized + 'k,
{
    fn extend<T: IntoIterator<Item = (&'k Q, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'k, V> ProbingMap<'k, V> {
    /// Creates an empty `ProbingMap` with 64 slots
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty `ProbingMap` with exactly `capacity` slots
    #[must_use]
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            capacity,
            count: 0,
            keys: vec![None; capacity.get()].into_boxed_slice(),
            values: empty_values(capacity),
        }
    }

    /// Creates an empty `ProbingMap` with exactly `capacity` slots.
    ///
    /// # Errors
    ///
    /// Returns [`ProbingMapError::ZeroCapacity`] if `capacity` is zero.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, ProbingMapError> {
        NonZeroUsize::new(capacity).map(Self::with_capacity).ok_or(ProbingMapError::ZeroCapacity)
    }

    /// Associates `value` with `key`, replacing any value already stored for it.
    ///
    /// The table grows first if it is at least 60% full. The entry count is incremented on
    /// every call, even when `key` was already present.
    pub fn insert<Q>(&mut self, key: &'k Q, value: V)
    where
        Q: AsRef<[u8]> + ?Sized,
    {
        if self.should_grow() {
            self.grow();
        }

        self.place(key.as_ref(), value);
        self.count = self.count.saturating_add(1);
    }

    /// Retrieves the value stored for `key`
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: AsRef<[u8]> + ?Sized,
    {
        let slot = self.find(key.as_ref())?;
        self.values.get(slot)?.as_ref()
    }

    /// Retrieves a mutable reference to the value stored for `key`
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        Q: AsRef<[u8]> + ?Sized,
    {
        let slot = self.find(key.as_ref())?;
        self.values.get_mut(slot)?.as_mut()
    }

    /// Returns true if a value is stored for `key`
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: AsRef<[u8]> + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Removes `key` from the map, returning its value if it was present.
    ///
    /// Removing an absent key does nothing. The emptied slot is not marked in any way, so
    /// keys that probed past it on insertion may no longer be found.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        Q: AsRef<[u8]> + ?Sized,
    {
        let slot = self.find(key.as_ref())?;
        let stored_key = self.keys.get_mut(slot)?;
        let value = self.values.get_mut(slot)?.take()?;

        *stored_key = None;
        self.count = self.count.saturating_sub(1);
        Some(value)
    }

    /// Returns the number of entries, counting overwrites of an existing key as new entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if the map holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the number of slots in the table
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Returns the ratio of entries to slots
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::arithmetic_side_effects)]
    pub fn load_factor(&self) -> f64 {
        self.count as f64 / self.capacity.get() as f64
    }

    /// Returns how many slots the probe sequence examines when looking up `key`
    pub fn probe_len<Q>(&self, key: &Q) -> usize
    where
        Q: AsRef<[u8]> + ?Sized,
    {
        probe(&self.keys, self.capacity, key.as_ref()).len
    }

    /// Removes every entry, keeping the current capacity
    pub fn clear(&mut self) {
        trace!("clearing probing map: {} entries in {} slots", self.count, self.capacity);

        self.keys.fill(None);
        for value in &mut *self.values {
            *value = None;
        }
        self.count = 0;
    }

    /// Returns the slot holding `key`, if any
    fn find(&self, key: &[u8]) -> Option<usize> {
        let Probe { slot, .. } = probe(&self.keys, self.capacity, key);

        match self.keys.get(slot) {
            Some(Some(stored)) if *stored == key => Some(slot),
            _ => None,
        }
    }

    /// Writes `key` and `value` into the slot the probe sequence selects
    fn place(&mut self, key: &'k [u8], value: V) {
        let Probe { slot, .. } = probe(&self.keys, self.capacity, key);

        if let (Some(stored_key), Some(stored_value)) =
            (self.keys.get_mut(slot), self.values.get_mut(slot))
        {
            *stored_key = Some(key);
            *stored_value = Some(value);
        }
    }

    /// Returns true once the table is loaded enough to grow before the next insertion
    #[allow(clippy::cast_precision_loss, clippy::arithmetic_side_effects)]
    fn should_grow(&self) -> bool {
        self.count as f64 >= self.capacity.get() as f64 * RESIZE_TRIGGER
    }

    /// Doubles the slot count and re-probes every entry into the new arrays
    fn grow(&mut self) {
        let old_capacity = self.capacity;
        let capacity = NonZeroUsize::new(old_capacity.get().saturating_mul(GROWTH_FACTOR))
            .unwrap_or(old_capacity);

        debug!(
            "growing probing map from {} to {} slots with {} entries",
            old_capacity, capacity, self.count
        );

        let old_keys = mem::replace(&mut self.keys, vec![None; capacity.get()].into_boxed_slice());
        let old_values = mem::replace(&mut self.values, empty_values(capacity));
        self.capacity = capacity;

        for (key, value) in old_keys.into_vec().into_iter().zip(old_values.into_vec()) {
            if let (Some(key), Some(value)) = (key, value) {
                self.place(key, value);
            }
        }
    }
}
