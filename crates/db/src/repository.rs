//! Generic in-memory repository.
//!
//! Every entity type gets one [`Table`], holding its rows in insertion order
//! alongside a monotonically increasing id counter. All operations take the
//! table lock for a bounded, synchronous critical section, so a reader
//! never observes a half-applied write.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use indexmap::IndexMap;
use salon_core::types::{DbId, Timestamp};

use crate::error::StoreError;

/// A stored entity.
pub trait Record: Clone {
    /// Singular display name used in not-found messages (e.g. `"Booking"`).
    const ENTITY: &'static str;

    fn id(&self) -> DbId;

    /// Visibility filter applied by [`Table::list_visible`].
    fn is_visible(&self) -> bool {
        true
    }
}

/// A creation payload that becomes a stored record once it has an id.
pub trait IntoRecord<E: Record> {
    fn into_record(self, id: DbId, now: Timestamp) -> E;
}

/// A partial update merged field by field over an existing record.
pub trait Patch<E: Record> {
    fn apply(self, record: &mut E);
}

struct Rows<E> {
    rows: IndexMap<DbId, E>,
    next_id: DbId,
}

/// Rows of a single entity type plus its id counter.
pub struct Table<E: Record> {
    inner: RwLock<Rows<E>>,
}

impl<E: Record> Default for Table<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Record> Table<E> {
    /// An empty table whose first id is `1`.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// An empty table whose first assigned id is `first_id`.
    pub fn starting_at(first_id: DbId) -> Self {
        Self {
            inner: RwLock::new(Rows {
                rows: IndexMap::new(),
                next_id: first_id,
            }),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Rows<E>>, StoreError> {
        self.inner
            .read()
            .map_err(|_| StoreError::Poisoned { entity: E::ENTITY })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Rows<E>>, StoreError> {
        self.inner
            .write()
            .map_err(|_| StoreError::Poisoned { entity: E::ENTITY })
    }

    /// Records passing the visibility filter, in insertion order.
    pub fn list_visible(&self) -> Result<Vec<E>, StoreError> {
        let guard = self.read()?;
        Ok(guard.rows.values().filter(|r| r.is_visible()).cloned().collect())
    }

    /// Every record, in insertion order.
    pub fn list_all(&self) -> Result<Vec<E>, StoreError> {
        let guard = self.read()?;
        Ok(guard.rows.values().cloned().collect())
    }

    /// Records matching `pred`, in insertion order.
    pub fn filter<F>(&self, pred: F) -> Result<Vec<E>, StoreError>
    where
        F: Fn(&E) -> bool,
    {
        let guard = self.read()?;
        Ok(guard.rows.values().filter(|r| pred(r)).cloned().collect())
    }

    /// Look up a record by id, ignoring the visibility filter.
    pub fn find_by_id(&self, id: DbId) -> Result<Option<E>, StoreError> {
        let guard = self.read()?;
        Ok(guard.rows.get(&id).cloned())
    }

    /// Store a new record under the next id and return it.
    pub fn insert<N>(&self, new: N) -> Result<E, StoreError>
    where
        N: IntoRecord<E>,
    {
        let mut guard = self.write()?;
        let id = guard.next_id;
        guard.next_id += 1;

        let record = new.into_record(id, Utc::now());
        guard.rows.insert(record.id(), record.clone());
        tracing::debug!(entity = E::ENTITY, id = record.id(), "Record inserted");
        Ok(record)
    }

    /// Run `f` against the stored record, returning its result and the record
    /// as it stands afterwards. `None` if no record has this id.
    pub fn modify<F, R>(&self, id: DbId, f: F) -> Result<Option<(E, R)>, StoreError>
    where
        F: FnOnce(&mut E) -> R,
    {
        let mut guard = self.write()?;
        Ok(guard.rows.get_mut(&id).map(|record| {
            let out = f(record);
            (record.clone(), out)
        }))
    }

    /// Merge `patch` over the record with this id.
    pub fn update<P>(&self, id: DbId, patch: P) -> Result<Option<E>, StoreError>
    where
        P: Patch<E>,
    {
        Ok(self
            .modify(id, |record| patch.apply(record))?
            .map(|(record, ())| record))
    }

    /// Remove a record. Returns `false` if it did not exist.
    ///
    /// The id is never handed out again.
    pub fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        let mut guard = self.write()?;
        Ok(guard.rows.shift_remove(&id).is_some())
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.rows.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
