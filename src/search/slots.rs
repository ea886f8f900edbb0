//! Fixed-size, write-once result slots with a completion barrier.
//!
//! Each shard of a search owns one slot. A slot is settled exactly once,
//! either with the shard's result ([`WriteOnceSlots::set`]) or as empty when
//! the shard produced nothing ([`WriteOnceSlots::set_empty`]). Readers wait for
//! every slot to settle before collecting the results.
//!
//! # Thread safety
//!
//! Slots are individually guarded by [`OnceLock`], so writers to different
//! slots never contend. The settled counter and the completion signal use
//! [`parking_lot::Mutex`] and [`parking_lot::Condvar`].

use std::sync::OnceLock;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

use crate::error::{Result, ScrollError};

#[derive(Debug)]
pub struct WriteOnceSlots<T> {
    slots: Box<[OnceLock<Option<T>>]>,
    settled: Mutex<usize>,
    completed: Condvar,
}

impl<T> WriteOnceSlots<T> {
    /// Create `len` unsettled slots.
    pub fn new(len: usize) -> Self {
        Self {
            slots: (0..len).map(|_| OnceLock::new()).collect(),
            settled: Mutex::new(0),
            completed: Condvar::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Store the result for `index`. Fails if the slot is already settled.
    pub fn set(&self, index: usize, value: T) -> Result<()> {
        self.settle(index, Some(value))
    }

    /// Settle `index` without a result, e.g. for a failed shard.
    pub fn set_empty(&self, index: usize) -> Result<()> {
        self.settle(index, None)
    }

    fn settle(&self, index: usize, value: Option<T>) -> Result<()> {
        let slot = self.slots.get(index).ok_or(ScrollError::SlotOutOfBounds {
            index,
            len: self.slots.len(),
        })?;

        slot.set(value)
            .map_err(|_| ScrollError::SlotAlreadySet { index })?;

        let mut settled = self.settled.lock();
        *settled += 1;
        log::trace!("settled slot {index} ({}/{})", *settled, self.slots.len());
        if *settled == self.slots.len() {
            self.completed.notify_all();
        }
        Ok(())
    }

    /// The result stored at `index`, if the slot holds one.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)?.get()?.as_ref()
    }

    pub fn settled(&self) -> usize {
        *self.settled.lock()
    }

    pub fn is_complete(&self) -> bool {
        self.settled() == self.slots.len()
    }

    /// Block until every slot is settled.
    pub fn wait_complete(&self) {
        let mut settled = self.settled.lock();
        while *settled < self.slots.len() {
            self.completed.wait(&mut settled);
        }
    }

    /// Block until every slot is settled or `timeout` elapses.
    ///
    /// Returns whether the slots are complete. A timeout too large to
    /// represent as a deadline waits without one.
    pub fn wait_complete_for(&self, timeout: Duration) -> bool {
        let Some(deadline) = Instant::now().checked_add(timeout) else {
            self.wait_complete();
            return true;
        };
        let mut settled = self.settled.lock();
        while *settled < self.slots.len() {
            if self.completed.wait_until(&mut settled, deadline).timed_out() {
                return *settled == self.slots.len();
            }
        }
        true
    }

    /// The stored results in slot order, skipping empty slots.
    ///
    /// Fails with [`ScrollError::Incomplete`] while any slot is unsettled.
    pub fn present(&self) -> Result<Vec<&T>> {
        let settled = self.settled();
        if settled != self.slots.len() {
            return Err(ScrollError::Incomplete {
                settled,
                len: self.slots.len(),
            });
        }

        Ok(self
            .slots
            .iter()
            .filter_map(|slot| slot.get().and_then(Option::as_ref))
            .collect())
    }
}
