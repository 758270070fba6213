// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Physical storage for [`super::CircularQueue`], and the logical to physical index
//! mapping.
//!
//! The live elements occupy the physical slots `base, base + 1, .., base + size - 1`,
//! all modulo `capacity`. Every other slot is [`None`]. In memory, a wrapped around queue
//! looks like this (capacity 8, base 5, size 5):
//!
//! ```text
//!   physical  0   1   2   3   4   5   6   7
//!           ┌───┬───┬───┬───┬───┬───┬───┬───┐
//!           │ d │ e │   │   │   │ a │ b │ c │
//!           └───┴───┴───┴───┴───┴───┴───┴───┘
//!             ╰ head ╯  ↑           ╰ tail ─╯
//!             segment   write       segment
//!                       index
//! ```
//!
//! The "tail segment" `[base, capacity)` holds the oldest elements, and the "head
//! segment" `[0, write_index)` holds the newest ones. When the queue doesn't wrap, the
//! head segment is empty.

use std::ops::Range;

/// Crate internal. The mutators only `debug_assert!` their preconditions, and
/// [`super::CircularQueue`] is the only caller that upholds them.
#[derive(Clone, Debug)]
pub(crate) struct QueueStorage<T> {
    internal_storage: Vec<Option<T>>,
    /// Physical index of the logical front. Stale when `size == 0`.
    base: usize,
    size: usize,
}

impl<T> QueueStorage<T> {
    /// Allocate `capacity` empty slots.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            internal_storage: new_slots(capacity),
            base: 0,
            size: 0,
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize { self.internal_storage.len() }

    #[must_use]
    pub fn len(&self) -> usize { self.size }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.size == 0 }

    #[must_use]
    pub fn is_full(&self) -> bool { self.size == self.capacity() }

    #[must_use]
    pub fn base(&self) -> usize { self.base }

    /// `(base + logical_offset) mod capacity`.
    #[must_use]
    pub fn physical_index(&self, logical_offset: usize) -> usize {
        debug_assert!(self.capacity() > 0, "physical index into a zero capacity store");
        (self.base + logical_offset) % self.capacity()
    }

    /// The next free slot, when the store isn't full. When it is full, this is the slot
    /// of the logical front.
    #[must_use]
    pub fn write_index(&self) -> usize { self.physical_index(self.size) }

    /// The physical ranges that hold the live elements, in FIFO order. The second range
    /// is empty unless the elements wrap around the end of the store.
    #[must_use]
    pub fn segments(&self) -> (Range<usize>, Range<usize>) {
        if self.size == 0 {
            return (0..0, 0..0);
        }

        let capacity = self.capacity();
        let end = self.base + self.size;
        if end <= capacity {
            (self.base..end, 0..0)
        } else {
            (self.base..capacity, 0..end - capacity)
        }
    }

    /// The element at `logical_offset` from the front, if it is live.
    #[must_use]
    pub fn get(&self, logical_offset: usize) -> Option<&T> {
        if logical_offset >= self.size {
            return None;
        }
        self.internal_storage
            .get(self.physical_index(logical_offset))
            .and_then(Option::as_ref)
    }

    /// Raw view of a physical slot. Walk the [`Self::segments`] with this to visit the
    /// live elements without recomputing the modulo for each one.
    #[must_use]
    pub fn slot(&self, physical_index: usize) -> Option<&T> {
        self.internal_storage
            .get(physical_index)
            .and_then(Option::as_ref)
    }

    /// Write `value` at the [`Self::write_index`] and make it the new logical tail. The
    /// caller must make sure the store isn't full.
    pub fn push_back(&mut self, value: T) {
        debug_assert!(!self.is_full(), "push_back into a full store");
        let write_index = self.write_index();
        self.internal_storage[write_index] = Some(value);
        self.size += 1;
    }

    /// Write `value` over the logical front of a full store, and advance the base by one
    /// slot so the written value becomes the logical tail. Returns the evicted value.
    pub fn overwrite_front(&mut self, value: T) -> Option<T> {
        debug_assert!(self.is_full(), "overwrite_front on a store with free slots");
        let write_index = self.write_index();
        let evicted = self.internal_storage[write_index].replace(value);
        self.base = self.physical_index(1);
        evicted
    }

    /// Move the logical front out of the store, leaving [`None`] behind.
    pub fn take_front(&mut self) -> Option<T> {
        if self.size == 0 {
            return None;
        }
        let value = self.internal_storage[self.base].take();
        self.size -= 1;
        self.base = self.physical_index(1);
        value
    }

    /// Move the first `count` elements out of the store in FIFO order, handing each one
    /// to `sink`. All or nothing: returns `false` without touching the store when fewer
    /// than `count` elements are live.
    pub fn drain_front(&mut self, count: usize, mut sink: impl FnMut(T)) -> bool {
        if self.size < count {
            return false;
        }

        for logical_offset in 0..count {
            let physical_index = self.physical_index(logical_offset);
            if let Some(value) = self.internal_storage[physical_index].take() {
                sink(value);
            }
        }
        self.size -= count;
        self.base = self.physical_index(count);
        true
    }

    /// Reallocate the store to `new_capacity` slots. The live elements are moved to the
    /// physical slots `0..size` in FIFO order (tail segment first, then head segment),
    /// and the base goes back to `0`. Dead slots are never copied.
    pub fn resize(&mut self, new_capacity: usize) {
        debug_assert!(
            new_capacity >= self.size,
            "resize to {new_capacity} would drop live elements (size {})",
            self.size
        );

        let (tail_segment, head_segment) = self.segments();
        let mut new_storage = Vec::with_capacity(new_capacity);
        for physical_index in tail_segment.chain(head_segment) {
            new_storage.push(self.internal_storage[physical_index].take());
        }
        new_storage.resize_with(new_capacity, || None);

        self.internal_storage = new_storage;
        self.base = 0;
    }

    /// Drop every element and reallocate `capacity` empty slots.
    pub fn reset(&mut self, capacity: usize) {
        self.internal_storage = new_slots(capacity);
        self.base = 0;
        self.size = 0;
    }

    /// Number of physical slots that hold a value. Always equal to [`Self::len`].
    #[cfg(test)]
    #[must_use]
    pub fn occupied_slot_count(&self) -> usize {
        self.internal_storage.iter().filter(|it| it.is_some()).count()
    }
}

fn new_slots<T>(capacity: usize) -> Vec<Option<T>> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}
