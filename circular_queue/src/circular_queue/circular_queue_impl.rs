// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result as FmtResult};

use super::{QueueConfig, QueueOption, QueueStorage};
use crate::{CommonResult, InlineVec};

/// First line of the [`Display`] output of a [`CircularQueue`].
pub const DISPLAY_LABEL: &str = "CircularQueue";

/// A FIFO queue backed by a single contiguous store that is accessed circularly.
///
/// The resize policy (grow, shrink, or overwrite oldest) comes from the [`QueueConfig`]
/// the queue was built with. See the [crate level docs](crate) for the modes.
///
/// None of the operations fail with an error. Emptiness, an insufficient count, and an
/// out of range index are reported through [`Option`] and [`bool`] return values, and an
/// operation that reports failure leaves the queue untouched.
///
/// Two queues are equal when they have the same resize policy and hold the same elements
/// in the same FIFO order. Where those elements sit in the backing store, and how much
/// slack the store has, doesn't matter.
#[derive(Clone, Debug)]
pub struct CircularQueue<T> {
    storage: QueueStorage<T>,
    growth_factor: f32,
    shrink_factor: f32,
    guaranteed_size: usize,
}

impl<T> Default for CircularQueue<T> {
    fn default() -> Self { Self::new() }
}

impl<T: PartialEq> PartialEq for CircularQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.config() == other.config()
            && self.len() == other.len()
            && self.iter().eq(other.iter())
    }
}

/// Construction.
impl<T> CircularQueue<T> {
    /// Fixed capacity of [`crate::DEFAULT_GUARANTEED_SIZE`] slots, overwrite oldest when
    /// full.
    #[must_use]
    pub fn new() -> Self { Self::from_validated_config(QueueConfig::default()) }

    /// # Errors
    ///
    /// Returns a [`crate::QueueConfigError`] report if the config fails
    /// [`QueueConfig::validate`].
    pub fn try_new(config: impl Into<QueueConfig>) -> CommonResult<Self> {
        let config: QueueConfig = config.into();
        config.validate()?;
        Ok(Self::from_validated_config(config))
    }

    /// Apply `options` in order, then build the queue.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::QueueConfigError`] report if the resulting config fails
    /// [`QueueConfig::validate`].
    pub fn try_with_options(
        options: impl IntoIterator<Item = QueueOption>,
    ) -> CommonResult<Self> {
        Self::try_new(QueueConfig::from_options(options))
    }

    fn from_validated_config(config: QueueConfig) -> Self {
        let guaranteed_size = config.resolved_guaranteed_size();
        Self {
            storage: QueueStorage::with_capacity(guaranteed_size),
            growth_factor: config.growth_factor,
            shrink_factor: config.shrink_factor,
            guaranteed_size,
        }
    }

    /// The config this queue was built with. `guaranteed_size` is always resolved.
    #[must_use]
    pub fn config(&self) -> QueueConfig {
        QueueConfig {
            growth_factor: self.growth_factor,
            shrink_factor: self.shrink_factor,
            guaranteed_size: Some(self.guaranteed_size),
        }
    }
}

/// Insertion.
impl<T> CircularQueue<T> {
    /// Append `values` at the tail, in order.
    ///
    /// - Growable mode: if the whole batch doesn't fit, the capacity grows once to
    ///   `floor(growth_factor × (capacity + batch_len))` (never less than what the batch
    ///   needs) before anything is written.
    /// - Fixed mode: values are written one at a time. Once the queue is full, each new
    ///   value evicts the current front. The capacity never changes.
    pub fn add(&mut self, values: impl IntoIterator<Item = T>) {
        let batch: InlineVec<T> = values.into_iter().collect();
        if batch.is_empty() {
            return;
        }

        if self.is_growable() {
            let required = self.storage.len() + batch.len();
            if self.capacity() < required {
                self.grow_by(batch.len());
            }
            for value in batch {
                self.storage.push_back(value);
            }
            return;
        }

        for value in batch {
            if self.storage.is_full() {
                drop(self.storage.overwrite_front(value));
                tracing::trace!(
                    message = "circular queue overwrote its front element",
                    capacity = self.capacity(),
                    base = self.storage.base()
                );
            } else {
                self.storage.push_back(value);
            }
        }
    }

    /// Append a single value. Same as [`Self::add`] with a batch of one.
    pub fn push(&mut self, value: T) { self.add(std::iter::once(value)); }

    fn is_growable(&self) -> bool { self.growth_factor > 0.0 }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn grow_by(&mut self, count: usize) {
        let old_capacity = self.capacity();
        let required = self.storage.len() + count;
        let scaled =
            (self.growth_factor * (old_capacity + count) as f32).floor() as usize;
        let new_capacity = scaled.max(required);

        self.storage.resize(new_capacity);

        tracing::debug!(
            message = "circular queue grew",
            old_capacity,
            new_capacity,
            size = self.len()
        );
    }
}

/// Removal.
impl<T> CircularQueue<T> {
    /// Remove and return the front element. [`None`] if the queue is empty.
    pub fn poll(&mut self) -> Option<T> {
        let value = self.storage.take_front()?;
        self.shrink();
        Some(value)
    }

    /// Remove and return the first `count` elements, in FIFO order. All or nothing:
    /// returns [`None`] without touching the queue if it holds fewer than `count`.
    pub fn poll_until(&mut self, count: usize) -> Option<Vec<T>> {
        let mut values = Vec::with_capacity(count.min(self.len()));
        if !self.storage.drain_front(count, |value| values.push(value)) {
            return None;
        }
        self.shrink();
        Some(values)
    }

    /// Discard the front element. Returns `false` if the queue is empty.
    pub fn remove(&mut self) -> bool {
        if self.storage.take_front().is_none() {
            return false;
        }
        self.shrink();
        true
    }

    /// Discard the first `count` elements. All or nothing: returns `false` without
    /// touching the queue if it holds fewer than `count`.
    pub fn remove_until(&mut self, count: usize) -> bool {
        if !self.storage.drain_front(count, drop) {
            return false;
        }
        self.shrink();
        true
    }

    /// Runs after every successful removal.
    ///
    /// Compacts the store to exactly the current size (no slack) when shrinking is on,
    /// `size >= guaranteed_size`, and `size <= floor(capacity × shrink_factor)`. A queue
    /// that hovers around the threshold resizes repeatedly, since the next insertion into
    /// the now full store grows it again.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn shrink(&mut self) {
        if self.shrink_factor <= 0.0 || self.len() < self.guaranteed_size {
            return;
        }

        let old_capacity = self.capacity();
        let threshold = (old_capacity as f32 * self.shrink_factor).floor() as usize;
        if self.len() > threshold || self.len() == old_capacity {
            return;
        }

        let new_capacity = self.len();
        self.storage.resize(new_capacity);

        tracing::debug!(
            message = "circular queue shrank",
            old_capacity,
            new_capacity,
            size = self.len()
        );
    }
}

/// Access, search, and reset.
impl<T> CircularQueue<T> {
    /// The front element, without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> { self.storage.get(0) }

    /// The element `index` positions from the front. [`None`] when `index >= len()`.
    #[must_use]
    pub fn element(&self, index: usize) -> Option<&T> { self.storage.get(index) }

    /// Offset from the front of the first element that matches `predicate`, scanning
    /// front to back. [`None`] if nothing matches, or the queue is empty.
    pub fn index_of(&self, predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        self.iter().position(predicate)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.storage.is_empty() }

    /// Number of live elements.
    #[must_use]
    pub fn len(&self) -> usize { self.storage.len() }

    /// Physical length of the backing store.
    #[must_use]
    pub fn capacity(&self) -> usize { self.storage.capacity() }

    /// Drop every element and reallocate the store to exactly the guaranteed size, no
    /// matter how far the queue had grown.
    pub fn clear(&mut self) {
        let old_capacity = self.capacity();
        self.storage.reset(self.guaranteed_size);

        tracing::debug!(
            message = "circular queue cleared",
            old_capacity,
            new_capacity = self.capacity(),
            size = 0
        );
    }

    pub(crate) fn storage(&self) -> &QueueStorage<T> { &self.storage }
}

impl<T: Clone> CircularQueue<T> {
    /// Newly allocated copy of the elements, front to back. Empty if the queue is empty.
    #[must_use]
    pub fn values(&self) -> Vec<T> {
        let (tail_segment, head_segment) = self.storage.segments();
        let mut values = Vec::with_capacity(self.len());
        values.extend(
            tail_segment
                .chain(head_segment)
                .filter_map(|physical_index| self.storage.slot(physical_index))
                .cloned(),
        );
        values
    }
}

/// Diagnostic rendering: the [`DISPLAY_LABEL`] on its own line, then the elements front to
/// back, separated by `", "`.
impl<T: Display> Display for CircularQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "{DISPLAY_LABEL}")?;
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}
