// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallvec::SmallVec;

/// Batches that fit in this many slots are staged on the stack before they are written
/// into the queue.
pub const DEFAULT_INLINE_VEC_SIZE: usize = 8;

/// Staging area for a batch of values passed to [`crate::CircularQueue::add`]. The batch
/// length has to be known before any value is written, since growth is decided once per
/// batch.
pub type InlineVec<T> = SmallVec<[T; DEFAULT_INLINE_VEC_SIZE]>;
