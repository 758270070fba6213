// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_circular_queue
//!
//! A generic FIFO queue that lives in a single contiguous backing store, which is
//! accessed circularly. Removing from the front never shifts elements; instead the
//! "base" index (the physical slot of the logical front) moves forward, and the write
//! position wraps around to the start of the store.
//!
//! ## Modes
//!
//! The behavior of the queue when it runs out of room is decided by a [`QueueConfig`],
//! which is applied once at construction:
//!
//! | Mode                    | Configuration                           | When full                                 |
//! | :---------------------- | :-------------------------------------- | :---------------------------------------- |
//! | Fixed (default)         | [`QueueOption::FixedSize`] or nothing   | The oldest element is overwritten         |
//! | Growable                | [`QueueOption::GrowthFactor`] `> 0`     | Capacity grows before the batch is stored |
//! | Growable + shrinkable   | [`QueueOption::GrowthFactor`] both `> 0`| As above, and compacts after removals     |
//!
//! [`QueueOption::GuaranteedSize`] sets the capacity the queue starts with and returns to
//! on [`CircularQueue::clear`]. It is also the floor below which shrinking never fires.
//!
//! ## Example
//!
//! ```
//! use r3bl_circular_queue::{CircularQueue, QueueOption};
//!
//! let mut queue = CircularQueue::try_with_options([
//!     QueueOption::GrowthFactor { growth: 2.0, shrink: 0.5 },
//!     QueueOption::GuaranteedSize(10),
//! ])
//! .unwrap();
//!
//! queue.add(["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]);
//! assert_eq!(queue.capacity(), 10);
//!
//! queue.push("k");
//! assert_eq!(queue.capacity(), 22);
//!
//! assert_eq!(queue.poll(), Some("a"));
//! assert_eq!(queue.capacity(), 10);
//! ```
//!
//! ## Thread safety
//!
//! None. The queue is owned by exactly one caller, and every operation is a bounded,
//! synchronous, in memory transformation. Wrap it in a [`std::sync::Mutex`] if it must
//! be shared.
//!
//! ## Logging
//!
//! Resizes are reported as [`tracing::debug!`] events, and overwrites in fixed mode as
//! [`tracing::trace!`] events. Nothing is printed unless a subscriber is installed, for
//! example with [`try_initialize_logging_thread_local`].

// Enforce strict error handling in production library code only. Tests are allowed to use
// .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod circular_queue;
pub mod common;
pub mod decl_macros;
pub mod log;
pub mod test_fixtures;

// Re-export.
pub use circular_queue::*;
pub use common::*;
pub use log::*;
pub use test_fixtures::*;

/// Compiles and runs the code blocks in `README.md` as doctests.
#[doc = include_str!("../README.md")]
#[cfg(doctest)]
#[derive(Debug)]
pub struct ReadmeDoctests;
