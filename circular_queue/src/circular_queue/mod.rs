// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod circular_queue_impl;
pub mod queue_config;
pub mod queue_iter;
mod queue_storage;

// Re-export.
pub use circular_queue_impl::*;
pub use queue_config::*;
pub use queue_iter::*;
pub(crate) use queue_storage::QueueStorage;
