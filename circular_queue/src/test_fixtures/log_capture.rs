// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::{Result, Write},
          sync::{Arc, Mutex, PoisonError}};

/// In memory writer for log output. You can safely clone this struct, since it only
/// contains an `Arc<Mutex<Vec<u8>>>`. The inner `buffer` is shared between clones, so
/// hand a clone to [`crate::DisplayPreference::Capture`] and read the other one.
#[derive(Debug, Clone, Default)]
pub struct LogCapture {
    pub buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// A poisoned lock still yields whatever was written before the panic.
    #[must_use]
    pub fn get_copy_of_buffer(&self) -> Vec<u8> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn get_copy_of_buffer_as_string(&self) -> String {
        String::from_utf8_lossy(&self.get_copy_of_buffer()).into_owned()
    }

    /// Captured output split into lines, empty lines dropped.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.get_copy_of_buffer_as_string()
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Two captures are equal when they share the same buffer.
impl PartialEq for LogCapture {
    fn eq(&self, other: &Self) -> bool { Arc::ptr_eq(&self.buffer, &other.buffer) }
}

impl Eq for LogCapture {}

impl Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<()> { Ok(()) }
}
