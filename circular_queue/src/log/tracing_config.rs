// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing::dispatcher::DefaultGuard;
use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use super::try_create_layers;
use crate::LogCapture;

/// Configure where the queue's resize events (and anything else logged through
/// [`tracing`]) end up. You can display the logs to:
/// 1. a file,
/// 2. stdout or stderr,
/// 3. both.
///
/// Fields:
/// - `writer_config`: [`WriterConfig`] to choose where to write the logs.
/// - `level_filter`: [`LevelFilter`] to use. [`LevelFilter::OFF`] disables logging.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// - `tracing_log_file_path_and_prefix`: [String] is the file path to use for the log
///   file. Eg: `/tmp/circular_queue.log` or `circular_queue.log`.
/// - [`DisplayPreference`] is the preferred display to use for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference /* Stdout, Stderr */),
    File(String /* tracing_log_file_path_and_prefix */),
    DisplayAndFile(
        DisplayPreference,
        String, /* tracing_log_file_path_and_prefix */
    ),
}

/// [`DisplayPreference::Capture`] writes into an in-memory [`LogCapture`] buffer, which
/// is how the integration tests observe resize events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
    Capture(LogCapture),
}

impl TracingConfig {
    #[must_use]
    pub fn new_display(preferred_display: DisplayPreference) -> Self {
        Self {
            writer_config: WriterConfig::Display(preferred_display),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn new_file(file_path: impl Into<String>) -> Self {
        Self {
            writer_config: WriterConfig::File(file_path.into()),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    /// Install the layers as the global default subscriber. This can only succeed once
    /// per process.
    ///
    /// # Errors
    ///
    /// Returns an error if the file layer can't be created, or if a global subscriber
    /// has already been installed.
    pub fn install_global(self) -> miette::Result<()> {
        let layers = try_create_layers(self)?;
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .map_err(|err| miette::miette!("Could not install global subscriber: {err}"))
    }

    /// Install the layers as the default subscriber for the current thread, until the
    /// returned guard is dropped. Great for tests.
    ///
    /// # Errors
    ///
    /// Returns an error if the file layer can't be created.
    pub fn install_thread_local(self) -> miette::Result<DefaultGuard> {
        let layers = try_create_layers(self)?;
        let subscriber = tracing_subscriber::registry().with(layers);
        Ok(tracing::subscriber::set_default(subscriber))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_install_thread_local_writes_to_capture() {
        let log_capture = LogCapture::new();
        let config = TracingConfig::new_display(DisplayPreference::Capture(
            log_capture.clone(),
        ));
        assert_eq2!(config.get_level_filter(), LevelFilter::DEBUG);

        let guard = config.install_thread_local().unwrap();
        tracing::debug!(message = "visible", size = 1);
        tracing::trace!(message = "filtered");
        drop(guard);
        tracing::debug!(message = "after guard dropped");

        let lines = log_capture.lines();
        assert_eq2!(lines.len(), 1);
        assert!(lines[0].contains("visible"));
        assert!(lines[0].contains("size=1"));
    }

    #[test]
    fn test_install_thread_local_writes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("circular_queue.log");
        let config = TracingConfig::new_file(file_path.to_str().unwrap());
        assert_eq2!(
            config.get_writer_config(),
            WriterConfig::File(file_path.to_str().unwrap().to_string())
        );

        let guard = config.install_thread_local().unwrap();
        tracing::debug!(message = "circular queue grew", new_capacity = 20);
        drop(guard);

        let contents = std::fs::read_to_string(&file_path).unwrap();
        assert!(contents.contains("circular queue grew"));
        assert!(contents.contains("new_capacity=20"));
    }
}
