// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Add;

use tracing::dispatcher;

use crate::{DisplayPreference, TracingConfig, WriterConfig, ok};

/// Both [`try_initialize_logging_global`] and [`try_initialize_logging_thread_local`]
/// receive anything that implements [`Into<TracingConfig>`], and configs can be added
/// together:
///
/// ```no_run
/// use r3bl_circular_queue::{
///     TracingConfig, DisplayPreference, WriterConfig,
///     try_initialize_logging_global, try_initialize_logging_thread_local
/// };
///
/// let config_1: TracingConfig = tracing::Level::DEBUG.into();
/// let config_2: TracingConfig = tracing_core::LevelFilter::TRACE.into();
/// let config_3: TracingConfig = DisplayPreference::Stderr.into();
/// let config_4: TracingConfig = WriterConfig::File("queue.log".to_string()).into();
///
/// let _ = try_initialize_logging_global(config_2 + config_3);
/// let _guard = try_initialize_logging_thread_local(config_1 + config_4);
/// ```
pub mod tracing_config_options {
    use super::{Add, DisplayPreference, TracingConfig, WriterConfig};

    pub const DEFAULT_LOG_FILE_NAME: &str = "circular_queue.log";

    impl From<tracing::Level> for TracingConfig {
        fn from(level: tracing::Level) -> Self {
            Self {
                level_filter: level.into(),
                writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
            }
        }
    }

    impl From<tracing_core::LevelFilter> for TracingConfig {
        fn from(level_filter: tracing_core::LevelFilter) -> Self {
            Self {
                level_filter,
                writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
            }
        }
    }

    impl From<DisplayPreference> for TracingConfig {
        fn from(preferred_display: DisplayPreference) -> Self {
            Self::new_display(preferred_display)
        }
    }

    impl From<WriterConfig> for TracingConfig {
        fn from(writer_config: WriterConfig) -> Self {
            Self {
                level_filter: tracing_core::LevelFilter::DEBUG,
                writer_config,
            }
        }
    }

    /// Merge two [`TracingConfig`] instances. The more verbose level wins.
    impl Add<TracingConfig> for TracingConfig {
        type Output = Self;

        fn add(self, rhs: Self) -> Self::Output {
            Self {
                level_filter: self.level_filter.max(rhs.level_filter),
                writer_config: self.writer_config + rhs.writer_config,
            }
        }
    }

    /// Merge two [`WriterConfig`] instances. On a collision `rhs` wins, and a display
    /// combines with a file into [`WriterConfig::DisplayAndFile`].
    /// - `Display(a) + File(f) = DisplayAndFile(a, f)`.
    /// - `Display(a) + Display(b) = Display(b)`.
    /// - `None + x = x + None = x`.
    impl Add<WriterConfig> for WriterConfig {
        type Output = Self;

        fn add(self, rhs: WriterConfig) -> Self::Output {
            use WriterConfig::{Display, DisplayAndFile, File, None};

            match (self, rhs) {
                (None, wc_rhs) => wc_rhs,
                (wc_lhs, None) => wc_lhs,
                (Display(dp_lhs), File(f_rhs)) => DisplayAndFile(dp_lhs, f_rhs),
                (File(f_lhs), Display(dp_rhs)) => DisplayAndFile(dp_rhs, f_lhs),
                (Display(_), Display(dp_rhs)) => Display(dp_rhs),
                (File(_), File(f_rhs)) => File(f_rhs),
                (DisplayAndFile(_, f_lhs), Display(dp_rhs)) => {
                    DisplayAndFile(dp_rhs, f_lhs)
                }
                (DisplayAndFile(dp_lhs, _), File(f_rhs)) => DisplayAndFile(dp_lhs, f_rhs),
                (_, DisplayAndFile(dp_rhs, f_rhs)) => DisplayAndFile(dp_rhs, f_rhs),
            }
        }
    }
}

/// Global default subscriber, which once set can't be unset or changed.
///
/// Logging is **DISABLED** by **default**: the queue only emits events, and nothing
/// is written until a subscriber is installed. Passing [`tracing_core::LevelFilter::OFF`]
/// is a no-op.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or if a global subscriber is
/// already installed.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF) {
        return ok!();
    }

    it.install_global()
}

/// Thread local subscriber, active until the returned guard is dropped. This is great
/// for tests. Returns `None` when the level filter is [`tracing_core::LevelFilter::OFF`].
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let it: TracingConfig = options.into();

    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF) {
        return Ok(None);
    }

    it.install_thread_local().map(Some)
}
