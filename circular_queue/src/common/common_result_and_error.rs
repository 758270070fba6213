// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Queue operations themselves never fail with an error; they report emptiness,
//! insufficient count, or an out of range index through [`Option`] and [`bool`] return
//! values. The only errors in this crate come from building a queue out of an invalid
//! [`crate::QueueConfig`], and from setting up logging.
//!
//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

/// Type alias to make it easy to work with [`miette::Result`] and [`miette::Report`].
/// Works hand in hand w/ [`QueueConfigError`] and any other type of error that
/// implements [`miette::Diagnostic`].
pub type CommonResult<T> = miette::Result<T>;

/// Errors from validating a [`crate::QueueConfig`].
///
/// | Variant                   | Cause                                                   |
/// | :------------------------ | :------------------------------------------------------ |
/// | [`InvalidGrowthFactor`]   | Growth factor is negative, `NaN`, or infinite           |
/// | [`InvalidShrinkFactor`]   | Shrink factor is outside `[0.0, 1.0]`, or `NaN`         |
/// | [`ZeroGuaranteedSize`]    | A fixed or guaranteed size of `0` was requested         |
/// | [`InvalidJson`]           | A JSON config string could not be deserialized          |
///
/// [`InvalidGrowthFactor`]: Self::InvalidGrowthFactor
/// [`InvalidShrinkFactor`]: Self::InvalidShrinkFactor
/// [`ZeroGuaranteedSize`]: Self::ZeroGuaranteedSize
/// [`InvalidJson`]: Self::InvalidJson
#[derive(Debug, Clone, PartialEq, thiserror::Error, miette::Diagnostic)]
pub enum QueueConfigError {
    #[error("📈 Invalid growth factor: {growth_factor}")]
    #[diagnostic(
        code(r3bl_circular_queue::config::growth_factor),
        help("Use a finite value >= 0.0. Use 0.0 to disable growth (fixed capacity).")
    )]
    InvalidGrowthFactor { growth_factor: f32 },

    #[error("📉 Invalid shrink factor: {shrink_factor}")]
    #[diagnostic(
        code(r3bl_circular_queue::config::shrink_factor),
        help("Use a value in the range [0.0, 1.0]. Use 0.0 to disable shrinking.")
    )]
    InvalidShrinkFactor { shrink_factor: f32 },

    #[error("📦 Guaranteed size can't be 0")]
    #[diagnostic(
        code(r3bl_circular_queue::config::guaranteed_size),
        help("Leave the guaranteed size unset to get the default of 8 slots.")
    )]
    ZeroGuaranteedSize,

    #[error("📑 Could not parse queue config JSON: {reason}")]
    #[diagnostic(code(r3bl_circular_queue::config::json))]
    InvalidJson { reason: String },
}
