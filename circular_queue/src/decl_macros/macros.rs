// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrap [`pretty_assertions::assert_eq!`] so that tests print a colored diff when two
/// queues (or their contents) don't match. The calling crate must have
/// `pretty_assertions` available, which is the case for the tests in this workspace.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Shorthand for `Ok(())` and `Ok(value)`.
///
/// ```
/// use r3bl_circular_queue::{ok, CommonResult};
///
/// fn unit() -> CommonResult<()> { ok!() }
/// fn value() -> CommonResult<usize> { ok!(8) }
///
/// assert!(unit().is_ok());
/// assert_eq!(value().unwrap(), 8);
/// ```
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}
