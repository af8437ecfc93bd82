// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrap the [`pretty_assertions::assert_eq`] macro so that diffs are easy to read when a
/// comparison of two large values (like pixel buffers or compiled programs) fails.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Shorthand for `Ok(())` or `Ok(value)`.
///
/// # Example
///
/// ```
/// use r3bl_paint::ok;
/// fn it_works() -> miette::Result<()> { ok!() }
/// fn it_returns() -> miette::Result<u8> { ok!(12) }
/// assert!(it_works().is_ok());
/// assert_eq!(it_returns().unwrap(), 12);
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

/// Installs `mimalloc` as the global allocator. Call this at the top of `main()` in a
/// binary, never from library code.
#[macro_export]
macro_rules! set_mimalloc_in_main {
    () => {{
        use mimalloc::MiMalloc;

        #[global_allocator]
        static GLOBAL: MiMalloc = MiMalloc;
    }};
}
