//! calconv - integration test support.
//!
//! Re-exports the workspace crates so integration tests can use `calconv::` paths.

pub use calconv_convert::{convert, diagnostics, host, model, timezone};
pub use calconv_core::config;

/// Dates exercised by the round-trip tests: leap days, year boundaries and DST edges.
pub const SAMPLE_DATES: &[(i32, u32, u32)] = &[
    (1970, 1, 1),
    (1999, 12, 31),
    (2000, 2, 29),
    (2024, 2, 29),
    (2026, 3, 8),
    (2026, 3, 29),
    (2026, 10, 25),
    (2026, 11, 1),
    (2038, 1, 19),
];

/// Times of day exercised by the round-trip tests.
pub const SAMPLE_TIMES: &[(u32, u32, u32)] = &[
    (0, 0, 0),
    (1, 30, 0),
    (2, 30, 0),
    (12, 0, 0),
    (23, 59, 59),
];
