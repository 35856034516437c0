//! Kiosk mode timing. The page script runs the auto-scroll; these values
//! reach it through `<body>` data attributes.

/// Auto-scroll tick interval.
pub const TICK_MS: u64 = 50;
/// Pixels advanced per tick.
pub const STEP: f64 = 1.0;
/// Pause after the latest pointer move, wheel or touch.
pub const PAUSE_MS: u64 = 5000;
/// Wait at the bottom before jumping back to the top.
pub const RETURN_DELAY_MS: u64 = 3000;
/// Distance from the bottom that counts as "reached the end".
pub const BOTTOM_SLACK: f64 = 10.0;
