/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Start a new refresh generation on a timer
    pub const ENABLE_AUTO_REFRESH: bool = true;

    /// Auto-refresh interval in milliseconds (5 minutes)
    pub const POLLING_INTERVAL_MS: u32 = 300_000;

    /// Number of widgets that report to the refresh barrier
    pub const WIDGET_COUNT: usize = 8;

    /// Force-release the refreshing indicator after this long
    pub const REFRESH_DEADLINE_MS: u32 = 30_000;

    /// Give up on a single widget's fetch after this long
    pub const FETCH_DEADLINE_MS: u32 = 20_000;

    /// Samples further apart than this are drawn as a break in the power trend
    pub const GAP_THRESHOLD_MINUTES: i64 = 5;

    /// Upper bound on cells in the state timeline strip
    pub const TIMELINE_SEGMENTS: usize = 200;

    pub const TOAST_DURATION_MS: u32 = 3_000;

    /// Delay before redrawing charts after a window resize
    pub const RESIZE_DEBOUNCE_MS: u32 = 150;
}
