pub static SITE_NAME: &str = "HypeMC Dashboard";

/// Players shown per page unless the user picks another size.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// How long a toast stays on screen.
pub const NOTIFICATION_TIMEOUT_MS: u32 = 4_000;

/// Interval between online-status recomputations on the players page.
pub const CLOCK_TICK_MS: u32 = 30_000;

/// Interval between API health checks in the header.
pub const HEALTH_POLL_MS: u32 = 60_000;
