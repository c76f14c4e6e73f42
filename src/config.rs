//! Application-level configuration constants.

// Timer behavior
pub const TICK_PERIOD_MS: u32 = 1_000;
pub const SECONDS_PER_HOUR: f64 = 3_600.0;

// Default values for input fields
pub const DEFAULT_HOURLY_WAGE: f64 = 15.0;
pub const WAGE_INPUT_STEP: &str = "0.01";

// Page query parameter that seeds the initial wage, e.g. `?wage=22.5`
pub const WAGE_QUERY_KEY: &str = "wage";
