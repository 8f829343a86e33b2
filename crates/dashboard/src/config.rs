use std::time::Duration;

use chrono::{NaiveDate, Utc};

/// Dashboard tuning knobs. The API builds this from its environment config.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Simulated processing time of a ticket scan.
    pub scan_delay: Duration,
    /// Fixed "today" for event status; `None` uses the current UTC date.
    pub today: Option<NaiveDate>,
}

impl DashboardConfig {
    pub const DEFAULT_SCAN_DELAY: Duration = Duration::from_millis(1500);

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Utc::now().date_naive())
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            scan_delay: Self::DEFAULT_SCAN_DELAY,
            today: None,
        }
    }
}
