use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How far the date navigation steps on each arrow press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Day,
    Week,
    Month,
}

/// The time span a screen is currently showing: an anchor date plus the
/// period around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub selected_date: DateTime<Utc>,
    pub period: Period,
}

impl TimeWindow {
    pub fn new(selected_date: DateTime<Utc>, period: Period) -> Self {
        Self {
            selected_date,
            period,
        }
    }
}
