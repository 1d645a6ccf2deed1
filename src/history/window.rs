//! Time windows over the calculation history.
//!
//! Windows are fixed-length durations measured back from `now`, except
//! [`TimeWindow::Current`] which selects only the latest record. A month is
//! always 30 days and a year 365 days.

use std::str::FromStr;

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::CalculationRecord;

/// A history filter window.
///
/// # Example
///
/// ```
/// use tip_pool_engine::history::TimeWindow;
///
/// let window: TimeWindow = "1_week".parse().unwrap();
/// assert_eq!(window, TimeWindow::OneWeek);
/// assert_eq!(window.file_name(), "Last_1_Week.xlsx");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeWindow {
    /// The single most recent record.
    #[serde(rename = "current")]
    Current,
    /// The last 24 hours.
    #[serde(rename = "1_day")]
    OneDay,
    /// The last 7 days.
    #[serde(rename = "1_week")]
    OneWeek,
    /// The last 30 days.
    #[serde(rename = "1_month")]
    OneMonth,
    /// The last 365 days.
    #[serde(rename = "1_year")]
    OneYear,
}

impl TimeWindow {
    /// Every window, in the order exports are offered.
    pub const ALL: [TimeWindow; 5] = [
        TimeWindow::Current,
        TimeWindow::OneDay,
        TimeWindow::OneWeek,
        TimeWindow::OneMonth,
        TimeWindow::OneYear,
    ];

    /// Returns the wire name (`current`, `1_day`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeWindow::Current => "current",
            TimeWindow::OneDay => "1_day",
            TimeWindow::OneWeek => "1_week",
            TimeWindow::OneMonth => "1_month",
            TimeWindow::OneYear => "1_year",
        }
    }

    /// Returns the human-readable label shown next to a download.
    pub fn label(&self) -> &'static str {
        match self {
            TimeWindow::Current => "Current Calculation",
            TimeWindow::OneDay => "Last 1 Day",
            TimeWindow::OneWeek => "Last 1 Week",
            TimeWindow::OneMonth => "Last 1 Month",
            TimeWindow::OneYear => "Last 1 Year",
        }
    }

    /// Returns the spreadsheet file name for this window's export.
    pub fn file_name(&self) -> String {
        format!("{}.xlsx", self.label().replace(' ', "_"))
    }

    /// Returns the window length, or `None` for [`TimeWindow::Current`].
    pub fn duration(&self) -> Option<TimeDelta> {
        match self {
            TimeWindow::Current => None,
            TimeWindow::OneDay => Some(TimeDelta::days(1)),
            TimeWindow::OneWeek => Some(TimeDelta::days(7)),
            TimeWindow::OneMonth => Some(TimeDelta::days(30)),
            TimeWindow::OneYear => Some(TimeDelta::days(365)),
        }
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeWindow {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeWindow::ALL
            .into_iter()
            .find(|w| w.as_str() == s)
            .ok_or_else(|| EngineError::UnknownTimeWindow {
                value: s.to_string(),
            })
    }
}

/// Selects the history records that fall within `window` of `now`.
///
/// A record is included when `now - timestamp <= duration`; the boundary is
/// inclusive. Order is preserved. [`TimeWindow::Current`] returns the last
/// record regardless of its age.
///
/// # Examples
///
/// ```
/// use tip_pool_engine::history::{TimeWindow, filter_by_window};
///
/// let now = chrono::Local::now().naive_local();
/// assert!(filter_by_window(&[], TimeWindow::OneYear, now).is_empty());
/// ```
pub fn filter_by_window(
    history: &[CalculationRecord],
    window: TimeWindow,
    now: NaiveDateTime,
) -> Vec<CalculationRecord> {
    match window.duration() {
        None => history.last().cloned().into_iter().collect(),
        Some(duration) => history
            .iter()
            .filter(|record| now - record.timestamp <= duration)
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TipsDistribution;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn make_now() -> NaiveDateTime {
        NaiveDateTime::parse_from_str("2026-06-30 20:00:00", "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn record_at(timestamp: NaiveDateTime) -> CalculationRecord {
        let mut tips = TipsDistribution::new();
        tips.insert("Alice".to_string(), Decimal::new(1000, 2));
        CalculationRecord {
            timestamp,
            merchant_take_rate: Decimal::ZERO,
            total_tips_distributed: Decimal::new(10, 0),
            tips_distribution: tips,
        }
    }

    fn record_ago(delta: TimeDelta) -> CalculationRecord {
        record_at(make_now() - delta)
    }

    /// HW-001: two hours ago and forty days ago
    #[test]
    fn test_recent_and_old_records_by_window() {
        let recent = record_ago(TimeDelta::hours(2));
        let old = record_ago(TimeDelta::days(40));
        let history = vec![old.clone(), recent.clone()];

        assert_eq!(
            filter_by_window(&history, TimeWindow::OneWeek, make_now()),
            vec![recent.clone()]
        );
        assert_eq!(
            filter_by_window(&history, TimeWindow::OneMonth, make_now()),
            vec![recent.clone()]
        );
        assert_eq!(
            filter_by_window(&history, TimeWindow::OneYear, make_now()),
            vec![old, recent]
        );
    }

    /// HW-002: current selects only the last record
    #[test]
    fn test_current_selects_last_record() {
        let first = record_ago(TimeDelta::days(400));
        let last = record_ago(TimeDelta::days(300));
        let history = vec![first, last.clone()];

        assert_eq!(
            filter_by_window(&history, TimeWindow::Current, make_now()),
            vec![last]
        );
    }

    /// HW-003: empty history gives nothing for every window
    #[test]
    fn test_empty_history() {
        for window in TimeWindow::ALL {
            assert!(filter_by_window(&[], window, make_now()).is_empty());
        }
    }

    /// HW-004: the window boundary is inclusive
    #[test]
    fn test_boundary_is_inclusive() {
        let exactly_one_day = record_ago(TimeDelta::days(1));
        let just_over = record_ago(TimeDelta::days(1) + TimeDelta::seconds(1));
        let history = vec![just_over, exactly_one_day.clone()];

        assert_eq!(
            filter_by_window(&history, TimeWindow::OneDay, make_now()),
            vec![exactly_one_day]
        );
    }

    #[test]
    fn test_month_is_thirty_days() {
        let thirty = record_ago(TimeDelta::days(30));
        let thirty_one = record_ago(TimeDelta::days(31));
        let history = vec![thirty_one, thirty.clone()];

        assert_eq!(
            filter_by_window(&history, TimeWindow::OneMonth, make_now()),
            vec![thirty]
        );
    }

    #[test]
    fn test_parse_wire_names() {
        assert_eq!("current".parse::<TimeWindow>().unwrap(), TimeWindow::Current);
        assert_eq!("1_day".parse::<TimeWindow>().unwrap(), TimeWindow::OneDay);
        assert_eq!("1_month".parse::<TimeWindow>().unwrap(), TimeWindow::OneMonth);
        assert_eq!("1_year".parse::<TimeWindow>().unwrap(), TimeWindow::OneYear);
    }

    #[test]
    fn test_parse_unknown_window_fails() {
        match "fortnight".parse::<TimeWindow>().unwrap_err() {
            EngineError::UnknownTimeWindow { value } => assert_eq!(value, "fortnight"),
            other => panic!("Expected UnknownTimeWindow, got {:?}", other),
        }
    }

    #[test]
    fn test_serde_uses_wire_names() {
        assert_eq!(
            serde_json::to_string(&TimeWindow::OneWeek).unwrap(),
            "\"1_week\""
        );
        let window: TimeWindow = serde_json::from_str("\"current\"").unwrap();
        assert_eq!(window, TimeWindow::Current);
    }

    #[test]
    fn test_file_names() {
        assert_eq!(TimeWindow::Current.file_name(), "Current_Calculation.xlsx");
        assert_eq!(TimeWindow::OneYear.file_name(), "Last_1_Year.xlsx");
    }

    fn window_strategy() -> impl Strategy<Value = TimeWindow> {
        proptest::sample::select(TimeWindow::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_filter_is_idempotent(
            mut ages_minutes in proptest::collection::vec(0i64..(800 * 24 * 60), 0..20),
            window in window_strategy(),
        ) {
            ages_minutes.sort_unstable_by(|a, b| b.cmp(a));
            let history: Vec<CalculationRecord> = ages_minutes
                .into_iter()
                .map(|m| record_ago(TimeDelta::minutes(m)))
                .collect();

            let once = filter_by_window(&history, window, make_now());
            let twice = filter_by_window(&once, window, make_now());

            prop_assert_eq!(once, twice);
        }
    }
}
