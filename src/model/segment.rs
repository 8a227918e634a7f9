use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Average month length used to turn a duration in months into a time span.
pub const DAYS_PER_MONTH: f64 = 30.44;

/// One time-bounded segment of a task.
///
/// This is the row shape shared by the editor, the chart, and the CSV files.
/// `end` is derived from `start` and `duration_months` whenever a segment is
/// created or edited; rows loaded from CSV keep whatever `End` they carried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentRow {
    #[serde(rename = "Task")]
    pub task: String,
    /// 1-based position of this segment within its task.
    #[serde(rename = "Segment")]
    pub segment: u32,
    #[serde(rename = "Start", with = "timestamp_serde")]
    pub start: NaiveDateTime,
    #[serde(rename = "End", with = "timestamp_serde")]
    pub end: NaiveDateTime,
    #[serde(rename = "Duration_Months")]
    pub duration_months: f64,
}

/// Compute a segment's end from its start and duration in months.
///
/// Rounded to whole seconds so the result survives a CSV round-trip.
/// Durations too large to represent (an imported file can carry any float
/// that parses) saturate at the calendar limits instead of overflowing.
pub fn segment_end(start: NaiveDateTime, duration_months: f64) -> NaiveDateTime {
    let seconds = (duration_months * DAYS_PER_MONTH * 86_400.0).round();
    Duration::try_seconds(seconds as i64)
        .and_then(|d| start.checked_add_signed(d))
        .unwrap_or(if seconds < 0.0 {
            NaiveDateTime::MIN
        } else {
            NaiveDateTime::MAX
        })
}

/// Stable sort by the display/export ordering key `(start, task, segment)`.
pub fn sort_rows(rows: &mut [SegmentRow]) {
    rows.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then_with(|| a.task.cmp(&b.task))
            .then_with(|| a.segment.cmp(&b.segment))
    });
}

/// Try parsing a timestamp string with several accepted formats.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    for fmt in &[
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    // Bare dates are accepted as midnight.
    for fmt in &["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y"] {
        if let Ok(d) = chrono::NaiveDate::parse_from_str(s, fmt) {
            return Some(d.and_time(chrono::NaiveTime::MIN));
        }
    }
    None
}

/// Timestamp format used by the CSV columns: `YYYY-MM-DDTHH:MM:SS`, no zone.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Serde helper for the `Start`/`End` CSV columns.
mod timestamp_serde {
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(super::TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_timestamp(&s).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid datetime '{}'", s))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at_midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_time(chrono::NaiveTime::MIN)
    }

    #[test]
    fn end_is_duration_times_average_month() {
        let start = at_midnight(2024, 1, 1);
        let end = segment_end(start, 2.0);
        let expected = 2.0 * DAYS_PER_MONTH * 86_400.0;
        assert_eq!((end - start).num_seconds(), expected.round() as i64);
        // 60.88 days after Jan 1 lands on Mar 1, 21:07:12.
        assert_eq!(end, at_midnight(2024, 3, 1) + Duration::seconds(76_032));
    }

    #[test]
    fn fractional_durations_round_to_whole_seconds() {
        let start = at_midnight(2024, 6, 15);
        let end = segment_end(start, 0.1);
        // 0.1 * 30.44 * 86400 = 263001.6 seconds, rounded up.
        assert_eq!((end - start).num_seconds(), 263_002);
    }

    #[test]
    fn absurd_durations_saturate_instead_of_panicking() {
        let start = at_midnight(2024, 1, 1);
        assert_eq!(segment_end(start, 1.0e18), NaiveDateTime::MAX);
        assert_eq!(segment_end(start, f64::INFINITY), NaiveDateTime::MAX);
        assert_eq!(segment_end(start, -1.0e18), NaiveDateTime::MIN);
        // NaN contributes no offset at all.
        assert_eq!(segment_end(start, f64::NAN), start);
    }

    #[test]
    fn sort_orders_by_start_then_task_then_segment() {
        let row = |task: &str, segment: u32, start: NaiveDateTime| SegmentRow {
            task: task.to_string(),
            segment,
            start,
            end: segment_end(start, 1.0),
            duration_months: 1.0,
        };
        let mut rows = vec![
            row("Build", 1, at_midnight(2024, 3, 1)),
            row("Design", 2, at_midnight(2024, 3, 1)),
            row("Design", 1, at_midnight(2024, 1, 1)),
        ];
        sort_rows(&mut rows);
        assert_eq!(
            rows.iter()
                .map(|r| (r.task.as_str(), r.segment))
                .collect::<Vec<_>>(),
            vec![("Design", 1), ("Build", 1), ("Design", 2)]
        );
    }

    #[test]
    fn parses_iso_and_bare_date_timestamps() {
        assert_eq!(
            parse_timestamp("2024-03-01T21:07:12"),
            Some(at_midnight(2024, 3, 1) + Duration::seconds(76_032))
        );
        assert_eq!(parse_timestamp("2024-02-15"), Some(at_midnight(2024, 2, 15)));
        assert_eq!(parse_timestamp("not a date"), None);
    }
}
