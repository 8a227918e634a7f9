use chrono::{NaiveDate, NaiveTime};

use crate::model::segment::{segment_end, SegmentRow};

/// Editable start/duration pair for one segment, as shown in the task editor.
/// The end timestamp is never edited directly; it is recomputed from these
/// two fields every time the rows are collected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentInput {
    pub start_date: NaiveDate,
    pub duration_months: f64,
}

/// Stored rows belonging to `task`, in row order.
pub fn segments_for_task<'a>(task: &str, rows: &'a [SegmentRow]) -> Vec<&'a SegmentRow> {
    rows.iter().filter(|r| r.task == task).collect()
}

/// How many segments the editor should show for `task` by default: the
/// largest stored segment number, and at least one.
pub fn default_segment_count(task: &str, rows: &[SegmentRow]) -> usize {
    rows.iter()
        .filter(|r| r.task == task)
        .map(|r| r.segment as usize)
        .max()
        .unwrap_or(1)
        .max(1)
}

/// Derive `requested` editor defaults for `task` from its stored rows.
///
/// Indices covered by stored rows reuse that row's start date (time of day
/// truncated to midnight) and duration, and seed the next default start with
/// the row's stored end. Indices beyond the stored data chain: each one
/// starts where the previous derived segment's freshly computed end lands,
/// with a duration of one month. With no stored data at all the chain starts
/// today.
pub fn derive_defaults(task: &str, requested: usize, rows: &[SegmentRow]) -> Vec<SegmentInput> {
    let prior = segments_for_task(task, rows);
    let mut out = Vec::with_capacity(requested);
    let mut last_end: Option<chrono::NaiveDateTime> = None;

    for j in 0..requested {
        let input = match prior.get(j) {
            Some(seg) => {
                last_end = Some(seg.end);
                SegmentInput {
                    start_date: seg.start.date(),
                    duration_months: seg.duration_months,
                }
            }
            None => {
                let start_date = last_end
                    .map(|e| e.date())
                    .unwrap_or_else(|| chrono::Local::now().date_naive());
                let input = SegmentInput {
                    start_date,
                    duration_months: 1.0,
                };
                last_end = Some(segment_end(
                    start_date.and_time(NaiveTime::MIN),
                    input.duration_months,
                ));
                input
            }
        };
        out.push(input);
    }
    out
}

/// Regenerate the whole editable view from the task list and the current
/// rows. Called after every structural task operation and after import.
pub fn rebuild_inputs(names: &[String], rows: &[SegmentRow]) -> Vec<Vec<SegmentInput>> {
    names
        .iter()
        .map(|name| derive_defaults(name, default_segment_count(name, rows), rows))
        .collect()
}

/// Turn the editable view back into the current row model, recomputing every
/// end timestamp from the (possibly edited) start date and duration.
pub fn collect_rows(names: &[String], inputs: &[Vec<SegmentInput>]) -> Vec<SegmentRow> {
    let mut rows = Vec::new();
    for (name, segments) in names.iter().zip(inputs) {
        for (j, input) in segments.iter().enumerate() {
            let start = input.start_date.and_time(NaiveTime::MIN);
            rows.push(SegmentRow {
                task: name.clone(),
                segment: (j + 1) as u32,
                start,
                end: segment_end(start, input.duration_months),
                duration_months: input.duration_months,
            });
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn dt(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_time(NaiveTime::MIN)
    }

    fn stored(task: &str, segment: u32, start: NaiveDateTime, end: NaiveDateTime, months: f64) -> SegmentRow {
        SegmentRow {
            task: task.to_string(),
            segment,
            start,
            end,
            duration_months: months,
        }
    }

    #[test]
    fn second_segment_defaults_to_stored_end_of_first() {
        // Task "A" has one stored segment ending 2024-02-15; asking for two
        // segments must start the second one on that date with one month.
        let rows = vec![stored("A", 1, dt(2024, 1, 10), dt(2024, 2, 15), 1.2)];
        let defaults = derive_defaults("A", 2, &rows);
        assert_eq!(defaults.len(), 2);
        assert_eq!(defaults[0].start_date, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        assert_eq!(defaults[0].duration_months, 1.2);
        assert_eq!(defaults[1].start_date, NaiveDate::from_ymd_opt(2024, 2, 15).unwrap());
        assert_eq!(defaults[1].duration_months, 1.0);
    }

    #[test]
    fn derived_segments_chain_on_freshly_computed_ends() {
        let rows = vec![stored("A", 1, dt(2024, 1, 1), dt(2024, 2, 1), 1.0)];
        let defaults = derive_defaults("A", 3, &rows);
        // Segment 2 starts at the stored end, segment 3 at segment 2's
        // computed end (Feb 1 + 30.44 days -> Mar 2).
        assert_eq!(defaults[1].start_date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        let seg2_end = segment_end(defaults[1].start_date.and_time(NaiveTime::MIN), 1.0);
        assert_eq!(defaults[2].start_date, seg2_end.date());
        assert_eq!(defaults[2].start_date, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
    }

    #[test]
    fn no_stored_rows_starts_today_with_one_month() {
        let defaults = derive_defaults("Task 1", 1, &[]);
        assert_eq!(defaults.len(), 1);
        assert_eq!(defaults[0].start_date, chrono::Local::now().date_naive());
        assert_eq!(defaults[0].duration_months, 1.0);
    }

    #[test]
    fn default_count_is_max_stored_segment_number() {
        let rows = vec![
            stored("A", 1, dt(2024, 1, 1), dt(2024, 2, 1), 1.0),
            stored("A", 3, dt(2024, 3, 1), dt(2024, 4, 1), 1.0),
            stored("B", 1, dt(2024, 1, 1), dt(2024, 2, 1), 1.0),
        ];
        assert_eq!(default_segment_count("A", &rows), 3);
        assert_eq!(default_segment_count("B", &rows), 1);
        assert_eq!(default_segment_count("C", &rows), 1);
    }

    #[test]
    fn collect_rows_recomputes_ends_and_numbers_segments() {
        let names = vec!["Design".to_string()];
        let inputs = vec![vec![
            SegmentInput {
                start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                duration_months: 2.0,
            },
            SegmentInput {
                start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                duration_months: 0.5,
            },
        ]];
        let rows = collect_rows(&names, &inputs);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].segment, 1);
        assert_eq!(rows[1].segment, 2);
        assert_eq!(rows[0].start, dt(2024, 1, 1));
        assert_eq!(rows[0].end, segment_end(dt(2024, 1, 1), 2.0));
    }

    #[test]
    fn rebuild_keeps_edits_that_reached_the_rows() {
        // Rows carry the edited state, so regenerating the view from them
        // preserves edits across a structural task operation.
        let names = vec!["A".to_string(), "B".to_string()];
        let rows = vec![
            stored("A", 1, dt(2024, 5, 1), segment_end(dt(2024, 5, 1), 2.5), 2.5),
            stored("B", 1, dt(2024, 6, 1), segment_end(dt(2024, 6, 1), 1.0), 1.0),
        ];
        let inputs = rebuild_inputs(&names, &rows);
        assert_eq!(inputs[0].len(), 1);
        assert_eq!(inputs[0][0].start_date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(inputs[0][0].duration_months, 2.5);
        assert_eq!(inputs[1][0].duration_months, 1.0);
    }
}
