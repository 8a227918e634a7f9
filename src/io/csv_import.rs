use std::path::PathBuf;

use crate::model::SegmentRow;

/// Result of loading one or more project CSVs.
pub struct CsvImport {
    /// Rows from all files, concatenated in upload order.
    pub rows: Vec<SegmentRow>,
    /// Title derived from the first file's name, if one was readable.
    pub title: Option<String>,
}

/// Derive a chart title from a saved project's file name: drop the `.csv`
/// extension and the `_gantt_project` suffix, and turn underscores back into
/// spaces.
pub fn title_from_file_name(name: &str) -> String {
    let stem = name.strip_suffix(".csv").unwrap_or(name);
    stem.replace("_gantt_project", "").replace('_', " ")
}

/// Parse one CSV source into segment rows.
///
/// Requires the `Task, Segment, Start, End, Duration_Months` columns
/// (extra columns are ignored). Any row that fails to parse — most
/// importantly an unparseable `Start` or `End` timestamp — rejects the whole
/// source with a descriptive error; nothing is partially applied.
pub fn parse_csv(data: &[u8]) -> Result<Vec<SegmentRow>, String> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(data);

    let mut rows = Vec::new();
    for (i, result) in reader.deserialize::<SegmentRow>().enumerate() {
        let row = result.map_err(|e| format!("row {}: {}", i + 2, e))?;
        rows.push(row);
    }
    Ok(rows)
}

/// Read and parse every file, concatenating rows in upload order.
pub fn import_files(paths: &[PathBuf]) -> Result<CsvImport, String> {
    let mut rows = Vec::new();
    for path in paths {
        let data = std::fs::read(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        let parsed = parse_csv(&data)
            .map_err(|e| format!("{}: {}", path.display(), e))?;
        rows.extend(parsed);
    }

    let title = paths
        .first()
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str())
        .map(title_from_file_name);

    Ok(CsvImport { rows, title })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn parses_well_formed_rows() {
        let data = b"Task,Segment,Start,End,Duration_Months\n\
                     Design,1,2024-01-01T00:00:00,2024-03-01T21:07:12,2.0\n\
                     Build,1,2024-03-01T00:00:00,2024-05-31T07:40:48,3.0\n";
        let rows = parse_csv(data).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].task, "Design");
        assert_eq!(rows[0].segment, 1);
        assert_eq!(
            rows[0].start,
            NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_time(chrono::NaiveTime::MIN)
        );
        assert_eq!(rows[1].duration_months, 3.0);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let data = b"Task,Segment,Start,End,Duration_Months,Owner\n\
                     Design,1,2024-01-01,2024-02-01,1.0,alice\n";
        let rows = parse_csv(data).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].task, "Design");
    }

    #[test]
    fn bad_start_timestamp_rejects_the_whole_source() {
        let data = b"Task,Segment,Start,End,Duration_Months\n\
                     Design,1,2024-01-01,2024-02-01,1.0\n\
                     Build,1,not-a-date,2024-03-01,1.0\n";
        let err = parse_csv(data).unwrap_err();
        assert!(err.contains("row 3"), "unexpected error: {}", err);
        assert!(err.contains("not-a-date"), "unexpected error: {}", err);
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let data = b"Task,Start,End,Duration_Months\n\
                     Design,2024-01-01,2024-02-01,1.0\n";
        assert!(parse_csv(data).is_err());
    }

    #[test]
    fn title_strips_extension_suffix_and_underscores() {
        assert_eq!(
            title_from_file_name("Website_Redesign_gantt_project.csv"),
            "Website Redesign"
        );
        assert_eq!(title_from_file_name("plan.csv"), "plan");
        assert_eq!(title_from_file_name("my_plan"), "my plan");
    }
}
