use crate::model::segment::{sort_rows, SegmentRow};
use crate::model::style::{BarColor, ChartTheme, ColorScale};
use crate::model::task_list::TaskList;

pub const DEFAULT_TITLE: &str = "My Project Timeline";

/// Session-scoped project state: the ordered task list, the current row
/// model, and the chart styling choices. Replaced wholesale on a successful
/// CSV import, reset to defaults on a failed one, and read (never mutated)
/// when rendering or exporting.
#[derive(Debug, Clone)]
pub struct Project {
    pub title: String,
    pub theme: ChartTheme,
    /// When true every bar uses `bar_color`; otherwise bars are colored by
    /// duration through `color_scale`.
    pub use_single_color: bool,
    pub bar_color: BarColor,
    pub color_scale: ColorScale,
    pub tasks: TaskList,
    pub rows: Vec<SegmentRow>,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            theme: ChartTheme::Light,
            use_single_color: true,
            bar_color: BarColor::DefaultBlue,
            color_scale: ColorScale::Plasma,
            tasks: TaskList::default(),
            rows: Vec::new(),
        }
    }
}

impl Project {
    /// Rows in display/export order.
    pub fn sorted_rows(&self) -> Vec<SegmentRow> {
        let mut rows = self.rows.clone();
        sort_rows(&mut rows);
        rows
    }

    /// Default file name offered when downloading the project CSV.
    pub fn export_file_name(&self) -> String {
        format!("{}_gantt_project.csv", self.title.replace(' ', "_"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_project_is_one_task_and_no_rows() {
        let project = Project::default();
        assert_eq!(project.tasks.names(), &["Task 1".to_string()]);
        assert!(project.rows.is_empty());
        assert_eq!(project.title, DEFAULT_TITLE);
        assert!(project.use_single_color);
        assert_eq!(project.bar_color, BarColor::DefaultBlue);
        assert_eq!(project.color_scale, ColorScale::Plasma);
    }

    #[test]
    fn export_file_name_replaces_spaces() {
        let project = Project::default();
        assert_eq!(
            project.export_file_name(),
            "My_Project_Timeline_gantt_project.csv"
        );
    }
}
