pub mod chart;
pub mod sidebar;
pub mod task_editor;
pub mod theme;
