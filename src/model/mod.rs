pub mod derive;
pub mod project;
pub mod segment;
pub mod style;
pub mod task_list;

pub use project::Project;
pub use segment::SegmentRow;
pub use task_list::TaskList;
