pub mod enums;
pub mod navigation;
pub mod task;
pub mod task_list;

pub use enums::{AddOutcome, Focus, ThemeMode};
pub use navigation::{HistoryParams, NavigationHost, Screen};
pub use task::Task;
pub use task_list::TaskListController;
