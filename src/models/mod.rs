pub mod task;

pub use task::{CreateTaskRequest, Task, TaskInfo, UpdateTaskRequest};
