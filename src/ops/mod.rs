pub mod session;
pub mod stats;
pub mod task_ops;
