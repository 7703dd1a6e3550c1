pub mod config;
pub mod memo;
pub mod task;

pub use config::*;
pub use memo::*;
pub use task::*;
