pub mod cli;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod table;

pub use error::{Result, TableError};
