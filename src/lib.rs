pub mod error;
pub mod fasta;
pub mod logger;
pub mod pipeline;
pub mod prompt;
pub mod report;
pub mod seq;
pub mod stats;

pub use error::{Error, Result};
