pub mod config;
pub mod error;
pub mod fs;

pub use config::{Config, OpenSearchConfig};
pub use error::*;
pub use fs::read_json_file;
