pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod host;
pub mod logging;
pub mod parser;
pub mod render;
pub mod types;

pub use app::ports::Collector;
pub use app::user_groups::UserGroupsCollector;
pub use error::{CollectorError, Result};
