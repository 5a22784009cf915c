pub mod config;
pub mod error;
pub mod logger;
pub mod time;

pub use config::Config;
pub use error::{DeckError, DeckResult, ResultExt};
pub use logger::{init_global_logger, LogLevel, Logger};
pub use time::clock_stamp;
