pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod table;

pub use cli::{Cli, Command};
pub use commands::{EntryOutcome, load_purchases, replay_entries, run};
pub use config::{AppConfig, ConfigError, SessionOverrides};
