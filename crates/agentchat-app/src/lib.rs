pub mod cli;
pub mod commands;
pub mod config;
pub mod repl;
pub mod setup;

pub use cli::Cli;
pub use commands::{parse_slash_command, SlashCommand, HELP_TEXT};
pub use config::{AppConfig, ConfigError, EnvConfig, FileConfig};
pub use repl::{handle_line, run_repl, LineOutcome};
pub use setup::{build_session, create_client, print_key_status};
