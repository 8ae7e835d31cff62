use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

/// CLI arguments for agentchat
#[derive(Parser, Debug)]
#[command(name = "agentchat")]
#[command(about = "Agentchat - content creation assistant that runs local tools requested by the model")]
#[command(version)]
pub struct Cli {
    /// Name shown in the greeting
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Generation backend (gemini, openai, llama)
    #[arg(long, value_name = "BACKEND")]
    pub backend: Option<String>,

    /// Override the backend's default model
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// API base URL (required for llama, e.g. http://localhost:8080)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Abort a model request after this many seconds (default: wait indefinitely)
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Path to a TOML config file (default: ~/.agentchat/config.toml if present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose debug output (shows HTTP requests and responses)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Write the conversation to logs/agentchat-<timestamp>.jsonl under the work dir
    #[arg(long)]
    pub log_conversation: bool,

    /// Directory the file and search tools operate in (default: current directory)
    #[arg(long, value_name = "DIR")]
    pub work_dir: Option<PathBuf>,

    /// Generate shell completions
    #[arg(long, value_enum)]
    pub generate: Option<Shell>,
}
