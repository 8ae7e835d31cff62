use anyhow::Result;
use clap::{CommandFactory, Parser};

use agentchat::{build_session, print_key_status, run_repl, AppConfig, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Some(shell) = cli.generate {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    let config = AppConfig::load(&cli)?;
    print_key_status(&config);

    let mut session = build_session(&config).await?;
    run_repl(&mut session, &config.name).await
}
