use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use agentchat_chat::ChatSession;
use agentchat_logging::warn;
use agentchat_toolcore::Tool;

use crate::commands::{parse_slash_command, SlashCommand, HELP_TEXT};

/// What to do after one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Print this and keep reading
    Print(String),
    /// Nothing to do; prompt again
    Skip,
    Quit,
}

/// Handle one line of user input
pub async fn handle_line(session: &mut ChatSession, line: &str) -> LineOutcome {
    let line = line.trim();

    if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
        return LineOutcome::Quit;
    }
    if line.is_empty() {
        return LineOutcome::Skip;
    }

    if line.starts_with('/') {
        return match parse_slash_command(line) {
            SlashCommand::Invoke { tool, params } => {
                let result = session.invoke_tool(&tool, params).await;
                LineOutcome::Print(format!("Tool result: {}", result.display_text()))
            }
            SlashCommand::ListTools => LineOutcome::Print(tool_signatures(session)),
            SlashCommand::Help => LineOutcome::Print(HELP_TEXT.to_string()),
        };
    }

    let response = session.chat(line).await;
    LineOutcome::Print(format!("Agent: {}", response))
}

fn tool_signatures(session: &ChatSession) -> String {
    let lines: Vec<String> = session
        .registry()
        .get_all_tools()
        .iter()
        .map(|tool| format!("  {} - {}", tool.signature(), tool.description()))
        .collect();
    format!("Registered tools:\n{}", lines.join("\n"))
}

/// Run interactive REPL mode until quit, Ctrl-C or end of input
pub async fn run_repl(session: &mut ChatSession, name: &str) -> Result<()> {
    println!("\n{} started. Type 'quit' to exit.", name.bright_cyan().bold());
    println!("{}", format!("Working directory: {}", session.context().work_dir.display()).bright_black());

    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline(&format!("\n{} ", "You:".bright_green().bold())) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = rl.add_history_entry(line.trim()) {
                        warn(&format!("Could not record input history: {}", e));
                    }
                }

                match handle_line(session, &line).await {
                    LineOutcome::Print(text) => println!("{}", text),
                    LineOutcome::Skip => continue,
                    LineOutcome::Quit => {
                        println!("{}", "Goodbye!".bright_cyan());
                        break;
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("\n{}", "Goodbye!".bright_cyan());
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
