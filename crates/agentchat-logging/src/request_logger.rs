use colored::Colorize;

use crate::{mask_key, safe_truncate};

const MAX_BODY_CHARS: usize = 5000;

/// Log HTTP request details for debugging (console output)
pub fn log_request(url: &str, body: &serde_json::Value, api_key: Option<&str>, verbose: bool) {
    if !verbose {
        return;
    }

    println!("\n{}", "═".repeat(80).bright_cyan());
    println!("{}", "🔍 HTTP REQUEST DEBUG".bright_cyan().bold());
    println!("{}", "═".repeat(80).bright_cyan());

    match reqwest::Url::parse(url) {
        Ok(parsed_url) => {
            // never echo a key passed as a query parameter
            let mut display_url = parsed_url.clone();
            display_url.set_query(None);
            println!("{}: {}", "URL".bright_yellow(), display_url);
            println!("{}: {}", "Host".bright_yellow(), parsed_url.host_str().unwrap_or("unknown"));
            println!("{}: {}", "Scheme".bright_yellow(), parsed_url.scheme());
        }
        Err(_) => println!("{}: {}", "URL".bright_yellow(), url),
    }

    println!("\n{}", "Headers:".bright_yellow());
    println!("  Content-Type: application/json");
    if let Some(key) = api_key {
        println!("  Credential: {}", mask_key(key));
    }

    println!("\n{}", "Request Body:".bright_yellow());
    match serde_json::to_string_pretty(body) {
        Ok(json) => print_truncated(&json),
        Err(e) => println!("{}", format!("Error serializing request: {}", e).red()),
    }

    println!("{}", "═".repeat(80).bright_cyan());
    println!();
}

/// Log HTTP response details for debugging (console output)
pub fn log_response(status: &reqwest::StatusCode, body: &str, verbose: bool) {
    if !verbose {
        return;
    }

    println!("\n{}", "═".repeat(80).bright_green());
    println!("{}", "📥 HTTP RESPONSE DEBUG".bright_green().bold());
    println!("{}", "═".repeat(80).bright_green());

    println!(
        "{}: {} {}",
        "Status".bright_yellow(),
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    );

    println!("\n{}", "Response Body:".bright_yellow());
    // Try to pretty-print JSON, fall back to raw text
    match serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
    {
        Some(pretty) => print_truncated(&pretty),
        None => print_truncated(body),
    }

    println!("{}", "═".repeat(80).bright_green());
    println!();
}

fn print_truncated(text: &str) {
    if text.chars().count() > MAX_BODY_CHARS {
        println!("{}", safe_truncate(text, MAX_BODY_CHARS));
        println!(
            "\n{}",
            format!("... (truncated, total {} bytes)", text.len()).bright_black()
        );
    } else {
        println!("{}", text);
    }
}
