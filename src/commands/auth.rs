use clap::ArgMatches;
use colored::*;

use monday_cli::cli_context::CliContext;
use monday_cli::config::load_config;
use monday_cli::query::build_item_query;

pub async fn handle_auth(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(token) = matches.get_one::<String>("token") {
        let mut context = CliContext::new();
        context.set_api_token(token.clone())?;
        println!("API token saved successfully!");

        // Any query proves the token; ask for no items
        let client = context.client()?;
        let query = build_item_query::<u64>(&[], &[]);
        match client.api::<serde_json::Value>(&query, None).await {
            Ok(_) => println!("{}", "✅ Token accepted by monday.com".green()),
            Err(e) => println!("{} {}", "❌ Failed to authenticate:".red(), e),
        }
    } else if matches.get_flag("show") {
        let config = load_config()?;
        match config.api_token {
            Some(token) if token.chars().count() > 12 => {
                let chars: Vec<char> = token.chars().collect();
                let head: String = chars[..8].iter().collect();
                let tail: String = chars[chars.len() - 4..].iter().collect();
                println!("API Token: {}...{}", head, tail);
            }
            Some(_) => println!("API Token: (set)"),
            None => println!("No API token configured"),
        }
    } else {
        println!("Usage: monday auth --token <TOKEN> or monday auth --show");
    }
    Ok(())
}
