use clap::ArgMatches;

use monday_cli::cli_context::CliContext;
use monday_cli::error::{ErrorContext, MondayError};
use monday_cli::formatting::print_items;
use monday_cli::query::parse_columns;

pub async fn handle_item(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = CliContext::load();
    let service = context.fetch_service()?;

    let ids: Vec<String> = matches
        .get_many::<String>("ids")
        .ok_or_else(|| MondayError::InvalidInput("At least one item ID is required".to_string()))?
        .cloned()
        .collect();
    let spec = matches.get_one::<String>("columns").map(|s| s.as_str()).unwrap_or("");
    let format = matches.get_one::<String>("format").map(|s| s.as_str()).unwrap_or("simple");

    let columns = parse_columns(spec)
        .map_err(|e| MondayError::InvalidInput(format!("Failed to parse columns: {}", e)))?;

    let items = service
        .get_items(&ids, &columns)
        .await
        .with_context(|| format!("Fetching items {}", ids.join(", ")))?;

    print_items(&items, format);
    Ok(())
}
