use clap::ArgMatches;

use monday_cli::cli_context::CliContext;
use monday_cli::config::load_config;
use monday_cli::constants::DEFAULT_PAGE_LIMIT;
use monday_cli::error::{ErrorContext, MondayError, MondayResult};
use monday_cli::formatting::print_items;
use monday_cli::query::parse_columns;
use monday_cli::services::parse_page_limit;

fn board_id(matches: &ArgMatches) -> MondayResult<String> {
    if let Some(id) = matches.get_one::<String>("board-id") {
        return Ok(id.clone());
    }

    load_config()?.default_board_id.ok_or_else(|| {
        MondayError::InvalidInput("No board ID given and no default board configured".to_string())
    })
}

pub async fn handle_board(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = CliContext::load();
    let service = context.fetch_service()?;

    let board_id = board_id(matches)?;
    let spec = matches.get_one::<String>("columns").map(|s| s.as_str()).unwrap_or("");
    let format = matches.get_one::<String>("format").map(|s| s.as_str()).unwrap_or("simple");
    let limit = match matches.get_one::<String>("limit") {
        Some(value) => parse_page_limit(value)?,
        None => DEFAULT_PAGE_LIMIT,
    };

    let columns = parse_columns(spec)
        .map_err(|e| MondayError::InvalidInput(format!("Failed to parse columns: {}", e)))?;

    let items = service
        .get_board_page(&board_id, &columns, limit)
        .await
        .with_context(|| format!("Fetching items of board {}", board_id))?;

    print_items(&items, format);
    Ok(())
}

pub async fn handle_board_all(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = CliContext::load();
    let client = context.client()?;

    let board_id = board_id(matches)?;
    let fields = matches.get_one::<String>("fields").map(|s| s.as_str());

    let items = client
        .get_all_items(&board_id, fields)
        .await
        .with_context(|| format!("Fetching all items of board {}", board_id))?;

    println!("{}", serde_json::to_string_pretty(&items)?);
    Ok(())
}
