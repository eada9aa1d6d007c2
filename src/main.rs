use std::process;

use clap::{Arg, ArgAction, Command};

mod commands;

use commands::{handle_auth, handle_board, handle_board_all, handle_item};
use monday_cli::logging::{init_logging, log_error};

fn columns_arg() -> Arg {
    Arg::new("columns")
        .short('c')
        .long("columns")
        .value_name("SPEC")
        .help("Columns to fetch, e.g. status,date,connect_boards(text_column)")
}

fn format_arg() -> Arg {
    Arg::new("format")
        .short('f')
        .long("format")
        .value_name("FORMAT")
        .help("Output format")
        .value_parser(["simple", "json"])
        .default_value("simple")
}

fn board_id_arg() -> Arg {
    Arg::new("board-id")
        .value_name("BOARD_ID")
        .help("Board ID (defaults to default_board_id from the config)")
        .index(1)
}

#[tokio::main]
async fn main() {
    let app = Command::new("monday")
        .about("monday.com CLI - Fetch items and boards from the monday.com GraphQL API")
        .version("1.0.0")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("log")
                .long("log")
                .help("Write a debug log to the cache directory")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("auth")
                .about("Authenticate with monday.com")
                .arg(
                    Arg::new("token")
                        .long("token")
                        .value_name("TOKEN")
                        .help("Set your monday.com API token"),
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show current API token")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("item")
                .about("Fetch one or more items by ID")
                .arg(
                    Arg::new("ids")
                        .value_name("ITEM_ID")
                        .help("Item IDs")
                        .required(true)
                        .num_args(1..)
                        .index(1),
                )
                .arg(columns_arg())
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("board")
                .about("Fetch one page of a board's items")
                .arg(board_id_arg())
                .arg(columns_arg())
                .arg(format_arg())
                .arg(
                    Arg::new("limit")
                        .short('l')
                        .long("limit")
                        .value_name("N")
                        .help("Items per page (default 50)"),
                ),
        )
        .subcommand(
            Command::new("board-all")
                .about("Fetch every item of a board, following page cursors")
                .arg(board_id_arg())
                .arg(
                    Arg::new("fields")
                        .long("fields")
                        .value_name("FIELDS")
                        .help("Raw GraphQL fields per item (default \"id name\")"),
                ),
        );

    let matches = app.get_matches();

    if matches.get_flag("log") {
        if let Err(e) = init_logging() {
            eprintln!("Failed to initialize logging: {}", e);
        }
    }

    let result = match matches.subcommand() {
        Some(("auth", sub_matches)) => handle_auth(sub_matches).await,
        Some(("item", sub_matches)) => handle_item(sub_matches).await,
        Some(("board", sub_matches)) => handle_board(sub_matches).await,
        Some(("board-all", sub_matches)) => handle_board_all(sub_matches).await,
        _ => {
            eprintln!("Unknown command. Use 'monday --help' for available commands.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        log_error(&e.to_string());
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
