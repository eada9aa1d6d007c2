// Module declarations
pub mod cli_context;
pub mod client;
pub mod column_values;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod logging;
pub mod models;
pub mod query;
pub mod services;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use client::{ExecuteOptions, Executor, HttpTransport, MondayClient, Transport};
pub use column_values::ColumnValuesBuilder;
pub use config::{get_api_token, load_config, save_config, Config};
pub use error::{MondayError, MondayResult};
pub use models::*;
pub use query::{build_board_items_query, build_item_query, ColumnDef};
pub use services::FetchService;
