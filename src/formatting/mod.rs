pub mod items;
pub mod utils;

pub use items::{format_column_value, print_items, print_single_item};
pub use utils::{format_value_text, truncate};
