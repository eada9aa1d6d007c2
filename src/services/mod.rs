pub mod fetch;

pub use fetch::{map_item, parse_page_limit, FetchService};
