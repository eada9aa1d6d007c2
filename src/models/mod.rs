pub mod board;
pub mod graphql;
pub mod item;

// Re-export commonly used types
pub use board::{Board, BoardsData, ItemsData, ItemsPage, NextItemsPageData};
pub use graphql::{ApiOutcome, GraphQLError, RawResponse};
pub use item::{ColumnMeta, ColumnValue, Item, RawColumnValue, RawItem};
