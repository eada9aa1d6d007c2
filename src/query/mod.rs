pub mod builder;
pub mod column;
pub mod operation;
pub mod parser;
pub mod selection;

pub use builder::{
    build_board_items_query, build_column_selection, build_first_page_query, build_item_query,
    build_next_page_query,
};
pub use column::ColumnDef;
pub use operation::{MutationBuilder, QueryBuilder};
pub use parser::{parse_columns, ColumnParseError};
pub use selection::FieldSelection;
