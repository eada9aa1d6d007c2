pub mod auth;
pub mod board;
pub mod items;

pub use auth::handle_auth;
pub use board::{handle_board, handle_board_all};
pub use items::handle_item;
