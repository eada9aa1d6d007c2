pub const MONDAY_API_URL: &str = "https://api.monday.com/v2";
pub const CONFIG_FILE: &str = ".monday-cli-config.json";

pub const API_TOKEN_ENV: &str = "MONDAY_API_TOKEN";
pub const API_VERSION_ENV: &str = "MONDAY_API_VERSION";

// Retry defaults
pub const DEFAULT_RETRIES: u32 = 3;
pub const DEFAULT_INITIAL_DELAY_MS: u64 = 1000;

// Paging
pub const DEFAULT_PAGE_LIMIT: u32 = 50;
pub const ALL_ITEMS_PAGE_LIMIT: u32 = 500;
pub const DEFAULT_RETURN_FIELDS: &str = "id name";

/// GraphQL type of a connect-boards column value.
pub const RELATION_VALUE_TYPE: &str = "BoardRelationValue";

