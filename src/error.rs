use thiserror::Error;

use crate::models::GraphQLError;

#[derive(Error, Debug)]
pub enum MondayError {
    #[error("API token not found. Please run 'monday auth' to configure.")]
    ApiKeyNotFound,

    #[error("Monday API token is required")]
    MissingToken,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The server answered but reported errors in the GraphQL `errors` list.
    #[error("{message}{}", server_messages(.errors))]
    Api {
        message: String,
        errors: Vec<GraphQLError>,
        account_id: Option<String>,
    },

    #[error("Failed after {retries} retries: {message}")]
    RetriesExhausted { retries: u32, message: String },

    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Missing data: {0}")]
    MissingData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl MondayError {
    /// Builds the error raised when a response carries a GraphQL error list.
    pub fn api(errors: Vec<GraphQLError>, account_id: Option<String>) -> Self {
        MondayError::Api {
            message: "Monday API Error".to_string(),
            errors,
            account_id,
        }
    }

    pub fn is_server_failure(&self) -> bool {
        matches!(self, MondayError::Api { .. })
    }

    /// Faults raised while talking to the server, as opposed to errors the
    /// server reported. Covers both the retryable faults and the
    /// `RetriesExhausted` error the executor ends with.
    pub fn is_transport_fault(&self) -> bool {
        matches!(
            self,
            MondayError::Http { .. }
                | MondayError::RetriesExhausted { .. }
                | MondayError::RequestError(_)
                | MondayError::JsonError(_)
                | MondayError::IoError(_)
                | MondayError::Unknown(_)
        )
    }

    /// Server error list carried by an `Api` failure, empty otherwise.
    pub fn server_errors(&self) -> &[GraphQLError] {
        match self {
            MondayError::Api { errors, .. } => errors,
            _ => &[],
        }
    }
}

fn server_messages(errors: &[GraphQLError]) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
    format!(": {}", messages.join("; "))
}

pub type MondayResult<T> = Result<T, MondayError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> MondayResult<T>;
    fn with_context<F>(self, f: F) -> MondayResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> MondayResult<T> {
        self.map_err(|e| MondayError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> MondayResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| MondayError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> MondayResult<T> {
        self.ok_or_else(|| MondayError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> MondayResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| MondayError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! monday_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::MondayError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::MondayError::$error_type(format!($fmt, $($arg)*))
    };
}
