pub mod executor;
pub mod monday_client;
pub mod transport;

pub use executor::{backoff_delay, ComplexityClassifier, ExecuteOptions, Executor, RetryClassifier};
pub use monday_client::MondayClient;
pub use transport::{HttpTransport, Transport};
