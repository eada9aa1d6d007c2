mod config_tests;
mod error_tests;
mod logging_tests;
mod mapping_tests;
mod response_tests;
