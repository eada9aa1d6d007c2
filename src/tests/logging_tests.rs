use std::fs;

use tempfile::TempDir;

use crate::logging::{get_log_file_path, init_logging_in, log_debug, log_error, log_info};

#[test]
fn test_init_logging_in_writes_levelled_lines() {
    let temp_dir = TempDir::new().unwrap();
    let log_dir = temp_dir.path().join("logs");

    let log_file = init_logging_in(&log_dir).unwrap();
    assert!(log_dir.is_dir());
    assert!(log_file.starts_with(&log_dir));
    assert_eq!(get_log_file_path(), Some(log_file.clone()));

    log_info("fetched 3 items");
    log_debug("page cursor abc");
    log_error("board not found");

    let contents = fs::read_to_string(&log_file).unwrap();
    assert!(contents.contains("INFO - Logging initialized to:"));
    assert!(contents.contains("INFO - fetched 3 items"));
    assert!(contents.contains("DEBUG - page cursor abc"));
    assert!(contents.contains("ERROR - board not found"));
}
