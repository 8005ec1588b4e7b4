use portalist::logger::Logger;

#[test]
fn test_log_entries_are_timestamped() {
    let logger = Logger::new();
    logger.log("Test message".to_string());

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("Test message"));
    // Entries carry a [HH:MM:SS.mmm] prefix
    assert!(logs[0].starts_with('['));
}

#[test]
fn test_logs_are_returned_newest_first() {
    let logger = Logger::new();
    logger.log("first".to_string());
    logger.log("second".to_string());
    logger.log("third".to_string());

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 3);
    assert!(logs[0].contains("third"));
    assert!(logs[2].contains("first"));
}

#[test]
fn test_clear_removes_all_entries() {
    let logger = Logger::new();
    logger.log("message".to_string());
    logger.clear();
    assert!(logger.get_logs().is_empty());
}

#[test]
fn test_clones_share_the_buffer() {
    let logger = Logger::new();
    let clone = logger.clone();
    clone.log("shared".to_string());

    assert_eq!(logger.get_logs().len(), 1);
}
