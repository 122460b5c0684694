use std::fs;
use std::io::Write;
use overlay_kit::constants::MAX_LOG_ENTRIES;
use overlay_kit::logger::Logger;

#[test]
fn test_config_based_logging_disabled() {
    // Test with logging disabled
    let logger = Logger::from_config(false).unwrap();
    assert!(!logger.is_enabled());
    assert!(!logger.has_file_writer());

    logger.log("Test message".to_string());
    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("Test message"));
}

#[test]
fn test_file_logging() {
    let path = std::env::temp_dir()
        .join(format!("overlay-kit-logger-test-{}", std::process::id()))
        .join("test.log");
    let logger = Logger::with_log_file(&path).unwrap();
    assert!(logger.is_enabled());
    assert!(logger.has_file_writer());

    logger.log("Test message with file".to_string());

    // Check in-memory logs (for the in-app log view)
    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("Test message with file"));

    // Force flush the buffered writer and check the file
    if let Some(writer_arc) = logger.file_writer() {
        if let Ok(mut writer) = writer_arc.lock() {
            let _ = writer.flush();
        }
    }
    let file_content = fs::read_to_string(&path).unwrap();
    assert!(file_content.contains("Test message with file"));

    // Clean up test file
    if let Some(dir) = path.parent() {
        let _ = fs::remove_dir_all(dir);
    }
}

#[test]
fn test_logs_are_newest_first_and_clearable() {
    let logger = Logger::new();
    logger.log("first".to_string());
    logger.log("second".to_string());

    let logs = logger.get_logs();
    assert!(logs[0].ends_with("second"));
    assert!(logs[1].ends_with("first"));

    // Clones share the same buffer
    let clone = logger.clone();
    clone.clear();
    assert!(logger.get_logs().is_empty());
}

#[test]
fn test_log_file_path_is_under_app_dir() {
    let path = Logger::get_log_file_path().unwrap();
    assert!(path.ends_with("overlay-kit/overlay-kit.log"));
}

#[test]
fn test_global_logger_routes_log_records() {
    let logger = Logger::new();
    // Only one global logger per process; this is the only test installing one
    logger.init_global(log::LevelFilter::Debug).unwrap();

    log::info!(target: "overlay_kit::test", "dialog opened");
    log::trace!("filtered out");

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("INFO"));
    assert!(logs[0].contains("overlay_kit::test: dialog opened"));
}

#[test]
fn test_memory_buffer_keeps_latest_entries() {
    let logger = Logger::new();
    for i in 0..MAX_LOG_ENTRIES + 25 {
        logger.log(format!("entry {}", i));
    }

    let logs = logger.get_logs();
    assert_eq!(logs.len(), MAX_LOG_ENTRIES);
    assert!(logs[0].ends_with(&format!("entry {}", MAX_LOG_ENTRIES + 24)));
    assert!(logs[MAX_LOG_ENTRIES - 1].ends_with("entry 25"));
}
