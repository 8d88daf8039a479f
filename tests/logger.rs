use todomvc::config::LoggingConfig;
use todomvc::logger;

#[test]
fn test_log_file_path_ends_with_app_dir() {
    let path = logger::get_log_file_path().unwrap();
    assert!(path.ends_with("todomvc/todomvc.log"));
}

#[test]
fn test_disabled_logging_builds_nothing() {
    let path = std::env::temp_dir().join("todomvc-logger-disabled").join("todomvc.log");
    let dispatch = logger::build_dispatch(&LoggingConfig::default(), &path).unwrap();
    assert!(dispatch.is_none());
    assert!(!path.exists());
}

#[test]
fn test_enabled_logging_creates_file() {
    let dir = std::env::temp_dir().join(format!("todomvc-logger-{}", std::process::id()));
    let path = dir.join("todomvc.log");
    let config = LoggingConfig {
        enabled: true,
        level: "debug".to_string(),
    };

    let dispatch = logger::build_dispatch(&config, &path).unwrap();
    assert!(dispatch.is_some());
    assert!(path.exists());
}

#[test]
fn test_invalid_level_is_an_error() {
    let path = std::env::temp_dir().join("todomvc-logger-invalid").join("todomvc.log");
    let config = LoggingConfig {
        enabled: true,
        level: "chatty".to_string(),
    };
    assert!(logger::build_dispatch(&config, &path).is_err());
}
