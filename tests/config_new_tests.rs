use betfair_rest::config::{Config, CONFIG_FILE};
use betfair_rest::BetfairError;
use std::fs;
use tempfile::tempdir;

// Changes the process working directory, so it lives alone in this test binary.
#[test]
fn test_config_new_reads_working_directory() {
    let dir = tempdir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    assert!(matches!(Config::new(), Err(BetfairError::Io(_))));

    fs::write(
        dir.path().join(CONFIG_FILE),
        r#"
[betfair]
username = "cwd_user"
password = "cwd_pass"
app_key = "cwd_key"
"#,
    )
    .unwrap();

    let config = Config::new().unwrap();
    assert_eq!(config.betfair.app_key.as_deref(), Some("cwd_key"));
    assert_eq!(config.betfair.region, "UK");
}
