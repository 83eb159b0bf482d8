use taskboard::config::{load_config_file, save_config_file, Config, ConfigFile, DEFAULT_API_URL};

fn test_config(tmp: &tempfile::TempDir) -> Config {
    Config::new(
        tmp.path().join(".taskboard"),
        "http://example.test:8000".to_string(),
    )
}

#[test]
fn missing_config_file_yields_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let cf = load_config_file(tmp.path());
    assert!(cf.api_url.is_none());
}

#[test]
fn config_file_round_trip() {
    let tmp = tempfile::tempdir().unwrap();
    let cf = ConfigFile {
        api_url: Some("https://tasks.example.com".to_string()),
    };
    save_config_file(tmp.path(), &cf).unwrap();

    let loaded = load_config_file(tmp.path());
    assert_eq!(loaded.api_url.as_deref(), Some("https://tasks.example.com"));
}

#[test]
fn unparseable_config_file_yields_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("config.toml"), "api_url = [not toml").unwrap();
    let cf = load_config_file(tmp.path());
    assert!(cf.api_url.is_none());
}

#[test]
fn init_writes_default_config_once() {
    let tmp = tempfile::tempdir().unwrap();
    let config = test_config(&tmp);

    config.init_default_files(false).unwrap();
    let cf = load_config_file(&config.base_dir);
    assert_eq!(cf.api_url.as_deref(), Some(DEFAULT_API_URL));

    // A customized file survives a non-forced init
    save_config_file(
        &config.base_dir,
        &ConfigFile {
            api_url: Some("https://custom".to_string()),
        },
    )
    .unwrap();
    config.init_default_files(false).unwrap();
    let cf = load_config_file(&config.base_dir);
    assert_eq!(cf.api_url.as_deref(), Some("https://custom"));

    // Forced init restores the defaults
    config.init_default_files(true).unwrap();
    let cf = load_config_file(&config.base_dir);
    assert_eq!(cf.api_url.as_deref(), Some(DEFAULT_API_URL));
}

#[test]
fn token_path_is_under_base_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let config = test_config(&tmp);
    assert_eq!(config.token_path(), config.base_dir.join("token"));
}
