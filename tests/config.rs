#[cfg(test)]
mod tests {
    use rokim_todo::api::TodoApiConfig;
    use rokim_todo::libs::config::{Config, DisplayConfig, CONFIG_FILE_NAME};
    use rokim_todo::libs::data_storage::DataStorage;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Points the data directory at a temporary home for each test.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        api_url: String,
        timeout: u64,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _temp_dir: temp_dir,
                api_url: "https://todo.example.com".to_string(),
                timeout: 10,
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.api.is_none());
        assert!(config.display.is_none());

        let display = config.display_or_default();
        assert_eq!(display.date_format, "%Y-%m-%d %H:%M");
        assert!(display.show_descriptions);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        // Without a file the defaults are returned.
        assert_eq!(Config::read().unwrap(), Config::default());

        let config = Config {
            api: Some(TodoApiConfig {
                api_url: ctx.api_url.clone(),
                timeout: ctx.timeout,
            }),
            display: Some(DisplayConfig {
                date_format: "%d.%m.%Y".to_string(),
                show_descriptions: false,
            }),
        };
        config.save().unwrap();

        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        assert!(path.exists());
        assert_eq!(Config::read().unwrap(), config);
    }

    #[test]
    fn test_unset_modules_are_omitted() {
        let config = Config {
            api: Some(TodoApiConfig::new("http://localhost:8080")),
            display: None,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"api\""));
        assert!(!json.contains("\"display\""));
    }

    #[test]
    fn test_timeout_defaults_when_missing() {
        let config: Config = serde_json::from_str(r#"{"api": {"api_url": "http://localhost:3000"}}"#).unwrap();
        let api = config.api.unwrap();
        assert_eq!(api.api_url, "http://localhost:3000");
        assert_eq!(api.timeout, 30);
    }

    #[test]
    fn test_api_config_override_wins() {
        let config = Config {
            api: Some(TodoApiConfig {
                api_url: "http://configured:8080".to_string(),
                timeout: 5,
            }),
            display: None,
        };

        let api = config.api_config(Some("http://override:9090")).unwrap();
        assert_eq!(api.api_url, "http://override:9090");
        assert_eq!(api.timeout, 5);

        let api = config.api_config(None).unwrap();
        assert_eq!(api.api_url, "http://configured:8080");
    }

    #[test]
    fn test_api_config_without_url() {
        let config = Config::default();
        assert!(config.api_config(None).is_err());

        let api = config.api_config(Some("http://localhost:8080")).unwrap();
        assert_eq!(api.timeout, 30);

        let blank = Config {
            api: Some(TodoApiConfig::new("  ")),
            display: None,
        };
        assert!(blank.api_config(None).is_err());
    }
}
