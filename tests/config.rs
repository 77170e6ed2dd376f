#[cfg(test)]
mod tests {
    use chrono::NaiveTime;
    use clockfill::api::ClockifyConfig;
    use clockfill::libs::config::{Config, WorkdayConfig, API_KEY_VAR, CONFIG_FILE_NAME};
    use clockfill::libs::data_storage::DataStorage;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Points the home/appdata directory at a fresh temporary directory.
    /// Tests touching the environment run one at a time.
    struct ConfigTestContext {
        temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { temp_dir, _guard: guard }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert!(config.clockify.is_none());
        assert!(config.workday.is_none());

        assert_eq!(config.clockify(), ClockifyConfig::default());
        let workday = config.workday();
        assert_eq!(workday.start, "09:00");
        assert_eq!(workday.end, "16:30");
        assert_eq!(workday.default_description, "Standard workday");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(_ctx: &mut ConfigTestContext) {
        let config = Config {
            clockify: Some(ClockifyConfig {
                api_url: "https://clockify.example.com/api/v1".to_string(),
            }),
            workday: Some(WorkdayConfig {
                start: "08:00".to_string(),
                end: "16:00".to_string(),
                default_description: "Support".to_string(),
            }),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.clockify().api_url, "https://clockify.example.com/api/v1");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_config_file(ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        assert!(path.starts_with(ctx.temp_dir.path()));
        std::fs::write(path, r#"{"workday":{"start":"10:00","end":"18:00","default_description":"Ops"}}"#).unwrap();

        let config = Config::read().unwrap();
        assert!(config.clockify.is_none());
        assert_eq!(config.clockify(), ClockifyConfig::default());
        assert_eq!(config.workday().start, "10:00");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_workday_hours(_ctx: &mut ConfigTestContext) {
        let hours = WorkdayConfig::default().hours().unwrap();
        assert_eq!(hours.start, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(hours.end, NaiveTime::from_hms_opt(16, 30, 0).unwrap());

        let inverted = WorkdayConfig {
            start: "17:00".to_string(),
            end: "09:00".to_string(),
            ..WorkdayConfig::default()
        };
        assert!(inverted.hours().is_err());

        let malformed = WorkdayConfig {
            start: "nine".to_string(),
            ..WorkdayConfig::default()
        };
        assert!(malformed.hours().is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_api_key_from_environment(_ctx: &mut ConfigTestContext) {
        std::env::set_var(API_KEY_VAR, "  secret-key \n");
        assert_eq!(Config::api_key().unwrap(), "secret-key");

        std::env::set_var(API_KEY_VAR, "   ");
        assert!(Config::api_key().is_err());

        std::env::remove_var(API_KEY_VAR);
        let err = Config::api_key().unwrap_err();
        assert!(err.to_string().contains("CLOCKIFY_API_KEY not found in environment variables"));
    }
}
