use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let builder = Config::builder()
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖，例如 JCOURSE_SERIALIZER__MAX_PAGE_SIZE
            .add_source(
                Environment::with_prefix("JCOURSE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?;

        let app_config: AppConfig = builder.build()?.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let serializer = &self.serializer;
        if serializer.max_page_size < 1 {
            return Err(ConfigError::Message(
                "serializer.max_page_size must be at least 1".to_string(),
            ));
        }
        if serializer.default_page_size < 1 || serializer.default_page_size > serializer.max_page_size
        {
            return Err(ConfigError::Message(format!(
                "serializer.default_page_size must be between 1 and {}",
                serializer.max_page_size
            )));
        }
        Ok(())
    }

    /// 获取全局配置实例，首次调用时加载；加载失败返回错误而不是终止进程
    pub fn get() -> Result<&'static AppConfig, ConfigError> {
        if let Some(config) = APP_CONFIG.get() {
            return Ok(config);
        }
        let config = Self::load()?;
        Ok(APP_CONFIG.get_or_init(|| config))
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }
}
