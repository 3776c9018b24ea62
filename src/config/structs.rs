use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app: AppSettings,
    pub serializer: SerializerConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            system_name: "jcourse".to_string(),
            environment: "development".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// 序列化配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializerConfig {
    pub evaluation_summary_length: usize, // 评价摘要最大字符数
    pub default_page_size: i64,
    pub max_page_size: i64,
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            evaluation_summary_length: 100,
            default_page_size: 20,
            max_page_size: 100,
        }
    }
}
