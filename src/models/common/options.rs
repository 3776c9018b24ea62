use crate::config::AppConfig;

/// 序列化时计算派生字段所需的参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializeOptions {
    /// 评价摘要的最大字符数
    pub evaluation_summary_length: usize,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            evaluation_summary_length: 100,
        }
    }
}

impl From<&AppConfig> for SerializeOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            evaluation_summary_length: config.serializer.evaluation_summary_length,
        }
    }
}
