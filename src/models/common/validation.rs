use std::collections::BTreeMap;

use serde::Serialize;

/// 写入路径的逐字段校验错误
///
/// 序列化形如 `{"comment": ["This field is required."]}`，
/// 与字段无关的错误放在 `non_field_errors` 下。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub const NON_FIELD_ERRORS: &'static str = "non_field_errors";

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn non_field(message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.add(Self::NON_FIELD_ERRORS, message);
        errors
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(Vec::as_slice)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    /// 拼接为单行消息，用于日志与错误转换
    pub fn summary(&self) -> String {
        self.errors
            .iter()
            .flat_map(|(field, messages)| {
                messages.iter().map(move |message| format!("{field}: {message}"))
            })
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.summary())
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_as_field_map() {
        let mut errors = ValidationErrors::default();
        errors.add("name", "This field is required.");
        errors.add("name", "Second problem.");
        errors.add("available", "Must be a valid boolean.");

        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            json!({
                "available": ["Must be a valid boolean."],
                "name": ["This field is required.", "Second problem."],
            })
        );
    }

    #[test]
    fn test_non_field_errors() {
        let errors = ValidationErrors::non_field("Invalid data.");
        assert!(errors.contains(ValidationErrors::NON_FIELD_ERRORS));
        assert_eq!(errors.summary(), "non_field_errors: Invalid data.");
    }
}
