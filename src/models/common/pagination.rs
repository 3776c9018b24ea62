use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::config::SerializerConfig;

// 分页查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginationQuery {
    #[serde(
        default = "default_page",
        deserialize_with = "deserialize_string_to_i64"
    )]
    pub page: i64,
    #[serde(default, deserialize_with = "deserialize_optional_string_to_i64")]
    pub size: Option<i64>,
}

impl PaginationQuery {
    /// 归一化后的 (page, page_size)：页码至少为 1，页大小限制在 [1, max_page_size]
    pub fn resolve(&self, limits: &SerializerConfig) -> (i64, i64) {
        let page = self.page.max(1);
        let size = self
            .size
            .unwrap_or(limits.default_page_size)
            .clamp(1, limits.max_page_size.max(1));
        (page, size)
    }

    pub fn offset(&self, limits: &SerializerConfig) -> u64 {
        let (page, size) = self.resolve(limits);
        u64::try_from((page - 1).saturating_mul(size)).unwrap_or(u64::MAX)
    }
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: 1,
            size: None,
        }
    }
}

// 分页列表响应
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct Page<T: TS> {
    pub count: i64,
    pub page: i64,
    pub page_size: i64,
    pub results: Vec<T>,
}

impl<T: TS> Page<T> {
    /// 由当前页的记录构造分页响应，`count` 为查询总数
    pub fn from_records<R, F>(
        records: impl IntoIterator<Item = R>,
        count: i64,
        query: &PaginationQuery,
        limits: &SerializerConfig,
        map: F,
    ) -> Self
    where
        F: FnMut(R) -> T,
    {
        let (page, page_size) = query.resolve(limits);
        Self {
            count,
            page,
            page_size,
            results: records.into_iter().map(map).collect(),
        }
    }

    pub fn total_pages(&self) -> i64 {
        if self.page_size <= 0 {
            return 0;
        }
        let full = self.count / self.page_size;
        if self.count % self.page_size > 0 {
            full + 1
        } else {
            full
        }
    }
}

// 查询字符串中的数字以字符串形式出现，这里同时接受整数和数字字符串
fn deserialize_string_to_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    deserializer.deserialize_any(I64Visitor)
}

fn deserialize_optional_string_to_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    deserializer.deserialize_option(OptionalI64Visitor)
}

// null 与缺省一样回落到默认值
struct OptionalI64Visitor;

impl<'de> serde::de::Visitor<'de> for OptionalI64Visitor {
    type Value = Option<i64>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("null, an integer or a string containing an integer")
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(None)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(I64Visitor).map(Some)
    }
}

struct I64Visitor;

impl<'de> serde::de::Visitor<'de> for I64Visitor {
    type Value = i64;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("an integer or a string containing an integer")
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(value)
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        i64::try_from(value)
            .map_err(|_| E::invalid_value(serde::de::Unexpected::Unsigned(value), &self))
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        value
            .parse()
            .map_err(|_| E::invalid_value(serde::de::Unexpected::Str(value), &self))
    }
}

fn default_page() -> i64 {
    1
}
