use chrono::{DateTime, Utc};
use sea_orm::Set;
use serde::Deserialize;
use ts_rs::TS;

use crate::entity::user_points::ActiveModel;
use crate::models::common::{FromPayload, PayloadReader, impl_try_from_payload};

/// 新增积分记录请求；`user` 与 `id` 由服务端指定
#[derive(Debug, Clone, PartialEq, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user_point.ts")]
#[serde(try_from = "serde_json::Value")]
pub struct CreateUserPointRequest {
    pub value: i32,
    pub description: String,
    pub time: Option<DateTime<Utc>>,
}

impl_try_from_payload!(CreateUserPointRequest);

impl FromPayload for CreateUserPointRequest {
    const READ_ONLY_FIELDS: &'static [&'static str] = &["id", "user"];

    fn read_fields(reader: &mut PayloadReader) -> Self {
        Self {
            value: reader.required_integer("value"),
            description: reader.required_text("description", Some(255)),
            time: reader.optional_datetime("time"),
        }
    }
}

impl CreateUserPointRequest {
    /// 未提供 `time` 时使用 `now`
    pub fn into_active_model(self, user_id: i64, now: i64) -> ActiveModel {
        ActiveModel {
            user_id: Set(user_id),
            value: Set(self.value),
            description: Set(self.description),
            time: Set(self.time.map_or(now, |t| t.timestamp())),
            ..Default::default()
        }
    }
}
