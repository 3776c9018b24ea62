use chrono::{DateTime, Utc};
use sea_orm::Set;
use serde::Deserialize;
use ts_rs::TS;

use crate::entity::notifications::ActiveModel;
use crate::models::common::{FromPayload, PayloadReader, impl_try_from_payload};

/// 创建通知请求
#[derive(Debug, Clone, PartialEq, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
#[serde(try_from = "serde_json::Value")]
pub struct CreateNotificationRequest {
    pub recipient: i64,
    #[serde(rename = "type")]
    pub notification_type: i32,
    pub description: String,
    pub read_at: Option<DateTime<Utc>>,
}

impl_try_from_payload!(CreateNotificationRequest);

impl FromPayload for CreateNotificationRequest {
    const READ_ONLY_FIELDS: &'static [&'static str] = &["id", "created_at"];

    fn read_fields(reader: &mut PayloadReader) -> Self {
        Self {
            recipient: reader.required_integer("recipient"),
            notification_type: reader.required_integer("type"),
            description: reader.required_text("description", None),
            read_at: reader.optional_datetime("read_at"),
        }
    }
}

impl CreateNotificationRequest {
    /// `actor_id` 为触发通知的用户，由调用方给出
    pub fn into_active_model(self, actor_id: Option<i64>, now: i64) -> ActiveModel {
        ActiveModel {
            recipient_id: Set(self.recipient),
            actor_id: Set(actor_id),
            notification_type: Set(self.notification_type),
            description: Set(self.description),
            public: Set(false),
            created_at: Set(now),
            read_at: Set(self.read_at.map(|t| t.timestamp())),
            ..Default::default()
        }
    }
}
