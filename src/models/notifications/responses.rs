use chrono::{DateTime, Utc};
use serde::Serialize;
use ts_rs::TS;

/// 通知响应
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct NotificationResponse {
    pub id: i64,
    pub recipient: i64,
    #[serde(rename = "type")]
    pub notification_type: i32,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
}
