use sea_orm::Set;
use serde::Deserialize;
use ts_rs::TS;

use crate::entity::reports::ActiveModel;
use crate::models::common::{FromPayload, PayloadReader, impl_try_from_payload};

/// 提交反馈请求
///
/// 只有 `comment` 可由客户端填写；`user`、`created_at`、`reply` 由服务端指定，
/// `solved` 完全不对外暴露。
#[derive(Debug, Clone, PartialEq, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
#[serde(try_from = "serde_json::Value")]
pub struct CreateReportRequest {
    pub comment: String,
}

impl_try_from_payload!(CreateReportRequest);

impl FromPayload for CreateReportRequest {
    const READ_ONLY_FIELDS: &'static [&'static str] =
        &["id", "user", "created_at", "reply", "solved"];

    fn read_fields(reader: &mut PayloadReader) -> Self {
        Self {
            comment: reader.required_text("comment", None),
        }
    }
}

impl CreateReportRequest {
    pub fn into_active_model(self, user_id: i64, now: i64) -> ActiveModel {
        ActiveModel {
            user_id: Set(user_id),
            comment: Set(self.comment),
            reply: Set(String::new()),
            solved: Set(false),
            created_at: Set(now),
            ..Default::default()
        }
    }
}
