use sea_orm::Set;
use serde::Deserialize;
use ts_rs::TS;

use crate::entity::teachers::ActiveModel;
use crate::models::common::{FromPayload, PayloadReader, impl_try_from_payload};

/// 创建教师请求；评价列表与评价数为只读
#[derive(Debug, Clone, PartialEq, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
#[serde(try_from = "serde_json::Value")]
pub struct CreateTeacherRequest {
    pub tid: String,
    pub name: String,
    pub department: Option<i64>,
    pub title: Option<String>,
}

impl_try_from_payload!(CreateTeacherRequest);

impl FromPayload for CreateTeacherRequest {
    const READ_ONLY_FIELDS: &'static [&'static str] = &["id", "evaluations", "evaluation_count"];

    fn read_fields(reader: &mut PayloadReader) -> Self {
        Self {
            tid: reader.required_text("tid", Some(32)),
            name: reader.required_text("name", Some(255)),
            department: reader.optional_integer("department"),
            title: reader.optional_text("title", Some(64)),
        }
    }
}

impl CreateTeacherRequest {
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            tid: Set(self.tid),
            name: Set(self.name),
            department_id: Set(self.department),
            title: Set(self.title),
            pinyin: Set(None),
            abbr_pinyin: Set(None),
            ..Default::default()
        }
    }
}
