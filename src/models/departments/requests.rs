use sea_orm::Set;
use serde::Deserialize;
use ts_rs::TS;

use crate::entity::departments::ActiveModel;
use crate::models::common::{FromPayload, PayloadReader, impl_try_from_payload};

/// 创建院系请求
#[derive(Debug, Clone, PartialEq, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/department.ts")]
#[serde(try_from = "serde_json::Value")]
pub struct CreateDepartmentRequest {
    pub name: String,
}

impl_try_from_payload!(CreateDepartmentRequest);

impl FromPayload for CreateDepartmentRequest {
    const READ_ONLY_FIELDS: &'static [&'static str] = &["id", "count"];

    fn read_fields(reader: &mut PayloadReader) -> Self {
        Self {
            name: reader.required_text("name", Some(255)),
        }
    }
}

impl CreateDepartmentRequest {
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            name: Set(self.name),
            ..Default::default()
        }
    }
}
