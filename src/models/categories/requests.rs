use sea_orm::Set;
use serde::Deserialize;
use ts_rs::TS;

use crate::entity::categories::ActiveModel;
use crate::models::common::{FromPayload, PayloadReader, impl_try_from_payload};

/// 创建课程分类请求
#[derive(Debug, Clone, PartialEq, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/category.ts")]
#[serde(try_from = "serde_json::Value")]
pub struct CreateCategoryRequest {
    pub name: String,
}

impl_try_from_payload!(CreateCategoryRequest);

impl FromPayload for CreateCategoryRequest {
    const READ_ONLY_FIELDS: &'static [&'static str] = &["id", "count"];

    fn read_fields(reader: &mut PayloadReader) -> Self {
        Self {
            name: reader.required_text("name", Some(255)),
        }
    }
}

impl CreateCategoryRequest {
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            name: Set(self.name),
            ..Default::default()
        }
    }
}
