use sea_orm::Set;
use serde::Deserialize;
use ts_rs::TS;

use crate::entity::semesters::ActiveModel;
use crate::models::common::{FromPayload, PayloadReader, impl_try_from_payload};

/// 创建学期请求
#[derive(Debug, Clone, PartialEq, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/semester.ts")]
#[serde(try_from = "serde_json::Value")]
pub struct CreateSemesterRequest {
    pub name: String,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl_try_from_payload!(CreateSemesterRequest);

impl FromPayload for CreateSemesterRequest {
    const READ_ONLY_FIELDS: &'static [&'static str] = &["id"];

    fn read_fields(reader: &mut PayloadReader) -> Self {
        Self {
            name: reader.required_text("name", Some(64)),
            available: reader.boolean("available", default_available()),
        }
    }
}

impl CreateSemesterRequest {
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            name: Set(self.name),
            available: Set(self.available),
            ..Default::default()
        }
    }
}
