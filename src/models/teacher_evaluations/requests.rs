use sea_orm::Set;
use serde::Deserialize;
use ts_rs::TS;

use crate::entity::teacher_evaluations::ActiveModel;
use crate::models::common::{FromPayload, PayloadReader, impl_try_from_payload};

/// 新增教师评价请求；所属教师由调用方指定
#[derive(Debug, Clone, PartialEq, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
#[serde(try_from = "serde_json::Value")]
pub struct CreateTeacherEvaluationRequest {
    pub evaluation_content: String,
    pub data_sources: String,
    #[serde(default)]
    pub evaluation_count: i32,
}

impl_try_from_payload!(CreateTeacherEvaluationRequest);

impl FromPayload for CreateTeacherEvaluationRequest {
    const READ_ONLY_FIELDS: &'static [&'static str] =
        &["id", "teacher_name", "evaluation_summary", "created_at"];

    fn read_fields(reader: &mut PayloadReader) -> Self {
        let evaluation_count = reader.optional_integer("evaluation_count").unwrap_or(0);
        if evaluation_count < 0 {
            reader.reject(
                "evaluation_count",
                "Ensure this value is greater than or equal to 0.",
            );
        }

        Self {
            evaluation_content: reader.required_text("evaluation_content", None),
            data_sources: reader.required_text("data_sources", Some(255)),
            evaluation_count,
        }
    }
}

impl CreateTeacherEvaluationRequest {
    pub fn into_active_model(self, teacher_id: i64, now: i64) -> ActiveModel {
        ActiveModel {
            teacher_id: Set(teacher_id),
            evaluation_content: Set(self.evaluation_content),
            data_sources: Set(self.data_sources),
            evaluation_count: Set(self.evaluation_count),
            created_at: Set(now),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::common::SerializeOptions;
    use sea_orm::TryIntoModel;
    use serde_json::json;

    #[test]
    fn test_round_trip() {
        let payload = json!({
            "evaluation_content": "作业多，收获大",
            "data_sources": "问卷",
            "evaluation_count": 30,
            "teacher_name": "伪造",
            "evaluation_summary": "伪造",
        });
        let request = CreateTeacherEvaluationRequest::from_payload(&payload).unwrap();

        let mut active = request.into_active_model(3, 1_700_000_000);
        active.id = Set(1);
        let model = active.try_into_model().unwrap();
        assert_eq!(model.teacher_id, 3);

        let response = model.into_response("李老师", &SerializeOptions::default());
        assert_eq!(response.teacher_name, "李老师");
        assert_eq!(response.evaluation_content, "作业多，收获大");
        assert_eq!(response.evaluation_summary, "作业多，收获大");
        assert_eq!(response.data_sources, "问卷");
        assert_eq!(response.evaluation_count, 30);
    }

    #[test]
    fn test_evaluation_count_defaults_to_zero() {
        let payload = json!({"evaluation_content": "好", "data_sources": "问卷"});
        let request = CreateTeacherEvaluationRequest::from_payload(&payload).unwrap();
        assert_eq!(request.evaluation_count, 0);
    }

    #[test]
    fn test_negative_count_is_rejected() {
        let payload = json!({
            "evaluation_content": "好",
            "data_sources": "问卷",
            "evaluation_count": -1,
        });
        let errors = CreateTeacherEvaluationRequest::from_payload(&payload).unwrap_err();
        assert!(errors.contains("evaluation_count"));

        let typed = serde_json::from_value::<CreateTeacherEvaluationRequest>(payload);
        assert!(typed.is_err());
    }
}
