use chrono::{DateTime, Utc};
use serde::Serialize;
use ts_rs::TS;

use crate::entity::{teacher_evaluations, teachers};
use crate::errors::{JCourseError, Result};
use crate::models::common::SerializeOptions;

/// 教师评价响应
///
/// `teacher_name` 取自关联教师，`evaluation_summary` 在序列化时由记录计算。
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherEvaluationResponse {
    pub id: i64,
    pub teacher_name: String,
    pub evaluation_content: String,
    pub evaluation_summary: String,
    pub data_sources: String,
    pub evaluation_count: i32,
    pub created_at: DateTime<Utc>,
}

impl TeacherEvaluationResponse {
    /// 由 `find_also_related(Teachers)` 的结果构造
    pub fn from_related(
        evaluation: teacher_evaluations::Model,
        teacher: Option<teachers::Model>,
        options: &SerializeOptions,
    ) -> Result<Self> {
        let teacher = teacher.ok_or_else(|| {
            JCourseError::not_found(format!(
                "teacher {} of evaluation {}",
                evaluation.teacher_id, evaluation.id
            ))
        })?;
        Ok(evaluation.into_response(&teacher.name, options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::common::field_names;

    fn teacher() -> teachers::Model {
        teachers::Model {
            id: 1,
            tid: "10001".into(),
            name: "王老师".into(),
            department_id: None,
            title: None,
            pinyin: None,
            abbr_pinyin: None,
        }
    }

    fn evaluation() -> teacher_evaluations::Model {
        teacher_evaluations::Model {
            id: 20,
            teacher_id: 1,
            evaluation_content: "上课节奏快，但讲解细致".into(),
            data_sources: "选课社区".into(),
            evaluation_count: 12,
            created_at: 1_700_000_000,
        }
    }

    #[test]
    fn test_evaluation_fields() {
        let response = TeacherEvaluationResponse::from_related(
            evaluation(),
            Some(teacher()),
            &SerializeOptions::default(),
        )
        .unwrap();

        assert_eq!(
            field_names(&response),
            [
                "id",
                "teacher_name",
                "evaluation_content",
                "evaluation_summary",
                "data_sources",
                "evaluation_count",
                "created_at",
            ]
        );
        assert_eq!(response.teacher_name, "王老师");
        assert_eq!(response.evaluation_summary, "上课节奏快，但讲解细致");
        assert_eq!(response.evaluation_count, 12);
    }

    #[test]
    fn test_summary_length_comes_from_options() {
        let options = SerializeOptions {
            evaluation_summary_length: 5,
        };
        let response = evaluation().into_response("王老师", &options);
        assert_eq!(response.evaluation_summary, "上课节奏快…");
        assert_eq!(response.evaluation_content, "上课节奏快，但讲解细致");
    }

    #[test]
    fn test_missing_teacher() {
        let err = TeacherEvaluationResponse::from_related(
            evaluation(),
            None,
            &SerializeOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err.code(), "E004");
    }
}
