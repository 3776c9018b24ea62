use serde::Serialize;
use ts_rs::TS;

use crate::entity::{teacher_evaluations, teachers};
use crate::models::common::SerializeOptions;
use crate::models::teacher_evaluations::responses::TeacherEvaluationResponse;

/// 教师响应，内嵌全部评价
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherResponse {
    pub id: i64,
    pub tid: String,
    pub name: String,
    pub department: Option<i64>,
    pub title: Option<String>,
    pub evaluations: Vec<TeacherEvaluationResponse>,
    pub evaluation_count: i64,
}

impl TeacherResponse {
    /// 由 `find_with_related(TeacherEvaluations)` 的结果批量构造
    pub fn from_related(
        rows: Vec<(teachers::Model, Vec<teacher_evaluations::Model>)>,
        options: &SerializeOptions,
    ) -> Vec<Self> {
        rows.into_iter()
            .map(|(teacher, evaluations)| teacher.into_response(evaluations, options))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::common::field_names;

    fn teacher(id: i64, name: &str) -> teachers::Model {
        teachers::Model {
            id,
            tid: format!("{:05}", id),
            name: name.into(),
            department_id: Some(3),
            title: Some("副教授".into()),
            pinyin: None,
            abbr_pinyin: None,
        }
    }

    fn evaluation(id: i64, teacher_id: i64) -> teacher_evaluations::Model {
        teacher_evaluations::Model {
            id,
            teacher_id,
            evaluation_content: format!("评价 {id}"),
            data_sources: "选课社区".into(),
            evaluation_count: 1,
            created_at: 1_700_000_000 + id,
        }
    }

    #[test]
    fn test_teacher_fields() {
        let response = teacher(1, "张老师").into_response(vec![], &SerializeOptions::default());
        assert_eq!(
            field_names(&response),
            [
                "id",
                "tid",
                "name",
                "department",
                "title",
                "evaluations",
                "evaluation_count",
            ]
        );
        assert_eq!(response.evaluation_count, 0);
        assert_eq!(response.department, Some(3));
    }

    #[test]
    fn test_evaluations_keep_order_and_count() {
        let evaluations = vec![evaluation(9, 1), evaluation(2, 1), evaluation(5, 1)];
        let response = teacher(1, "张老师").into_response(evaluations, &SerializeOptions::default());

        let ids: Vec<i64> = response.evaluations.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![9, 2, 5]);
        assert_eq!(response.evaluation_count, response.evaluations.len() as i64);
        assert!(response.evaluations.iter().all(|e| e.teacher_name == "张老师"));
    }

    #[test]
    fn test_from_related_rows() {
        let rows = vec![
            (teacher(1, "张老师"), vec![evaluation(1, 1)]),
            (teacher(2, "李老师"), vec![]),
        ];
        let responses = TeacherResponse::from_related(rows, &SerializeOptions::default());

        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0].evaluation_count, 1);
        assert_eq!(responses[1].evaluation_count, 0);

        let value = serde_json::to_value(&responses[0]).unwrap();
        assert_eq!(value["evaluations"][0]["teacher_name"], "张老师");
        assert_eq!(value["evaluations"][0]["evaluation_summary"], "评价 1");
    }
}
