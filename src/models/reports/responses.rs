use chrono::{DateTime, Utc};
use serde::Serialize;
use ts_rs::TS;

// 反馈响应（不包含 solved）
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct ReportResponse {
    pub id: i64,
    pub user: i64,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub reply: String,
}

#[cfg(test)]
mod tests {
    use crate::entity::reports;
    use crate::models::common::field_names;

    #[test]
    fn test_solved_is_never_exposed() {
        for solved in [true, false] {
            let model = reports::Model {
                id: 5,
                user_id: 11,
                comment: "课程信息有误".into(),
                reply: "已修正".into(),
                solved,
                created_at: 1_700_000_000,
            };

            let response = model.into_response();
            assert_eq!(
                field_names(&response),
                ["id", "user", "comment", "created_at", "reply"]
            );
            assert_eq!(response.user, 11);
            assert_eq!(response.reply, "已修正");
        }
    }
}
