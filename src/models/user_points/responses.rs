use chrono::{DateTime, Utc};
use serde::Serialize;
use ts_rs::TS;

// 积分记录响应（不包含 id 与 user）
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user_point.ts")]
pub struct UserPointResponse {
    pub value: i32,
    pub description: String,
    pub time: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use crate::entity::user_points;
    use crate::models::common::field_names;

    #[test]
    fn test_id_and_user_are_excluded() {
        let model = user_points::Model {
            id: 8,
            user_id: 3,
            value: -5,
            description: "点评被删除".into(),
            time: 1_700_000_000,
        };

        let response = model.into_response();
        assert_eq!(field_names(&response), ["value", "description", "time"]);
        assert_eq!(response.value, -5);
    }
}
