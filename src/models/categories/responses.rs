use serde::Serialize;
use ts_rs::TS;

// 课程分类响应；count 由查询方附加
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/category.ts")]
pub struct CategoryResponse {
    pub id: i64,
    pub count: i64,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use crate::entity::categories;
    use crate::models::common::field_names;

    #[test]
    fn test_count_is_echoed() {
        let row = categories::CategoryCount {
            id: 4,
            name: "通识".into(),
            count: 37,
        };

        let response = row.into_response();
        assert_eq!(field_names(&response), ["id", "count", "name"]);
        assert_eq!(response.count, 37);
        assert_eq!(response.name, "通识");
    }

    #[test]
    fn test_with_count_attaches_caller_value() {
        let model = categories::Model {
            id: 9,
            name: "数学类".into(),
        };

        let response = model.with_count(0).into_response();
        assert_eq!(response.id, 9);
        assert_eq!(response.count, 0);
    }
}
