use serde::Serialize;
use ts_rs::TS;

// 账号信息（仅暴露公开字段）
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub is_staff: bool,
}

#[cfg(test)]
mod tests {
    use crate::entity::users;
    use crate::models::common::field_names;

    #[test]
    fn test_user_hides_credentials() {
        let user = users::Model {
            id: 3,
            username: "zhangsan".into(),
            email: "zhangsan@sjtu.edu.cn".into(),
            password_hash: "argon2id$...".into(),
            is_staff: true,
            is_active: true,
            date_joined: 1_700_000_000,
            last_login: None,
        };

        let response = user.into_response();
        assert_eq!(field_names(&response), ["id", "username", "is_staff"]);
        assert_eq!(response.username, "zhangsan");
        assert!(response.is_staff);
    }
}
