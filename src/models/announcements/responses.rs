use chrono::{DateTime, Utc};
use serde::Serialize;
use ts_rs::TS;

// 公告响应
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct AnnouncementResponse {
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use crate::entity::announcements;
    use crate::models::common::field_names;
    use serde_json::json;

    #[test]
    fn test_announcement_projection() {
        let model = announcements::Model {
            id: 1,
            title: "系统维护".into(),
            message: "本周六凌晨维护".into(),
            url: None,
            available: true,
            created_at: 1_700_000_000,
        };

        let value = serde_json::to_value(model.into_response()).unwrap();
        assert_eq!(
            value,
            json!({
                "title": "系统维护",
                "message": "本周六凌晨维护",
                "created_at": "2023-11-14T22:13:20Z",
                "url": null,
            })
        );
    }

    #[test]
    fn test_announcement_field_order() {
        let model = announcements::Model {
            id: 2,
            title: "t".into(),
            message: "m".into(),
            url: Some("https://course.sjtu.plus/faq".into()),
            available: false,
            created_at: 0,
        };
        assert_eq!(
            field_names(&model.into_response()),
            ["title", "message", "created_at", "url"]
        );
    }
}
