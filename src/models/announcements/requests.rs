use sea_orm::Set;
use serde::Deserialize;
use ts_rs::TS;

use crate::entity::announcements::ActiveModel;
use crate::models::common::{FromPayload, PayloadReader, impl_try_from_payload};

/// 发布公告请求
#[derive(Debug, Clone, PartialEq, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
#[serde(try_from = "serde_json::Value")]
pub struct CreateAnnouncementRequest {
    pub title: String,
    pub message: String,
    pub url: Option<String>,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl_try_from_payload!(CreateAnnouncementRequest);

impl FromPayload for CreateAnnouncementRequest {
    const READ_ONLY_FIELDS: &'static [&'static str] = &["id", "created_at"];

    fn read_fields(reader: &mut PayloadReader) -> Self {
        Self {
            title: reader.required_text("title", Some(256)),
            message: reader.required_text("message", None),
            url: reader.optional_url("url"),
            available: reader.boolean("available", default_available()),
        }
    }
}

impl CreateAnnouncementRequest {
    /// `created_at` 由服务端指定
    pub fn into_active_model(self, now: i64) -> ActiveModel {
        ActiveModel {
            title: Set(self.title),
            message: Set(self.message),
            url: Set(self.url),
            available: Set(self.available),
            created_at: Set(now),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::TryIntoModel;
    use serde_json::json;

    #[test]
    fn test_round_trip_ignores_client_timestamp() {
        let payload = json!({
            "title": "新学期选课指南",
            "message": "请查看链接",
            "url": "https://course.sjtu.plus/guide",
            "created_at": "1999-01-01T00:00:00Z",
        });
        let request = CreateAnnouncementRequest::from_payload(&payload).unwrap();

        let mut active = request.into_active_model(1_700_000_000);
        active.id = Set(1);
        let response = active.try_into_model().unwrap().into_response();

        assert_eq!(response.title, "新学期选课指南");
        assert_eq!(response.message, "请查看链接");
        assert_eq!(response.url.as_deref(), Some("https://course.sjtu.plus/guide"));
        assert_eq!(response.created_at.timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let payload = json!({"title": "t", "message": "m", "url": "not a url"});
        let errors = CreateAnnouncementRequest::from_payload(&payload).unwrap_err();
        assert_eq!(errors.get("url").unwrap()[0], "Enter a valid URL.");
    }

    #[test]
    fn test_empty_url_is_none() {
        let payload = json!({"title": "t", "message": "m", "url": ""});
        let request = CreateAnnouncementRequest::from_payload(&payload).unwrap();
        assert_eq!(request.url, None);
    }
}
