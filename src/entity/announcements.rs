//! 公告实体

use sea_orm::entity::prelude::*;

use crate::utils::time::datetime_from_timestamp;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "announcements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub url: Option<String>,
    pub available: bool,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_response(self) -> crate::models::announcements::responses::AnnouncementResponse {
        use crate::models::announcements::responses::AnnouncementResponse;

        AnnouncementResponse {
            title: self.title,
            message: self.message,
            created_at: datetime_from_timestamp(self.created_at),
            url: self.url,
        }
    }
}
