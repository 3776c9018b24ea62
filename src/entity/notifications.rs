//! 通知实体

use sea_orm::entity::prelude::*;

use crate::utils::time::datetime_from_timestamp;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub recipient_id: i64,
    pub actor_id: Option<i64>,
    #[sea_orm(column_name = "type")]
    pub notification_type: i32,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub public: bool,
    pub created_at: i64,
    pub read_at: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::RecipientId",
        to = "super::users::Column::Id",
        on_delete = "Cascade"
    )]
    Recipient,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::ActorId",
        to = "super::users::Column::Id",
        on_delete = "SetNull"
    )]
    Actor,
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_response(self) -> crate::models::notifications::responses::NotificationResponse {
        use crate::models::notifications::responses::NotificationResponse;

        NotificationResponse {
            id: self.id,
            recipient: self.recipient_id,
            notification_type: self.notification_type,
            description: self.description,
            created_at: datetime_from_timestamp(self.created_at),
            read_at: self.read_at.map(datetime_from_timestamp),
        }
    }
}
