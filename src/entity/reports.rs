//! 用户反馈实体

use sea_orm::entity::prelude::*;

use crate::utils::time::datetime_from_timestamp;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reports")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    #[sea_orm(column_type = "Text")]
    pub comment: String,
    #[sea_orm(column_type = "Text")]
    pub reply: String,
    pub solved: bool,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// `solved` 仅供后台使用，不出现在响应中
    pub fn into_response(self) -> crate::models::reports::responses::ReportResponse {
        use crate::models::reports::responses::ReportResponse;

        ReportResponse {
            id: self.id,
            user: self.user_id,
            comment: self.comment,
            created_at: datetime_from_timestamp(self.created_at),
            reply: self.reply,
        }
    }
}
