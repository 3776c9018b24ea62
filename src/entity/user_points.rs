//! 用户积分实体

use sea_orm::entity::prelude::*;

use crate::utils::time::datetime_from_timestamp;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user_points")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub value: i32,
    pub description: String,
    pub time: i64,
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
    /// `id` 与 `user` 不对外暴露
    pub fn into_response(self) -> crate::models::user_points::responses::UserPointResponse {
        use crate::models::user_points::responses::UserPointResponse;

        UserPointResponse {
            value: self.value,
            description: self.description,
            time: datetime_from_timestamp(self.time),
        }
    }
}
