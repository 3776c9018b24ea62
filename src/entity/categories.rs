//! 课程分类实体

use sea_orm::FromQueryResult;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// 带计数注解的分类查询结果
///
/// `count` 由查询方聚合得到，映射层只负责透传。
#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct CategoryCount {
    pub id: i64,
    pub name: String,
    pub count: i64,
}

impl Model {
    /// 附加调用方提供的计数
    pub fn with_count(self, count: i64) -> CategoryCount {
        CategoryCount {
            id: self.id,
            name: self.name,
            count,
        }
    }
}

impl CategoryCount {
    pub fn into_response(self) -> crate::models::categories::responses::CategoryResponse {
        use crate::models::categories::responses::CategoryResponse;

        CategoryResponse {
            id: self.id,
            count: self.count,
            name: self.name,
        }
    }
}
