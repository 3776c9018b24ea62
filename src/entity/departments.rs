//! 院系实体

use sea_orm::FromQueryResult;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "departments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::teachers::Entity")]
    Teachers,
}

impl Related<super::teachers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teachers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// 带计数注解的院系查询结果
///
/// `count` 由查询方聚合得到（例如该院系下的课程数），映射层只负责透传。
#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct DepartmentCount {
    pub id: i64,
    pub name: String,
    pub count: i64,
}

impl Model {
    /// 附加调用方提供的计数
    pub fn with_count(self, count: i64) -> DepartmentCount {
        DepartmentCount {
            id: self.id,
            name: self.name,
            count,
        }
    }
}

impl DepartmentCount {
    pub fn into_response(self) -> crate::models::departments::responses::DepartmentResponse {
        use crate::models::departments::responses::DepartmentResponse;

        DepartmentResponse {
            id: self.id,
            count: self.count,
            name: self.name,
        }
    }
}
