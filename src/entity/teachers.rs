//! 教师实体

use sea_orm::entity::prelude::*;

use crate::models::common::SerializeOptions;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "teachers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub tid: String,
    pub name: String,
    pub department_id: Option<i64>,
    pub title: Option<String>,
    pub pinyin: Option<String>,
    pub abbr_pinyin: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::departments::Entity",
        from = "Column::DepartmentId",
        to = "super::departments::Column::Id"
    )]
    Department,
    #[sea_orm(has_many = "super::teacher_evaluations::Entity")]
    Evaluations,
}

impl Related<super::departments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::teacher_evaluations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Evaluations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// 转换为教师响应，内嵌评价按传入顺序保留
    ///
    /// 通常与 `find_with_related(TeacherEvaluations)` 的结果配合使用。
    pub fn into_response(
        self,
        evaluations: Vec<super::teacher_evaluations::Model>,
        options: &SerializeOptions,
    ) -> crate::models::teachers::responses::TeacherResponse {
        use crate::models::teachers::responses::TeacherResponse;

        let evaluations: Vec<_> = evaluations
            .into_iter()
            .map(|evaluation| evaluation.into_response(&self.name, options))
            .collect();

        TeacherResponse {
            id: self.id,
            tid: self.tid,
            name: self.name,
            department: self.department_id,
            title: self.title,
            evaluation_count: evaluation_count(evaluations.len()),
            evaluations,
        }
    }
}

// 计数超出 i64 时饱和
fn evaluation_count(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluation_count_saturates() {
        assert_eq!(evaluation_count(0), 0);
        assert_eq!(evaluation_count(3), 3);
        assert_eq!(evaluation_count(usize::MAX), i64::MAX);
    }
}
