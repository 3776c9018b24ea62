//! 教师评价实体

use sea_orm::entity::prelude::*;

use crate::models::common::SerializeOptions;
use crate::utils::time::datetime_from_timestamp;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "teacher_evaluations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub teacher_id: i64,
    #[sea_orm(column_type = "Text")]
    pub evaluation_content: String,
    pub data_sources: String,
    pub evaluation_count: i32,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::teachers::Entity",
        from = "Column::TeacherId",
        to = "super::teachers::Column::Id",
        on_delete = "Cascade"
    )]
    Teacher,
}

impl Related<super::teachers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

const ELLIPSIS: char = '…';

impl Model {
    /// 评价摘要：合并空白后截取前 `max_chars` 个字符，超长时以省略号结尾
    pub fn evaluation_summary(&self, max_chars: usize) -> String {
        let collapsed = self
            .evaluation_content
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        if collapsed.chars().count() <= max_chars {
            return collapsed;
        }

        let mut summary: String = collapsed.chars().take(max_chars).collect();
        summary.truncate(summary.trim_end().len());
        summary.push(ELLIPSIS);
        summary
    }

    pub fn into_response(
        self,
        teacher_name: &str,
        options: &SerializeOptions,
    ) -> crate::models::teacher_evaluations::responses::TeacherEvaluationResponse {
        use crate::models::teacher_evaluations::responses::TeacherEvaluationResponse;

        let evaluation_summary = self.evaluation_summary(options.evaluation_summary_length);

        TeacherEvaluationResponse {
            id: self.id,
            teacher_name: teacher_name.to_string(),
            evaluation_content: self.evaluation_content,
            evaluation_summary,
            data_sources: self.data_sources,
            evaluation_count: self.evaluation_count,
            created_at: datetime_from_timestamp(self.created_at),
        }
    }
}
