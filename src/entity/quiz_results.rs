//! 成绩实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "quiz_results")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: String,
    #[sea_orm(nullable)]
    pub quiz_id: Option<i64>,
    pub quiz_title: String,
    pub score: i32,
    pub total: i32,
    #[sea_orm(column_type = "Text")]
    pub feedback_message: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::quizzes::Entity",
        from = "Column::QuizId",
        to = "super::quizzes::Column::Id"
    )]
    Quiz,
}

impl Related<super::quizzes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quiz.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_quiz_result(self) -> crate::models::results::entities::QuizResult {
        use crate::models::results::entities::QuizResult;
        use chrono::{DateTime, Utc};

        QuizResult {
            id: self.id,
            student_id: self.student_id,
            quiz_id: self.quiz_id,
            quiz_title: self.quiz_title,
            score: self.score.max(0) as u32,
            total: self.total.max(0) as u32,
            feedback_message: self.feedback_message,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
