//! 测验实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "quizzes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(nullable)]
    pub topic: Option<String>,
    pub source: String,
    #[sea_orm(column_type = "Text")]
    pub questions: String, // JSON 数组
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::quiz_results::Entity")]
    QuizResults,
}

impl Related<super::quiz_results::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QuizResults.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_quiz(self) -> crate::errors::Result<crate::models::quizzes::entities::Quiz> {
        use crate::models::quizzes::entities::{Question, Quiz, QuizSource};
        use chrono::{DateTime, Utc};

        let questions: Vec<Question> = serde_json::from_str(&self.questions)?;

        Ok(Quiz {
            id: self.id,
            title: self.title,
            topic: self.topic,
            source: self
                .source
                .parse::<QuizSource>()
                .unwrap_or(QuizSource::Authored),
            questions,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        })
    }
}
