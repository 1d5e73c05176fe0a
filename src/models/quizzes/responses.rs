use chrono::{DateTime, Utc};
use serde::Serialize;
use ts_rs::TS;

use super::entities::{Question, Quiz, QuizSource};

/// 面向学生的题目（不含正确答案）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "quiz.ts")]
pub struct QuestionView {
    pub question: String,
    pub options: Vec<String>,
}

impl From<&Question> for QuestionView {
    fn from(question: &Question) -> Self {
        Self {
            question: question.question.clone(),
            options: question.options.clone(),
        }
    }
}

/// 面向学生的测验
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "quiz.ts")]
pub struct QuizView {
    pub id: i64,
    pub title: String,
    pub topic: Option<String>,
    pub source: QuizSource,
    pub question_count: usize,
    pub questions: Vec<QuestionView>,
    pub created_at: DateTime<Utc>,
}

impl From<&Quiz> for QuizView {
    fn from(quiz: &Quiz) -> Self {
        Self {
            id: quiz.id,
            title: quiz.title.clone(),
            topic: quiz.topic.clone(),
            source: quiz.source,
            question_count: quiz.questions.len(),
            questions: quiz.questions.iter().map(QuestionView::from).collect(),
            created_at: quiz.created_at,
        }
    }
}

/// 测验列表项
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "quiz.ts")]
pub struct QuizSummary {
    pub id: i64,
    pub title: String,
    pub topic: Option<String>,
    pub source: QuizSource,
    pub question_count: usize,
    pub created_at: DateTime<Utc>,
}

impl From<Quiz> for QuizSummary {
    fn from(quiz: Quiz) -> Self {
        Self {
            id: quiz.id,
            title: quiz.title,
            topic: quiz.topic,
            source: quiz.source,
            question_count: quiz.questions.len(),
            created_at: quiz.created_at,
        }
    }
}
