use std::sync::Arc;

use crate::models::{
    PaginatedResponse,
    quizzes::{
        entities::{NewQuiz, Quiz},
        requests::QuizListQuery,
        responses::QuizSummary,
    },
    results::{
        entities::{NewQuizResult, QuizResult},
        requests::ResultListQuery,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 测验管理方法
    // 创建测验
    async fn create_quiz(&self, quiz: NewQuiz) -> Result<Quiz>;
    // 通过ID获取测验
    async fn get_quiz_by_id(&self, quiz_id: i64) -> Result<Option<Quiz>>;
    // 列出测验
    async fn list_quizzes_with_pagination(
        &self,
        query: QuizListQuery,
    ) -> Result<PaginatedResponse<QuizSummary>>;
    // 删除测验
    async fn delete_quiz(&self, quiz_id: i64) -> Result<bool>;

    /// 成绩管理方法
    // 写入成绩（不去重）
    async fn create_quiz_result(&self, result: NewQuizResult) -> Result<QuizResult>;
    // 列出成绩
    async fn list_quiz_results_with_pagination(
        &self,
        query: ResultListQuery,
    ) -> Result<PaginatedResponse<QuizResult>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
