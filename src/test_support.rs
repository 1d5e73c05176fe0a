//! 测试辅助：内存数据库与失败存储

use async_trait::async_trait;

use crate::config::DatabaseConfig;
use crate::errors::{LmsError, Result};
use crate::models::PaginatedResponse;
use crate::models::quizzes::{
    entities::{NewQuiz, Quiz},
    requests::QuizListQuery,
    responses::QuizSummary,
};
use crate::models::results::{
    entities::{NewQuizResult, QuizResult},
    requests::ResultListQuery,
};
use crate::storage::Storage;
use crate::storage::sea_orm_storage::SeaOrmStorage;

/// 单连接内存数据库，保证所有查询落在同一个库上
pub(crate) async fn memory_storage() -> SeaOrmStorage {
    SeaOrmStorage::connect(&DatabaseConfig {
        url: ":memory:".to_string(),
        pool_size: 1,
        timeout: 5,
    })
    .await
    .expect("in-memory storage")
}

/// 所有操作都失败的存储，用于验证写入失败路径
pub(crate) struct FailingStorage;

fn unavailable<T>() -> Result<T> {
    Err(LmsError::database_operation("storage unavailable"))
}

#[async_trait]
impl Storage for FailingStorage {
    async fn create_quiz(&self, _quiz: NewQuiz) -> Result<Quiz> {
        unavailable()
    }

    async fn get_quiz_by_id(&self, _quiz_id: i64) -> Result<Option<Quiz>> {
        unavailable()
    }

    async fn list_quizzes_with_pagination(
        &self,
        _query: QuizListQuery,
    ) -> Result<PaginatedResponse<QuizSummary>> {
        unavailable()
    }

    async fn delete_quiz(&self, _quiz_id: i64) -> Result<bool> {
        unavailable()
    }

    async fn create_quiz_result(&self, _result: NewQuizResult) -> Result<QuizResult> {
        unavailable()
    }

    async fn list_quiz_results_with_pagination(
        &self,
        _query: ResultListQuery,
    ) -> Result<PaginatedResponse<QuizResult>> {
        unavailable()
    }
}
