//! 成绩存储操作

use super::SeaOrmStorage;
use crate::entity::quiz_results::{ActiveModel, Column, Entity as QuizResults};
use crate::errors::{LmsError, Result};
use crate::models::{
    PaginatedResponse, PaginationInfo, normalize_page,
    results::{
        entities::{NewQuizResult, QuizResult},
        requests::ResultListQuery,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 写入成绩
    pub async fn create_quiz_result_impl(&self, result: NewQuizResult) -> Result<QuizResult> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(result.student_id),
            quiz_id: Set(result.quiz_id),
            quiz_title: Set(result.quiz_title),
            score: Set(result.score as i32),
            total: Set(result.total as i32),
            feedback_message: Set(result.feedback_message),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("保存成绩失败: {e}")))?;

        Ok(result.into_quiz_result())
    }

    /// 列出成绩（分页）
    pub async fn list_quiz_results_with_pagination_impl(
        &self,
        query: ResultListQuery,
    ) -> Result<PaginatedResponse<QuizResult>> {
        let (page, size) = normalize_page(query.page, query.size);

        let mut select = QuizResults::find();

        // 学生筛选
        if let Some(ref student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id.as_str()));
        }

        // 测验筛选
        if let Some(quiz_id) = query.quiz_id {
            select = select.filter(Column::QuizId.eq(quiz_id));
        }

        // 排序
        select = select.order_by_desc(Column::CreatedAt).order_by_desc(Column::Id);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| LmsError::database_operation(format!("查询成绩总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| LmsError::database_operation(format!("查询成绩页数失败: {e}")))?;

        let results = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询成绩列表失败: {e}")))?;

        Ok(PaginatedResponse {
            items: results.into_iter().map(|m| m.into_quiz_result()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }
}
