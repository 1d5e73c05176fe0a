//! 测验存储操作

use super::SeaOrmStorage;
use crate::entity::quizzes::{ActiveModel, Column, Entity as Quizzes};
use crate::errors::{LmsError, Result};
use crate::models::{
    PaginatedResponse, PaginationInfo, normalize_page,
    quizzes::{
        entities::{NewQuiz, Quiz},
        requests::QuizListQuery,
        responses::QuizSummary,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建测验
    pub async fn create_quiz_impl(&self, quiz: NewQuiz) -> Result<Quiz> {
        let now = chrono::Utc::now().timestamp();
        let questions = serde_json::to_string(&quiz.questions)?;

        let model = ActiveModel {
            title: Set(quiz.title),
            topic: Set(quiz.topic),
            source: Set(quiz.source.to_string()),
            questions: Set(questions),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建测验失败: {e}")))?;

        result.into_quiz()
    }

    /// 通过 ID 获取测验
    pub async fn get_quiz_by_id_impl(&self, quiz_id: i64) -> Result<Option<Quiz>> {
        let result = Quizzes::find_by_id(quiz_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询测验失败: {e}")))?;

        result.map(|m| m.into_quiz()).transpose()
    }

    /// 列出测验（分页）
    pub async fn list_quizzes_with_pagination_impl(
        &self,
        query: QuizListQuery,
    ) -> Result<PaginatedResponse<QuizSummary>> {
        let (page, size) = normalize_page(query.page, query.size);

        let mut select = Quizzes::find();

        // 标题搜索
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::Title.contains(&escaped));
        }

        // 排序
        select = select.order_by_desc(Column::CreatedAt).order_by_desc(Column::Id);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| LmsError::database_operation(format!("查询测验总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| LmsError::database_operation(format!("查询测验页数失败: {e}")))?;

        let quizzes = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询测验列表失败: {e}")))?;

        let items = quizzes
            .into_iter()
            .map(|m| m.into_quiz().map(QuizSummary::from))
            .collect::<Result<Vec<_>>>()?;

        Ok(PaginatedResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 删除测验
    pub async fn delete_quiz_impl(&self, quiz_id: i64) -> Result<bool> {
        let result = Quizzes::delete_by_id(quiz_id)
            .exec(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("删除测验失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
