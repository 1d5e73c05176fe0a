use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuizService;
use crate::models::quizzes::responses::QuizView;
use crate::models::{ApiResponse, ErrorCode};

/// 获取测验（不含正确答案）
/// GET /api/v1/quizzes/{id}
pub async fn get_quiz(
    service: &QuizService,
    request: &HttpRequest,
    quiz_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_quiz_by_id(quiz_id).await {
        Ok(Some(quiz)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            QuizView::from(&quiz),
            "查询成功",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::QuizNotFound, "测验不存在"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取测验失败: {e}"),
            )),
        ),
    }
}
