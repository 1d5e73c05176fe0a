use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::QuizService;
use crate::models::{ApiResponse, ErrorCode};

/// 删除测验，已有成绩保留标题
/// DELETE /api/v1/quizzes/{id}
pub async fn delete_quiz(
    service: &QuizService,
    request: &HttpRequest,
    quiz_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_quiz(quiz_id).await {
        Ok(true) => {
            info!("Deleted quiz {}", quiz_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("测验删除成功")))
        }
        Ok(false) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::QuizNotFound, "测验不存在"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::QuizDeleteFailed,
                format!("测验删除失败: {e}"),
            )),
        ),
    }
}
