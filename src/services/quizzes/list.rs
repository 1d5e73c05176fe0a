use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuizService;
use crate::models::quizzes::requests::QuizListQuery;
use crate::models::{ApiResponse, ErrorCode};

/// GET /api/v1/quizzes
pub async fn list_quizzes(
    service: &QuizService,
    request: &HttpRequest,
    query: QuizListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_quizzes_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询测验列表失败: {e}"),
            )),
        ),
    }
}
