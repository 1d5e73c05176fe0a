use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ResultService;
use crate::models::results::requests::ResultListQuery;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_results(
    service: &ResultService,
    request: &HttpRequest,
    query: ResultListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_quiz_results_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询成绩列表失败: {e}"),
            )),
        ),
    }
}
