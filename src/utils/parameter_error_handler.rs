//! 请求参数解析错误处理
//!
//! 将 Actix 提取器的解析错误统一转换为 400 + ApiResponse。

use actix_web::error::{InternalError, JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse};
use tracing::debug;

use crate::models::{ApiResponse, ErrorCode};

fn bad_request<E>(err: E, message: String) -> actix_web::Error
where
    E: std::fmt::Display + std::fmt::Debug + 'static,
{
    let response =
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, message));
    InternalError::from_response(err, response).into()
}

pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!("JSON payload error on {}: {}", req.path(), err);
    let message = format!("请求体格式错误: {err}");
    bad_request(err, message)
}

pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!("Query string error on {}: {}", req.path(), err);
    let message = format!("查询参数错误: {err}");
    bad_request(err, message)
}

pub fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    debug!("Path parameter error on {}: {}", req.path(), err);
    let message = format!("路径参数错误: {err}");
    bad_request(err, message)
}
