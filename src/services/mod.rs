pub mod quizzes;
pub mod results;
pub mod system;

pub use quizzes::QuizService;
pub use results::ResultService;
pub use system::SystemService;

use actix_web::HttpResponse;

use crate::errors::LmsError;
use crate::models::{ApiResponse, ErrorCode};

/// 将业务错误映射为 HTTP 响应
pub(crate) fn error_response(err: &LmsError) -> HttpResponse {
    match err {
        LmsError::Validation(msg) => {
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg))
        }
        LmsError::InvalidArgument(msg) => HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidArgument, msg)),
        LmsError::EmptySubmission(msg) => HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::AnswersEmpty, msg)),
        LmsError::AnswerCountMismatch(msg) => HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::AnswerCountMismatch, msg)),
        LmsError::NotFound(msg) => {
            HttpResponse::NotFound().json(ApiResponse::error_empty(ErrorCode::NotFound, msg))
        }
        LmsError::AiGeneration(msg) | LmsError::QuizFormat(msg) => HttpResponse::BadGateway()
            .json(ApiResponse::error_empty(
                ErrorCode::AiGenerationFailed,
                format!("AI 出题失败: {msg}"),
            )),
        _ => HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::InternalServerError,
            err.format_simple(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{body::to_bytes, http::StatusCode};
    use serde_json::Value;

    async fn render(err: LmsError) -> (StatusCode, Value) {
        let resp = error_response(&err);
        let status = resp.status();
        let body = to_bytes(resp.into_body()).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[actix_web::test]
    async fn test_grading_errors_map_to_distinct_codes() {
        let (status, body) = render(LmsError::answer_count_mismatch("expected 4 answers, got 5")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 3003);

        let (status, body) = render(LmsError::empty_submission("empty")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 3002);

        let (_, body) = render(LmsError::invalid_argument("no questions")).await;
        assert_eq!(body["code"], 3000);
    }

    #[actix_web::test]
    async fn test_ai_and_storage_errors() {
        let (status, body) = render(LmsError::quiz_format("not json")).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["code"], 4000);

        let (status, body) = render(LmsError::database_operation("locked")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], 1500);
    }
}
