use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::QuizService;
use crate::config::AppConfig;
use crate::models::quizzes::entities::{NewQuiz, QuizSource};
use crate::models::quizzes::requests::CreateQuizRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_quiz_definition;

/// 创建测验
/// POST /api/v1/quizzes
pub async fn create_quiz(
    service: &QuizService,
    request: &HttpRequest,
    req: CreateQuizRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let limits = &AppConfig::get().quiz;

    if let Err(msg) = validate_quiz_definition(&req.title, &req.questions, limits) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::QuizInvalid, msg)));
    }

    let new_quiz = NewQuiz {
        title: req.title.trim().to_string(),
        topic: req
            .topic
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty()),
        source: QuizSource::Authored,
        questions: req.questions,
    };

    match storage.create_quiz(new_quiz).await {
        Ok(quiz) => {
            info!("Created quiz {} '{}'", quiz.id, quiz.title);
            Ok(HttpResponse::Created().json(ApiResponse::success(quiz, "测验创建成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::QuizCreationFailed,
                format!("测验创建失败: {e}"),
            )),
        ),
    }
}
