use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuizService;
use crate::models::quizzes::requests::SubmitAnswersRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::results::record::{GradedSubmission, grade_and_record};

/// 对已存储的测验提交答案
/// POST /api/v1/quizzes/{id}/submissions
pub async fn submit_answers(
    service: &QuizService,
    request: &HttpRequest,
    quiz_id: i64,
    req: SubmitAnswersRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let quiz = match storage.get_quiz_by_id(quiz_id).await {
        Ok(Some(quiz)) => quiz,
        Ok(None) => {
            return Ok(HttpResponse::NotFound()
                .json(ApiResponse::error_empty(ErrorCode::QuizNotFound, "测验不存在")));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("获取测验失败: {e}"),
                )),
            );
        }
    };

    let response = grade_and_record(
        &storage,
        GradedSubmission {
            student_id: req.student_id.trim(),
            quiz_id: Some(quiz.id),
            quiz_title: &quiz.title,
            questions: &quiz.questions,
            answers: &req.answers,
        },
    )
    .await;

    Ok(response)
}
