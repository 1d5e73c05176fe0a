use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ResultService;
use super::record::{GradedSubmission, grade_and_record};
use crate::models::results::requests::ScoreSubmissionRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_quiz_title;

/// 内联测验评分
/// POST /api/v1/results
///
/// 测验标题只作为展示标签保存，不关联测验表。
pub async fn score_submission(
    service: &ResultService,
    request: &HttpRequest,
    req: ScoreSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(msg) = validate_quiz_title(&req.quiz_title) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    let quiz_title = req.quiz_title.trim();
    let questions = req.quiz.into_questions();
    Ok(grade_and_record(
        &storage,
        GradedSubmission {
            student_id: req.student_id.trim(),
            quiz_id: None,
            quiz_title,
            questions: &questions,
            answers: &req.submitted_answers,
        },
    )
    .await)
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test, web};
    use serde_json::{Value, json};
    use std::sync::Arc;

    use crate::routes::configure_results_routes;
    use crate::storage::Storage;
    use crate::test_support::{FailingStorage, memory_storage};

    fn payload(answers: Value) -> Value {
        json!({
            "quiz": {
                "questions": [
                    {"question": "1", "options": ["A", "Z"], "correctAnswer": "A"},
                    {"question": "2", "options": ["B", "Z"], "correctAnswer": "B"},
                    {"question": "3", "options": ["C", "Z"], "correctAnswer": "C"},
                    {"question": "4", "options": ["D", "Z"], "correctAnswer": "D"}
                ]
            },
            "submittedAnswers": answers,
            "studentId": "student-7",
            "quizTitle": "الدرس الأول"
        })
    }

    #[actix_web::test]
    async fn test_inline_submission_is_scored_and_saved() {
        let storage: Arc<dyn Storage> = Arc::new(memory_storage().await);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage.clone()))
                .configure(configure_results_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/results")
            .set_json(payload(json!(["A", "B", "C", "D"])))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["score"], 4);
        assert_eq!(body["data"]["total"], 4);
        assert_eq!(body["data"]["feedback_tier"], "excellent");
        assert_eq!(body["data"]["saved"], true);

        let req = test::TestRequest::get()
            .uri("/api/v1/results?student_id=student-7")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["pagination"]["total"], 1);
        assert_eq!(body["data"]["items"][0]["quiz_title"], "الدرس الأول");
        assert!(body["data"]["items"][0]["quiz_id"].is_null());
    }

    #[actix_web::test]
    async fn test_half_correct_gets_good_performance() {
        let storage: Arc<dyn Storage> = Arc::new(memory_storage().await);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .configure(configure_results_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/results")
            .set_json(payload(json!(["A", "X", "C", "X"])))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["score"], 2);
        assert_eq!(body["data"]["percentage"], 50);
        assert_eq!(body["data"]["feedback_message"], "Good performance. Keep practicing!");
    }

    #[actix_web::test]
    async fn test_answer_key_only_quiz_is_scored() {
        let storage: Arc<dyn Storage> = Arc::new(memory_storage().await);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .configure(configure_results_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/results")
            .set_json(json!({
                "quiz": {"questions": [{"correctAnswer": "A"}, {"correctAnswer": "B"}]},
                "submittedAnswers": ["A", "B"],
                "studentId": "s1",
                "quizTitle": "t"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["score"], 2);
        assert_eq!(body["data"]["feedback_tier"], "excellent");
    }

    #[actix_web::test]
    async fn test_invalid_inputs_are_rejected_before_scoring() {
        let storage: Arc<dyn Storage> = Arc::new(memory_storage().await);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .configure(configure_results_routes),
        )
        .await;

        // 空答案
        let req = test::TestRequest::post()
            .uri("/api/v1/results")
            .set_json(payload(json!([])))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        // 答案数量不一致
        let req = test::TestRequest::post()
            .uri("/api/v1/results")
            .set_json(payload(json!(["A", "B", "C", "D", "E"])))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], 3003);

        // 缺少学生 ID
        let mut missing_student = payload(json!(["A", "B", "C", "D"]));
        missing_student["studentId"] = json!("");
        let req = test::TestRequest::post()
            .uri("/api/v1/results")
            .set_json(missing_student)
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["code"], 3001);

        // 空测验
        let mut empty_quiz = payload(json!(["A"]));
        empty_quiz["quiz"]["questions"] = json!([]);
        let req = test::TestRequest::post()
            .uri("/api/v1/results")
            .set_json(empty_quiz)
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["code"], 3000);
    }

    #[actix_web::test]
    async fn test_persistence_failure_returns_graded_but_not_saved() {
        let storage: Arc<dyn Storage> = Arc::new(FailingStorage);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .configure(configure_results_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/results")
            .set_json(payload(json!(["A", "B", "C", "X"])))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], 3004);
        assert_eq!(body["data"]["score"], 3);
        assert_eq!(body["data"]["saved"], false);
        assert!(body["data"]["result_id"].is_null());
    }
}
