use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::QuizService;
use crate::ai::QuizGenerator;
use crate::config::AppConfig;
use crate::errors::LmsError;
use crate::models::quizzes::entities::{NewQuiz, QuizSource};
use crate::models::quizzes::requests::GenerateQuizRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;

/// AI 生成测验并保存
/// POST /api/v1/quizzes/generate
pub async fn generate_quiz(
    service: &QuizService,
    request: &HttpRequest,
    req: GenerateQuizRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let generator = service.get_text_generator(request);
    let config = AppConfig::get();

    if !generator.is_enabled() {
        return Ok(HttpResponse::ServiceUnavailable().json(ApiResponse::error_empty(
            ErrorCode::AiNotConfigured,
            "AI 出题未启用",
        )));
    }

    let question_count = req
        .question_count
        .unwrap_or(config.quiz.default_question_count);
    let language = req
        .language
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or(&config.ai.default_language);

    let generated = match QuizGenerator::new(generator.as_ref(), &config.quiz)
        .generate(&req.topic, question_count, language)
        .await
    {
        Ok(quiz) => quiz,
        Err(e @ LmsError::Validation(_)) => return Ok(error_response(&e)),
        Err(e) => {
            warn!("Quiz generation failed for topic '{}': {}", req.topic, e);
            return Ok(error_response(&e));
        }
    };

    let new_quiz = NewQuiz {
        title: generated.title,
        topic: Some(req.topic.trim().to_string()),
        source: QuizSource::Generated,
        questions: generated.questions,
    };

    match storage.create_quiz(new_quiz).await {
        Ok(quiz) => {
            info!(
                "Generated quiz {} '{}' with {} questions via {}",
                quiz.id,
                quiz.title,
                quiz.questions.len(),
                generator.provider()
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(quiz, "测验生成成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::QuizCreationFailed,
                format!("测验保存失败: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test, web};
    use serde_json::{Value, json};
    use std::sync::Arc;

    use crate::ai::{DisabledGenerator, TextGenerator};
    use crate::errors::{LmsError, Result};
    use crate::routes::configure_quiz_routes;
    use crate::storage::Storage;
    use crate::test_support::memory_storage;

    struct FixedGenerator(&'static str);

    #[async_trait::async_trait]
    impl TextGenerator for FixedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            if self.0.is_empty() {
                return Err(LmsError::ai_generation("upstream timeout"));
            }
            Ok(self.0.to_string())
        }

        fn provider(&self) -> &'static str {
            "fixed"
        }
    }

    const REPLY: &str = r#"{"title": "الضمائر", "questions": [
        {"question": "ضمير المتكلم المفرد؟", "options": ["أنا", "نحن"], "correct_answer": "أنا"},
        {"question": "ضمير الجمع المتكلم؟", "options": ["أنا", "نحن"], "correct_answer": "نحن"}
    ]}"#;

    macro_rules! quiz_app {
        ($generator:expr) => {{
            let storage: Arc<dyn Storage> = Arc::new(memory_storage().await);
            let generator: Arc<dyn TextGenerator> = Arc::new($generator);
            test::init_service(
                App::new()
                    .app_data(web::Data::new(storage))
                    .app_data(web::Data::new(generator))
                    .configure(configure_quiz_routes),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn test_generate_and_present_quiz() {
        let app = quiz_app!(FixedGenerator(REPLY));

        let req = test::TestRequest::post()
            .uri("/api/v1/quizzes/generate")
            .set_json(json!({"topic": "الضمائر", "question_count": 2}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["source"], "generated");
        assert_eq!(body["data"]["title"], "الضمائر");
        let quiz_id = body["data"]["id"].as_i64().unwrap();

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/quizzes/{quiz_id}"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["question_count"], 2);
        assert!(body["data"]["questions"][0].get("correct_answer").is_none());
    }

    #[actix_web::test]
    async fn test_generation_failure_maps_to_bad_gateway() {
        let app = quiz_app!(FixedGenerator(""));

        let req = test::TestRequest::post()
            .uri("/api/v1/quizzes/generate")
            .set_json(json!({"topic": "الضمائر", "question_count": 2}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }

    #[actix_web::test]
    async fn test_malformed_model_output_maps_to_bad_gateway() {
        let app = quiz_app!(FixedGenerator("I am not JSON"));

        let req = test::TestRequest::post()
            .uri("/api/v1/quizzes/generate")
            .set_json(json!({"topic": "الضمائر", "question_count": 2}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["code"], 4000);
    }

    #[actix_web::test]
    async fn test_disabled_generator_reports_not_configured() {
        let app = quiz_app!(DisabledGenerator);

        let req = test::TestRequest::post()
            .uri("/api/v1/quizzes/generate")
            .set_json(json!({"topic": "الضمائر"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
