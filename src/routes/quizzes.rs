use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::config::AppConfig;
use crate::middlewares::RateLimit;
use crate::models::quizzes::requests::{
    CreateQuizRequest, GenerateQuizRequest, QuizListQuery, SubmitAnswersRequest,
};
use crate::services::QuizService;

// 懒加载的全局 QuizService 实例
static QUIZ_SERVICE: Lazy<QuizService> = Lazy::new(QuizService::new_lazy);

// 列出测验
pub async fn list_quizzes(
    req: HttpRequest,
    query: web::Query<QuizListQuery>,
) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE.list_quizzes(&req, query.into_inner()).await
}

// 创建测验
pub async fn create_quiz(
    req: HttpRequest,
    body: web::Json<CreateQuizRequest>,
) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE.create_quiz(&req, body.into_inner()).await
}

// AI 生成测验
pub async fn generate_quiz(
    req: HttpRequest,
    body: web::Json<GenerateQuizRequest>,
) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE.generate_quiz(&req, body.into_inner()).await
}

// 获取测验
pub async fn get_quiz(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE.get_quiz(&req, path.into_inner()).await
}

// 删除测验
pub async fn delete_quiz(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE.delete_quiz(&req, path.into_inner()).await
}

// 提交答案
pub async fn submit_answers(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<SubmitAnswersRequest>,
) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE
        .submit_answers(&req, path.into_inner(), body.into_inner())
        .await
}

// 配置路由
pub fn configure_quiz_routes(cfg: &mut web::ServiceConfig) {
    let limits = &AppConfig::get().rate_limit;

    cfg.service(
        web::scope("/api/v1/quizzes")
            .service(
                web::resource("")
                    .route(web::get().to(list_quizzes))
                    .route(web::post().to(create_quiz)),
            )
            // AI 出题成本高，单独限流
            .service(
                web::resource("/generate")
                    .wrap(RateLimit::quiz_generation(limits.generation_per_minute))
                    .route(web::post().to(generate_quiz)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_quiz))
                    .route(web::delete().to(delete_quiz)),
            )
            .service(
                web::resource("/{id}/submissions")
                    .wrap(RateLimit::submission(limits.submission_per_minute))
                    .route(web::post().to(submit_answers)),
            ),
    );
}
