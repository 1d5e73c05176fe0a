use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::config::AppConfig;
use crate::middlewares::RateLimit;
use crate::models::results::requests::{ResultListQuery, ScoreSubmissionRequest};
use crate::services::ResultService;

// 懒加载的全局 ResultService 实例
static RESULT_SERVICE: Lazy<ResultService> = Lazy::new(ResultService::new_lazy);

// 列出成绩
pub async fn list_results(
    req: HttpRequest,
    query: web::Query<ResultListQuery>,
) -> ActixResult<HttpResponse> {
    RESULT_SERVICE.list_results(&req, query.into_inner()).await
}

// 内联测验评分
pub async fn score_submission(
    req: HttpRequest,
    body: web::Json<ScoreSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    RESULT_SERVICE
        .score_submission(&req, body.into_inner())
        .await
}

// 配置路由
pub fn configure_results_routes(cfg: &mut web::ServiceConfig) {
    let limits = &AppConfig::get().rate_limit;

    cfg.service(
        web::scope("/api/v1/results").service(
            web::resource("")
                .route(web::get().to(list_results))
                .route(
                    web::post()
                        .to(score_submission)
                        .wrap(RateLimit::inline_submission(limits.submission_per_minute)),
                ),
        ),
    );
}
