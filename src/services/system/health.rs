use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use chrono::Utc;
use std::sync::Arc;

use super::SystemService;
use crate::ai::TextGenerator;
use crate::models::{ApiResponse, AppStartTime, system::responses::HealthResponse};

/// GET /api/v1/system/health
pub async fn health(service: &SystemService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let config = service.get_config();

    let uptime_seconds = request
        .app_data::<web::Data<AppStartTime>>()
        .map(|start| (Utc::now() - start.start_datetime).num_seconds())
        .unwrap_or_default();

    // 以实际注入的生成器为准
    let ai_enabled = request
        .app_data::<web::Data<Arc<dyn TextGenerator>>>()
        .map(|generator| generator.is_enabled())
        .unwrap_or(false);

    let response = HealthResponse {
        system_name: config.app.system_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: config.app.environment.clone(),
        uptime_seconds,
        ai_enabled,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "服务运行正常")))
}
