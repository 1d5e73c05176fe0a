use actix_cors::Cors;
use actix_web::middleware::{Compress, DefaultHeaders};
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use human_panic::setup_panic;
use std::time::Duration;
use tracing::{debug, warn};
use tracing_appender::non_blocking::WorkerGuard;

use rust_lms_quiz::config::AppConfig;
use rust_lms_quiz::models::AppStartTime;
use rust_lms_quiz::routes;
use rust_lms_quiz::runtime::lifetime;
use rust_lms_quiz::utils::{json_error_handler, path_error_handler, query_error_handler};

/// 初始化日志，开发环境输出文件与行号，其余环境输出 JSON
fn init_tracing(config: &AppConfig) -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.app.log_level))
        .with_writer(writer)
        .event_format(
            tracing_subscriber::fmt::format()
                .with_level(true)
                .with_ansi(true),
        );

    if config.is_development() {
        builder.with_file(true).with_line_number(true).init();
    } else {
        builder.json().init();
    }

    guard
}

/// 未配置来源时允许任意来源
fn build_cors(config: &AppConfig) -> Cors {
    let cors = if config.cors.allowed_origins.is_empty() {
        Cors::default().allow_any_origin()
    } else {
        config
            .cors
            .allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors.allow_any_method()
        .allow_any_header()
        .max_age(config.cors.max_age)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    setup_panic!();

    let app_start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    AppConfig::init().expect("Failed to initialize configuration");
    let config = AppConfig::get();
    let _guard = init_tracing(config);

    warn!(
        "Starting {} v{} ({} environment)",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.app.environment
    );

    let startup = lifetime::startup::prepare_server_startup().await;
    let storage = startup.storage;
    let text_generator = startup.text_generator;

    debug!(
        "Pre-startup processing completed in {} ms",
        chrono::Utc::now()
            .signed_duration_since(app_start_time.start_datetime)
            .num_milliseconds()
    );
    warn!("Using {} worker threads", config.server.workers);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(build_cors(config))
            .wrap(Compress::default())
            .wrap(
                DefaultHeaders::new()
                    .add(("Cache-Control", "no-cache, no-store, must-revalidate")),
            )
            // 请求参数错误统一返回 400 信封
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .app_data(web::PayloadConfig::new(config.server.limits.max_payload_size))
            .app_data(web::Data::new(storage.clone()))
            .app_data(web::Data::new(text_generator.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .configure(routes::configure_quiz_routes)
            .configure(routes::configure_results_routes)
            .configure(routes::configure_system_routes)
    })
    .keep_alive(Duration::from_secs(config.server.timeouts.keep_alive))
    .client_request_timeout(Duration::from_millis(config.server.timeouts.client_request))
    .client_disconnect_timeout(Duration::from_millis(
        config.server.timeouts.client_disconnect,
    ))
    .workers(config.server.workers);

    #[cfg(unix)]
    let server = match config.unix_socket_path() {
        Some(socket_path) => {
            warn!("Starting server on Unix socket: {}", socket_path);
            if std::path::Path::new(socket_path).exists() {
                std::fs::remove_file(socket_path)?;
            }
            server.bind_uds(socket_path)?
        }
        None => {
            warn!("Starting server at http://{}", config.server_bind_address());
            server.bind(config.server_bind_address())?
        }
    };

    #[cfg(not(unix))]
    let server = {
        warn!("Starting server at http://{}", config.server_bind_address());
        server.bind(config.server_bind_address())?
    };

    tokio::select! {
        res = server.run() => res?,
        _ = lifetime::shutdown::listen_for_shutdown() => {
            warn!("Graceful shutdown: all tasks completed");
        }
    }

    Ok(())
}
