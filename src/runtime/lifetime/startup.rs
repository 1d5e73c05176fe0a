use crate::ai::{TextGenerator, create_text_generator};
use crate::config::AppConfig;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub text_generator: Arc<dyn TextGenerator>,
}

/// 启动时检查测验相关配置，避免运行中才发现默认值越界
fn check_quiz_limits(config: &AppConfig) {
    let quiz = &config.quiz;
    if quiz.default_question_count == 0 || quiz.default_question_count > quiz.max_questions {
        warn!(
            "quiz.default_question_count ({}) is outside 1..={}, generation requests without an explicit count will be rejected",
            quiz.default_question_count, quiz.max_questions
        );
    }
    debug!(
        "Quiz limits: default {} questions, max {}, option length {}",
        quiz.default_question_count, quiz.max_questions, quiz.max_option_length
    );
}

/// 准备服务器启动的上下文
/// 包括存储与 AI 文本生成器
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let config = AppConfig::get();

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    let text_generator =
        create_text_generator(&config.ai).expect("Failed to create AI text generator");
    if config.ai_enabled() {
        warn!(
            "AI text generator initialized (provider: {}, model: {})",
            text_generator.provider(),
            config.ai.model
        );
    } else {
        warn!("AI quiz generation is disabled, authored quizzes only");
    }

    check_quiz_limits(config);

    StartupContext {
        storage,
        text_generator,
    }
}
