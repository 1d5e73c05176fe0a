//! 生成式 AI 能力
//!
//! `TextGenerator` 在启动时根据配置构造一次，通过 Actix app data 注入到处理器，
//! 出题逻辑只依赖该 trait，测试时可替换为脚本化实现。

pub mod gemini;
pub mod quiz_generator;

use std::sync::Arc;

use tracing::warn;

use crate::config::AiConfig;
use crate::errors::{LmsError, Result};

pub use gemini::GeminiGenerator;
pub use quiz_generator::{GeneratedQuiz, QuizGenerator};

#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// 根据提示词生成文本
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// 提供者名称，用于日志
    fn provider(&self) -> &'static str;

    /// 是否可用于出题
    fn is_enabled(&self) -> bool {
        true
    }
}

/// 未配置 AI 时使用，所有调用均失败
pub struct DisabledGenerator;

#[async_trait::async_trait]
impl TextGenerator for DisabledGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        Err(LmsError::ai_generation("AI generation is not configured"))
    }

    fn provider(&self) -> &'static str {
        "disabled"
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

/// 根据配置创建文本生成器
pub fn create_text_generator(config: &AiConfig) -> Result<Arc<dyn TextGenerator>> {
    match config.provider.as_str() {
        "gemini" if !config.api_key.is_empty() => Ok(Arc::new(GeminiGenerator::new(config)?)),
        "gemini" => {
            warn!("GEMINI_API_KEY is not set, AI quiz generation is disabled");
            Ok(Arc::new(DisabledGenerator))
        }
        "disabled" => Ok(Arc::new(DisabledGenerator)),
        other => Err(LmsError::validation(format!(
            "Unknown AI provider '{other}'. Supported: gemini, disabled"
        ))),
    }
}
