use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "system.ts")]
pub struct HealthResponse {
    pub system_name: String,   // 系统名称
    pub version: String,       // 程序版本
    pub environment: String,   // 运行环境
    pub uptime_seconds: i64,   // 运行时长
    pub ai_enabled: bool,      // 是否启用 AI 出题
}
