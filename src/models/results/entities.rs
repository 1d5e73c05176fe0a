use chrono::{DateTime, Utc};
use serde::Serialize;
use ts_rs::TS;

/// 已保存的测验成绩，写入后不再修改
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "result.ts")]
pub struct QuizResult {
    pub id: i64,
    pub student_id: String,
    pub quiz_id: Option<i64>,
    pub quiz_title: String,
    pub score: u32,
    pub total: u32,
    pub feedback_message: String,
    pub created_at: DateTime<Utc>,
}

/// 待写入的成绩
#[derive(Debug, Clone)]
pub struct NewQuizResult {
    pub student_id: String,
    pub quiz_id: Option<i64>, // 内联测验为空，标题仅作展示
    pub quiz_title: String,
    pub score: u32,
    pub total: u32,
    pub feedback_message: String,
}
