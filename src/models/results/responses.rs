use serde::Serialize;
use ts_rs::TS;

use crate::scoring::{FeedbackTier, Grade};

/// 提交评分响应
///
/// `saved == false` 表示已评分但成绩未能保存。
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "result.ts")]
pub struct SubmissionOutcome {
    pub score: u32,
    pub total: u32,
    pub percentage: u32,
    pub feedback_tier: FeedbackTier,
    pub feedback_message: String,
    pub saved: bool,
    pub result_id: Option<i64>,
}

impl SubmissionOutcome {
    pub fn new(grade: &Grade, result_id: Option<i64>) -> Self {
        Self {
            score: grade.score,
            total: grade.total,
            percentage: grade.percentage,
            feedback_tier: grade.tier,
            feedback_message: grade.feedback_message().to_string(),
            saved: result_id.is_some(),
            result_id,
        }
    }
}
