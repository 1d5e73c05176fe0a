//! 反馈分档
//!
//! 百分比 = 100 * score / total，按从高到低顺序判定，下界包含：
//!
//! | 百分比      | 档位        |
//! |-------------|-------------|
//! | = 100       | `Excellent` |
//! | [80, 100)   | `GreatJob`  |
//! | [50, 80)    | `Good`      |
//! | [0, 50)     | `TryAgain`  |
//!
//! 判定使用整数交叉相乘，不经过浮点数，边界值不会因舍入漂移。

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{LmsError, Result};

/// 反馈档位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "quiz.ts")]
pub enum FeedbackTier {
    Excellent, // 全部正确
    GreatJob,  // 大部分正确
    Good,      // 表现良好
    TryAgain,  // 需要重做
}

impl FeedbackTier {
    /// 面向学生的反馈文案
    pub fn message(&self) -> &'static str {
        match self {
            FeedbackTier::Excellent => "Excellent! You answered every question correctly.",
            FeedbackTier::GreatJob => "Great job! You got most of the answers right.",
            FeedbackTier::Good => "Good performance. Keep practicing!",
            FeedbackTier::TryAgain => "Try again. Review the lesson and retake the quiz.",
        }
    }

    /// 档位下界（百分比，包含）
    pub fn lower_bound(&self) -> u64 {
        match self {
            FeedbackTier::Excellent => 100,
            FeedbackTier::GreatJob => 80,
            FeedbackTier::Good => 50,
            FeedbackTier::TryAgain => 0,
        }
    }
}

impl std::fmt::Display for FeedbackTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// 根据得分与总题数计算反馈档位
///
/// `total == 0` 或 `score > total` 时返回 `InvalidArgument`。
pub fn feedback(score: u32, total: u32) -> Result<FeedbackTier> {
    if total == 0 {
        return Err(LmsError::invalid_argument(
            "total must be greater than zero to compute feedback",
        ));
    }
    if score > total {
        return Err(LmsError::invalid_argument(format!(
            "score {score} exceeds total {total}"
        )));
    }

    let scaled = u64::from(score) * 100;
    let total = u64::from(total);

    let tier = [
        FeedbackTier::Excellent,
        FeedbackTier::GreatJob,
        FeedbackTier::Good,
    ]
    .into_iter()
    .find(|tier| scaled >= tier.lower_bound() * total)
    .unwrap_or(FeedbackTier::TryAgain);

    Ok(tier)
}

/// 百分比（向下取整），仅用于展示
pub fn percentage(score: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    ((u64::from(score) * 100) / u64::from(total)) as u32
}
