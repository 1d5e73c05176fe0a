use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 测验来源
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "quiz.ts")]
pub enum QuizSource {
    Authored,  // 教师编写
    Generated, // AI 生成
}

impl QuizSource {
    pub const AUTHORED: &'static str = "authored";
    pub const GENERATED: &'static str = "generated";
}

impl std::fmt::Display for QuizSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizSource::Authored => write!(f, "{}", QuizSource::AUTHORED),
            QuizSource::Generated => write!(f, "{}", QuizSource::GENERATED),
        }
    }
}

impl std::str::FromStr for QuizSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            QuizSource::AUTHORED => Ok(QuizSource::Authored),
            QuizSource::GENERATED => Ok(QuizSource::Generated),
            _ => Err(format!("Invalid quiz source: {s}")),
        }
    }
}

/// 题目
///
/// 正确答案按取值指定，而非选项下标。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "quiz.ts")]
pub struct Question {
    #[serde(alias = "prompt")]
    pub question: String,
    pub options: Vec<String>,
    #[serde(alias = "correctAnswer")]
    pub correct_answer: String,
}

/// 测验
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "quiz.ts")]
pub struct Quiz {
    pub id: i64,
    pub title: String,
    pub topic: Option<String>,
    pub source: QuizSource,
    pub questions: Vec<Question>,
    pub created_at: DateTime<Utc>,
}

/// 待写入的测验
#[derive(Debug, Clone)]
pub struct NewQuiz {
    pub title: String,
    pub topic: Option<String>,
    pub source: QuizSource,
    pub questions: Vec<Question>,
}
