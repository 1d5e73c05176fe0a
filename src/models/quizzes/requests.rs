use serde::Deserialize;
use ts_rs::TS;

use super::entities::Question;

/// 创建测验请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "quiz.ts")]
pub struct CreateQuizRequest {
    pub title: String,
    pub topic: Option<String>,
    pub questions: Vec<Question>,
}

/// AI 生成测验请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "quiz.ts")]
pub struct GenerateQuizRequest {
    pub topic: String,
    #[serde(alias = "questionCount")]
    pub question_count: Option<usize>,
    pub language: Option<String>, // 默认使用配置中的语言
}

/// 学生提交答案请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "quiz.ts")]
pub struct SubmitAnswersRequest {
    #[serde(alias = "studentId")]
    pub student_id: String,
    #[serde(alias = "submittedAnswers")]
    pub answers: Vec<String>,
}

/// 测验列表查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "quiz.ts")]
pub struct QuizListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
}
