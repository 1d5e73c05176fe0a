use serde::Deserialize;
use ts_rs::TS;

use crate::models::quizzes::entities::Question;

/// 内联测验的题目，评分只需要正确答案，题干和选项可省略
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "result.ts")]
pub struct InlineQuestion {
    #[serde(default, alias = "prompt")]
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(alias = "correctAnswer")]
    pub correct_answer: String,
}

impl From<InlineQuestion> for Question {
    fn from(q: InlineQuestion) -> Self {
        Question {
            question: q.question,
            options: q.options,
            correct_answer: q.correct_answer,
        }
    }
}

/// 请求中直接携带的测验定义
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "result.ts")]
pub struct InlineQuiz {
    pub questions: Vec<InlineQuestion>,
}

impl InlineQuiz {
    pub fn into_questions(self) -> Vec<Question> {
        self.questions.into_iter().map(Question::from).collect()
    }
}

/// 内联测验评分请求
///
/// 字段同时接受 snake_case 与前端使用的 camelCase。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "result.ts")]
pub struct ScoreSubmissionRequest {
    pub quiz: InlineQuiz,
    #[serde(alias = "submittedAnswers")]
    pub submitted_answers: Vec<String>,
    #[serde(alias = "studentId")]
    pub student_id: String,
    #[serde(alias = "quizTitle")]
    pub quiz_title: String,
}

/// 成绩列表查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "result.ts")]
pub struct ResultListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub student_id: Option<String>,
    pub quiz_id: Option<i64>,
}
