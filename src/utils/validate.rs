use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::QuizConfig;
use crate::models::quizzes::entities::Question;

static STUDENT_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.:@-]+$").expect("Invalid student id regex"));

const MAX_TITLE_CHARS: usize = 200;

pub fn validate_student_id(student_id: &str) -> Result<(), &'static str> {
    if student_id.trim().is_empty() {
        return Err("Student id is required");
    }
    // 学生 ID 长度校验：x <= 64
    if student_id.len() > 64 {
        return Err("Student id must be at most 64 characters");
    }
    if !STUDENT_ID_RE.is_match(student_id) {
        return Err("Student id contains invalid characters");
    }
    Ok(())
}

pub fn validate_quiz_title(title: &str) -> Result<(), &'static str> {
    if title.trim().is_empty() {
        return Err("Quiz title is required");
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        return Err("Quiz title must be at most 200 characters");
    }
    Ok(())
}

/// 校验测验定义
///
/// - 标题非空且不超过 200 字符
/// - 题目数量在 1..=max_questions
/// - 每题题干非空，至少两个选项，选项不重复且长度受限
/// - 正确答案必须是选项之一
pub fn validate_quiz_definition(
    title: &str,
    questions: &[Question],
    limits: &QuizConfig,
) -> Result<(), String> {
    validate_quiz_title(title).map_err(str::to_string)?;

    if questions.is_empty() {
        return Err("Quiz must contain at least one question".to_string());
    }
    if questions.len() > limits.max_questions {
        return Err(format!(
            "Quiz must contain at most {} questions",
            limits.max_questions
        ));
    }

    for (index, question) in questions.iter().enumerate() {
        let number = index + 1;

        if question.question.trim().is_empty() {
            return Err(format!("Question {number} has empty text"));
        }
        if question.options.len() < 2 {
            return Err(format!("Question {number} must have at least two options"));
        }
        if let Some(option) = question
            .options
            .iter()
            .find(|o| o.trim().is_empty() || o.chars().count() > limits.max_option_length)
        {
            return Err(format!(
                "Question {number} has an empty or too long option: '{option}'"
            ));
        }

        let mut seen = std::collections::HashSet::new();
        if !question.options.iter().all(|o| seen.insert(o.as_str())) {
            return Err(format!("Question {number} has duplicate options"));
        }

        if !question.options.contains(&question.correct_answer) {
            return Err(format!(
                "Question {number} correct answer is not one of its options"
            ));
        }
    }

    Ok(())
}
