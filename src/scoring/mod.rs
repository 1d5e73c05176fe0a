//! 测验评分
//!
//! - `score`: 按位置逐题比较，精确字符串相等才计分
//! - `feedback`: 按百分比分档
//! - `grade`: 请求路径统一入口，先校验再评分

pub mod feedback;

pub use feedback::{FeedbackTier, feedback, percentage};

use serde::Serialize;
use tracing::debug;
use ts_rs::TS;

use crate::errors::{LmsError, Result};
use crate::models::quizzes::entities::Question;

/// 一次作答的评分结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "quiz.ts")]
pub struct Grade {
    pub score: u32,
    pub total: u32,
    pub percentage: u32,
    pub tier: FeedbackTier,
}

impl Grade {
    pub fn feedback_message(&self) -> &'static str {
        self.tier.message()
    }
}

/// 计算得分
///
/// 只比较两个序列重叠的前缀：作答较短时未作答部分不计分，较长时多余答案被忽略。
/// 不做大小写折叠或去空白。
pub fn score(questions: &[Question], submission: &[String]) -> u32 {
    questions
        .iter()
        .zip(submission)
        .filter(|(question, answer)| question.correct_answer == **answer)
        .count() as u32
}

/// 校验作答并评分
///
/// - 题目为空：`InvalidArgument`（分母为零）
/// - 作答为空：`EmptySubmission`
/// - 作答数量与题目数量不一致：`AnswerCountMismatch`
pub fn grade(questions: &[Question], submission: &[String]) -> Result<Grade> {
    if questions.is_empty() {
        return Err(LmsError::invalid_argument(
            "quiz has no questions, cannot grade",
        ));
    }
    if submission.is_empty() {
        return Err(LmsError::empty_submission(
            "submitted answers must not be empty",
        ));
    }
    if submission.len() != questions.len() {
        return Err(LmsError::answer_count_mismatch(format!(
            "expected {} answers, got {}",
            questions.len(),
            submission.len()
        )));
    }

    let total = questions.len() as u32;
    let score = score(questions, submission);
    let tier = feedback(score, total)?;

    debug!("Graded submission: {}/{} ({:?})", score, total, tier);

    Ok(Grade {
        score,
        total,
        percentage: percentage(score, total),
        tier,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz(correct: &[&str]) -> Vec<Question> {
        correct
            .iter()
            .enumerate()
            .map(|(i, answer)| Question {
                question: format!("Question {}", i + 1),
                options: vec![answer.to_string(), "X".to_string()],
                correct_answer: answer.to_string(),
            })
            .collect()
    }

    fn answers(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_all_correct_is_excellent() {
        let questions = quiz(&["A", "B", "C", "D"]);
        let grade = grade(&questions, &answers(&["A", "B", "C", "D"])).unwrap();
        assert_eq!(grade.score, 4);
        assert_eq!(grade.total, 4);
        assert_eq!(grade.tier, FeedbackTier::Excellent);
        assert_eq!(grade.percentage, 100);
    }

    #[test]
    fn test_half_correct_lands_in_good_tier() {
        let questions = quiz(&["A", "B", "C", "D"]);
        let grade = grade(&questions, &answers(&["A", "X", "C", "X"])).unwrap();
        assert_eq!(grade.score, 2);
        assert_eq!(grade.percentage, 50);
        assert_eq!(grade.tier, FeedbackTier::Good);
        assert_eq!(grade.feedback_message(), "Good performance. Keep practicing!");
    }

    #[test]
    fn test_empty_submission_scores_zero() {
        let questions = quiz(&["A"]);
        assert_eq!(score(&questions, &[]), 0);
        assert_eq!(feedback(0, 1).unwrap(), FeedbackTier::TryAgain);
    }

    #[test]
    fn test_extra_answers_are_ignored_by_score() {
        let questions = quiz(&["A", "B", "C", "D", "E"]);
        let submitted = answers(&["A", "B", "X", "D", "E", "F", "G"]);
        assert_eq!(score(&questions, &submitted), 4);
    }

    #[test]
    fn test_short_submission_scores_prefix() {
        let questions = quiz(&["A", "B", "C"]);
        assert_eq!(score(&questions, &answers(&["A", "B"])), 2);
    }

    #[test]
    fn test_comparison_is_exact() {
        let questions = quiz(&["Paris", "كتاب"]);
        assert_eq!(score(&questions, &answers(&["paris", "كتاب "])), 0);
        assert_eq!(score(&questions, &answers(&["Paris", "كتاب"])), 2);
    }

    #[test]
    fn test_score_is_bounded_and_deterministic() {
        let questions = quiz(&["A", "B", "C", "D", "E", "F"]);
        let submissions = [
            answers(&["A", "B", "C", "D", "E", "F"]),
            answers(&["X", "X", "X", "X", "X", "X"]),
            answers(&["A", "X", "C", "X", "E", "X"]),
            answers(&["F", "E", "D", "C", "B", "A"]),
        ];
        for submitted in &submissions {
            let first = score(&questions, submitted);
            assert!(first as usize <= questions.len());
            assert_eq!(first, score(&questions, submitted));
        }
    }

    #[test]
    fn test_full_score_iff_every_pair_matches() {
        let questions = quiz(&["A", "B", "C"]);
        assert_eq!(score(&questions, &answers(&["A", "B", "C"])), 3);
        assert!(score(&questions, &answers(&["A", "B", "X"])) < 3);
    }

    #[test]
    fn test_grade_rejects_length_mismatch() {
        let questions = quiz(&["A", "B", "C", "D", "E"]);
        let err = grade(&questions, &answers(&["A", "B", "C", "D", "E", "F", "G"])).unwrap_err();
        assert!(matches!(err, LmsError::AnswerCountMismatch(_)));
        assert!(err.message().contains("expected 5 answers, got 7"));
    }

    #[test]
    fn test_grade_rejects_empty_submission() {
        let questions = quiz(&["A"]);
        let err = grade(&questions, &[]).unwrap_err();
        assert!(matches!(err, LmsError::EmptySubmission(_)));
    }

    #[test]
    fn test_grade_rejects_empty_quiz() {
        let err = grade(&[], &answers(&["A"])).unwrap_err();
        assert_eq!(err.error_type(), "Invalid Argument");
    }
}
