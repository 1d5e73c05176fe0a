//! 成绩记录
//!
//! 两条提交路径（已存储测验 / 内联测验）共用的评分与写入流程。
//! 写入只做一次，不重试不去重；写入失败时仍把评分结果返回给学生。

use actix_web::HttpResponse;
use std::sync::Arc;
use tracing::{error, info};

use crate::errors::LmsError;
use crate::models::quizzes::entities::Question;
use crate::models::results::entities::{NewQuizResult, QuizResult};
use crate::models::results::responses::SubmissionOutcome;
use crate::models::{ApiResponse, ErrorCode};
use crate::scoring::{self, Grade};
use crate::services::error_response;
use crate::storage::Storage;
use crate::utils::validate::validate_student_id;

/// 写入结果
#[derive(Debug)]
pub enum RecordStatus {
    Saved(QuizResult),
    NotSaved(LmsError),
}

/// 一次待评分的提交
pub struct GradedSubmission<'a> {
    pub student_id: &'a str,
    pub quiz_id: Option<i64>,
    pub quiz_title: &'a str,
    pub questions: &'a [Question],
    pub answers: &'a [String],
}

/// 写入一条成绩
pub async fn record_result(
    storage: &Arc<dyn Storage>,
    student_id: &str,
    quiz_id: Option<i64>,
    quiz_title: &str,
    grade: &Grade,
) -> RecordStatus {
    let new_result = NewQuizResult {
        student_id: student_id.to_string(),
        quiz_id,
        quiz_title: quiz_title.to_string(),
        score: grade.score,
        total: grade.total,
        feedback_message: grade.feedback_message().to_string(),
    };

    match storage.create_quiz_result(new_result).await {
        Ok(result) => {
            info!(
                "Recorded result {} for student {} on '{}': {}/{}",
                result.id, result.student_id, result.quiz_title, result.score, result.total
            );
            RecordStatus::Saved(result)
        }
        Err(e) => {
            error!(
                "Failed to save result for student {} on '{}': {}",
                student_id, quiz_title, e
            );
            RecordStatus::NotSaved(e)
        }
    }
}

/// 校验、评分、写入，并生成响应
pub async fn grade_and_record(
    storage: &Arc<dyn Storage>,
    submission: GradedSubmission<'_>,
) -> HttpResponse {
    if let Err(msg) = validate_student_id(submission.student_id) {
        return HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::StudentIdInvalid, msg));
    }

    // 空测验、空作答、数量不一致均由 grade 拒绝
    let grade = match scoring::grade(submission.questions, submission.answers) {
        Ok(grade) => grade,
        Err(e) => return error_response(&e),
    };

    match record_result(
        storage,
        submission.student_id,
        submission.quiz_id,
        submission.quiz_title,
        &grade,
    )
    .await
    {
        RecordStatus::Saved(result) => HttpResponse::Ok().json(ApiResponse::success(
            SubmissionOutcome::new(&grade, Some(result.id)),
            "评分完成",
        )),
        RecordStatus::NotSaved(_) => {
            HttpResponse::InternalServerError().json(ApiResponse::error(
                ErrorCode::ResultNotSaved,
                SubmissionOutcome::new(&grade, None),
                "已评分，但成绩保存失败，请稍后重新提交",
            ))
        }
    }
}
