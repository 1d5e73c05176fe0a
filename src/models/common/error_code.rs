/// 业务错误码
///
/// 0 表示成功；1xxx 为通用错误；2xxx 为测验相关；3xxx 为成绩相关；4xxx 为 AI 相关。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 1000,
    NotFound = 1004,
    RateLimitExceeded = 1029,
    InternalServerError = 1500,

    QuizNotFound = 2000,
    QuizInvalid = 2001,
    QuizCreationFailed = 2002,
    QuizDeleteFailed = 2003,

    InvalidArgument = 3000,
    StudentIdInvalid = 3001,
    AnswersEmpty = 3002,
    AnswerCountMismatch = 3003,
    ResultNotSaved = 3004,

    AiGenerationFailed = 4000,
    AiNotConfigured = 4001,
}
