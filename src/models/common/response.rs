use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::ErrorCode;

/// 统一响应信封：`{code, message, data?, timestamp}`
///
/// 评分已完成但未保存时 `code` 为错误码，`data` 仍携带评分结果。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "api.ts")]
pub struct ApiResponse<T: TS> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub timestamp: DateTime<Utc>,
}

impl<T: TS> ApiResponse<T> {
    fn build(code: ErrorCode, data: Option<T>, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            data,
            timestamp: Utc::now(),
        }
    }

    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self::build(ErrorCode::Success, Some(data), message)
    }

    /// 带数据的错误响应
    pub fn error(code: ErrorCode, data: T, message: impl Into<String>) -> Self {
        Self::build(code, Some(data), message)
    }

    pub fn is_success(&self) -> bool {
        self.code == ErrorCode::Success as i32
    }
}

impl ApiResponse<()> {
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self::build(ErrorCode::Success, None, message)
    }

    pub fn error_empty(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::build(code, None, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_error_omits_data() {
        let resp = ApiResponse::error_empty(ErrorCode::QuizNotFound, "测验不存在");
        assert!(!resp.is_success());

        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["code"], 2000);
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_error_with_data_keeps_payload() {
        let resp = ApiResponse::error(ErrorCode::ResultNotSaved, 7u32, "not saved");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["code"], 3004);
        assert_eq!(json["data"], 7);
    }
}
