use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 分页响应信息
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "pagination.ts")]
pub struct PaginationInfo {
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
}

// 分页列表响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "pagination.ts")]
pub struct PaginatedResponse<T: TS> {
    pub items: Vec<T>,
    pub pagination: PaginationInfo,
}

/// 规范化分页参数：page 从 1 开始，size 默认 20，限制在 1..=100
pub fn normalize_page(page: Option<i64>, size: Option<i64>) -> (u64, u64) {
    (
        page.unwrap_or(1).max(1) as u64,
        size.unwrap_or(20).clamp(1, 100) as u64,
    )
}
