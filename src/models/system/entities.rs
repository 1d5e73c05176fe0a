use chrono::{DateTime, Utc};

/// 程序启动时间，用于计算运行时长
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: DateTime<Utc>,
}
