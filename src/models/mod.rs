pub mod common;
pub mod quizzes;
pub mod results;
pub mod system;

pub use common::{ApiResponse, ErrorCode, PaginatedResponse, PaginationInfo, normalize_page};
pub use system::entities::AppStartTime;
