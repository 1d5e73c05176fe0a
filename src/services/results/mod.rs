pub mod list;
pub mod record;
pub mod score;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::results::requests::{ResultListQuery, ScoreSubmissionRequest};
use crate::storage::Storage;

pub struct ResultService {
    storage: Option<Arc<dyn Storage>>,
}

impl ResultService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    /// 对内联测验评分并记录成绩
    pub async fn score_submission(
        &self,
        request: &HttpRequest,
        req: ScoreSubmissionRequest,
    ) -> ActixResult<HttpResponse> {
        score::score_submission(self, request, req).await
    }

    /// 列出成绩
    pub async fn list_results(
        &self,
        request: &HttpRequest,
        query: ResultListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_results(self, request, query).await
    }
}
