pub mod create;
pub mod delete;
pub mod detail;
pub mod generate;
pub mod list;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::ai::TextGenerator;
use crate::models::quizzes::requests::{
    CreateQuizRequest, GenerateQuizRequest, QuizListQuery, SubmitAnswersRequest,
};
use crate::storage::Storage;

pub struct QuizService {
    storage: Option<Arc<dyn Storage>>,
    generator: Option<Arc<dyn TextGenerator>>,
}

impl QuizService {
    pub fn new_lazy() -> Self {
        Self {
            storage: None,
            generator: None,
        }
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

    pub(crate) fn get_text_generator(&self, request: &HttpRequest) -> Arc<dyn TextGenerator> {
        if let Some(generator) = &self.generator {
            generator.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn TextGenerator>>>()
                .expect("Text generator not found in app data")
                .get_ref()
                .clone()
        }
    }

    /// 创建测验
    pub async fn create_quiz(
        &self,
        request: &HttpRequest,
        req: CreateQuizRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_quiz(self, request, req).await
    }

    /// AI 生成测验
    pub async fn generate_quiz(
        &self,
        request: &HttpRequest,
        req: GenerateQuizRequest,
    ) -> ActixResult<HttpResponse> {
        generate::generate_quiz(self, request, req).await
    }

    /// 获取测验（学生视角，不含答案）
    pub async fn get_quiz(&self, request: &HttpRequest, quiz_id: i64) -> ActixResult<HttpResponse> {
        detail::get_quiz(self, request, quiz_id).await
    }

    /// 列出测验
    pub async fn list_quizzes(
        &self,
        request: &HttpRequest,
        query: QuizListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_quizzes(self, request, query).await
    }

    /// 删除测验
    pub async fn delete_quiz(
        &self,
        request: &HttpRequest,
        quiz_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_quiz(self, request, quiz_id).await
    }

    /// 提交答案
    pub async fn submit_answers(
        &self,
        request: &HttpRequest,
        quiz_id: i64,
        req: SubmitAnswersRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_answers(self, request, quiz_id, req).await
    }
}
