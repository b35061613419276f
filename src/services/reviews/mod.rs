pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::AppError;
use crate::models::ErrorCode;
use crate::models::reviews::requests::{CreateReviewRequest, UpdateReviewRequest};
use crate::storage::Storage;

pub use create::create_review;
pub use delete::delete_review;
pub use list::list_reviews_for_movie;
pub use update::update_review;

pub struct ReviewService {
    storage: Option<Arc<dyn Storage>>,
}

// 业务错误到影评错误码
fn review_error_code(err: &AppError) -> Option<ErrorCode> {
    match err {
        AppError::NotFound(msg) if msg.starts_with("Movie") => Some(ErrorCode::MovieNotFound),
        AppError::NotFound(_) => Some(ErrorCode::ReviewNotFound),
        AppError::Validation(_) => Some(ErrorCode::ReviewInvalid),
        AppError::Authorization(_) => Some(ErrorCode::ReviewPermissionDenied),
        _ => None,
    }
}

impl ReviewService {
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

    // 获取电影的影评列表
    pub async fn list_reviews(
        &self,
        movie_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_reviews(self, movie_id, request).await
    }

    // 发表影评
    pub async fn create_review(
        &self,
        review_data: CreateReviewRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::handle_create_review(self, review_data, request).await
    }

    // 修改影评
    pub async fn update_review(
        &self,
        review_id: i64,
        update_data: UpdateReviewRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::handle_update_review(self, review_id, update_data, request).await
    }

    // 删除影评
    pub async fn delete_review(
        &self,
        review_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::handle_delete_review(self, review_id, request).await
    }
}
