pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::AppError;
use crate::models::ErrorCode;
use crate::models::movies::requests::{CreateMovieRequest, MovieSearchQuery, UpdateMovieRequest};
use crate::storage::Storage;

pub use create::create_movie;
pub use delete::delete_movie;
pub use list::{list_movies, search_movies};
pub use update::update_movie;

pub struct MovieService {
    storage: Option<Arc<dyn Storage>>,
}

// 业务错误到电影错误码
fn movie_error_code(err: &AppError) -> Option<ErrorCode> {
    match err {
        AppError::NotFound(_) => Some(ErrorCode::MovieNotFound),
        AppError::Validation(_) => Some(ErrorCode::MovieInvalid),
        _ => None,
    }
}

impl MovieService {
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

    // 获取电影列表
    pub async fn list_movies(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::handle_list_movies(self, request).await
    }

    // 按名称搜索电影
    pub async fn search_movies(
        &self,
        query: MovieSearchQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::handle_search_movies(self, query, request).await
    }

    // 创建电影
    pub async fn create_movie(
        &self,
        movie_data: CreateMovieRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::handle_create_movie(self, movie_data, request).await
    }

    // 更新电影
    pub async fn update_movie(
        &self,
        movie_id: i64,
        update_data: UpdateMovieRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::handle_update_movie(self, movie_id, update_data, request).await
    }

    // 删除电影
    pub async fn delete_movie(
        &self,
        movie_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::handle_delete_movie(self, movie_id, request).await
    }
}
