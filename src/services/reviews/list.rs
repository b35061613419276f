use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::Result;
use crate::models::{
    ApiResponse,
    reviews::{entities::Review, responses::ReviewListResponse},
};
use crate::storage::Storage;

use super::ReviewService;

/// 列出电影的影评，未知电影返回空列表
pub async fn list_reviews_for_movie(storage: &dyn Storage, movie_id: i64) -> Result<Vec<Review>> {
    storage.list_reviews_by_movie(movie_id).await
}

pub async fn handle_list_reviews(
    service: &ReviewService,
    movie_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match list_reviews_for_movie(storage.as_ref(), movie_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ReviewListResponse { items },
            "Reviews retrieved successfully",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e, None)),
    }
}
