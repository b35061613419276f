use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::{AppError, Result};
use crate::models::{
    ApiResponse,
    movies::{entities::Movie, requests::MovieSearchQuery, responses::MovieListResponse},
};
use crate::storage::Storage;

use super::{MovieService, movie_error_code};

pub async fn list_movies(storage: &dyn Storage) -> Result<Vec<Movie>> {
    storage.list_movies().await
}

/// 按名称子串搜索，没有结果时返回 NotFound
pub async fn search_movies(storage: &dyn Storage, name: &str) -> Result<Vec<Movie>> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::validation("Search name must not be empty"));
    }

    let movies = storage.search_movies_by_name(name).await?;
    if movies.is_empty() {
        return Err(AppError::not_found(format!(
            "No movies found matching '{name}'"
        )));
    }
    Ok(movies)
}

pub async fn handle_list_movies(
    service: &MovieService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match list_movies(storage.as_ref()).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            MovieListResponse { items },
            "Movies retrieved successfully",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e, None)),
    }
}

pub async fn handle_search_movies(
    service: &MovieService,
    query: MovieSearchQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match search_movies(storage.as_ref(), &query.name).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            MovieListResponse { items },
            "Movies retrieved successfully",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e, movie_error_code(&e))),
    }
}
