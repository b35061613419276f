use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use crate::errors::{AppError, Result};
use crate::models::{
    ApiResponse,
    movies::{entities::Movie, requests::CreateMovieRequest},
};
use crate::storage::Storage;
use crate::utils::validate::validate_not_blank;

use super::{MovieService, movie_error_code};

pub(crate) fn validate_movie_fields(name: Option<&str>, genre: Option<&str>) -> Result<()> {
    if let Some(name) = name {
        validate_not_blank(name, "Movie name must not be empty").map_err(AppError::validation)?;
    }
    if let Some(genre) = genre {
        validate_not_blank(genre, "Movie genre must not be empty")
            .map_err(AppError::validation)?;
    }
    Ok(())
}

/// 创建电影，平均分从 0.0 开始
pub async fn create_movie(storage: &dyn Storage, movie: CreateMovieRequest) -> Result<Movie> {
    validate_movie_fields(Some(&movie.name), Some(&movie.genre))?;

    let movie = storage.create_movie(movie).await?;
    info!("Movie {} created (ID: {})", movie.name, movie.id);
    Ok(movie)
}

pub async fn handle_create_movie(
    service: &MovieService,
    movie_data: CreateMovieRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match create_movie(storage.as_ref(), movie_data).await {
        Ok(movie) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(movie, "Movie created successfully"))),
        Err(e) => Ok(ApiResponse::from_error(&e, movie_error_code(&e))),
    }
}
