use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::{DateTime, Utc};
use tracing::info;

use crate::errors::{AppError, Result};
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    movies::{entities::Movie, requests::UpdateMovieRequest},
    users::entities::User,
};
use crate::services::auth::token::credentials_error;
use crate::services::policy;
use crate::storage::Storage;

use super::create::validate_movie_fields;
use super::{MovieService, movie_error_code};

/// 部分更新电影，仅在创建后 30 分钟内允许
pub async fn update_movie(
    storage: &dyn Storage,
    movie_id: i64,
    patch: UpdateMovieRequest,
    actor: &User,
    now: DateTime<Utc>,
) -> Result<Movie> {
    let movie = storage
        .get_movie_by_id(movie_id)
        .await?
        .ok_or_else(|| AppError::not_found("Movie not found"))?;

    policy::check_movie_edit(&movie, now)?;
    validate_movie_fields(patch.name.as_deref(), patch.genre.as_deref())?;

    let updated = storage
        .update_movie(movie_id, patch)
        .await?
        .ok_or_else(|| AppError::not_found("Movie not found"))?;

    info!("Movie {} updated by user {}", movie_id, actor.id);
    Ok(updated)
}

pub async fn handle_update_movie(
    service: &MovieService,
    movie_id: i64,
    update_data: UpdateMovieRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let Some(actor) = RequireJWT::extract_user(request) else {
        return Ok(ApiResponse::from_error(&credentials_error(), None));
    };

    match update_movie(storage.as_ref(), movie_id, update_data, &actor, Utc::now()).await {
        Ok(movie) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            movie,
            "Movie updated successfully",
        ))),
        Err(e @ AppError::Authorization(_)) => Ok(ApiResponse::from_error(
            &e,
            Some(ErrorCode::MovieEditWindowExpired),
        )),
        Err(e) => Ok(ApiResponse::from_error(&e, movie_error_code(&e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{movie_request, seed_user};
    use crate::storage::sea_orm_storage::tests::memory_storage;
    use chrono::Duration;

    #[tokio::test]
    async fn test_update_inside_window() {
        let storage = memory_storage().await;
        let actor = seed_user(&storage, "editor", false).await;
        let movie = storage.create_movie(movie_request("Se7en")).await.unwrap();

        let patch = UpdateMovieRequest {
            genre: Some("Thriller".to_string()),
            actors: Some(None),
            ..Default::default()
        };
        let now = movie.created_at + Duration::seconds(1800);
        let updated = update_movie(&storage, movie.id, patch, &actor, now)
            .await
            .unwrap();

        assert_eq!(updated.genre, "Thriller");
        assert_eq!(updated.actors, None);
        assert_eq!(updated.writers, movie.writers);
        assert_eq!(updated.created_at, movie.created_at);
    }

    #[tokio::test]
    async fn test_update_after_window_forbidden_even_for_admin() {
        let storage = memory_storage().await;
        let admin = seed_user(&storage, "root", true).await;
        let movie = storage.create_movie(movie_request("Se7en")).await.unwrap();

        let patch = UpdateMovieRequest {
            year: Some(1996),
            ..Default::default()
        };
        let now = movie.created_at + Duration::milliseconds(1_800_010);
        let err = update_movie(&storage, movie.id, patch, &admin, now)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Authorization(_)));
        let stored = storage.get_movie_by_id(movie.id).await.unwrap().unwrap();
        assert_eq!(stored.year, movie.year);
    }

    #[tokio::test]
    async fn test_window_and_missing_take_precedence_over_invalid_patch() {
        let storage = memory_storage().await;
        let actor = seed_user(&storage, "editor", false).await;
        let movie = storage.create_movie(movie_request("Se7en")).await.unwrap();

        let blank = || UpdateMovieRequest {
            name: Some("  ".to_string()),
            ..Default::default()
        };

        let late = movie.created_at + Duration::hours(1);
        let err = update_movie(&storage, movie.id, blank(), &actor, late)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Authorization(_)));

        let err = update_movie(&storage, 404, blank(), &actor, movie.created_at)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = update_movie(&storage, movie.id, blank(), &actor, movie.created_at)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_missing_movie() {
        let storage = memory_storage().await;
        let actor = seed_user(&storage, "editor", false).await;
        let err = update_movie(
            &storage,
            404,
            UpdateMovieRequest::default(),
            &actor,
            Utc::now(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
