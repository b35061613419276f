use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use crate::errors::{AppError, Result};
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, users::entities::User};
use crate::services::auth::token::credentials_error;
use crate::services::policy;
use crate::storage::Storage;

use super::{MovieService, movie_error_code};

/// 删除电影及其全部影评，仅管理员
pub async fn delete_movie(storage: &dyn Storage, movie_id: i64, actor: &User) -> Result<()> {
    policy::require_admin(actor)?;

    if !storage.delete_movie(movie_id).await? {
        return Err(AppError::not_found("Movie not found"));
    }

    info!("Movie {} deleted by admin {}", movie_id, actor.id);
    Ok(())
}

pub async fn handle_delete_movie(
    service: &MovieService,
    movie_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let Some(actor) = RequireJWT::extract_user(request) else {
        return Ok(ApiResponse::from_error(&credentials_error(), None));
    };

    match delete_movie(storage.as_ref(), movie_id, &actor).await {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Movie deleted successfully",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e, movie_error_code(&e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::reviews::create_review;
    use crate::services::test_support::{movie_request, seed_user};
    use crate::storage::sea_orm_storage::tests::memory_storage;

    #[tokio::test]
    async fn test_delete_cascades_to_reviews() {
        let storage = memory_storage().await;
        let admin = seed_user(&storage, "root", true).await;
        let movie = storage.create_movie(movie_request("Jaws")).await.unwrap();
        let first = create_review(&storage, movie.id, "Bigger boat", 5.0, None)
            .await
            .unwrap();
        let second = create_review(&storage, movie.id, "Shark", 3.0, Some(admin.id))
            .await
            .unwrap();

        delete_movie(&storage, movie.id, &admin).await.unwrap();

        assert!(storage.get_movie_by_id(movie.id).await.unwrap().is_none());
        assert!(storage.get_review_by_id(first.id).await.unwrap().is_none());
        assert!(storage.get_review_by_id(second.id).await.unwrap().is_none());
        assert!(
            storage
                .list_reviews_by_movie(movie.id)
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_non_admin_cannot_delete() {
        let storage = memory_storage().await;
        let user = seed_user(&storage, "viewer", false).await;
        let movie = storage.create_movie(movie_request("Jaws")).await.unwrap();

        let err = delete_movie(&storage, movie.id, &user).await.unwrap_err();
        assert!(matches!(err, AppError::Authorization(_)));
        assert!(storage.get_movie_by_id(movie.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_missing_movie() {
        let storage = memory_storage().await;
        let admin = seed_user(&storage, "root", true).await;
        let err = delete_movie(&storage, 77, &admin).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
