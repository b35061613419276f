use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use crate::errors::{AppError, Result};
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, users::entities::User};
use crate::services::auth::token::credentials_error;
use crate::services::policy;
use crate::services::scoring::recompute_average;
use crate::storage::Storage;

use super::{ReviewService, review_error_code};

/// 删除影评，仅管理员；删除后重算平均分
pub async fn delete_review(storage: &dyn Storage, review_id: i64, actor: &User) -> Result<()> {
    policy::require_admin(actor)?;

    let review = storage
        .get_review_by_id(review_id)
        .await?
        .ok_or_else(|| AppError::not_found("Review not found"))?;

    if !storage.delete_review(review_id).await? {
        return Err(AppError::not_found("Review not found"));
    }

    recompute_average(storage, review.movie_id).await?;

    info!("Review {} deleted by admin {}", review_id, actor.id);
    Ok(())
}

pub async fn handle_delete_review(
    service: &ReviewService,
    review_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let Some(actor) = RequireJWT::extract_user(request) else {
        return Ok(ApiResponse::from_error(&credentials_error(), None));
    };

    match delete_review(storage.as_ref(), review_id, &actor).await {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Review deleted successfully",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e, review_error_code(&e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::reviews::create_review;
    use crate::services::test_support::{movie_request, seed_user};
    use crate::storage::sea_orm_storage::tests::memory_storage;

    #[tokio::test]
    async fn test_delete_recomputes_average() {
        let storage = memory_storage().await;
        let admin = seed_user(&storage, "root", true).await;
        let movie = storage.create_movie(movie_request("Fargo")).await.unwrap();

        let mut ids = Vec::new();
        for score in [4.0, 5.0, 3.0, 2.0] {
            let review = create_review(&storage, movie.id, "Yah", score, None)
                .await
                .unwrap();
            ids.push(review.id);
        }

        delete_review(&storage, ids[1], &admin).await.unwrap();
        let stored = storage.get_movie_by_id(movie.id).await.unwrap().unwrap();
        assert_eq!(stored.average_score, 3.0);

        for id in [ids[0], ids[2], ids[3]] {
            delete_review(&storage, id, &admin).await.unwrap();
        }
        let stored = storage.get_movie_by_id(movie.id).await.unwrap().unwrap();
        assert_eq!(stored.average_score, 0.0);
    }

    #[tokio::test]
    async fn test_owner_cannot_delete() {
        let storage = memory_storage().await;
        let owner = seed_user(&storage, "owner", false).await;
        let movie = storage.create_movie(movie_request("Fargo")).await.unwrap();
        let review = create_review(&storage, movie.id, "Mine", 4.0, Some(owner.id))
            .await
            .unwrap();

        let err = delete_review(&storage, review.id, &owner).await.unwrap_err();
        assert!(matches!(err, AppError::Authorization(_)));
        assert!(storage.get_review_by_id(review.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_missing_review() {
        let storage = memory_storage().await;
        let admin = seed_user(&storage, "root", true).await;
        let err = delete_review(&storage, 3, &admin).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
