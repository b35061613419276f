use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::{DateTime, Utc};
use tracing::info;

use crate::errors::{AppError, Result};
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse,
    reviews::{entities::Review, requests::UpdateReviewRequest},
    users::entities::User,
};
use crate::services::auth::token::credentials_error;
use crate::services::policy;
use crate::services::scoring::recompute_average;
use crate::storage::Storage;

use super::create::validate_review_fields;
use super::{ReviewService, review_error_code};

/// 修改影评并重算所属电影的平均分
pub async fn update_review(
    storage: &dyn Storage,
    review_id: i64,
    patch: UpdateReviewRequest,
    actor: &User,
    now: DateTime<Utc>,
) -> Result<Review> {
    let review = storage
        .get_review_by_id(review_id)
        .await?
        .ok_or_else(|| AppError::not_found("Review not found"))?;

    policy::check_review_edit(actor, &review, now)?;
    validate_review_fields(patch.text.as_deref(), patch.score)?;

    let updated = storage
        .update_review(review_id, patch)
        .await?
        .ok_or_else(|| AppError::not_found("Review not found"))?;

    recompute_average(storage, updated.movie_id).await?;

    info!("Review {} updated by user {}", review_id, actor.id);
    Ok(updated)
}

pub async fn handle_update_review(
    service: &ReviewService,
    review_id: i64,
    update_data: UpdateReviewRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let Some(actor) = RequireJWT::extract_user(request) else {
        return Ok(ApiResponse::from_error(&credentials_error(), None));
    };

    match update_review(storage.as_ref(), review_id, update_data, &actor, Utc::now()).await {
        Ok(review) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            review,
            "Review updated successfully",
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
    use chrono::Duration;

    fn rescore(score: f64) -> UpdateReviewRequest {
        UpdateReviewRequest {
            score: Some(score),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_owner_edits_at_window_boundary() {
        let storage = memory_storage().await;
        let owner = seed_user(&storage, "owner", false).await;
        let movie = storage.create_movie(movie_request("Rocky")).await.unwrap();
        let review = create_review(&storage, movie.id, "Adrian!", 4.0, Some(owner.id))
            .await
            .unwrap();

        let exact = review.created_at + Duration::seconds(1800);
        let updated = update_review(&storage, review.id, rescore(2.0), &owner, exact)
            .await
            .unwrap();
        assert_eq!(updated.score, 2.0);
        assert_eq!(updated.text, "Adrian!");
        assert_eq!(updated.created_at, review.created_at);

        let stored = storage.get_movie_by_id(movie.id).await.unwrap().unwrap();
        assert_eq!(stored.average_score, 2.0);

        let late = review.created_at + Duration::milliseconds(1_800_010);
        let err = update_review(&storage, review.id, rescore(5.0), &owner, late)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Authorization(_)));
    }

    #[tokio::test]
    async fn test_non_owner_forbidden() {
        let storage = memory_storage().await;
        let owner = seed_user(&storage, "owner", false).await;
        let other = seed_user(&storage, "other", false).await;
        let movie = storage.create_movie(movie_request("Rocky")).await.unwrap();
        let review = create_review(&storage, movie.id, "Adrian!", 4.0, Some(owner.id))
            .await
            .unwrap();

        let err = update_review(&storage, review.id, rescore(1.0), &other, review.created_at)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Authorization(_)));

        let stored = storage.get_review_by_id(review.id).await.unwrap().unwrap();
        assert_eq!(stored.score, 4.0);
    }

    #[tokio::test]
    async fn test_admin_edits_any_review() {
        let storage = memory_storage().await;
        let admin = seed_user(&storage, "root", true).await;
        let movie = storage.create_movie(movie_request("Rocky")).await.unwrap();
        let review = create_review(&storage, movie.id, "Anonymous", 3.0, None)
            .await
            .unwrap();

        let patch = UpdateReviewRequest {
            text: Some("Moderated".to_string()),
            score: None,
        };
        let later = review.created_at + Duration::days(2);
        let updated = update_review(&storage, review.id, patch, &admin, later)
            .await
            .unwrap();
        assert_eq!(updated.text, "Moderated");
        assert_eq!(updated.score, 3.0);
    }

    #[tokio::test]
    async fn test_forbidden_and_missing_take_precedence_over_invalid_patch() {
        let storage = memory_storage().await;
        let owner = seed_user(&storage, "owner", false).await;
        let other = seed_user(&storage, "other", false).await;
        let movie = storage.create_movie(movie_request("Rocky")).await.unwrap();
        let review = create_review(&storage, movie.id, "Adrian!", 4.0, Some(owner.id))
            .await
            .unwrap();

        let blank = || UpdateReviewRequest {
            text: Some(String::new()),
            score: None,
        };

        let err = update_review(&storage, review.id, blank(), &other, review.created_at)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Authorization(_)));

        let err = update_review(&storage, 999, blank(), &owner, review.created_at)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = update_review(&storage, review.id, blank(), &owner, review.created_at)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_missing_review_not_found() {
        let storage = memory_storage().await;
        let admin = seed_user(&storage, "root", true).await;
        let err = update_review(&storage, 5, rescore(1.0), &admin, Utc::now())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
