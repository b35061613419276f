use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use crate::errors::{AppError, Result};
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse,
    reviews::{
        entities::Review,
        requests::{CreateReviewRequest, NewReview},
    },
};
use crate::services::auth::token::credentials_error;
use crate::services::scoring::recompute_average;
use crate::storage::Storage;
use crate::utils::validate::{validate_not_blank, validate_score};

use super::{ReviewService, review_error_code};

pub(crate) fn validate_review_fields(text: Option<&str>, score: Option<f64>) -> Result<()> {
    if let Some(text) = text {
        validate_not_blank(text, "Review text must not be empty").map_err(AppError::validation)?;
    }
    if let Some(score) = score {
        validate_score(score).map_err(AppError::validation)?;
    }
    Ok(())
}

/// 发表影评并重算电影平均分
///
/// `user_id` 为空表示匿名影评。
pub async fn create_review(
    storage: &dyn Storage,
    movie_id: i64,
    text: &str,
    score: f64,
    user_id: Option<i64>,
) -> Result<Review> {
    validate_review_fields(Some(text), Some(score))?;

    if storage.get_movie_by_id(movie_id).await?.is_none() {
        return Err(AppError::not_found("Movie not found"));
    }

    let review = storage
        .create_review(NewReview {
            movie_id,
            user_id,
            text: text.to_string(),
            score,
        })
        .await?;

    recompute_average(storage, movie_id).await?;

    info!("Review {} posted on movie {}", review.id, movie_id);
    Ok(review)
}

pub async fn handle_create_review(
    service: &ReviewService,
    review_data: CreateReviewRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let Some(actor) = RequireJWT::extract_user(request) else {
        return Ok(ApiResponse::from_error(&credentials_error(), None));
    };

    match create_review(
        storage.as_ref(),
        review_data.movie_id,
        &review_data.text,
        review_data.score,
        Some(actor.id),
    )
    .await
    {
        Ok(review) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(review, "Review created successfully"))),
        Err(e) => Ok(ApiResponse::from_error(&e, review_error_code(&e))),
    }
}
