use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::reviews::requests::{CreateReviewRequest, UpdateReviewRequest};
use crate::services::ReviewService;
use crate::utils::SafeIDI64;

// 懒加载的全局 ReviewService 实例
static REVIEW_SERVICE: Lazy<ReviewService> = Lazy::new(ReviewService::new_lazy);

pub async fn create_review(
    req: HttpRequest,
    review_data: web::Json<CreateReviewRequest>,
) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE
        .create_review(review_data.into_inner(), &req)
        .await
}

pub async fn update_review(
    req: HttpRequest,
    review_id: SafeIDI64,
    update_data: web::Json<UpdateReviewRequest>,
) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE
        .update_review(review_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_review(req: HttpRequest, review_id: SafeIDI64) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE.delete_review(review_id.0, &req).await
}

// 配置路由
pub fn configure_review_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/reviews")
            .wrap(middlewares::RequireJWT)
            .route("", web::post().to(create_review))
            .route("/{id}", web::patch().to(update_review))
            .route("/{id}", web::delete().to(delete_review)),
    );
}
