use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::movies::requests::{CreateMovieRequest, MovieSearchQuery, UpdateMovieRequest};
use crate::services::{MovieService, ReviewService};
use crate::utils::SafeIDI64;

// 懒加载的全局 MovieService 实例
static MOVIE_SERVICE: Lazy<MovieService> = Lazy::new(MovieService::new_lazy);
static REVIEW_SERVICE: Lazy<ReviewService> = Lazy::new(ReviewService::new_lazy);

pub async fn list_movies(req: HttpRequest) -> ActixResult<HttpResponse> {
    MOVIE_SERVICE.list_movies(&req).await
}

pub async fn search_movies(
    req: HttpRequest,
    query: web::Query<MovieSearchQuery>,
) -> ActixResult<HttpResponse> {
    MOVIE_SERVICE.search_movies(query.into_inner(), &req).await
}

pub async fn create_movie(
    req: HttpRequest,
    movie_data: web::Json<CreateMovieRequest>,
) -> ActixResult<HttpResponse> {
    MOVIE_SERVICE.create_movie(movie_data.into_inner(), &req).await
}

pub async fn list_movie_reviews(
    req: HttpRequest,
    movie_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE.list_reviews(movie_id.0, &req).await
}

pub async fn update_movie(
    req: HttpRequest,
    movie_id: SafeIDI64,
    update_data: web::Json<UpdateMovieRequest>,
) -> ActixResult<HttpResponse> {
    MOVIE_SERVICE
        .update_movie(movie_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_movie(req: HttpRequest, movie_id: SafeIDI64) -> ActixResult<HttpResponse> {
    MOVIE_SERVICE.delete_movie(movie_id.0, &req).await
}

// 配置路由
pub fn configure_movie_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/movies")
            .route("", web::get().to(list_movies))
            .route("", web::post().to(create_movie))
            .route("/search", web::get().to(search_movies))
            .route("/{id}/reviews", web::get().to(list_movie_reviews))
            .service(
                web::resource("/{id}")
                    .wrap(middlewares::RequireJWT)
                    .route(web::patch().to(update_movie))
                    .route(web::delete().to(delete_movie)),
            ),
    );
}
