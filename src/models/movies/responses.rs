use super::entities::Movie;
use serde::Serialize;

// 电影列表响应
#[derive(Debug, Serialize)]
pub struct MovieListResponse {
    pub items: Vec<Movie>,
}
