use super::entities::Review;
use serde::Serialize;

// 影评列表响应
#[derive(Debug, Serialize)]
pub struct ReviewListResponse {
    pub items: Vec<Review>,
}
