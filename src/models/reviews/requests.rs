use serde::Deserialize;

// 影评创建请求（来自HTTP请求，作者由令牌决定）
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReviewRequest {
    pub movie_id: i64,
    pub text: String,
    pub score: f64,
}

// 存储层使用的新影评数据
#[derive(Debug, Clone)]
pub struct NewReview {
    pub movie_id: i64,
    pub user_id: Option<i64>,
    pub text: String,
    pub score: f64,
}

// 影评部分更新请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateReviewRequest {
    pub text: Option<String>,
    pub score: Option<f64>,
}

