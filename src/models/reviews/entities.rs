use serde::{Deserialize, Serialize};

// 影评实体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: i64,
    pub movie_id: i64,
    /// 匿名影评为 None
    pub user_id: Option<i64>,
    pub text: String,
    pub score: f64,
    pub review_date: chrono::NaiveDate,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
