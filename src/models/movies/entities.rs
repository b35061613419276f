use serde::{Deserialize, Serialize};

// 电影实体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: i64,
    pub name: String,
    pub year: i32,
    pub description: String,
    pub genre: String,
    pub writers: Option<String>,
    pub actors: Option<String>,
    /// 由影评分数派生，不可直接修改
    pub average_score: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
