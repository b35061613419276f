use std::sync::Arc;

use crate::models::{
    movies::{
        entities::Movie,
        requests::{CreateMovieRequest, UpdateMovieRequest},
    },
    reviews::{
        entities::Review,
        requests::{NewReview, UpdateReviewRequest},
    },
    users::{entities::User, requests::NewUser},
};

use crate::errors::Result;

pub mod sea_orm_storage;

/// 持久化层接口
///
/// 每个方法各自原子；跨方法的读后写（如平均分重算）不做隔离。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户，用户名冲突时返回 Conflict
    async fn create_user(&self, user: NewUser) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 设置管理员标记
    async fn set_user_admin(&self, id: i64, is_admin: bool) -> Result<Option<User>>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;

    /// 电影管理方法
    // 创建电影
    async fn create_movie(&self, movie: CreateMovieRequest) -> Result<Movie>;
    // 通过ID获取电影
    async fn get_movie_by_id(&self, id: i64) -> Result<Option<Movie>>;
    // 列出全部电影
    async fn list_movies(&self) -> Result<Vec<Movie>>;
    // 按名称模糊搜索
    async fn search_movies_by_name(&self, name: &str) -> Result<Vec<Movie>>;
    // 部分更新电影
    async fn update_movie(&self, id: i64, update: UpdateMovieRequest) -> Result<Option<Movie>>;
    // 写入平均分
    async fn set_movie_average_score(&self, id: i64, average_score: f64) -> Result<bool>;
    // 删除电影及其全部影评（同一事务）
    async fn delete_movie(&self, id: i64) -> Result<bool>;

    /// 影评管理方法
    // 创建影评
    async fn create_review(&self, review: NewReview) -> Result<Review>;
    // 通过ID获取影评
    async fn get_review_by_id(&self, id: i64) -> Result<Option<Review>>;
    // 列出电影的全部影评
    async fn list_reviews_by_movie(&self, movie_id: i64) -> Result<Vec<Review>>;
    // 部分更新影评
    async fn update_review(&self, id: i64, update: UpdateReviewRequest) -> Result<Option<Review>>;
    // 删除影评
    async fn delete_review(&self, id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
