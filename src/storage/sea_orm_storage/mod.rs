//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod movies;
mod reviews;
mod users;

use crate::config::{AppConfig, DatabaseConfig};
use crate::errors::{AppError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 使用全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        Self::connect(&AppConfig::get().database).await
    }

    /// 按给定数据库配置连接并运行迁移
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| AppError::database_operation(format!("Migration failed: {e}")))?;

        info!("SeaORM storage initialized, database: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| AppError::database_config(format!("Invalid SQLite URL: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| AppError::database_connection(format!("SQLite connection failed: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| AppError::database_connection(format!("Cannot connect to database: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(AppError::database_config(format!(
                "Cannot infer database type from URL: {url}. Supported: sqlite:, postgres://, mysql://, or a .db/.sqlite file path"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: NewUser) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn set_user_admin(&self, id: i64, is_admin: bool) -> Result<Option<User>> {
        self.set_user_admin_impl(id, is_admin).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 电影模块
    async fn create_movie(&self, movie: CreateMovieRequest) -> Result<Movie> {
        self.create_movie_impl(movie).await
    }

    async fn get_movie_by_id(&self, id: i64) -> Result<Option<Movie>> {
        self.get_movie_by_id_impl(id).await
    }

    async fn list_movies(&self) -> Result<Vec<Movie>> {
        self.list_movies_impl().await
    }

    async fn search_movies_by_name(&self, name: &str) -> Result<Vec<Movie>> {
        self.search_movies_by_name_impl(name).await
    }

    async fn update_movie(&self, id: i64, update: UpdateMovieRequest) -> Result<Option<Movie>> {
        self.update_movie_impl(id, update).await
    }

    async fn set_movie_average_score(&self, id: i64, average_score: f64) -> Result<bool> {
        self.set_movie_average_score_impl(id, average_score).await
    }

    async fn delete_movie(&self, id: i64) -> Result<bool> {
        self.delete_movie_impl(id).await
    }

    // 影评模块
    async fn create_review(&self, review: NewReview) -> Result<Review> {
        self.create_review_impl(review).await
    }

    async fn get_review_by_id(&self, id: i64) -> Result<Option<Review>> {
        self.get_review_by_id_impl(id).await
    }

    async fn list_reviews_by_movie(&self, movie_id: i64) -> Result<Vec<Review>> {
        self.list_reviews_by_movie_impl(movie_id).await
    }

    async fn update_review(&self, id: i64, update: UpdateReviewRequest) -> Result<Option<Review>> {
        self.update_review_impl(id, update).await
    }

    async fn delete_review(&self, id: i64) -> Result<bool> {
        self.delete_review_impl(id).await
    }
}
