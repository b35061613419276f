//! 电影存储操作

use super::SeaOrmStorage;
use crate::entity::movies::{ActiveModel, Column};
use crate::entity::prelude::{Movies, Reviews};
use crate::entity::reviews::Column as ReviewColumn;
use crate::errors::{AppError, Result};
use crate::models::movies::{
    entities::Movie,
    requests::{CreateMovieRequest, UpdateMovieRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建电影
    pub async fn create_movie_impl(&self, req: CreateMovieRequest) -> Result<Movie> {
        let now = chrono::Utc::now().timestamp_micros();

        let model = ActiveModel {
            name: Set(req.name),
            year: Set(req.year),
            description: Set(req.description),
            genre: Set(req.genre),
            writers: Set(req.writers),
            actors: Set(req.actors),
            average_score: Set(0.0),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("Failed to create movie: {e}")))?;

        Ok(result.into_movie())
    }

    /// 通过 ID 获取电影
    pub async fn get_movie_by_id_impl(&self, id: i64) -> Result<Option<Movie>> {
        let result = Movies::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("Failed to query movie: {e}")))?;

        Ok(result.map(|m| m.into_movie()))
    }

    /// 列出全部电影
    pub async fn list_movies_impl(&self) -> Result<Vec<Movie>> {
        let movies = Movies::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("Failed to list movies: {e}")))?;

        Ok(movies.into_iter().map(|m| m.into_movie()).collect())
    }

    /// 按名称模糊搜索
    pub async fn search_movies_by_name_impl(&self, name: &str) -> Result<Vec<Movie>> {
        let movies = Movies::find()
            .filter(Column::Name.contains(name.trim()))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("Failed to search movies: {e}")))?;

        Ok(movies.into_iter().map(|m| m.into_movie()).collect())
    }

    /// 部分更新电影，只写入请求中出现的字段
    pub async fn update_movie_impl(
        &self,
        id: i64,
        update: UpdateMovieRequest,
    ) -> Result<Option<Movie>> {
        // 先检查电影是否存在
        let existing = self.get_movie_by_id_impl(id).await?;
        if existing.is_none() || update.is_empty() {
            return Ok(existing);
        }

        let mut model = ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(year) = update.year {
            model.year = Set(year);
        }

        if let Some(description) = update.description {
            model.description = Set(description);
        }

        if let Some(genre) = update.genre {
            model.genre = Set(genre);
        }

        if let Some(writers) = update.writers {
            model.writers = Set(writers);
        }

        if let Some(actors) = update.actors {
            model.actors = Set(actors);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("Failed to update movie: {e}")))?;

        self.get_movie_by_id_impl(id).await
    }

    /// 写入平均分
    pub async fn set_movie_average_score_impl(&self, id: i64, average_score: f64) -> Result<bool> {
        let result = Movies::update_many()
            .col_expr(
                Column::AverageScore,
                sea_orm::sea_query::Expr::value(average_score),
            )
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                AppError::database_operation(format!("Failed to update average score: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }

    /// 删除电影，影评在同一事务内一并删除
    pub async fn delete_movie_impl(&self, id: i64) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| AppError::database_operation(format!("Failed to begin transaction: {e}")))?;

        Reviews::delete_many()
            .filter(ReviewColumn::MovieId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| AppError::database_operation(format!("Failed to delete reviews: {e}")))?;

        let result = Movies::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| AppError::database_operation(format!("Failed to delete movie: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| AppError::database_operation(format!("Failed to commit transaction: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
