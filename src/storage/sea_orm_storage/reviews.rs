//! 影评存储操作

use super::SeaOrmStorage;
use crate::entity::reviews::{ActiveModel, Column, Entity as Reviews};
use crate::errors::{AppError, Result};
use crate::models::reviews::{
    entities::Review,
    requests::{NewReview, UpdateReviewRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建影评
    pub async fn create_review_impl(&self, req: NewReview) -> Result<Review> {
        let now = chrono::Utc::now();

        let model = ActiveModel {
            movie_id: Set(req.movie_id),
            user_id: Set(req.user_id),
            review_text: Set(req.text),
            score: Set(req.score),
            review_date: Set(now.date_naive()),
            created_at: Set(now.timestamp_micros()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("Failed to create review: {e}")))?;

        Ok(result.into_review())
    }

    /// 通过 ID 获取影评
    pub async fn get_review_by_id_impl(&self, id: i64) -> Result<Option<Review>> {
        let result = Reviews::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("Failed to query review: {e}")))?;

        Ok(result.map(|m| m.into_review()))
    }

    /// 列出电影的全部影评
    pub async fn list_reviews_by_movie_impl(&self, movie_id: i64) -> Result<Vec<Review>> {
        let reviews = Reviews::find()
            .filter(Column::MovieId.eq(movie_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("Failed to list reviews: {e}")))?;

        Ok(reviews.into_iter().map(|m| m.into_review()).collect())
    }

    /// 部分更新影评
    pub async fn update_review_impl(
        &self,
        id: i64,
        update: UpdateReviewRequest,
    ) -> Result<Option<Review>> {
        let existing = self.get_review_by_id_impl(id).await?;
        if existing.is_none() || (update.text.is_none() && update.score.is_none()) {
            return Ok(existing);
        }

        let mut model = ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(text) = update.text {
            model.review_text = Set(text);
        }

        if let Some(score) = update.score {
            model.score = Set(score);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("Failed to update review: {e}")))?;

        self.get_review_by_id_impl(id).await
    }

    /// 删除影评
    pub async fn delete_review_impl(&self, id: i64) -> Result<bool> {
        let result = Reviews::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("Failed to delete review: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
