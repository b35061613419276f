//! 评分引擎
//!
//! 影评集合每次变化后同步重算所属电影的平均分。

use tracing::debug;

use crate::errors::Result;
use crate::storage::Storage;

/// 算术平均，保留两位小数（银行家舍入，恰好一半时取偶）；空集合为 0.0
pub fn average_of(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    (mean * 100.0).round_ties_even() / 100.0
}

/// 重新计算并写回电影的平均分
///
/// 电影已不存在时不视为错误。
pub async fn recompute_average(storage: &dyn Storage, movie_id: i64) -> Result<f64> {
    let reviews = storage.list_reviews_by_movie(movie_id).await?;
    let scores: Vec<f64> = reviews.iter().map(|r| r.score).collect();
    let average = average_of(&scores);

    if storage.set_movie_average_score(movie_id, average).await? {
        debug!(
            "Movie {} average score recomputed over {} review(s): {}",
            movie_id,
            scores.len(),
            average
        );
    } else {
        debug!("Movie {} no longer exists, average score not stored", movie_id);
    }

    Ok(average)
}
