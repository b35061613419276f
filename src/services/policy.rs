//! 变更策略：谁可以在何时修改或删除哪些记录
//!
//! 全部为 (actor, record, now) 的纯函数。

use chrono::{DateTime, Duration, Utc};

use crate::errors::{AppError, Result};
use crate::models::movies::entities::Movie;
use crate::models::reviews::entities::Review;
use crate::models::users::entities::User;

/// 创建后允许编辑的时长（秒）
pub const EDIT_WINDOW_SECS: i64 = 30 * 60;

/// 经过时间不超过编辑窗口时返回 true，恰好 1800 秒仍可编辑
pub fn within_edit_window(created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now.signed_duration_since(created_at) <= Duration::seconds(EDIT_WINDOW_SECS)
}

/// 影评编辑：管理员随时可改；作者只能在窗口内修改
pub fn check_review_edit(actor: &User, review: &Review, now: DateTime<Utc>) -> Result<()> {
    if actor.is_admin {
        return Ok(());
    }
    if !actor.owns(review.user_id) {
        return Err(AppError::authorization(
            "You do not have permission to edit this review",
        ));
    }
    if !within_edit_window(review.created_at, now) {
        return Err(AppError::authorization(
            "Review can only be edited within 30 minutes of creation",
        ));
    }
    Ok(())
}

/// 电影编辑只受时间窗口限制
pub fn check_movie_edit(movie: &Movie, now: DateTime<Utc>) -> Result<()> {
    if !within_edit_window(movie.created_at, now) {
        return Err(AppError::authorization(
            "Movie can only be edited within 30 minutes of creation",
        ));
    }
    Ok(())
}

pub fn require_admin(actor: &User) -> Result<()> {
    if !actor.is_admin {
        return Err(AppError::authorization("Administrator privileges required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn created() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-03-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn user(id: i64, is_admin: bool) -> User {
        User {
            id,
            username: format!("user{id}"),
            password_hash: String::new(),
            is_admin,
            created_at: created(),
        }
    }

    fn review(user_id: Option<i64>) -> Review {
        Review {
            id: 1,
            movie_id: 1,
            user_id,
            text: "Great".to_string(),
            score: 4.0,
            review_date: created().date_naive(),
            created_at: created(),
        }
    }

    fn movie() -> Movie {
        Movie {
            id: 1,
            name: "Alien".to_string(),
            year: 1979,
            description: "In space no one can hear you scream.".to_string(),
            genre: "Horror".to_string(),
            writers: None,
            actors: None,
            average_score: 0.0,
            created_at: created(),
        }
    }

    #[test]
    fn test_window_boundary() {
        let exact = created() + Duration::seconds(1800);
        let over = created() + Duration::milliseconds(1_800_010);
        assert!(within_edit_window(created(), exact));
        assert!(!within_edit_window(created(), over));
    }

    #[test]
    fn test_owner_edit_at_boundary() {
        let owner = user(7, false);
        let exact = created() + Duration::seconds(1800);
        let over = created() + Duration::milliseconds(1_800_010);

        assert!(check_review_edit(&owner, &review(Some(7)), exact).is_ok());
        assert!(matches!(
            check_review_edit(&owner, &review(Some(7)), over),
            Err(AppError::Authorization(_))
        ));
    }

    #[test]
    fn test_non_owner_rejected_inside_window() {
        let stranger = user(8, false);
        assert!(matches!(
            check_review_edit(&stranger, &review(Some(7)), created()),
            Err(AppError::Authorization(_))
        ));
    }

    #[test]
    fn test_anonymous_review_admin_only() {
        assert!(check_review_edit(&user(7, false), &review(None), created()).is_err());
        assert!(check_review_edit(&user(1, true), &review(None), created()).is_ok());
    }

    #[test]
    fn test_admin_edits_after_window() {
        let late = created() + Duration::hours(5);
        assert!(check_review_edit(&user(1, true), &review(Some(7)), late).is_ok());
    }

    #[test]
    fn test_movie_window() {
        assert!(check_movie_edit(&movie(), created() + Duration::minutes(29)).is_ok());
        assert!(check_movie_edit(&movie(), created() + Duration::minutes(31)).is_err());
    }

    #[test]
    fn test_require_admin() {
        assert!(require_admin(&user(1, true)).is_ok());
        assert!(matches!(
            require_admin(&user(2, false)),
            Err(AppError::Authorization(_))
        ));
    }
}
