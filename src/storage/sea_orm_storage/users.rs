use super::SeaOrmStorage;
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::{AppError, Result};
use crate::models::users::{entities::User, requests::NewUser};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set, SqlErr,
};

impl SeaOrmStorage {
    /// 创建用户
    pub async fn create_user_impl(&self, req: NewUser) -> Result<User> {
        let now = chrono::Utc::now().timestamp_micros();

        let model = ActiveModel {
            username: Set(req.username),
            password_hash: Set(req.password_hash),
            is_admin: Set(req.is_admin),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            // 唯一约束冲突（并发注册同名用户）
            if let Some(SqlErr::UniqueConstraintViolation(_)) = e.sql_err() {
                AppError::conflict("Username already exists")
            } else {
                AppError::database_operation(format!("Failed to create user: {e}"))
            }
        })?;

        Ok(result.into_user())
    }

    /// 通过 ID 获取用户
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("Failed to query user: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过用户名获取用户
    pub async fn get_user_by_username_impl(&self, username: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("Failed to query user: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 设置管理员标记
    pub async fn set_user_admin_impl(&self, id: i64, is_admin: bool) -> Result<Option<User>> {
        let result = Users::update_many()
            .col_expr(Column::IsAdmin, sea_orm::sea_query::Expr::value(is_admin))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("Failed to update user: {e}")))?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.get_user_by_id_impl(id).await
    }

    /// 统计用户数量
    pub async fn count_users_impl(&self) -> Result<u64> {
        let count = Users::find()
            .count(&self.db)
            .await
            .map_err(|e| AppError::database_operation(format!("Failed to count users: {e}")))?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::memory_storage;
    use crate::errors::AppError;
    use crate::models::users::requests::NewUser;
    use crate::storage::Storage;

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            password_hash: "$argon2id$placeholder".to_string(),
            is_admin: false,
        }
    }

    #[tokio::test]
    async fn test_duplicate_username_is_conflict() {
        let storage = memory_storage().await;
        let first = storage.create_user(new_user("alice")).await.unwrap();
        assert_eq!(first.username, "alice");
        assert!(!first.is_admin);

        let second = storage.create_user(new_user("alice")).await;
        assert!(matches!(second, Err(AppError::Conflict(_))));
        assert_eq!(storage.count_users().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_set_user_admin() {
        let storage = memory_storage().await;
        let user = storage.create_user(new_user("bob")).await.unwrap();

        let promoted = storage.set_user_admin(user.id, true).await.unwrap().unwrap();
        assert!(promoted.is_admin);

        assert!(storage.set_user_admin(9999, true).await.unwrap().is_none());
    }
}
