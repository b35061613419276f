use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::users::{entities::User, requests::NewUser};
use crate::storage::Storage;
use crate::utils::Credentials;
use crate::utils::password::hash_password;
use std::sync::Arc;
use tracing::{debug, info, warn};

const ADMIN_USERNAME: &str = "admin";

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub credentials: Credentials,
}

/// 生成随机密码
fn generate_random_password(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// 初始化默认管理员账号
///
/// 用户表为空时创建 `admin`；未提供密码则生成一个并打印一次。
pub async fn seed_admin(
    storage: &dyn Storage,
    credentials: &Credentials,
    password: Option<String>,
) -> Result<Option<User>> {
    let count = storage.count_users().await?;
    if count > 0 {
        debug!(
            "Database already has {} user(s), skipping admin seed",
            count
        );
        return Ok(None);
    }

    info!("No users found in database, creating default admin account...");

    let password = password.unwrap_or_else(|| {
        let pwd = generate_random_password(16);
        warn!("==========================================================");
        warn!("  ADMIN PASSWORD NOT SET - USING GENERATED PASSWORD");
        warn!("  Generated admin password: {}", pwd);
        warn!("  Please save this password or set ADMIN_PASSWORD env var");
        warn!("==========================================================");
        pwd
    });

    let password_hash = hash_password(&password, &credentials.argon2)?;
    let user = storage
        .create_user(NewUser {
            username: ADMIN_USERNAME.to_string(),
            password_hash,
            is_admin: true,
        })
        .await?;

    info!(
        "Default admin account created successfully (ID: {}, username: {})",
        user.id, user.username
    );
    Ok(Some(user))
}

/// 准备服务器启动的上下文
pub async fn prepare_server_startup() -> StartupContext {
    let config = AppConfig::get();

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    let credentials = Credentials::from_config(config);

    let admin_password = std::env::var("ADMIN_PASSWORD")
        .ok()
        .filter(|p| !p.is_empty());
    if let Err(e) = seed_admin(storage.as_ref(), &credentials, admin_password).await {
        warn!("Failed to create admin account: {}", e);
    }

    StartupContext {
        storage,
        credentials,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::{authenticate, token::tests::test_credentials};
    use crate::services::test_support::seed_user;
    use crate::storage::sea_orm_storage::tests::memory_storage;

    #[test]
    fn test_generated_password_length() {
        assert_eq!(generate_random_password(16).len(), 16);
    }

    #[tokio::test]
    async fn test_seed_admin_on_empty_store() {
        let storage = memory_storage().await;
        let credentials = test_credentials();

        let admin = seed_admin(&storage, &credentials, Some("bootstrap".to_string()))
            .await
            .unwrap()
            .unwrap();
        assert!(admin.is_admin);
        assert_eq!(admin.username, ADMIN_USERNAME);
        assert!(
            authenticate(&storage, &credentials, ADMIN_USERNAME, "bootstrap")
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_seed_skipped_when_users_exist() {
        let storage = memory_storage().await;
        seed_user(&storage, "alice", false).await;

        let seeded = seed_admin(&storage, &test_credentials(), None).await.unwrap();
        assert!(seeded.is_none());
        assert_eq!(storage.count_users().await.unwrap(), 1);
    }
}
