use crate::config::{AppConfig, Argon2Config};
use crate::utils::jwt::JwtUtils;

/// 凭据服务：令牌签发校验与密码哈希参数
///
/// 启动时由配置构造并放入 app data，业务函数显式接收引用。
#[derive(Clone)]
pub struct Credentials {
    pub jwt: JwtUtils,
    pub argon2: Argon2Config,
}

impl Credentials {
    pub fn new(jwt: JwtUtils, argon2: Argon2Config) -> Self {
        Self { jwt, argon2 }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(JwtUtils::new(&config.jwt), config.argon2.clone())
    }
}
