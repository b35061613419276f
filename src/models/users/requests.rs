use serde::Deserialize;

// 用户注册请求
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
}

// 存储层使用的新用户数据（密码已哈希）
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub is_admin: bool,
}

// 管理员权限变更请求
#[derive(Debug, Deserialize)]
pub struct UpdateAdminRequest {
    pub is_admin: bool,
}
