use serde::{Deserialize, Serialize};

// 用户实体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    pub password_hash: String,
    pub is_admin: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl User {
    /// 是否为该影评的作者
    pub fn owns(&self, owner_id: Option<i64>) -> bool {
        owner_id == Some(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64) -> User {
        User {
            id,
            username: format!("user{id}"),
            password_hash: "hash".to_string(),
            is_admin: false,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_owns() {
        let u = user(7);
        assert!(u.owns(Some(7)));
        assert!(!u.owns(Some(8)));
        assert!(!u.owns(None));
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let json = serde_json::to_string(&user(1)).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(json.contains("\"is_admin\":false"));
    }
}
