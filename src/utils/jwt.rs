use crate::config::JwtConfig;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

// JWT Claims 结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>, // Subject (username)
    pub exp: usize,          // Expiration time (时间戳)
    pub iat: usize,          // Issued at (签发时间)
}

/// 签发的访问令牌
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub token: String,
    pub expires_in: i64, // 秒
}

/// HS256 令牌签发与校验
#[derive(Clone)]
pub struct JwtUtils {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_expiry: chrono::Duration,
}

impl JwtUtils {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            access_token_expiry: chrono::Duration::minutes(config.access_token_expiry),
        }
    }

    // 生成 Access Token
    pub fn generate_access_token(
        &self,
        username: &str,
    ) -> Result<AccessToken, jsonwebtoken::errors::Error> {
        let token = self.generate_token_with_expiry(Some(username), self.access_token_expiry)?;
        Ok(AccessToken {
            token,
            expires_in: self.access_token_expiry.num_seconds(),
        })
    }

    // 生成带自定义过期时间的 Token
    pub fn generate_token_with_expiry(
        &self,
        subject: Option<&str>,
        expiry_duration: chrono::Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let expiration = now + expiry_duration;

        let claims = Claims {
            sub: subject.map(str::to_string),
            exp: expiration.timestamp().max(0) as usize,
            iat: now.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
    }

    // 验证签名与过期时间
    pub fn verify_token(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation).map(|token_data| token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utils(secret: &str) -> JwtUtils {
        JwtUtils::new(&JwtConfig {
            secret: secret.to_string(),
            access_token_expiry: 30,
        })
    }

    #[test]
    fn test_access_token_round_trip() {
        let jwt = utils("secret-a");
        let token = jwt.generate_access_token("alice").unwrap();
        assert_eq!(token.expires_in, 1800);

        let claims = jwt.verify_token(&token.token).unwrap();
        assert_eq!(claims.sub.as_deref(), Some("alice"));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = utils("secret-a").generate_access_token("alice").unwrap();
        assert!(utils("secret-b").verify_token(&token.token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let jwt = utils("secret-a");
        let token = jwt
            .generate_token_with_expiry(Some("alice"), chrono::Duration::minutes(-5))
            .unwrap();
        assert!(jwt.verify_token(&token).is_err());
    }

    #[test]
    fn test_missing_subject_decodes_as_none() {
        let jwt = utils("secret-a");
        let token = jwt
            .generate_token_with_expiry(None, chrono::Duration::minutes(5))
            .unwrap();
        assert!(jwt.verify_token(&token).unwrap().sub.is_none());
    }
}
