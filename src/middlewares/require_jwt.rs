/*!
 * JWT 认证中间件
 *
 * 验证 `Authorization: Bearer <JWT_TOKEN>`，通过后把对应的用户放入请求扩展。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * use actix_web::web;
 * use crate::middlewares::RequireJWT;
 *
 * web::scope("/api/v1/reviews")
 *     .wrap(RequireJWT)
 *     .route("", web::post().to(create_review));
 * ```
 *
 * 处理程序中通过 `RequireJWT::extract_user(&req)` 取得当前用户。
 *
 * ## 认证流程
 *
 * 1. 提取 Bearer 令牌
 * 2. 校验签名与过期时间，取 `sub` 作为用户名
 * 3. 查询用户，存入请求扩展
 * 4. 任一步失败都返回相同的 401 响应
 */

use crate::errors::AppError;
use crate::models::{ApiResponse, ErrorCode, users::entities};
use crate::services::auth::token::{credentials_error, resolve_actor};
use crate::storage::Storage;
use crate::utils::Credentials;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    web,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, info};

use super::create_error_response;

const BEARER_SCHEME: &str = "Bearer";
const AUTHORIZATION_HEADER: &str = "Authorization";

#[derive(Clone)]
pub struct RequireJWT;

// 认证方案名不区分大小写，令牌为空视为缺失
fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim_start().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

// 辅助函数：提取 Bearer 令牌并解析出用户
async fn extract_and_validate_jwt(req: &ServiceRequest) -> Result<entities::User, AppError> {
    let token = req
        .headers()
        .get(AUTHORIZATION_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(bearer_token)
        .ok_or_else(credentials_error)?;

    let storage = req
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .ok_or_else(|| AppError::database_config("Storage not found in app data"))?
        .get_ref()
        .clone();

    let credentials = req
        .app_data::<web::Data<Credentials>>()
        .ok_or_else(|| AppError::credential("Credentials not found in app data"))?;

    resolve_actor(storage.as_ref(), credentials.get_ref(), token).await
}

fn unauthorized_response(err: &AppError) -> HttpResponse {
    if err.is_internal() {
        ApiResponse::<()>::from_error(err, None)
    } else {
        create_error_response(
            StatusCode::UNAUTHORIZED,
            ErrorCode::Unauthorized,
            err.message(),
        )
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJWTMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireJWTMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // 处理 OPTIONS 请求
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    create_error_response(StatusCode::NO_CONTENT, ErrorCode::Success, "")
                        .map_into_right_body(),
                ));
            }

            match extract_and_validate_jwt(&req).await {
                Ok(user) => {
                    debug!("JWT authentication successful for ID: {}", user.id);
                    req.extensions_mut().insert(user);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!(
                        "JWT authentication failed for request to {}: {}",
                        req.path(),
                        err.message()
                    );
                    Ok(req.into_response(unauthorized_response(&err).map_into_right_body()))
                }
            }
        })
    }
}

// 辅助函数：从请求中提取用户信息
impl RequireJWT {
    /// 从请求扩展中提取当前用户
    /// 此函数应该在应用了RequireJWT中间件的路由处理程序中使用
    pub fn extract_user(req: &actix_web::HttpRequest) -> Option<entities::User> {
        req.extensions().get::<entities::User>().cloned()
    }
}
