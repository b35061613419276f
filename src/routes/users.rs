use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::requests::UpdateAdminRequest;
use crate::services::UserService;
use crate::utils::SafeIDI64;

// 懒加载的全局 UserService 实例
static USER_SERVICE: Lazy<UserService> = Lazy::new(UserService::new_lazy);

pub async fn set_admin(
    req: HttpRequest,
    user_id: SafeIDI64,
    update_data: web::Json<UpdateAdminRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .set_admin(user_id.0, update_data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireAdmin)
                    .route("/{id}/admin", web::put().to(set_admin)),
            ),
    );
}
