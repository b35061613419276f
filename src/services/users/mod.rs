pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::users::requests::UpdateAdminRequest;
use crate::storage::Storage;

pub use update::set_user_admin;

pub struct UserService {
    storage: Option<Arc<dyn Storage>>,
}

impl UserService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 设置管理员标记
    pub async fn set_admin(
        &self,
        user_id: i64,
        update_data: UpdateAdminRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::handle_set_admin(self, user_id, update_data, request).await
    }
}
