use actix_web::{get, web};
use std::sync::Arc;
use uuid::Uuid;

use entity::user::Role;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserResponse;
use crate::utils::links::LinkBuilder;

#[get("/{id}")]
async fn get(
    db: web::Data<Arc<PostgresService>>,
    links: web::Data<LinkBuilder>,
    path: web::Path<Uuid>,
) -> ApiResult<UserResponse> {
    let employee = db
        .get_user_by_id(&path.into_inner(), Some(Role::Employee))
        .await?;

    Ok(ApiResponse::Ok(UserResponse::from_model(employee, &links)))
}
