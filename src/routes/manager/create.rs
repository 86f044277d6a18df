use actix_web::{post, web};
use std::sync::Arc;
use validator::Validate;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBManagerCreate, RManagerCreate, UserResponse};
use crate::utils::links::LinkBuilder;
use crate::utils::password;

#[post("")]
async fn create(
    db: web::Data<Arc<PostgresService>>,
    links: web::Data<LinkBuilder>,
    body: web::Json<RManagerCreate>,
) -> ApiResult<UserResponse> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let digest = password::hash(&body.password)
        .map_err(|e| AppError::Internal(format!("password hash failed: {e}")))?;

    let manager = db
        .create_manager(DBManagerCreate {
            email: body.email.clone(),
            name: body.name.clone(),
            password_hash: digest,
        })
        .await?;

    Ok(ApiResponse::Created(UserResponse::from_model(
        manager, &links,
    )))
}
