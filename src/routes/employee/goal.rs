use actix_web::{put, web};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::RCareerGoalUpdate;

#[put("/{id}/goal")]
async fn update_goal(
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    body: web::Json<RCareerGoalUpdate>,
) -> ApiResult<()> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    db.update_career_goal(&path.into_inner(), body.career_goal.clone())
        .await?;

    Ok(ApiResponse::NoContent)
}
