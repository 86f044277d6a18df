use actix_web::{post, web};
use std::sync::Arc;
use validator::Validate;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::team::{RTeamCreate, TeamResponse};
use crate::utils::links::LinkBuilder;

#[post("")]
async fn create(
    db: web::Data<Arc<PostgresService>>,
    links: web::Data<LinkBuilder>,
    body: web::Json<RTeamCreate>,
) -> ApiResult<TeamResponse> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let team = db.create_team(body.manager_id, body.name.clone()).await?;

    // a fresh team has no members yet
    Ok(ApiResponse::Created(TeamResponse::from_model(
        team,
        Vec::new(),
        &links,
    )))
}
