use actix_web::{get, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::team::TeamResponse;
use crate::utils::links::LinkBuilder;

#[get("/{id}")]
async fn get(
    db: web::Data<Arc<PostgresService>>,
    links: web::Data<LinkBuilder>,
    path: web::Path<Uuid>,
) -> ApiResult<TeamResponse> {
    let (team, members) = db.get_team_with_employees(&path.into_inner()).await?;

    Ok(ApiResponse::Ok(TeamResponse::from_model(
        team, members, &links,
    )))
}
