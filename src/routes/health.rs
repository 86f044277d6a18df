use actix_web::{get, web};
use serde::Serialize;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize)]
pub struct Response {
    pub status: &'static str,
}

#[get("")]
async fn health(db: web::Data<Arc<PostgresService>>) -> ApiResult<Response> {
    db.ping().await?;
    Ok(ApiResponse::Ok(Response { status: "ok" }))
}
