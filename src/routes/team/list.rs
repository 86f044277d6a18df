use actix_web::{get, web};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::page::{check_paging, default_page, default_page_size, Page};
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::team::TeamResponse;
use crate::utils::links::LinkBuilder;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    pub manager_id: Option<Uuid>,
}

#[get("")]
async fn list(
    db: web::Data<Arc<PostgresService>>,
    links: web::Data<LinkBuilder>,
    query: web::Query<Query>,
) -> ApiResult<Page<TeamResponse>> {
    check_paging(query.page, query.page_size)?;

    let (teams, total) = db
        .list_teams_paginated(query.manager_id, query.page, query.page_size)
        .await?;

    let items = teams
        .into_iter()
        .map(|(team, members)| TeamResponse::from_model(team, members, &links))
        .collect();

    Ok(ApiResponse::Ok(Page {
        items,
        page: query.page,
        page_size: query.page_size,
        total_count: total,
        links: links.page_links("/api/v1/teams", query.page, query.page_size, total),
    }))
}
