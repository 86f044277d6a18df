use actix_web::{get, web};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use entity::user::Role;

use crate::db::postgres_service::PostgresService;
use crate::types::page::{check_paging, default_page, default_page_size, Page};
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserResponse;
use crate::utils::links::LinkBuilder;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    pub team_id: Option<Uuid>,
}

#[get("")]
async fn list(
    db: web::Data<Arc<PostgresService>>,
    links: web::Data<LinkBuilder>,
    query: web::Query<Query>,
) -> ApiResult<Page<UserResponse>> {
    check_paging(query.page, query.page_size)?;

    let (employees, total) = db
        .list_users_paginated(Role::Employee, query.team_id, query.page, query.page_size)
        .await?;

    let items = employees
        .into_iter()
        .map(|u| UserResponse::from_model(u, &links))
        .collect();

    Ok(ApiResponse::Ok(Page {
        items,
        page: query.page,
        page_size: query.page_size,
        total_count: total,
        links: links.page_links("/api/v1/employees", query.page, query.page_size, total),
    }))
}
