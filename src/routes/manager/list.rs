use actix_web::{get, web};
use serde::Deserialize;
use std::sync::Arc;

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
}

#[get("")]
async fn list(
    db: web::Data<Arc<PostgresService>>,
    links: web::Data<LinkBuilder>,
    query: web::Query<Query>,
) -> ApiResult<Page<UserResponse>> {
    check_paging(query.page, query.page_size)?;

    let (managers, total) = db
        .list_users_paginated(Role::Manager, None, query.page, query.page_size)
        .await?;

    let items = managers
        .into_iter()
        .map(|u| UserResponse::from_model(u, &links))
        .collect();

    Ok(ApiResponse::Ok(Page {
        items,
        page: query.page,
        page_size: query.page_size,
        total_count: total,
        links: links.page_links("/api/v1/managers", query.page, query.page_size, total),
    }))
}
