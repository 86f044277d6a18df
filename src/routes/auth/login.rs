use actix_web::{post, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::RLogin;
use crate::utils::password;
use crate::utils::token::TokenService;

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[post("/login")]
async fn login(
    db: web::Data<Arc<PostgresService>>,
    tokens: web::Data<TokenService>,
    body: web::Json<RLogin>,
) -> ApiResult<Response> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    // unknown email and wrong password collapse into the same 401
    let user = match db.get_user_by_email(&body.email).await {
        Ok(user) => user,
        Err(AppError::NotFound) => return Err(AppError::Unauthorized),
        Err(e) => return Err(e),
    };

    let matches = password::verify(&body.password, &user.password_hash)
        .map_err(|e| AppError::Internal(format!("digest parse failed: {e}")))?;
    if !matches {
        return Err(AppError::Unauthorized);
    }

    let (token, expires_at) = tokens
        .generate(&user)
        .map_err(|e| AppError::Internal(format!("token mint failed: {e}")))?;

    Ok(ApiResponse::Ok(Response { token, expires_at }))
}
