use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::{Deserialize, Serialize};

use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::token::TokenService;

#[derive(Serialize, Deserialize)]
pub struct Response {}

#[post("/validate")]
async fn validate(auth: BearerAuth, tokens: web::Data<TokenService>) -> ApiResult<Response> {
    // the reason stays in the logs; the caller only sees a uniform 401
    if let Err(reason) = tokens.verify(auth.token()) {
        log::debug!("token rejected: {}", reason);
        return Err(AppError::Unauthorized);
    }

    Ok(ApiResponse::EmptyOk)
}
