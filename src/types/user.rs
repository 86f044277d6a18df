use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use entity::user::{Model as UserModel, Role};

use crate::utils::links::{Link, LinkBuilder};

#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RManagerCreate {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 3))]
    pub name: String,
    #[validate(length(min = 6))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct REmployeeCreate {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 3))]
    pub name: String,
    #[validate(length(min = 6))]
    pub password: String,
    pub team_id: Uuid,
    pub career_goal: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RLogin {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RCareerGoalUpdate {
    #[validate(length(min = 1))]
    pub career_goal: String,
}

/// What the store persists; the handler has already hashed the password.
pub struct DBManagerCreate {
    pub email: String,
    pub name: String,
    pub password_hash: String,
}

pub struct DBEmployeeCreate {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub team_id: Uuid,
    pub career_goal: Option<String>,
}

/// Public projection. The password digest never leaves the store layer.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub career_goal: Option<String>,
    pub team_id: Option<Uuid>,
    pub links: Vec<Link>,
}

impl UserResponse {
    pub fn from_model(user: UserModel, links: &LinkBuilder) -> Self {
        let rels = match user.role {
            Role::Manager => links.manager_links(user.id),
            Role::Employee => links.employee_links(user.id, user.team_id),
        };
        UserResponse {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            career_goal: user.career_goal,
            team_id: user.team_id,
            links: rels,
        }
    }
}
